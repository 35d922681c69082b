//! Error types for the nutrimodel engine.

use thiserror::Error;

/// Errors that can occur when parsing free-text profile fields.
///
/// Each variant identifies the offending field and carries the raw text
/// so collaborators can surface it as a validation message.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    #[error("invalid date of birth (expected MM/DD/YYYY): {value}")]
    InvalidDate { value: String },

    #[error("unrecognized height format: {value}")]
    InvalidHeight { value: String },

    #[error("unrecognized weight format: {value}")]
    InvalidWeight { value: String },
}

impl ParseError {
    /// Returns the profile field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ParseError::InvalidDate { .. } => "birthday",
            ParseError::InvalidHeight { .. } => "height",
            ParseError::InvalidWeight { .. } => "weight",
        }
    }

    /// Returns the raw text that failed to parse.
    pub fn value(&self) -> &str {
        match self {
            ParseError::InvalidDate { value }
            | ParseError::InvalidHeight { value }
            | ParseError::InvalidWeight { value } => value,
        }
    }
}

/// Invariant violations in formula arguments.
///
/// The engine always evaluates both sexes internally, so this can only be
/// observed by callers turning stored sex text into a [`crate::energy::Sex`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    #[error("sex must be 'male' or 'female': {0}")]
    InvalidSex(String),
}
