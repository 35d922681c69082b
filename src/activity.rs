//! Physical Activity Level (PAL) estimation from categorical profile labels.
//!
//! The profile UI captures activity as two free-text bucket labels: a daily
//! steps range and a workout-days-per-week range. Both the legacy and the
//! current label vocabularies map onto fixed PAL anchors; the mapping lives
//! in lookup tables here so every accepted spelling is visible in one place.

use serde::Serialize;

// === PAL bounds ===

/// Lower clamp for the composed PAL value.
pub const PAL_MIN: f64 = 1.0;

/// Upper clamp for the composed PAL value.
pub const PAL_MAX: f64 = 2.49;

/// Base PAL used when the steps label is absent or unrecognized.
const DEFAULT_BASE_PAL: f64 = 1.40;

// === Label tables ===

/// Base PAL anchors keyed by steps-range label prefix.
///
/// Each row lists the accepted prefixes (legacy and current vocabulary)
/// and the PAL anchor they map to. First match wins.
const STEPS_RANGE_TABLE: &[(&[&str], f64)] = &[
    (&["inactive", "none"], 1.40),
    (&["low", "some"], 1.60),
    (&["active", "moderate"], 1.75),
    (&["very", "lots"], 2.05),
];

/// Additive PAL adjustment keyed by active-days label.
///
/// A row matches when the label starts with the leading digit or contains
/// one of the range spellings (hyphen and en-dash both occur in stored
/// data). First match wins; unmatched labels add nothing.
const ACTIVE_DAYS_TABLE: &[(&str, &[&str], f64)] = &[
    ("0", &[], 0.0),
    ("1", &["1-2", "1\u{2013}2"], 0.05),
    ("3", &["3-4", "3\u{2013}4"], 0.10),
    ("5", &["5-7", "5\u{2013}7"], 0.20),
];

/// Discrete PAL category per the NAS adult activity bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PalCategory {
    Inactive,
    LowActive,
    Active,
    VeryActive,
}

impl PalCategory {
    /// Classifies a PAL value.
    ///
    /// Bands: `< 1.53` inactive, `< 1.68` low_active, `< 1.85` active,
    /// else very_active. Boundary values belong to the higher category.
    pub fn from_pal(pal: f64) -> Self {
        if pal < 1.53 {
            PalCategory::Inactive
        } else if pal < 1.68 {
            PalCategory::LowActive
        } else if pal < 1.85 {
            PalCategory::Active
        } else {
            PalCategory::VeryActive
        }
    }

    /// Returns the stored label for the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            PalCategory::Inactive => "inactive",
            PalCategory::LowActive => "low_active",
            PalCategory::Active => "active",
            PalCategory::VeryActive => "very_active",
        }
    }

    /// All categories, in ascending PAL order.
    pub fn all() -> &'static [PalCategory] {
        &[
            PalCategory::Inactive,
            PalCategory::LowActive,
            PalCategory::Active,
            PalCategory::VeryActive,
        ]
    }
}

impl std::fmt::Display for PalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Estimated activity level: the continuous PAL and its category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityProfile {
    /// Physical Activity Level, clamped to `[PAL_MIN, PAL_MAX]`.
    pub pal: f64,
    /// Category derived from `pal`.
    #[serde(rename = "pal_category")]
    pub category: PalCategory,
}

/// Estimates PAL from the two activity labels.
///
/// Base PAL comes from the steps-range label, a small additive adjustment
/// from the workout-days label; the sum is clamped to `[1.0, 2.49]`.
/// Absent or unrecognized labels fall back to the defaults (base 1.40,
/// adjustment 0.0).
pub fn estimate_pal(steps_range: Option<&str>, active_days: Option<&str>) -> ActivityProfile {
    let base = steps_range.map_or(DEFAULT_BASE_PAL, base_pal_from_label);
    let add = active_days.map_or(0.0, days_adjustment_from_label);

    let pal = (base + add).clamp(PAL_MIN, PAL_MAX);

    ActivityProfile {
        pal,
        category: PalCategory::from_pal(pal),
    }
}

/// Looks up the base PAL anchor for a steps-range label.
fn base_pal_from_label(label: &str) -> f64 {
    let s = label.trim().to_lowercase();

    for (prefixes, pal) in STEPS_RANGE_TABLE {
        if prefixes.iter().any(|p| s.starts_with(p)) {
            return *pal;
        }
    }

    if !s.is_empty() {
        log::warn!("unrecognized steps range label {label:?}, using default base PAL");
    }
    DEFAULT_BASE_PAL
}

/// Looks up the additive adjustment for an active-days label.
fn days_adjustment_from_label(label: &str) -> f64 {
    let s = label.trim().to_lowercase();

    for (prefix, ranges, add) in ACTIVE_DAYS_TABLE {
        if s.starts_with(prefix) || ranges.iter().any(|r| s.contains(r)) {
            return *add;
        }
    }

    if !s.is_empty() {
        log::warn!("unrecognized active days label {label:?}, no PAL adjustment applied");
    }
    0.0
}
