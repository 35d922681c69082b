//! Normalization of free-text profile fields into canonical units.
//!
//! Profile records store date of birth, height, and weight as the raw text
//! the user typed. This module turns that text into metric values once per
//! computation; everything downstream works in years, centimeters, and
//! kilograms.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::Serialize;

use crate::error::ParseError;

// === Conversion constants ===

/// Centimeters per inch (exact).
pub const IN_TO_CM: f64 = 2.54;

/// Kilograms per pound (exact).
pub const LB_TO_KG: f64 = 0.45359237;

// === Height patterns ===
//
// Stored as Option so a failed compile degrades to "no match" instead of
// panicking; the patterns are static and always compile in practice.

/// Feet-apostrophe-inches: `5'7`, `5'7"`, `5' 7 in`.
static FEET_APOSTROPHE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"^(\d+)\s*'\s*(\d+)\s*(?:"|in)?$"#).ok());

/// Word form: `5 ft 7 in`, `5 feet 7 inches`.
static FEET_WORDS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*(?:ft|feet)\s*(\d+)\s*(?:in|inch|inches)$").ok());

/// Inches only: `67 in`, `67 inches`.
static INCHES_ONLY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*(?:in|inch|inches)$").ok());

/// Canonical physical measurements derived from the raw profile text.
///
/// Built once per computation and never mutated afterward. Parsing is
/// purely syntactic: values that parse but are physically implausible
/// (a zero height or weight, a date of birth in the future) are accepted
/// as-is; plausibility checks belong to the profile intake layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalMeasurements {
    /// Age in whole years as of the supplied reference date.
    pub age_years: i32,
    /// Height in centimeters.
    pub height_cm: f64,
    /// Weight in kilograms.
    pub weight_kg: f64,
}

impl CanonicalMeasurements {
    /// Parses the three raw profile fields, failing on the first bad one.
    ///
    /// `today` is the reference date for the age computation; it is passed
    /// explicitly so the result is a pure function of its arguments.
    pub fn from_raw(
        dob_text: &str,
        height_text: &str,
        weight_text: &str,
        today: NaiveDate,
    ) -> Result<Self, ParseError> {
        let dob = parse_dob_mmddyyyy(dob_text)?;
        let height_cm = parse_height_to_cm(height_text)?;
        let weight_kg = parse_weight_to_kg(weight_text)?;

        Ok(Self {
            age_years: age_years(dob, today),
            height_cm,
            weight_kg,
        })
    }
}

/// Parses a date of birth in `MM/DD/YYYY` form (zero padding optional).
///
/// No fallback formats are attempted; anything else is a [`ParseError`].
pub fn parse_dob_mmddyyyy(dob_text: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(dob_text.trim(), "%m/%d/%Y").map_err(|_| ParseError::InvalidDate {
        value: dob_text.to_string(),
    })
}

/// Computes age in whole years at `today`.
///
/// The count decrements by one when today's (month, day) falls before the
/// birthday's (month, day), i.e. the birthday has not been reached yet
/// this year.
pub fn age_years(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    years
}

/// Parses a height string into centimeters.
///
/// Accepts, in matching order:
/// ```text
/// 5'7"   5'7   5' 7 in
/// 5 ft 7 in
/// 67 in
/// ```
/// Unicode prime/quote variants are normalized to ASCII first, and inch
/// overflow rolls into feet (`6'12` parses the same as `7'0`).
pub fn parse_height_to_cm(height_text: &str) -> Result<f64, ParseError> {
    let s = normalize_height_text(height_text);

    match_height_inches(&s)
        .map(|total_in| total_in * IN_TO_CM)
        .ok_or_else(|| ParseError::InvalidHeight {
            value: height_text.to_string(),
        })
}

/// Normalizes quote variants, case, and internal whitespace.
fn normalize_height_text(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|c| match c {
            '\u{2019}' | '\u{2032}' => '\'', // ’ ′
            '\u{201c}' | '\u{201d}' | '\u{2033}' => '"', // “ ” ″
            other => other,
        })
        .collect();

    replaced
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tries each height pattern in order, returning total inches.
fn match_height_inches(s: &str) -> Option<f64> {
    for pattern in [&FEET_APOSTROPHE, &FEET_WORDS] {
        if let Some(re) = pattern.as_ref()
            && let Some(caps) = re.captures(s)
        {
            let ft: u32 = caps[1].parse().ok()?;
            let inch: u32 = caps[2].parse().ok()?;
            let (ft, inch) = normalize_ft_in(ft, inch);
            return Some(f64::from(ft * 12 + inch));
        }
    }

    if let Some(re) = INCHES_ONLY.as_ref()
        && let Some(caps) = re.captures(s)
    {
        let inch: u32 = caps[1].parse().ok()?;
        return Some(f64::from(inch));
    }

    None
}

/// Rolls inch overflow into feet: `(6, 12)` becomes `(7, 0)`.
fn normalize_ft_in(ft: u32, inch: u32) -> (u32, u32) {
    if inch >= 12 {
        (ft + inch / 12, inch % 12)
    } else {
        (ft, inch)
    }
}

/// Parses a weight string into kilograms.
///
/// Accepts a decimal number of pounds with an optional `lb`/`lbs` suffix
/// and optional thousands commas: `150`, `150 lb`, `1,150 lbs`.
pub fn parse_weight_to_kg(weight_text: &str) -> Result<f64, ParseError> {
    let s = weight_text
        .trim()
        .to_lowercase()
        .replace(',', "")
        .replace("lbs", "")
        .replace("lb", "");

    s.trim()
        .parse::<f64>()
        .map(|lb| lb * LB_TO_KG)
        .map_err(|_| ParseError::InvalidWeight {
            value: weight_text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    // === Date of birth ===

    #[test]
    fn test_parse_dob_padded() {
        assert_eq!(
            parse_dob_mmddyyyy("06/15/1995").unwrap(),
            make_date(1995, 6, 15)
        );
    }

    #[test]
    fn test_parse_dob_unpadded() {
        assert_eq!(
            parse_dob_mmddyyyy("6/15/1995").unwrap(),
            make_date(1995, 6, 15)
        );
    }

    #[test]
    fn test_parse_dob_surrounding_whitespace() {
        assert_eq!(
            parse_dob_mmddyyyy("  01/01/2000 ").unwrap(),
            make_date(2000, 1, 1)
        );
    }

    #[test]
    fn test_parse_dob_rejects_other_formats() {
        assert!(parse_dob_mmddyyyy("1995-06-15").is_err());
        assert!(parse_dob_mmddyyyy("15/06/1995").is_err()); // month 15
        assert!(parse_dob_mmddyyyy("June 15, 1995").is_err());
        assert!(parse_dob_mmddyyyy("").is_err());
    }

    #[test]
    fn test_parse_dob_error_names_field() {
        let err = parse_dob_mmddyyyy("yesterday").unwrap_err();
        assert_eq!(err.field(), "birthday");
        assert_eq!(err.value(), "yesterday");
    }

    // === Age ===

    #[test]
    fn test_age_birthday_reached() {
        let dob = make_date(2000, 1, 1);
        assert_eq!(age_years(dob, make_date(2024, 1, 1)), 24);
    }

    #[test]
    fn test_age_birthday_not_yet_reached() {
        let dob = make_date(2000, 1, 1);
        assert_eq!(age_years(dob, make_date(2023, 12, 31)), 23);
    }

    #[test]
    fn test_age_future_dob_goes_negative() {
        // Syntactically valid input is accepted as-is; plausibility is
        // not this module's job.
        let dob = make_date(2030, 1, 1);
        assert_eq!(age_years(dob, make_date(2024, 6, 15)), -6);
    }

    #[test]
    fn test_age_day_before_and_after_birthday() {
        let dob = make_date(1990, 6, 15);
        assert_eq!(age_years(dob, make_date(2024, 6, 14)), 33);
        assert_eq!(age_years(dob, make_date(2024, 6, 15)), 34);
        assert_eq!(age_years(dob, make_date(2024, 6, 16)), 34);
    }

    // === Height ===

    #[test]
    fn test_height_feet_apostrophe_forms() {
        // 5'7" = 67 in = 170.18 cm
        assert!(approx_eq(parse_height_to_cm("5'7").unwrap(), 170.18, 0.01));
        assert!(approx_eq(parse_height_to_cm("5'7\"").unwrap(), 170.18, 0.01));
        assert!(approx_eq(parse_height_to_cm("5' 7 in").unwrap(), 170.18, 0.01));
    }

    #[test]
    fn test_height_word_forms() {
        assert!(approx_eq(parse_height_to_cm("5 ft 7 in").unwrap(), 170.18, 0.01));
        assert!(approx_eq(parse_height_to_cm("5 feet 7 inches").unwrap(), 170.18, 0.01));
    }

    #[test]
    fn test_height_inches_only() {
        assert!(approx_eq(parse_height_to_cm("67 in").unwrap(), 170.18, 0.01));
        assert!(approx_eq(parse_height_to_cm("67 inches").unwrap(), 170.18, 0.01));
    }

    #[test]
    fn test_height_inch_overflow_rolls_into_feet() {
        let a = parse_height_to_cm("6'12").unwrap();
        let b = parse_height_to_cm("7'0").unwrap();
        assert!(approx_eq(a, b, 1e-9));
        assert!(approx_eq(a, 84.0 * IN_TO_CM, 0.01));
    }

    #[test]
    fn test_height_unicode_quotes() {
        assert!(approx_eq(parse_height_to_cm("5\u{2032}7\u{2033}").unwrap(), 170.18, 0.01));
        assert!(approx_eq(parse_height_to_cm("5\u{2019}7\u{201d}").unwrap(), 170.18, 0.01));
    }

    #[test]
    fn test_height_case_and_whitespace() {
        assert!(approx_eq(parse_height_to_cm("  5 FT   7 IN ").unwrap(), 170.18, 0.01));
    }

    #[test]
    fn test_height_unrecognized() {
        let err = parse_height_to_cm("tall").unwrap_err();
        assert_eq!(err.field(), "height");
        assert_eq!(err.value(), "tall");

        assert!(parse_height_to_cm("170 cm").is_err()); // metric input not accepted
        assert!(parse_height_to_cm("").is_err());
    }

    // === Weight ===

    #[test]
    fn test_weight_forms() {
        // 150 lb = 68.0389 kg
        assert!(approx_eq(parse_weight_to_kg("150").unwrap(), 68.0389, 0.01));
        assert!(approx_eq(parse_weight_to_kg("150 lb").unwrap(), 68.0389, 0.01));
        assert!(approx_eq(parse_weight_to_kg("150 lbs").unwrap(), 68.0389, 0.01));
    }

    #[test]
    fn test_weight_decimal_and_commas() {
        assert!(approx_eq(parse_weight_to_kg("150.5").unwrap(), 150.5 * LB_TO_KG, 1e-9));
        assert!(approx_eq(parse_weight_to_kg("1,150 lbs").unwrap(), 1150.0 * LB_TO_KG, 1e-9));
    }

    #[test]
    fn test_zero_values_parse_as_zero() {
        // Well-formed but implausible inputs pass through unchanged.
        assert_eq!(parse_weight_to_kg("0").unwrap(), 0.0);
        assert_eq!(parse_height_to_cm("0 in").unwrap(), 0.0);
    }

    #[test]
    fn test_weight_unrecognized() {
        let err = parse_weight_to_kg("heavy").unwrap_err();
        assert_eq!(err.field(), "weight");

        assert!(parse_weight_to_kg("").is_err());
        assert!(parse_weight_to_kg("70 kg").is_err()); // metric input not accepted
    }

    // === Combined ===

    #[test]
    fn test_from_raw_happy_path() {
        let m = CanonicalMeasurements::from_raw(
            "06/15/1995",
            "5'9",
            "160 lbs",
            make_date(2024, 6, 15),
        )
        .unwrap();

        assert_eq!(m.age_years, 29);
        assert!(approx_eq(m.height_cm, 175.26, 0.01));
        assert!(approx_eq(m.weight_kg, 72.57, 0.01));
    }

    #[test]
    fn test_from_raw_fails_on_first_bad_field() {
        let err = CanonicalMeasurements::from_raw(
            "not a date",
            "also bad",
            "160 lbs",
            make_date(2024, 6, 15),
        )
        .unwrap_err();

        // Date is parsed first, so the date error wins
        assert_eq!(err.field(), "birthday");
    }
}
