//! BMR and TDEE estimation under two independent models.
//!
//! Two estimates are computed side by side for every profile:
//! - Mifflin-St Jeor BMR scaled by the estimated PAL, and
//! - the NAS adult (19+) EER regressions.
//!
//! Both sexes are always evaluated regardless of the profile's stored sex;
//! callers pick the branch they need from the resulting pair.

use std::str::FromStr;

use serde::Serialize;

use crate::activity::{ActivityProfile, PalCategory};
use crate::error::DomainError;
use crate::measurements::CanonicalMeasurements;

/// Biological sex as used by the BMR/EER regressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Returns the stored label for the sex.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = DomainError;

    /// Parses stored sex text. Defensive surface for callers selecting a
    /// branch from a persisted record; the engine itself never goes
    /// through strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            _ => Err(DomainError::InvalidSex(s.to_string())),
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coefficients of one NAS adult EER regression:
/// `kcal = intercept + age_coef·age + height_coef·height_cm + weight_coef·weight_kg`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EerCoefficients {
    pub intercept: f64,
    pub age_coef: f64,
    pub height_coef: f64,
    pub weight_coef: f64,
}

/// NAS adult (19+) EER regression table, keyed by (sex, PAL category).
///
/// Kept as one flat table so all 8 entries can be audited against the
/// published equations in one glance.
pub const EER_ADULT_TABLE: [(Sex, PalCategory, EerCoefficients); 8] = [
    (
        Sex::Male,
        PalCategory::Inactive,
        EerCoefficients { intercept: 753.07, age_coef: -10.83, height_coef: 6.50, weight_coef: 14.10 },
    ),
    (
        Sex::Male,
        PalCategory::LowActive,
        EerCoefficients { intercept: 581.47, age_coef: -10.83, height_coef: 8.30, weight_coef: 14.94 },
    ),
    (
        Sex::Male,
        PalCategory::Active,
        EerCoefficients { intercept: 1004.82, age_coef: -10.83, height_coef: 6.52, weight_coef: 15.91 },
    ),
    (
        Sex::Male,
        PalCategory::VeryActive,
        EerCoefficients { intercept: -517.88, age_coef: -10.83, height_coef: 15.61, weight_coef: 19.11 },
    ),
    (
        Sex::Female,
        PalCategory::Inactive,
        EerCoefficients { intercept: 584.90, age_coef: -7.01, height_coef: 5.72, weight_coef: 11.71 },
    ),
    (
        Sex::Female,
        PalCategory::LowActive,
        EerCoefficients { intercept: 575.77, age_coef: -7.01, height_coef: 6.60, weight_coef: 12.14 },
    ),
    (
        Sex::Female,
        PalCategory::Active,
        EerCoefficients { intercept: 710.25, age_coef: -7.01, height_coef: 6.54, weight_coef: 12.34 },
    ),
    (
        Sex::Female,
        PalCategory::VeryActive,
        EerCoefficients { intercept: 511.83, age_coef: -7.01, height_coef: 9.07, weight_coef: 12.56 },
    ),
];

/// Looks up the EER coefficients for a (sex, category) pair.
///
/// The table is exhaustive over both enums, so the lookup always succeeds.
pub fn eer_coefficients(sex: Sex, category: PalCategory) -> EerCoefficients {
    EER_ADULT_TABLE
        .iter()
        .find(|(s, c, _)| *s == sex && *c == category)
        .map(|(_, _, coef)| *coef)
        .unwrap_or_else(|| unreachable!("EER table covers all (sex, category) pairs"))
}

/// Calculates Basal Metabolic Rate via Mifflin-St Jeor (kcal/day).
///
/// Formula:
/// ```text
/// BMR = 10·weight_kg + 6.25·height_cm − 5·age  (+5 male / −161 female)
/// ```
pub fn mifflin_bmr(weight_kg: f64, height_cm: f64, age_years: i32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age_years);
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Calculates the NAS adult (19+) Estimated Energy Requirement (kcal/day).
pub fn eer_adult(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: Sex,
    category: PalCategory,
) -> f64 {
    let c = eer_coefficients(sex, category);
    c.intercept
        + c.age_coef * f64::from(age_years)
        + c.height_coef * height_cm
        + c.weight_coef * weight_kg
}

/// Energy estimates for both sexes, all in kcal/day.
///
/// All six values are computed together, never conditionally skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyProfile {
    pub bmr_male: f64,
    pub bmr_female: f64,
    pub mifflin_tdee_male: f64,
    pub mifflin_tdee_female: f64,
    pub eer_male: f64,
    pub eer_female: f64,
}

impl EnergyProfile {
    /// Computes BMR, Mifflin TDEE (`BMR × PAL`), and EER for both sexes.
    pub fn compute(measurements: &CanonicalMeasurements, activity: &ActivityProfile) -> Self {
        let CanonicalMeasurements {
            age_years,
            height_cm,
            weight_kg,
        } = *measurements;

        let bmr_male = mifflin_bmr(weight_kg, height_cm, age_years, Sex::Male);
        let bmr_female = mifflin_bmr(weight_kg, height_cm, age_years, Sex::Female);

        Self {
            bmr_male,
            bmr_female,
            mifflin_tdee_male: bmr_male * activity.pal,
            mifflin_tdee_female: bmr_female * activity.pal,
            eer_male: eer_adult(weight_kg, height_cm, age_years, Sex::Male, activity.category),
            eer_female: eer_adult(weight_kg, height_cm, age_years, Sex::Female, activity.category),
        }
    }

    /// Mifflin TDEE for the given sex.
    pub fn mifflin_tdee(&self, sex: Sex) -> f64 {
        match sex {
            Sex::Male => self.mifflin_tdee_male,
            Sex::Female => self.mifflin_tdee_female,
        }
    }
}
