//! TDEE computation: the single entry point that composes field parsing,
//! PAL estimation, the energy models, and macro planning.
//!
//! The whole pipeline is a pure function of its inputs. The reference date
//! for the age computation is an explicit parameter, never read from a
//! clock, so identical inputs always produce identical results.

use chrono::NaiveDate;
use serde::Serialize;

use crate::activity::{ActivityProfile, estimate_pal};
use crate::energy::{EnergyProfile, Sex};
use crate::error::ParseError;
use crate::measurements::CanonicalMeasurements;
use crate::planner::{MacroPlan, MacroSplit, plan_macros};

/// Complete health-metrics result for one profile.
///
/// Both sex branches are always present; selecting the relevant one (for
/// example from a stored `sex_at_birth` field) is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TdeeResult {
    #[serde(flatten)]
    pub measurements: CanonicalMeasurements,
    #[serde(flatten)]
    pub activity: ActivityProfile,
    #[serde(flatten)]
    pub energy: EnergyProfile,
    pub macros_male: MacroPlan,
    pub macros_female: MacroPlan,
}

impl TdeeResult {
    /// Macro plan for the given sex.
    pub fn plan_for(&self, sex: Sex) -> &MacroPlan {
        match sex {
            Sex::Male => &self.macros_male,
            Sex::Female => &self.macros_female,
        }
    }
}

/// Computes the full metrics record from raw profile text, using the
/// default macro split policy.
///
/// Parsing failures abort the whole computation; no partial result is
/// ever returned.
pub fn compute_tdee(
    birthday_text: &str,
    height_text: &str,
    weight_text: &str,
    steps_range: Option<&str>,
    active_days_per_week: Option<&str>,
    today: NaiveDate,
) -> Result<TdeeResult, ParseError> {
    compute_tdee_with_split(
        birthday_text,
        height_text,
        weight_text,
        steps_range,
        active_days_per_week,
        today,
        &MacroSplit::default(),
    )
}

/// Like [`compute_tdee`], with an explicit macro split policy.
///
/// Each sex's macro calorie target is its own Mifflin TDEE rounded to the
/// nearest kcal.
pub fn compute_tdee_with_split(
    birthday_text: &str,
    height_text: &str,
    weight_text: &str,
    steps_range: Option<&str>,
    active_days_per_week: Option<&str>,
    today: NaiveDate,
    split: &MacroSplit,
) -> Result<TdeeResult, ParseError> {
    let measurements =
        CanonicalMeasurements::from_raw(birthday_text, height_text, weight_text, today)?;

    let activity = estimate_pal(steps_range, active_days_per_week);
    let energy = EnergyProfile::compute(&measurements, &activity);

    let macros_male = plan_macros(energy.mifflin_tdee_male.round(), split);
    let macros_female = plan_macros(energy.mifflin_tdee_female.round(), split);

    Ok(TdeeResult {
        measurements,
        activity,
        energy,
        macros_male,
        macros_female,
    })
}
