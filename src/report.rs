//! Client-facing view of a computed [`TdeeResult`].
//!
//! The read-only query path re-runs the computation and returns a rounded
//! snapshot: measurements to 2 decimals, PAL to 3, energy values to whole
//! kcal, macro grams to 1 decimal. Field names follow the persisted
//! profile record (the PAL value is stored as `activity_factor`). EER is
//! carried on [`TdeeResult`] but is not part of this view.

use serde::Serialize;

use crate::activity::PalCategory;
use crate::planner::MacroPlan;
use crate::tdee::TdeeResult;

/// Rounded macro targets for one sex.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroPlanReport {
    /// Daily calorie target, whole kcal.
    pub calories: i64,
    pub carbs_g: f64,
    pub protein_g: f64,
    pub fats_g: f64,
    pub fiber_g: f64,
    pub carbs_pct: f64,
    pub protein_pct: f64,
    pub fats_pct: f64,
}

impl MacroPlanReport {
    fn from_plan(plan: &MacroPlan) -> Self {
        Self {
            calories: plan.calories.round() as i64,
            carbs_g: round1(plan.carbs_g),
            protein_g: round1(plan.protein_g),
            fats_g: round1(plan.fats_g),
            fiber_g: round1(plan.fiber_g),
            carbs_pct: plan.carbs_pct,
            protein_pct: plan.protein_pct,
            fats_pct: plan.fats_pct,
        }
    }
}

/// Rounded snapshot of a full computation, for display and JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TdeeReport {
    pub age_years: i32,
    /// Height in cm, 2 decimals.
    pub height_cm: f64,
    /// Weight in kg, 2 decimals.
    pub weight_kg: f64,
    /// PAL, 3 decimals; named after the persisted profile column.
    pub activity_factor: f64,
    pub pal_category: PalCategory,
    pub bmr_male: i64,
    pub bmr_female: i64,
    pub tdee_male: i64,
    pub tdee_female: i64,
    pub macros_male: MacroPlanReport,
    pub macros_female: MacroPlanReport,
}

impl TdeeReport {
    /// Builds the rounded view; infallible given a computed result.
    pub fn from_result(result: &TdeeResult) -> Self {
        Self {
            age_years: result.measurements.age_years,
            height_cm: round2(result.measurements.height_cm),
            weight_kg: round2(result.measurements.weight_kg),
            activity_factor: round3(result.activity.pal),
            pal_category: result.activity.category,
            bmr_male: result.energy.bmr_male.round() as i64,
            bmr_female: result.energy.bmr_female.round() as i64,
            tdee_male: result.energy.mifflin_tdee_male.round() as i64,
            tdee_female: result.energy.mifflin_tdee_female.round() as i64,
            macros_male: MacroPlanReport::from_plan(&result.macros_male),
            macros_female: MacroPlanReport::from_plan(&result.macros_female),
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
