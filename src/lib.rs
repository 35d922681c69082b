//! Deterministic health-metrics engine.
//!
//! Converts free-text profile fields (date of birth, height, weight,
//! activity labels) into canonical measurements, a PAL estimate, BMR/TDEE
//! under two models (Mifflin-St Jeor × PAL and the NAS adult EER), and
//! per-sex macronutrient targets.
//!
//! The whole engine is synchronous and side-effect-free; the reference
//! date for age is an explicit argument, so every computation is a pure
//! function of its inputs.

pub mod activity;
pub mod energy;
pub mod error;
pub mod measurements;
pub mod planner;
pub mod report;
pub mod tdee;

pub use activity::{ActivityProfile, PalCategory, estimate_pal};
pub use energy::{EnergyProfile, Sex, eer_adult, mifflin_bmr};
pub use error::{DomainError, ParseError};
pub use measurements::CanonicalMeasurements;
pub use planner::{MacroPlan, MacroSplit, plan_macros};
pub use report::TdeeReport;
pub use tdee::{TdeeResult, compute_tdee, compute_tdee_with_split};
