//! Macronutrient targets for a daily calorie budget.
//!
//! The upstream profile system consumes macro gram targets but never
//! defined how they are derived, so the split here is an explicit policy:
//! Acceptable Macronutrient Distribution Range midpoints (50% carbohydrate,
//! 20% protein, 30% fat) with an independent fiber target of 14 g per
//! 1000 kcal. Callers that want a different policy pass their own
//! [`MacroSplit`]; the percentages are an input, not a medical fact.

use serde::Serialize;

// === Energy density constants ===

/// kcal per gram of carbohydrate.
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// kcal per gram of protein.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

/// kcal per gram of fat.
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Calorie split policy for macro planning.
///
/// Percentages are of total calories and should sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroSplit {
    pub carbs_pct: f64,
    pub protein_pct: f64,
    pub fats_pct: f64,
    /// Fiber target in grams per 1000 kcal, independent of the split.
    pub fiber_g_per_1000_kcal: f64,
}

impl Default for MacroSplit {
    /// AMDR midpoints: 50% carbohydrate, 20% protein, 30% fat,
    /// fiber at 14 g / 1000 kcal.
    fn default() -> Self {
        Self {
            carbs_pct: 50.0,
            protein_pct: 20.0,
            fats_pct: 30.0,
            fiber_g_per_1000_kcal: 14.0,
        }
    }
}

/// Daily macro targets for one calorie budget.
///
/// The recorded percentages are the input split (so they stay exact);
/// the gram values follow from them via the 4/4/9 kcal-per-gram densities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroPlan {
    /// Daily calorie target in kcal.
    pub calories: f64,
    pub carbs_g: f64,
    pub protein_g: f64,
    pub fats_g: f64,
    pub fiber_g: f64,
    pub carbs_pct: f64,
    pub protein_pct: f64,
    pub fats_pct: f64,
}

/// Splits a calorie target into macro gram targets under the given policy.
pub fn plan_macros(calories: f64, split: &MacroSplit) -> MacroPlan {
    MacroPlan {
        calories,
        carbs_g: calories * split.carbs_pct / 100.0 / KCAL_PER_G_CARBS,
        protein_g: calories * split.protein_pct / 100.0 / KCAL_PER_G_PROTEIN,
        fats_g: calories * split.fats_pct / 100.0 / KCAL_PER_G_FAT,
        fiber_g: calories / 1000.0 * split.fiber_g_per_1000_kcal,
        carbs_pct: split.carbs_pct,
        protein_pct: split.protein_pct,
        fats_pct: split.fats_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    /// Checks the two plan invariants: percentages sum to ~100 and the
    /// gram values account for ~all calories.
    fn assert_plan_invariants(plan: &MacroPlan) {
        let pct_sum = plan.carbs_pct + plan.protein_pct + plan.fats_pct;
        assert!(
            approx_eq(pct_sum, 100.0, 0.5),
            "percentages sum to {pct_sum}"
        );

        let kcal = plan.carbs_g * KCAL_PER_G_CARBS
            + plan.protein_g * KCAL_PER_G_PROTEIN
            + plan.fats_g * KCAL_PER_G_FAT;
        assert!(
            approx_eq(kcal, plan.calories, plan.calories * 0.01),
            "grams account for {kcal} of {} kcal",
            plan.calories
        );
    }

    #[test]
    fn test_default_split_reference_values() {
        let plan = plan_macros(2000.0, &MacroSplit::default());

        assert!(approx_eq(plan.carbs_g, 250.0, 1e-9)); // 1000 kcal / 4
        assert!(approx_eq(plan.protein_g, 100.0, 1e-9)); // 400 kcal / 4
        assert!(approx_eq(plan.fats_g, 66.6667, 0.001)); // 600 kcal / 9
        assert!(approx_eq(plan.fiber_g, 28.0, 1e-9)); // 14 per 1000 kcal

        assert_eq!(plan.carbs_pct, 50.0);
        assert_eq!(plan.protein_pct, 20.0);
        assert_eq!(plan.fats_pct, 30.0);

        assert_plan_invariants(&plan);
    }

    #[test]
    fn test_invariants_hold_across_calorie_range() {
        let split = MacroSplit::default();
        for calories in [1200.0, 1650.0, 2000.0, 2487.0, 3200.0, 4100.0] {
            let plan = plan_macros(calories, &split);
            assert_plan_invariants(&plan);
        }
    }

    #[test]
    fn test_custom_split() {
        // Higher-protein policy still satisfies the invariants
        let split = MacroSplit {
            carbs_pct: 40.0,
            protein_pct: 30.0,
            fats_pct: 30.0,
            fiber_g_per_1000_kcal: 14.0,
        };
        let plan = plan_macros(2400.0, &split);

        assert!(approx_eq(plan.protein_g, 2400.0 * 0.30 / 4.0, 1e-9));
        assert_eq!(plan.protein_pct, 30.0);
        assert_plan_invariants(&plan);
    }

    #[test]
    fn test_fiber_scales_with_calories() {
        let split = MacroSplit::default();
        assert!(approx_eq(plan_macros(1000.0, &split).fiber_g, 14.0, 1e-9));
        assert!(approx_eq(plan_macros(3000.0, &split).fiber_g, 42.0, 1e-9));
    }
}
