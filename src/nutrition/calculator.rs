//! Nutrition calculator
//!
//! Derives energy expenditure, calorie targets, macronutrients and hydration
//! from a validated profile and parameter set. Every function is pure.

use serde::{Deserialize, Serialize};

use super::formulas::{compute_bmr, CalcError};
use crate::models::{
    MacroPercentages, MacroSplit, NutritionParameters, NutritionResults, Profile,
    KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};

/// Base water intake per kg of body weight
pub const HYDRATION_ML_PER_KG: f64 = 35.0;

/// Activity thresholds and the extra water they add, highest first
pub const HYDRATION_BONUSES: [(f64, f64); 2] = [(1.55, 500.0), (1.375, 250.0)];

/// Adjustments within this many kcal of zero count as maintenance
pub const MAINTENANCE_BAND_KCAL: i32 = 100;

/// Direction of the caloric goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    Loss,
    Maintenance,
    Gain,
}

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Loss => "loss",
            GoalType::Maintenance => "maintenance",
            GoalType::Gain => "gain",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GoalType::Loss => "Weight loss",
            GoalType::Maintenance => "Body recomposition",
            GoalType::Gain => "Muscle gain",
        }
    }
}

/// TDEE = BMR scaled by the activity factor
pub fn compute_tdee(bmr: f64, activity_factor: f64) -> f64 {
    bmr * activity_factor
}

/// Split target calories into macronutrient grams
///
/// Protein and fat follow the per-kg ratios as given; carbohydrates take the
/// remaining calories and never go below zero.
pub fn compute_macros(
    profile: &Profile,
    params: &NutritionParameters,
    target_calories: f64,
) -> MacroSplit {
    let protein_g = params.protein_g_per_kg() * profile.weight_kg();
    let fat_g = params.fat_g_per_kg() * profile.weight_kg();

    let remaining_kcal =
        target_calories - protein_g * KCAL_PER_G_PROTEIN - fat_g * KCAL_PER_G_FAT;
    let carbs_g = (remaining_kcal / KCAL_PER_G_CARBS).max(0.0);

    MacroSplit {
        protein_g,
        fat_g,
        carbs_g,
    }
}

/// Daily water target in ml
pub fn compute_hydration(profile: &Profile, activity_factor: f64) -> f64 {
    let base = profile.weight_kg() * HYDRATION_ML_PER_KG;
    let bonus = HYDRATION_BONUSES
        .iter()
        .find(|(threshold, _)| activity_factor >= *threshold)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0.0);

    base + bonus
}

/// Classify a caloric adjustment; the ±100 kcal band is maintenance
pub fn classify_goal(caloric_adjustment: i32) -> GoalType {
    if caloric_adjustment < -MAINTENANCE_BAND_KCAL {
        GoalType::Loss
    } else if caloric_adjustment > MAINTENANCE_BAND_KCAL {
        GoalType::Gain
    } else {
        GoalType::Maintenance
    }
}

/// Run the full pipeline and assemble a rounded results snapshot
///
/// Intermediate values keep full precision; rounding happens only here.
pub fn compute_complete(
    profile: &Profile,
    params: &NutritionParameters,
) -> Result<NutritionResults, CalcError> {
    let bmr = compute_bmr(profile, params.formula())?;
    let tdee = compute_tdee(bmr, params.activity_factor());
    let target_calories = tdee + params.caloric_adjustment() as f64;

    let macros = compute_macros(profile, params, target_calories);
    let hydration_ml = compute_hydration(profile, params.activity_factor());

    tracing::debug!(
        formula = params.formula().as_str(),
        bmr,
        tdee,
        target_calories,
        protein_g = macros.protein_g,
        fat_g = macros.fat_g,
        carbs_g = macros.carbs_g,
        hydration_ml,
        "Computed nutrition targets"
    );

    Ok(NutritionResults::assemble(
        bmr,
        tdee,
        target_calories,
        &macros,
        hydration_ml,
    ))
}

/// Macro share of total kcal, recomputed from the stored kcal fields
pub fn macro_percentages(results: &NutritionResults) -> MacroPercentages {
    results.macro_percentages()
}
