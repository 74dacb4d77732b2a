//! Nutrition results
//!
//! Snapshot produced by one calculation. Values are rounded once, when the
//! snapshot is assembled.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// kcal per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// kcal per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;
/// kcal per gram of carbohydrate
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// Round to a number of decimal places (half away from zero)
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Macronutrient grams, full precision
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroSplit {
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

impl MacroSplit {
    pub fn protein_kcal(&self) -> f64 {
        self.protein_g * KCAL_PER_G_PROTEIN
    }

    pub fn fat_kcal(&self) -> f64 {
        self.fat_g * KCAL_PER_G_FAT
    }

    pub fn carbs_kcal(&self) -> f64 {
        self.carbs_g * KCAL_PER_G_CARBS
    }

    /// Grams to 1 decimal
    pub fn rounded(&self) -> Self {
        Self {
            protein_g: round_to(self.protein_g, 1),
            fat_g: round_to(self.fat_g, 1),
            carbs_g: round_to(self.carbs_g, 1),
        }
    }
}

/// Share of total kcal per macronutrient, in percent (1 decimal)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MacroPercentages {
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl MacroPercentages {
    pub fn total(&self) -> f64 {
        self.protein + self.fat + self.carbs
    }
}

/// Derived nutrition targets
///
/// kcal fields are whole numbers, gram fields have one decimal. Only built by
/// [`NutritionResults::assemble`], so every instance is rounded consistently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutritionResults {
    bmr: f64,
    tdee: f64,
    maintenance_calories: f64,
    target_calories: f64,
    protein_g: f64,
    protein_kcal: f64,
    fat_g: f64,
    fat_kcal: f64,
    carbs_g: f64,
    carbs_kcal: f64,
    hydration_ml: f64,
}

impl NutritionResults {
    /// Round full-precision values into a snapshot
    ///
    /// Macro kcal come from the unrounded grams; maintenance equals TDEE.
    pub(crate) fn assemble(
        bmr: f64,
        tdee: f64,
        target_calories: f64,
        macros: &MacroSplit,
        hydration_ml: f64,
    ) -> Self {
        Self {
            bmr: round_to(bmr, 0),
            tdee: round_to(tdee, 0),
            maintenance_calories: round_to(tdee, 0),
            target_calories: round_to(target_calories, 0),
            protein_g: round_to(macros.protein_g, 1),
            protein_kcal: round_to(macros.protein_kcal(), 0),
            fat_g: round_to(macros.fat_g, 1),
            fat_kcal: round_to(macros.fat_kcal(), 0),
            carbs_g: round_to(macros.carbs_g, 1),
            carbs_kcal: round_to(macros.carbs_kcal(), 0),
            hydration_ml: round_to(hydration_ml, 0),
        }
    }

    pub fn bmr(&self) -> f64 {
        self.bmr
    }

    pub fn tdee(&self) -> f64 {
        self.tdee
    }

    pub fn maintenance_calories(&self) -> f64 {
        self.maintenance_calories
    }

    pub fn target_calories(&self) -> f64 {
        self.target_calories
    }

    pub fn protein_g(&self) -> f64 {
        self.protein_g
    }

    pub fn protein_kcal(&self) -> f64 {
        self.protein_kcal
    }

    pub fn fat_g(&self) -> f64 {
        self.fat_g
    }

    pub fn fat_kcal(&self) -> f64 {
        self.fat_kcal
    }

    pub fn carbs_g(&self) -> f64 {
        self.carbs_g
    }

    pub fn carbs_kcal(&self) -> f64 {
        self.carbs_kcal
    }

    pub fn hydration_ml(&self) -> f64 {
        self.hydration_ml
    }

    /// Sum of the macro kcal fields
    pub fn total_macro_kcal(&self) -> f64 {
        self.protein_kcal + self.fat_kcal + self.carbs_kcal
    }

    /// Percentages recomputed from the stored kcal fields on every call
    pub fn macro_percentages(&self) -> MacroPercentages {
        let total = self.total_macro_kcal();
        if total == 0.0 {
            return MacroPercentages::default();
        }

        MacroPercentages {
            protein: round_to(self.protein_kcal / total * 100.0, 1),
            fat: round_to(self.fat_kcal / total * 100.0, 1),
            carbs: round_to(self.carbs_kcal / total * 100.0, 1),
        }
    }
}

impl Serialize for NutritionResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("NutritionResults", 12)?;
        state.serialize_field("bmr", &self.bmr)?;
        state.serialize_field("tdee", &self.tdee)?;
        state.serialize_field("maintenance_calories", &self.maintenance_calories)?;
        state.serialize_field("target_calories", &self.target_calories)?;
        state.serialize_field("protein_g", &self.protein_g)?;
        state.serialize_field("protein_kcal", &self.protein_kcal)?;
        state.serialize_field("fat_g", &self.fat_g)?;
        state.serialize_field("fat_kcal", &self.fat_kcal)?;
        state.serialize_field("carbs_g", &self.carbs_g)?;
        state.serialize_field("carbs_kcal", &self.carbs_kcal)?;
        state.serialize_field("hydration_ml", &self.hydration_ml)?;
        state.serialize_field("macro_percentages", &self.macro_percentages())?;
        state.end()
    }
}
