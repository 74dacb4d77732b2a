//! Nutrition parameters model
//!
//! Formula choice, activity level, caloric goal and macro ratios.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::{FieldChecker, ValidationError, ValidationErrors, ValidationMode};
use crate::nutrition::{activity_label, classify_goal, CalcError, GoalType};

pub const ACTIVITY_FACTOR_RANGE: (f64, f64) = (1.0, 2.5);
pub const CALORIC_ADJUSTMENT_RANGE: (i64, i64) = (-1000, 1000);
pub const PROTEIN_G_PER_KG_RANGE: (f64, f64) = (0.5, 4.0);
pub const FAT_G_PER_KG_RANGE: (f64, f64) = (0.3, 2.0);

/// BMR estimation formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetabolismFormula {
    HarrisBenedict,
    MifflinStJeor,
    KatchMcArdle,
}

impl MetabolismFormula {
    pub const ALL: [MetabolismFormula; 3] = [
        MetabolismFormula::HarrisBenedict,
        MetabolismFormula::MifflinStJeor,
        MetabolismFormula::KatchMcArdle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetabolismFormula::HarrisBenedict => "harris_benedict",
            MetabolismFormula::MifflinStJeor => "mifflin_st_jeor",
            MetabolismFormula::KatchMcArdle => "katch_mcardle",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MetabolismFormula::HarrisBenedict => "Harris-Benedict",
            MetabolismFormula::MifflinStJeor => "Mifflin-St Jeor",
            MetabolismFormula::KatchMcArdle => "Katch-McArdle",
        }
    }

    /// When to pick this formula
    pub fn description(&self) -> &'static str {
        match self {
            MetabolismFormula::HarrisBenedict => "Classic formula, suitable for most people",
            MetabolismFormula::MifflinStJeor => "More accurate for overweight or obese people",
            MetabolismFormula::KatchMcArdle => "For a known body composition",
        }
    }

    /// Whether the formula needs a body fat percentage
    pub fn requires_body_fat(&self) -> bool {
        matches!(self, MetabolismFormula::KatchMcArdle)
    }
}

impl FromStr for MetabolismFormula {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "harris_benedict" => Ok(MetabolismFormula::HarrisBenedict),
            "mifflin_st_jeor" => Ok(MetabolismFormula::MifflinStJeor),
            "katch_mcardle" => Ok(MetabolismFormula::KatchMcArdle),
            _ => Err(CalcError::UnsupportedFormula(s.to_string())),
        }
    }
}

impl std::fmt::Display for MetabolismFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw, unvalidated parameter values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParametersCreate {
    pub formula: String,
    pub activity_factor: f64,
    pub caloric_adjustment: i64,
    pub protein_g_per_kg: f64,
    pub fat_g_per_kg: f64,
}

/// Validated nutrition parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ParametersCreate")]
pub struct NutritionParameters {
    formula: MetabolismFormula,
    activity_factor: f64,
    caloric_adjustment: i32,
    protein_g_per_kg: f64,
    fat_g_per_kg: f64,
}

impl NutritionParameters {
    /// Validate raw values and build a parameter set
    pub fn create(data: &ParametersCreate, mode: ValidationMode) -> Result<Self, ValidationErrors> {
        let mut checker = FieldChecker::new(mode);

        let formula = data
            .formula
            .parse::<MetabolismFormula>()
            .map_err(|_| ValidationError::UnsupportedFormula {
                value: data.formula.clone(),
            });
        checker.check(&formula);

        checker.range(
            "activity_factor",
            data.activity_factor,
            ACTIVITY_FACTOR_RANGE.0,
            ACTIVITY_FACTOR_RANGE.1,
        );
        checker.range(
            "caloric_adjustment",
            data.caloric_adjustment as f64,
            CALORIC_ADJUSTMENT_RANGE.0 as f64,
            CALORIC_ADJUSTMENT_RANGE.1 as f64,
        );
        checker.range(
            "protein_g_per_kg",
            data.protein_g_per_kg,
            PROTEIN_G_PER_KG_RANGE.0,
            PROTEIN_G_PER_KG_RANGE.1,
        );
        checker.range(
            "fat_g_per_kg",
            data.fat_g_per_kg,
            FAT_G_PER_KG_RANGE.0,
            FAT_G_PER_KG_RANGE.1,
        );

        checker.finish()?;

        Ok(Self {
            formula: formula?,
            activity_factor: data.activity_factor,
            caloric_adjustment: data.caloric_adjustment as i32,
            protein_g_per_kg: data.protein_g_per_kg,
            fat_g_per_kg: data.fat_g_per_kg,
        })
    }

    pub fn formula(&self) -> MetabolismFormula {
        self.formula
    }

    pub fn activity_factor(&self) -> f64 {
        self.activity_factor
    }

    /// kcal/day offset from maintenance; negative is a deficit
    pub fn caloric_adjustment(&self) -> i32 {
        self.caloric_adjustment
    }

    pub fn protein_g_per_kg(&self) -> f64 {
        self.protein_g_per_kg
    }

    pub fn fat_g_per_kg(&self) -> f64 {
        self.fat_g_per_kg
    }

    pub fn goal(&self) -> GoalType {
        classify_goal(self.caloric_adjustment)
    }

    /// Flat, labelled copy of the inputs for presentation
    pub fn echo(&self) -> ParameterEcho {
        ParameterEcho {
            formula: self.formula,
            formula_label: self.formula.display_name(),
            activity_factor: self.activity_factor,
            activity_label: activity_label(self.activity_factor),
            caloric_adjustment: self.caloric_adjustment,
            protein_g_per_kg: self.protein_g_per_kg,
            fat_g_per_kg: self.fat_g_per_kg,
            goal: self.goal(),
        }
    }
}

impl TryFrom<ParametersCreate> for NutritionParameters {
    type Error = ValidationErrors;

    fn try_from(data: ParametersCreate) -> Result<Self, Self::Error> {
        NutritionParameters::create(&data, ValidationMode::CollectAll)
    }
}

/// Parameters as shown on a sheet, with their human-readable labels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterEcho {
    pub formula: MetabolismFormula,
    pub formula_label: &'static str,
    pub activity_factor: f64,
    pub activity_label: &'static str,
    pub caloric_adjustment: i32,
    pub protein_g_per_kg: f64,
    pub fat_g_per_kg: f64,
    pub goal: GoalType,
}
