//! Data models
//!
//! Validated inputs, derived results and sheet records.

mod parameters;
mod profile;
mod request;
mod results;
mod sheet;
mod validation;

pub use parameters::{
    MetabolismFormula, NutritionParameters, ParameterEcho, ParametersCreate,
    ACTIVITY_FACTOR_RANGE, CALORIC_ADJUSTMENT_RANGE, FAT_G_PER_KG_RANGE, PROTEIN_G_PER_KG_RANGE,
};
pub use profile::{
    Profile, ProfileCreate, Sex, AGE_RANGE, BODY_FAT_PCT_RANGE, HEIGHT_CM_RANGE, WEIGHT_KG_RANGE,
};
pub use request::{Evaluation, SheetRequest};
pub use results::{
    round_to, MacroPercentages, MacroSplit, NutritionResults, KCAL_PER_G_CARBS, KCAL_PER_G_FAT,
    KCAL_PER_G_PROTEIN,
};
pub use sheet::SheetMetadata;
pub use validation::{validate_pair, ValidationError, ValidationErrors, ValidationMode};
