//! Nutrition calculation module
//!
//! BMR formulas, the derivation pipeline, advice text and reference labels.

pub mod advice;
pub mod calculator;
pub mod formulas;
pub mod labels;
pub mod projection;

pub use advice::generate_advice;
pub use calculator::{
    classify_goal, compute_complete, compute_hydration, compute_macros, compute_tdee,
    macro_percentages, GoalType,
};
pub use formulas::{compute_bmr, CalcError};
pub use labels::{activity_label, ACTIVITY_LEVELS, CUSTOM_ACTIVITY_LABEL};
pub use projection::{project_weight, WeightPoint, PROJECTION_WEEKS};
