//! Calculation request
//!
//! JSON envelope carrying a raw profile and parameter set, and the fully
//! derived evaluation built from it.

use serde::{Deserialize, Serialize};

use super::validation::{validate_pair, ValidationErrors, ValidationMode};
use super::{
    MacroPercentages, NutritionParameters, NutritionResults, ParameterEcho, ParametersCreate,
    Profile, ProfileCreate,
};
use crate::error::EngineError;
use crate::nutrition::{compute_complete, generate_advice, GoalType};

/// Raw inputs for one sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetRequest {
    pub profile: ProfileCreate,
    pub parameters: ParametersCreate,
}

impl SheetRequest {
    /// Validate both inputs, then run the full calculation
    ///
    /// In `CollectAll` mode the profile and parameter errors are merged so a
    /// form can show every problem at once.
    pub fn evaluate(&self, mode: ValidationMode) -> Result<Evaluation, EngineError> {
        let profile = Profile::create(&self.profile, mode);
        let params = NutritionParameters::create(&self.parameters, mode);

        let (profile, params) = match (profile, params) {
            (Ok(profile), Ok(params)) => (profile, params),
            (Err(e), Ok(_)) | (Ok(_), Err(e)) => return Err(e.into()),
            (Err(mut profile_errors), Err(param_errors)) => {
                if mode == ValidationMode::CollectAll {
                    profile_errors.append(param_errors);
                }
                return Err(profile_errors.into());
            }
        };

        validate_pair(&profile, &params).map_err(ValidationErrors::from)?;
        Evaluation::new(profile, params)
    }
}

/// Everything derived from one validated profile/parameter pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub profile: Profile,
    pub parameters: NutritionParameters,
    pub results: NutritionResults,
    pub goal: GoalType,
    pub advice: Vec<String>,
}

impl Evaluation {
    pub fn new(profile: Profile, parameters: NutritionParameters) -> Result<Self, EngineError> {
        let results = compute_complete(&profile, &parameters)?;
        let goal = parameters.goal();
        let advice = generate_advice(&profile, &results, goal);

        Ok(Self {
            profile,
            parameters,
            results,
            goal,
            advice,
        })
    }

    pub fn echo(&self) -> ParameterEcho {
        self.parameters.echo()
    }

    pub fn macro_percentages(&self) -> MacroPercentages {
        self.results.macro_percentages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SheetRequest {
        serde_json::from_str(
            r#"{
                "profile": {"last_name": "Dupont", "first_name": "Marie", "age": 28,
                            "height_cm": 165, "weight_kg": 60.0, "sex": "female"},
                "parameters": {"formula": "mifflin_st_jeor", "activity_factor": 1.55,
                               "caloric_adjustment": -300, "protein_g_per_kg": 1.8,
                               "fat_g_per_kg": 1.0}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_evaluate() {
        let evaluation = request().evaluate(ValidationMode::CollectAll).unwrap();
        assert_eq!(evaluation.results.target_calories(), 1762.0);
        assert_eq!(evaluation.goal, GoalType::Loss);
        assert_eq!(evaluation.advice.len(), 6);
    }

    #[test]
    fn test_errors_from_both_inputs_are_merged() {
        let mut req = request();
        req.profile.age = 5;
        req.parameters.fat_g_per_kg = 3.0;

        match req.evaluate(ValidationMode::CollectAll) {
            Err(EngineError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.has_field("age"));
                assert!(errors.has_field("fat_g_per_kg"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }

        match req.evaluate(ValidationMode::FailFast) {
            Err(EngineError::Validation(errors)) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_katch_mcardle_without_body_fat_fails_validation() {
        let mut req = request();
        req.parameters.formula = "katch_mcardle".to_string();

        match req.evaluate(ValidationMode::CollectAll) {
            Err(EngineError::Validation(errors)) => assert!(errors.has_field("body_fat_pct")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
