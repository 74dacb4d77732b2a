//! Profile model
//!
//! Biometric profile of the person a sheet is computed for.

use serde::{Deserialize, Serialize};

use super::validation::{FieldChecker, ValidationError, ValidationErrors, ValidationMode};

pub const AGE_RANGE: (i64, i64) = (10, 100);
pub const HEIGHT_CM_RANGE: (i64, i64) = (100, 250);
pub const WEIGHT_KG_RANGE: (f64, f64) = (30.0, 300.0);
pub const BODY_FAT_PCT_RANGE: (f64, f64) = (3.0, 50.0);

/// Biological sex, used to pick formula coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    /// Exact identifiers only (`male`, `female`)
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Sex::Male),
            "female" => Some(Sex::Female),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

/// Raw, unvalidated profile values (form or JSON input)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileCreate {
    pub last_name: String,
    pub first_name: String,
    pub age: i64,
    pub height_cm: i64,
    pub weight_kg: f64,
    pub sex: String,
    #[serde(default)]
    pub body_fat_pct: Option<f64>,
}

/// A validated biometric profile
///
/// Only obtainable through [`Profile::create`] (or deserialization, which goes
/// through the same checks), so every instance is within range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileCreate")]
pub struct Profile {
    last_name: String,
    first_name: String,
    age: u32,
    height_cm: u32,
    weight_kg: f64,
    sex: Sex,
    body_fat_pct: Option<f64>,
}

impl Profile {
    /// Validate raw values and build a profile
    pub fn create(data: &ProfileCreate, mode: ValidationMode) -> Result<Self, ValidationErrors> {
        let mut checker = FieldChecker::new(mode);

        checker.non_empty("last_name", &data.last_name);
        checker.non_empty("first_name", &data.first_name);
        checker.range("age", data.age as f64, AGE_RANGE.0 as f64, AGE_RANGE.1 as f64);
        checker.range(
            "height_cm",
            data.height_cm as f64,
            HEIGHT_CM_RANGE.0 as f64,
            HEIGHT_CM_RANGE.1 as f64,
        );
        checker.range("weight_kg", data.weight_kg, WEIGHT_KG_RANGE.0, WEIGHT_KG_RANGE.1);

        let sex = Sex::from_str(&data.sex).ok_or_else(|| ValidationError::InvalidChoice {
            field: "sex",
            value: data.sex.clone(),
        });
        checker.check(&sex);

        if let Some(pct) = data.body_fat_pct {
            checker.range("body_fat_pct", pct, BODY_FAT_PCT_RANGE.0, BODY_FAT_PCT_RANGE.1);
        }

        checker.finish()?;

        Ok(Self {
            last_name: data.last_name.trim().to_string(),
            first_name: data.first_name.trim().to_string(),
            age: data.age as u32,
            height_cm: data.height_cm as u32,
            weight_kg: data.weight_kg,
            sex: sex?,
            body_fat_pct: data.body_fat_pct,
        })
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn height_cm(&self) -> u32 {
        self.height_cm
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn body_fat_pct(&self) -> Option<f64> {
        self.body_fat_pct
    }
}

impl TryFrom<ProfileCreate> for Profile {
    type Error = ValidationErrors;

    fn try_from(data: ProfileCreate) -> Result<Self, Self::Error> {
        Profile::create(&data, ValidationMode::CollectAll)
    }
}

impl From<&Profile> for ProfileCreate {
    fn from(profile: &Profile) -> Self {
        Self {
            last_name: profile.last_name.clone(),
            first_name: profile.first_name.clone(),
            age: profile.age as i64,
            height_cm: profile.height_cm as i64,
            weight_kg: profile.weight_kg,
            sex: profile.sex.as_str().to_string(),
            body_fat_pct: profile.body_fat_pct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProfileCreate {
        ProfileCreate {
            last_name: "Dupont".to_string(),
            first_name: "Marie".to_string(),
            age: 28,
            height_cm: 165,
            weight_kg: 60.0,
            sex: "female".to_string(),
            body_fat_pct: None,
        }
    }

    #[test]
    fn test_valid_profile() {
        let profile = Profile::create(&sample(), ValidationMode::CollectAll).unwrap();
        assert_eq!(profile.age(), 28);
        assert_eq!(profile.height_cm(), 165);
        assert_eq!(profile.sex(), Sex::Female);
        assert_eq!(profile.full_name(), "Marie Dupont");
        assert!(profile.body_fat_pct().is_none());
    }

    #[test]
    fn test_boundaries_accepted() {
        let mut data = sample();
        data.age = 10;
        data.height_cm = 250;
        data.weight_kg = 30.0;
        data.body_fat_pct = Some(50.0);
        assert!(Profile::create(&data, ValidationMode::FailFast).is_ok());

        data.age = 100;
        data.height_cm = 100;
        data.weight_kg = 300.0;
        data.body_fat_pct = Some(3.0);
        assert!(Profile::create(&data, ValidationMode::FailFast).is_ok());
    }

    #[test]
    fn test_out_of_range_fields_all_reported() {
        let mut data = sample();
        data.age = 9;
        data.height_cm = 251;
        data.weight_kg = 29.9;
        data.body_fat_pct = Some(51.0);

        let errors = Profile::create(&data, ValidationMode::CollectAll).unwrap_err();
        assert_eq!(errors.len(), 4);
        for field in ["age", "height_cm", "weight_kg", "body_fat_pct"] {
            assert!(errors.has_field(field), "missing error for {}", field);
        }
    }

    #[test]
    fn test_fail_fast_reports_one() {
        let mut data = sample();
        data.age = 101;
        data.sex = "other".to_string();

        let errors = Profile::create(&data, ValidationMode::FailFast).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().field(), "age");
    }

    #[test]
    fn test_invalid_sex_rejected() {
        let mut data = sample();
        data.sex = "unknown".to_string();

        let errors = Profile::create(&data, ValidationMode::CollectAll).unwrap_err();
        assert_eq!(
            errors.first(),
            &ValidationError::InvalidChoice {
                field: "sex",
                value: "unknown".to_string()
            }
        );
    }

    #[test]
    fn test_blank_names_rejected() {
        let mut data = sample();
        data.first_name = "   ".to_string();
        data.last_name = String::new();

        let errors = Profile::create(&data, ValidationMode::CollectAll).unwrap_err();
        assert!(errors.has_field("first_name"));
        assert!(errors.has_field("last_name"));
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"last_name":"Martin","first_name":"Paul","age":40,
            "height_cm":180,"weight_kg":82.5,"sex":"male","body_fat_pct":18.0}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.sex(), Sex::Male);
        assert_eq!(profile.body_fat_pct(), Some(18.0));

        let bad = r#"{"last_name":"Martin","first_name":"Paul","age":4,
            "height_cm":180,"weight_kg":82.5,"sex":"male"}"#;
        assert!(serde_json::from_str::<Profile>(bad).is_err());
    }

    #[test]
    fn test_sex_from_str() {
        assert_eq!(Sex::from_str("male"), Some(Sex::Male));
        assert_eq!(Sex::from_str("female"), Some(Sex::Female));
        for other in ["Male", "MALE", "f", "m", " female", "x", ""] {
            assert_eq!(Sex::from_str(other), None, "{:?}", other);
        }
    }

    #[test]
    fn test_sex_alias_rejected() {
        let mut data = sample();
        data.sex = "F".to_string();
        let errors = Profile::create(&data, ValidationMode::CollectAll).unwrap_err();
        assert!(matches!(
            errors.first(),
            ValidationError::InvalidChoice { field: "sex", .. }
        ));
    }
}
