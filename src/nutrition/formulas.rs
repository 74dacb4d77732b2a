//! Basal metabolic rate formulas
//!
//! All formulas take weight in kg, height in cm and age in years, and return
//! kcal/day.

use thiserror::Error;

use crate::models::{MetabolismFormula, Profile, Sex};

/// Calculation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("unsupported metabolism formula '{0}'")]
    UnsupportedFormula(String),

    #[error("katch_mcardle requires a body fat percentage")]
    MissingBodyComposition,
}

/// Revised Harris-Benedict equation (Roza & Shizgal, 1984)
pub fn harris_benedict(weight_kg: f64, height_cm: f64, age: f64, sex: Sex) -> f64 {
    match sex {
        Sex::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Sex::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    }
}

/// Mifflin-St Jeor equation (1990)
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: f64, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age;
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Weight minus estimated fat mass
pub fn lean_mass(weight_kg: f64, body_fat_pct: f64) -> f64 {
    weight_kg * (1.0 - body_fat_pct / 100.0)
}

/// Katch-McArdle equation, from lean mass only
pub fn katch_mcardle(weight_kg: f64, body_fat_pct: f64) -> f64 {
    370.0 + 21.6 * lean_mass(weight_kg, body_fat_pct)
}

/// BMR for a profile with the chosen formula
pub fn compute_bmr(profile: &Profile, formula: MetabolismFormula) -> Result<f64, CalcError> {
    let weight = profile.weight_kg();
    let height = profile.height_cm() as f64;
    let age = profile.age() as f64;

    let bmr = match formula {
        MetabolismFormula::HarrisBenedict => harris_benedict(weight, height, age, profile.sex()),
        MetabolismFormula::MifflinStJeor => mifflin_st_jeor(weight, height, age, profile.sex()),
        MetabolismFormula::KatchMcArdle => {
            let body_fat = profile
                .body_fat_pct()
                .ok_or(CalcError::MissingBodyComposition)?;
            katch_mcardle(weight, body_fat)
        }
    };

    Ok(bmr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProfileCreate, ValidationMode};

    fn profile(age: i64, height_cm: i64, weight_kg: f64, sex: &str, body_fat: Option<f64>) -> Profile {
        let data = ProfileCreate {
            last_name: "Test".to_string(),
            first_name: "Person".to_string(),
            age,
            height_cm,
            weight_kg,
            sex: sex.to_string(),
            body_fat_pct: body_fat,
        };
        Profile::create(&data, ValidationMode::FailFast).unwrap()
    }

    #[test]
    fn test_mifflin_female() {
        let p = profile(28, 165, 60.0, "female", None);
        let bmr = compute_bmr(&p, MetabolismFormula::MifflinStJeor).unwrap();
        // 600 + 1031.25 - 140 - 161
        assert!((bmr - 1330.25).abs() < 0.001);
    }

    #[test]
    fn test_mifflin_male() {
        let p = profile(30, 180, 75.0, "male", None);
        let bmr = compute_bmr(&p, MetabolismFormula::MifflinStJeor).unwrap();
        assert!((bmr - 1730.0).abs() < 0.001);
    }

    #[test]
    fn test_harris_benedict() {
        let male = profile(30, 180, 75.0, "male", None);
        let bmr = compute_bmr(&male, MetabolismFormula::HarrisBenedict).unwrap();
        // 88.362 + 1004.775 + 863.82 - 170.31
        assert!((bmr - 1786.647).abs() < 0.001);

        let female = profile(28, 165, 60.0, "female", None);
        let bmr = compute_bmr(&female, MetabolismFormula::HarrisBenedict).unwrap();
        // 447.593 + 554.82 + 511.17 - 121.24
        assert!((bmr - 1392.343).abs() < 0.001);
    }

    #[test]
    fn test_katch_mcardle() {
        let p = profile(35, 178, 80.0, "male", Some(20.0));
        let bmr = compute_bmr(&p, MetabolismFormula::KatchMcArdle).unwrap();
        assert!((bmr - 1752.4).abs() < 0.001);
    }

    #[test]
    fn test_katch_mcardle_ignores_sex_height_age() {
        let a = profile(20, 150, 80.0, "female", Some(20.0));
        let b = profile(70, 200, 80.0, "male", Some(20.0));
        assert_eq!(
            compute_bmr(&a, MetabolismFormula::KatchMcArdle).unwrap(),
            compute_bmr(&b, MetabolismFormula::KatchMcArdle).unwrap()
        );
    }

    #[test]
    fn test_katch_mcardle_requires_body_fat() {
        let p = profile(35, 178, 80.0, "male", None);
        assert_eq!(
            compute_bmr(&p, MetabolismFormula::KatchMcArdle),
            Err(CalcError::MissingBodyComposition)
        );
    }

    #[test]
    fn test_bmr_positive_at_range_extremes() {
        let extremes = [
            profile(100, 100, 30.0, "female", Some(50.0)),
            profile(100, 100, 30.0, "male", Some(50.0)),
            profile(10, 250, 300.0, "male", Some(3.0)),
            profile(10, 250, 300.0, "female", Some(3.0)),
        ];
        for p in &extremes {
            for formula in MetabolismFormula::ALL {
                assert!(compute_bmr(p, formula).unwrap() > 0.0, "{:?} {:?}", p, formula);
            }
        }
    }
}
