//! Weight projection
//!
//! Linear estimate of body weight under a constant caloric adjustment.

use serde::Serialize;

use crate::models::Profile;

/// Energy content of one kg of body mass (kcal)
pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;

/// Horizon used on generated sheets
pub const PROJECTION_WEEKS: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightPoint {
    pub week: u32,
    pub weight_kg: f64,
}

/// Weekly weight change in kg for a daily adjustment
pub fn weekly_weight_change(caloric_adjustment: i32) -> f64 {
    caloric_adjustment as f64 * 7.0 / KCAL_PER_KG_BODY_MASS
}

/// One point per week from 0 to `weeks` inclusive
pub fn project_weight(profile: &Profile, caloric_adjustment: i32, weeks: u32) -> Vec<WeightPoint> {
    let change = weekly_weight_change(caloric_adjustment);
    (0..=weeks)
        .map(|week| WeightPoint {
            week,
            weight_kg: profile.weight_kg() + week as f64 * change,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProfileCreate, ValidationMode};

    fn profile() -> Profile {
        let data = ProfileCreate {
            last_name: "Dupont".to_string(),
            first_name: "Marie".to_string(),
            age: 28,
            height_cm: 165,
            weight_kg: 60.0,
            sex: "female".to_string(),
            body_fat_pct: None,
        };
        Profile::create(&data, ValidationMode::FailFast).unwrap()
    }

    #[test]
    fn test_deficit_projection() {
        let points = project_weight(&profile(), -550, PROJECTION_WEEKS);
        assert_eq!(points.len(), 13);
        assert_eq!(points[0].weight_kg, 60.0);
        // -550 * 7 / 7700 = -0.5 kg/week
        assert!((points[12].weight_kg - 54.0).abs() < 1e-9);
    }

    #[test]
    fn test_maintenance_is_flat() {
        let points = project_weight(&profile(), 0, 4);
        assert!(points.iter().all(|p| p.weight_kg == 60.0));
    }
}
