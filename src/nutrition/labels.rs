//! Reference labels for activity levels

/// The canonical activity factors and what they mean
pub const ACTIVITY_LEVELS: [(f64, &str); 5] = [
    (1.2, "Sedentary (desk job, no exercise)"),
    (1.375, "Lightly active (1-3x/week)"),
    (1.55, "Moderately active (3-5x/week)"),
    (1.725, "Very active (6-7x/week)"),
    (1.9, "Extremely active (daily + physical job)"),
];

/// Label for factors that are not one of [`ACTIVITY_LEVELS`]
pub const CUSTOM_ACTIVITY_LABEL: &str = "Custom activity level";

const FACTOR_TOLERANCE: f64 = 1e-9;

/// Human-readable label for an activity factor
pub fn activity_label(factor: f64) -> &'static str {
    ACTIVITY_LEVELS
        .iter()
        .find(|(level, _)| (level - factor).abs() < FACTOR_TOLERANCE)
        .map(|(_, label)| *label)
        .unwrap_or(CUSTOM_ACTIVITY_LABEL)
}
