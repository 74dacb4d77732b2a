//! Personalized advice
//!
//! Deterministic recommendation text driven by the goal and derived values.

use super::calculator::GoalType;
use crate::models::{NutritionResults, Profile};

/// Protein intake (g/kg) from which distributing protein across meals is advised
pub const HIGH_PROTEIN_G_PER_KG: f64 = 2.0;

const MEAL_FREQUENCY_TIP: &str = "Spread your food intake over 3-5 meals across the day";

fn goal_tips(goal: GoalType) -> [&'static str; 3] {
    match goal {
        GoalType::Loss => [
            "Include vegetables at every meal for satiety",
            "Eat most of your carbohydrates around training",
            "Keep the deficit moderate to preserve muscle mass",
        ],
        GoalType::Maintenance => [
            "Keep your eating pattern regular and balanced",
            "Adjust slightly as your body composition changes",
            "Focus on the quality of your food",
        ],
        GoalType::Gain => [
            "Increase your portions gradually over 2-3 weeks",
            "Add snacks rich in healthy calories",
            "Favor complex carbohydrates and healthy fats",
        ],
    }
}

/// Ordered list of recommendations
///
/// Always six entries: meal frequency, hydration, three goal tips and a
/// protein distribution tip.
pub fn generate_advice(profile: &Profile, results: &NutritionResults, goal: GoalType) -> Vec<String> {
    let mut advice = Vec::with_capacity(6);

    advice.push(MEAL_FREQUENCY_TIP.to_string());
    advice.push(format!(
        "Drink at least {} ml of water per day",
        results.hydration_ml() as i64
    ));

    advice.extend(goal_tips(goal).iter().map(|tip| tip.to_string()));

    let protein_per_kg = results.protein_g() / profile.weight_kg();
    if protein_per_kg >= HIGH_PROTEIN_G_PER_KG {
        advice.push("Spread your protein over every meal (20-30 g per meal)".to_string());
    } else {
        advice.push("Make sure every meal includes a protein source".to_string());
    }

    advice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MacroSplit, ProfileCreate, ValidationMode};

    fn profile() -> Profile {
        let data = ProfileCreate {
            last_name: "Martin".to_string(),
            first_name: "Paul".to_string(),
            age: 40,
            height_cm: 180,
            weight_kg: 80.0,
            sex: "male".to_string(),
            body_fat_pct: None,
        };
        Profile::create(&data, ValidationMode::FailFast).unwrap()
    }

    fn results(protein_g: f64) -> NutritionResults {
        let macros = MacroSplit {
            protein_g,
            fat_g: 80.0,
            carbs_g: 300.0,
        };
        NutritionResults::assemble(1755.0, 2720.0, 2720.0, &macros, 3300.0)
    }

    #[test]
    fn test_structure() {
        let advice = generate_advice(&profile(), &results(144.0), GoalType::Maintenance);
        assert_eq!(advice.len(), 6);
        assert_eq!(advice[0], MEAL_FREQUENCY_TIP);
        assert_eq!(advice[1], "Drink at least 3300 ml of water per day");
        assert_eq!(advice[2], "Keep your eating pattern regular and balanced");
        assert_eq!(advice[5], "Make sure every meal includes a protein source");
    }

    #[test]
    fn test_goal_specific_tips() {
        let loss = generate_advice(&profile(), &results(144.0), GoalType::Loss);
        assert_eq!(loss[2], "Include vegetables at every meal for satiety");

        let gain = generate_advice(&profile(), &results(144.0), GoalType::Gain);
        assert_eq!(gain[4], "Favor complex carbohydrates and healthy fats");
    }

    #[test]
    fn test_protein_threshold_inclusive() {
        // 160 g on 80 kg is exactly 2.0 g/kg
        let advice = generate_advice(&profile(), &results(160.0), GoalType::Gain);
        assert_eq!(advice[5], "Spread your protein over every meal (20-30 g per meal)");

        let advice = generate_advice(&profile(), &results(159.9), GoalType::Gain);
        assert_eq!(advice[5], "Make sure every meal includes a protein source");
    }
}
