//! Print nutrition targets for a sheet request as JSON, without rendering a PDF

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use nutrisheet::build_info::BuildInfo;
use nutrisheet::models::{
    MacroPercentages, NutritionResults, ParameterEcho, SheetRequest, ValidationMode,
};
use nutrisheet::nutrition::{project_weight, GoalType, WeightPoint, PROJECTION_WEEKS};

#[derive(Debug, Serialize)]
struct TargetsOutput {
    results: NutritionResults,
    macro_percentages: MacroPercentages,
    goal: GoalType,
    parameters: ParameterEcho,
    advice: Vec<String>,
    projection: Vec<WeightPoint>,
    build: BuildInfo,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutrisheet=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: nutrition_targets <request.json>")?;

    let request: SheetRequest = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    let evaluation = request.evaluate(ValidationMode::CollectAll)?;

    let output = TargetsOutput {
        results: evaluation.results,
        macro_percentages: evaluation.macro_percentages(),
        goal: evaluation.goal,
        parameters: evaluation.echo(),
        projection: project_weight(
            &evaluation.profile,
            evaluation.parameters.caloric_adjustment(),
            PROJECTION_WEEKS,
        ),
        advice: evaluation.advice,
        build: BuildInfo::current(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
