//! Nutrition sheet generation
//!
//! Turns an [`Evaluation`] into a two-page PDF and describes the result with
//! [`SheetMetadata`].

pub mod chart;
pub mod config;
mod pdf;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate, Utc};
use thiserror::Error;

use crate::error::EngineError;
use crate::models::{Evaluation, Profile, SheetMetadata};

pub use config::{CoachInfo, ReportConfig};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid report configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

fn clean_name(name: &str) -> String {
    name.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// `Nutrition_Sheet_{First}_{Last}_{YYYYMMDD}.pdf`, names reduced to
/// alphanumeric characters
pub fn sheet_filename(profile: &Profile, date: NaiveDate) -> String {
    format!(
        "Nutrition_Sheet_{}_{}_{}.pdf",
        clean_name(profile.first_name()),
        clean_name(profile.last_name()),
        date.format("%Y%m%d")
    )
}

/// Local calendar date of a sheet's creation instant
fn local_date(created_at: DateTime<Utc>) -> NaiveDate {
    created_at.with_timezone(&Local).date_naive()
}

/// Write the sheet to `output_path`, creating parent directories
pub fn generate_sheet(
    evaluation: &Evaluation,
    config: &ReportConfig,
    output_path: &Path,
) -> Result<SheetMetadata, ReportError> {
    write_sheet(evaluation, config, output_path, Utc::now())
}

/// Write the sheet under `config.output_dir` with the standard file name
pub fn generate_sheet_in_dir(
    evaluation: &Evaluation,
    config: &ReportConfig,
) -> Result<(PathBuf, SheetMetadata), ReportError> {
    write_sheet_in_dir(evaluation, config, Utc::now())
}

fn write_sheet_in_dir(
    evaluation: &Evaluation,
    config: &ReportConfig,
    created_at: DateTime<Utc>,
) -> Result<(PathBuf, SheetMetadata), ReportError> {
    let file_name = sheet_filename(&evaluation.profile, local_date(created_at));
    let path = config.output_dir.join(file_name);
    let metadata = write_sheet(evaluation, config, &path, created_at)?;
    Ok((path, metadata))
}

fn write_sheet(
    evaluation: &Evaluation,
    config: &ReportConfig,
    output_path: &Path,
    created_at: DateTime<Utc>,
) -> Result<SheetMetadata, ReportError> {
    let date = local_date(created_at);

    pdf::render_sheet(evaluation, config, date, output_path)?;

    let file_name = output_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| sheet_filename(&evaluation.profile, date));

    tracing::info!(
        path = %output_path.display(),
        client = %evaluation.profile.full_name(),
        target_calories = evaluation.results.target_calories(),
        goal = evaluation.goal.as_str(),
        "Nutrition sheet generated"
    );

    Ok(SheetMetadata {
        file_name,
        last_name: evaluation.profile.last_name().to_string(),
        first_name: evaluation.profile.first_name().to_string(),
        created_at,
        target_calories: evaluation.results.target_calories(),
        goal: evaluation.goal,
    })
}
