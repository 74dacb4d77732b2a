//! Engine error type

use thiserror::Error;

use crate::models::ValidationErrors;
use crate::nutrition::CalcError;

/// Failure to turn raw inputs into results
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Calculation failed: {0}")]
    Calculation(#[from] CalcError),
}
