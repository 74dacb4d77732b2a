//! Input validation
//!
//! Range checks shared by the profile and parameter models, plus the
//! cross-object check between a profile and its parameters.

use std::fmt;

use thiserror::Error;

use super::{MetabolismFormula, NutritionParameters, Profile};

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} has unrecognized value '{value}'")]
    InvalidChoice { field: &'static str, value: String },

    #[error("unsupported metabolism formula '{value}'")]
    UnsupportedFormula { value: String },

    #[error("{field} is required by {required_by}")]
    MissingField {
        field: &'static str,
        required_by: &'static str,
    },
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange { field, .. }
            | ValidationError::Empty { field }
            | ValidationError::InvalidChoice { field, .. }
            | ValidationError::MissingField { field, .. } => field,
            ValidationError::UnsupportedFormula { .. } => "formula",
        }
    }
}

/// How many violations to report before giving up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Check every field and report all violations (form-level validation)
    #[default]
    CollectAll,
    /// Stop at the first violation
    FailFast,
}

/// One or more validation failures. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn first(&self) -> &ValidationError {
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Whether any violation concerns the given field
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }

    /// Move every error of `other` after the errors already held
    pub fn append(&mut self, mut other: ValidationErrors) {
        self.0.append(&mut other.0);
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        ValidationErrors(vec![error])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Accumulates field violations according to a [`ValidationMode`]
pub(crate) struct FieldChecker {
    mode: ValidationMode,
    errors: Vec<ValidationError>,
}

impl FieldChecker {
    pub(crate) fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            errors: Vec::new(),
        }
    }

    fn halted(&self) -> bool {
        self.mode == ValidationMode::FailFast && !self.errors.is_empty()
    }

    /// Record an error unless fail-fast mode already has one
    pub(crate) fn push(&mut self, error: ValidationError) {
        if !self.halted() {
            self.errors.push(error);
        }
    }

    /// Inclusive range check; NaN always fails
    pub(crate) fn range(&mut self, field: &'static str, value: f64, min: f64, max: f64) {
        if !(min..=max).contains(&value) {
            self.push(ValidationError::OutOfRange {
                field,
                min,
                max,
                value,
            });
        }
    }

    pub(crate) fn non_empty(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.push(ValidationError::Empty { field });
        }
    }

    /// Record the error of a parse step, if any
    pub(crate) fn check<T>(&mut self, result: &Result<T, ValidationError>) {
        if let Err(e) = result {
            self.push(e.clone());
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

/// Check the conditional requirements between a profile and its parameters
///
/// Katch-McArdle depends on lean mass, so it needs a body fat percentage.
pub fn validate_pair(
    profile: &Profile,
    params: &NutritionParameters,
) -> Result<(), ValidationError> {
    if params.formula() == MetabolismFormula::KatchMcArdle && profile.body_fat_pct().is_none() {
        return Err(ValidationError::MissingField {
            field: "body_fat_pct",
            required_by: MetabolismFormula::KatchMcArdle.as_str(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_all_keeps_every_error() {
        let mut checker = FieldChecker::new(ValidationMode::CollectAll);
        checker.range("age", 5.0, 10.0, 100.0);
        checker.range("height_cm", 300.0, 100.0, 250.0);
        checker.non_empty("first_name", "  ");

        let errors = checker.finish().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.has_field("age"));
        assert!(errors.has_field("height_cm"));
        assert!(errors.has_field("first_name"));
    }

    #[test]
    fn test_fail_fast_keeps_first_error() {
        let mut checker = FieldChecker::new(ValidationMode::FailFast);
        checker.range("age", 5.0, 10.0, 100.0);
        checker.range("height_cm", 300.0, 100.0, 250.0);

        let errors = checker.finish().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().field(), "age");
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let mut checker = FieldChecker::new(ValidationMode::CollectAll);
        checker.range("activity_factor", 1.0, 1.0, 2.5);
        checker.range("activity_factor", 2.5, 1.0, 2.5);
        assert!(checker.finish().is_ok());
    }

    #[test]
    fn test_nan_fails_range() {
        let mut checker = FieldChecker::new(ValidationMode::CollectAll);
        checker.range("weight_kg", f64::NAN, 30.0, 300.0);
        assert!(checker.finish().is_err());
    }

    #[test]
    fn test_display_joins_messages() {
        let errors = ValidationErrors(vec![
            ValidationError::Empty { field: "last_name" },
            ValidationError::UnsupportedFormula {
                value: "cunningham".to_string(),
            },
        ]);
        assert_eq!(
            errors.to_string(),
            "last_name must not be empty; unsupported metabolism formula 'cunningham'"
        );
    }
}
