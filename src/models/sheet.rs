//! Sheet metadata
//!
//! Describes one generated nutrition sheet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::nutrition::GoalType;

/// Record of a generated sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetMetadata {
    pub file_name: String,
    pub last_name: String,
    pub first_name: String,
    pub created_at: DateTime<Utc>,
    pub target_calories: f64,
    pub goal: GoalType,
}

impl SheetMetadata {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
