//! Report configuration
//!
//! Coach details printed on every sheet and the default output directory.
//! Passed explicitly to the renderer; nothing here is global.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ReportError;

/// Environment variable holding the path of the JSON config file
pub const CONFIG_PATH_ENV: &str = "NUTRISHEET_CONFIG";
/// Environment variable overriding the output directory
pub const OUTPUT_DIR_ENV: &str = "NUTRISHEET_OUTPUT_DIR";

/// Coach contact details for the sheet header and footer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoachInfo {
    pub name: String,
    pub title: String,
    pub instagram: String,
    pub phone: String,
    pub email: String,
    pub website: String,
}

impl Default for CoachInfo {
    fn default() -> Self {
        Self {
            name: "Nutrition Coach".to_string(),
            title: "Nutrition & Performance Coach".to_string(),
            instagram: String::new(),
            phone: String::new(),
            email: String::new(),
            website: String::new(),
        }
    }
}

impl CoachInfo {
    /// Non-empty contact entries, labelled, in display order
    pub fn contacts(&self) -> Vec<String> {
        let mut contacts = Vec::new();
        if !self.instagram.is_empty() {
            contacts.push(format!("Instagram: @{}", self.instagram.trim_start_matches('@')));
        }
        if !self.phone.is_empty() {
            contacts.push(format!("Tel: {}", self.phone));
        }
        if !self.email.is_empty() {
            contacts.push(format!("Email: {}", self.email));
        }
        if !self.website.is_empty() {
            contacts.push(self.website.clone());
        }
        contacts
    }
}

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub coach: CoachInfo,
    pub output_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            coach: CoachInfo::default(),
            output_dir: PathBuf::from("output").join("sheets"),
        }
    }
}

impl ReportConfig {
    /// Load from a JSON file; missing keys take their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Resolve the config from the environment
    ///
    /// A missing file falls back to defaults; a malformed one is an error.
    pub fn from_env() -> Result<Self, ReportError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if Path::new(&path).exists() => {
                tracing::info!(path = %path, "Loading report configuration");
                Self::load(&path)?
            }
            Ok(path) => {
                tracing::warn!(path = %path, "Report configuration not found, using defaults");
                Self::default()
            }
            Err(_) => Self::default(),
        };

        if let Ok(dir) = std::env::var(OUTPUT_DIR_ENV) {
            config.output_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"coach": {{"name": "Virtus Training", "instagram": "@virtus"}}}}"#).unwrap();

        let config = ReportConfig::load(file.path()).unwrap();
        assert_eq!(config.coach.name, "Virtus Training");
        assert_eq!(config.coach.title, "Nutrition & Performance Coach");
        assert_eq!(config.output_dir, PathBuf::from("output").join("sheets"));
        assert_eq!(config.coach.contacts(), vec!["Instagram: @virtus".to_string()]);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        assert!(matches!(
            ReportConfig::load(file.path()),
            Err(ReportError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            ReportConfig::load("/nonexistent/nutrisheet.json"),
            Err(ReportError::Io(_))
        ));
    }
}
