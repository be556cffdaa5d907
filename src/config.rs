//! Configuration handling for the TUI

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default chat timestamp format (`h:mm a`)
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-I:%M %p";
/// Default name in the chat header
pub const DEFAULT_SUPPORT_AGENT_NAME: &str = "Support";

/// Errors reading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WorkshopConfig {
    /// chrono format string for chat bubble timestamps
    pub timestamp_format: Option<String>,
    /// Name shown in the support chat header
    pub support_agent_name: Option<String>,
    /// Show the Apple/Google sign-in buttons
    pub show_social_sign_in: Option<bool>,
    /// Email typed into the sign-in form at launch
    pub prefill_email: Option<String>,
}

impl WorkshopConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "workshop", "workshop-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, falling back to defaults when it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn timestamp_format(&self) -> &str {
        self.timestamp_format
            .as_deref()
            .unwrap_or(DEFAULT_TIMESTAMP_FORMAT)
    }

    pub fn support_agent_name(&self) -> &str {
        self.support_agent_name
            .as_deref()
            .unwrap_or(DEFAULT_SUPPORT_AGENT_NAME)
    }

    pub fn show_social_sign_in(&self) -> bool {
        self.show_social_sign_in.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("workshop-tui-test-{}-{name}", std::process::id()))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = WorkshopConfig::default();
        assert!(config.timestamp_format.is_none());
        assert!(config.support_agent_name.is_none());
        assert!(config.show_social_sign_in.is_none());
        assert!(config.prefill_email.is_none());
    }

    #[test]
    fn test_default_accessors() {
        let config = WorkshopConfig::default();
        assert_eq!(config.timestamp_format(), "%-I:%M %p");
        assert_eq!(config.support_agent_name(), "Support");
        assert!(config.show_social_sign_in());
    }

    #[test]
    fn test_serialization() {
        let config = WorkshopConfig {
            timestamp_format: Some("%H:%M".to_string()),
            support_agent_name: Some("Ada".to_string()),
            show_social_sign_in: Some(false),
            prefill_email: Some("me@example.com".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: WorkshopConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
        assert_eq!(parsed.timestamp_format(), "%H:%M");
        assert!(!parsed.show_social_sign_in());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: WorkshopConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, WorkshopConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"support_agent_name": "Ada", "unknown_field": "value"}"#;
        let parsed: WorkshopConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.support_agent_name(), "Ada");
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let path = temp_config_path("missing");
        let config = WorkshopConfig::load_from(&path).unwrap();
        assert_eq!(config, WorkshopConfig::default());
    }

    #[test]
    fn test_written_config_loads_back() {
        let path = temp_config_path("roundtrip");
        let config = WorkshopConfig {
            prefill_email: Some("me@example.com".to_string()),
            ..Default::default()
        };
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        let loaded = WorkshopConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_from_invalid_json_is_parse_error() {
        let path = temp_config_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let err = WorkshopConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid config file"));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_config_path_points_at_app_config_file() {
        if let Some(path) = WorkshopConfig::config_path() {
            assert!(path.ends_with("workshop-tui/config.json"));
        }
    }
}
