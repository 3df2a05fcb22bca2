//! Anonymisation configuration

use crate::anonymisation::tagger::DEFAULT_MODEL;
use crate::domain::{MindRepError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub(crate) fn parse_bool(var: &str, value: &str) -> Result<bool> {
    value
        .parse()
        .map_err(|_| MindRepError::Configuration(format!("Invalid {var} value: {value}")))
}

/// Anonymisation pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymisationConfig {
    /// Entity tagger model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Load the entity model from this file instead of the built-in registry
    #[serde(default)]
    pub model_path: Option<PathBuf>,

    /// Path to pattern library TOML file
    #[serde(default)]
    pub pattern_library: Option<PathBuf>,

    /// Audit logging configuration
    #[serde(default)]
    pub audit: AuditConfig,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for AnonymisationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            model_path: None,
            pattern_library: None,
            audit: AuditConfig::default(),
        }
    }
}

impl AnonymisationConfig {
    /// Validate the configuration
    ///
    /// An unknown model identifier is accepted here; the service falls back
    /// to pattern-only anonymisation when it cannot load it.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(MindRepError::Configuration(
                "anonymisation.model cannot be empty".to_string(),
            ));
        }

        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(MindRepError::Configuration(format!(
                    "Entity model file not found: {}",
                    path.display()
                )));
            }
        }

        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                return Err(MindRepError::Configuration(format!(
                    "Pattern library file not found: {}",
                    path.display()
                )));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(MindRepError::Configuration(format!(
                    "Pattern library must be a TOML file: {}",
                    path.display()
                )));
            }
        }

        self.audit.validate()
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("MINDREP_ANONYMISATION_MODEL") {
            self.model = val;
        }

        if let Ok(val) = std::env::var("MINDREP_ANONYMISATION_MODEL_PATH") {
            self.model_path = Some(PathBuf::from(val));
        }

        if let Ok(val) = std::env::var("MINDREP_ANONYMISATION_PATTERN_LIBRARY") {
            self.pattern_library = Some(PathBuf::from(val));
        }

        self.audit.apply_env_overrides()
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit logs
    #[serde(default = "default_audit_json_format")]
    pub json_format: bool,
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/anonymisation.log")
}

fn default_audit_json_format() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: default_audit_json_format(),
        }
    }
}

impl AuditConfig {
    /// Validate audit configuration
    pub fn validate(&self) -> Result<()> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err(MindRepError::Configuration(
                "anonymisation.audit.log_path cannot be empty when audit is enabled".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("MINDREP_ANONYMISATION_AUDIT_ENABLED") {
            self.enabled = parse_bool("MINDREP_ANONYMISATION_AUDIT_ENABLED", &val)?;
        }

        if let Ok(val) = std::env::var("MINDREP_ANONYMISATION_AUDIT_LOG_PATH") {
            self.log_path = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("MINDREP_ANONYMISATION_AUDIT_JSON_FORMAT") {
            self.json_format = parse_bool("MINDREP_ANONYMISATION_AUDIT_JSON_FORMAT", &val)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AnonymisationConfig::default();
        assert_eq!(config.model, "en_core_web_sm");
        assert!(config.model_path.is_none());
        assert!(config.pattern_library.is_none());
        assert!(!config.audit.enabled);
        assert!(config.audit.json_format);
    }

    #[test]
    fn test_config_validation() {
        let config = AnonymisationConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_model_is_valid() {
        let config = AnonymisationConfig {
            model: "nonexistent_model_xyz".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_model_rejected() {
        let config = AnonymisationConfig {
            model: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_files_rejected() {
        let config = AnonymisationConfig {
            pattern_library: Some(PathBuf::from("/no/such/patterns.toml")),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(MindRepError::Configuration(_))));

        let config = AnonymisationConfig {
            model_path: Some(PathBuf::from("/no/such/model.toml")),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_pattern_library_must_be_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("patterns.json");
        std::fs::write(&path, "{}").unwrap();

        let config = AnonymisationConfig {
            pattern_library: Some(path),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: AnonymisationConfig = toml::from_str("[audit]\nenabled = true\n").unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.audit.enabled);
        assert_eq!(config.audit.log_path, PathBuf::from("./audit/anonymisation.log"));
    }
}
