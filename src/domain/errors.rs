//! Domain error types
//!
//! This module defines the error hierarchy for MindRep. All errors are
//! domain-specific and don't expose third-party types. None of the variants
//! may carry journal text or a detected PII value.

use thiserror::Error;

/// Main MindRep error type
#[derive(Debug, Error)]
pub enum MindRepError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The entity tagger model could not be resolved or loaded
    #[error("Entity model '{model}' unavailable: {reason}")]
    ModelUnavailable {
        /// Model identifier that was requested
        model: String,
        /// Why loading failed
        reason: String,
    },

    /// A pattern matcher failed to compile or execute
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// The entity tagger failed on some input
    #[error("Detector error: {0}")]
    Detector(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl MindRepError {
    /// Build a [`MindRepError::ModelUnavailable`] for the given model
    pub fn model_unavailable(model: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ModelUnavailable {
            model: model.into(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for MindRepError {
    fn from(err: std::io::Error) -> Self {
        MindRepError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MindRepError {
    fn from(err: serde_json::Error) -> Self {
        MindRepError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for MindRepError {
    fn from(err: toml::de::Error) -> Self {
        MindRepError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Matcher errors only ever describe the pattern, never the haystack.
impl From<fancy_regex::Error> for MindRepError {
    fn from(err: fancy_regex::Error) -> Self {
        MindRepError::Pattern(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MindRepError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_model_unavailable_display() {
        let err = MindRepError::model_unavailable("xx_missing", "unknown model identifier");
        assert_eq!(
            err.to_string(),
            "Entity model 'xx_missing' unavailable: unknown model identifier"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: MindRepError = io_err.into();
        assert!(matches!(err, MindRepError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: MindRepError = json_err.into();
        assert!(matches!(err, MindRepError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: MindRepError = toml_err.into();
        assert!(matches!(err, MindRepError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_regex_error_conversion() {
        let regex_err = fancy_regex::Regex::new("(unclosed").unwrap_err();
        let err: MindRepError = regex_err.into();
        assert!(matches!(err, MindRepError::Pattern(_)));
    }

    #[test]
    fn test_implements_std_error() {
        let err = MindRepError::Detector("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
