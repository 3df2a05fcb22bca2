//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::MindRepConfig;
use crate::anonymisation::config::parse_bool;
use crate::domain::errors::MindRepError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into MindRepConfig
/// 4. Applies environment variable overrides (MINDREP_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use mindrep::config::loader::load_config;
///
/// let config = load_config("mindrep.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<MindRepConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MindRepError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        MindRepError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Parses, overrides and validates configuration from TOML text
pub fn parse_config(contents: &str) -> Result<MindRepConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: MindRepConfig = toml::from_str(&contents)
        .map_err(|e| MindRepError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        MindRepError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| MindRepError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        let trimmed = line.trim_start();

        // Comments are copied verbatim
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(MindRepError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using MINDREP_* prefix
///
/// Environment variables follow the pattern: MINDREP_<SECTION>_<KEY>
/// For example: MINDREP_APPLICATION_LOG_LEVEL, MINDREP_ANONYMISATION_MODEL
fn apply_env_overrides(config: &mut MindRepConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("MINDREP_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Anonymisation overrides
    config.anonymisation.apply_env_overrides()?;

    // Batch overrides
    if let Ok(val) = std::env::var("MINDREP_BATCH_PARALLELISM") {
        config.batch.parallelism = val.parse().map_err(|_| {
            MindRepError::Configuration(format!("Invalid MINDREP_BATCH_PARALLELISM value: {val}"))
        })?;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("MINDREP_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_bool("MINDREP_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("MINDREP_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("MINDREP_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
