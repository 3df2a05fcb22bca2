//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod anonymise;
pub mod batch;
pub mod init;
pub mod status;
pub mod validate;

use crate::anonymisation::AnonymisationService;
use crate::config::{load_config, MindRepConfig};
use std::path::Path;

/// Load the configuration file, or fall back to defaults when it is absent
///
/// A file that exists but fails to load is reported and mapped to exit code 2.
pub(crate) fn load_or_default(config_path: &str) -> Result<MindRepConfig, i32> {
    if !Path::new(config_path).exists() {
        tracing::debug!(config_path = %config_path, "No configuration file, using defaults");
        return Ok(MindRepConfig::default());
    }

    load_config(config_path).map_err(|e| {
        eprintln!("❌ Failed to load configuration file");
        eprintln!("   Error: {e}");
        2
    })
}

/// Build the anonymisation service, mapping failures to exit code 2
pub(crate) fn build_service(config: &MindRepConfig) -> Result<AnonymisationService, i32> {
    AnonymisationService::new(&config.anonymisation).map_err(|e| {
        eprintln!("❌ Failed to initialise anonymisation service");
        eprintln!("   Error: {e}");
        2
    })
}
