//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the MindRep configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading also validates every section
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Application: {}", config.application.name);
        println!("  Log Level: {}", config.application.log_level);
        println!("  Entity Model: {}", config.anonymisation.model);
        if let Some(ref path) = config.anonymisation.model_path {
            println!("  Model File: {}", path.display());
        }
        match config.anonymisation.pattern_library {
            Some(ref path) => println!("  Pattern Library: {}", path.display()),
            None => println!("  Pattern Library: built-in"),
        }
        if config.anonymisation.audit.enabled {
            println!(
                "  Audit Log: {} ({})",
                config.anonymisation.audit.log_path.display(),
                if config.anonymisation.audit.json_format { "json" } else { "text" }
            );
        } else {
            println!("  Audit Log: disabled");
        }
        println!("  Batch Parallelism: {}", config.batch.parallelism);
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        }
        println!();
        Ok(0)
    }
}
