//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "mindrep.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing MindRep configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: mindrep validate-config");
                println!("  3. Check entity detection: mindrep status --strict");
                println!("  4. Anonymise entries: mindrep batch --input entries.jsonl");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Sample configuration with every section at its default
    pub fn sample_config() -> &'static str {
        r#"# MindRep Configuration File
# PII anonymisation for journal entries

[application]
name = "mindrep"
log_level = "info"

[anonymisation]
# Entity model identifier; unknown models fall back to pattern-only mode
model = "en_core_web_sm"
# model_path = "./models/custom.toml"
# pattern_library = "./patterns/custom.toml"

[anonymisation.audit]
enabled = false
log_path = "./audit/anonymisation.log"
json_format = true

[batch]
parallelism = 4

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"  # daily | hourly | never
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use tempfile::tempdir;

    #[test]
    fn test_sample_config_parses() {
        let config = parse_config(InitArgs::sample_config()).unwrap();
        assert_eq!(config.application.name, "mindrep");
        assert_eq!(config.anonymisation.model, "en_core_web_sm");
        assert_eq!(config.batch.parallelism, 4);
    }

    #[tokio::test]
    async fn test_init_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("mindrep.toml");
        fs::write(&output, "keep me").unwrap();

        let args = InitArgs {
            output: output.to_str().unwrap().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");

        let args = InitArgs { force: true, ..args };
        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(fs::read_to_string(&output).unwrap().contains("[anonymisation]"));
    }
}
