//! Status command implementation
//!
//! This module implements the `status` command, which reports whether
//! entity detection is active and which matchers are loaded.

use super::{build_service, load_or_default};
use crate::anonymisation::tagger::{builtin_models, ModelInfo, ModelSource};
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Exit with code 3 when entity detection is unavailable
    #[arg(long)]
    pub strict: bool,
}

/// One-line description of a loaded model
pub fn describe_model(info: &ModelInfo) -> String {
    let source = match info.source {
        ModelSource::Builtin => "built-in",
        ModelSource::File(ref path) => path.as_str(),
    };
    format!(
        "{} v{} ({} model, {}, {source})",
        info.name, info.version, info.kind, info.language
    )
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Checking anonymisation status");

        println!("📊 Anonymisation Status");
        println!();

        let config = match load_or_default(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let service = match build_service(&config) {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        println!("  Configured Model: {}", config.anonymisation.model);
        match service.model_info() {
            Some(info) => {
                println!("  Entity Detection: ✅ active");
                println!("  Model:            {}", describe_model(info));
                println!("  Model Digest:     {}", info.digest);
            }
            None => {
                println!("  Entity Detection: ⚠️  UNAVAILABLE");
                println!("  Only structured identifiers will be stripped.");
                println!("  Names, organisations and locations will NOT be removed.");
                println!(
                    "  Built-in Models:  {}",
                    builtin_models().collect::<Vec<_>>().join(", ")
                );
            }
        }

        println!();
        println!("  Pattern Matchers (in order):");
        for (position, label) in service.pattern_labels().iter().enumerate() {
            println!("    {:>2}. {label}", position + 1);
        }
        println!();

        if self.strict && !service.ner_available() {
            println!("❌ Entity detection unavailable (--strict)");
            return Ok(3);
        }

        Ok(0)
    }
}
