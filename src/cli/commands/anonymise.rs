//! Anonymise command implementation
//!
//! This module implements the `anonymise` command, which sanitises a single
//! journal entry read from a file or stdin.

use super::{build_service, load_or_default};
use clap::Args;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Arguments for the anonymise command
#[derive(Args, Debug)]
pub struct AnonymiseArgs {
    /// File containing the entry text (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Print the full result as JSON instead of the sanitised text
    #[arg(long)]
    pub json: bool,
}

impl AnonymiseArgs {
    /// Execute the anonymise command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_or_default(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let text = match self.read_input().await {
            Ok(t) => t,
            Err(e) => {
                eprintln!("❌ Failed to read input");
                eprintln!("   Error: {e}");
                return Ok(5);
            }
        };

        let service = match build_service(&config) {
            Ok(s) => s,
            Err(code) => return Ok(code),
        };

        let result = match service.anonymise(&text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(error = %e, "Anonymisation failed");
                eprintln!("❌ Anonymisation failed");
                eprintln!("   Error: {e}");
                return Ok(5);
            }
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", result.sanitised_text());
        }

        Ok(0)
    }

    async fn read_input(&self) -> std::io::Result<String> {
        match self.input {
            Some(ref path) => tokio::fs::read_to_string(path).await,
            None => {
                let mut text = String::new();
                tokio::io::stdin().read_to_string(&mut text).await?;
                Ok(text)
            }
        }
    }
}
