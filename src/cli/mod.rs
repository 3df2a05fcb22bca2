//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for MindRep using clap.

pub mod commands;

use crate::config::{load_config, LoggingConfig};
use clap::{Parser, Subcommand};
use std::path::Path;

/// MindRep - PII anonymisation for journal entries
#[derive(Parser, Debug)]
#[command(name = "mindrep")]
#[command(version, about, long_about = None)]
#[command(author = "MindRep Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "mindrep.toml", env = "MINDREP_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MINDREP_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level and logging configuration to start with
    ///
    /// Reads `application.log_level` and `[logging]` from the config file;
    /// `--log-level` wins over the file. A missing or unloadable file gives
    /// console-only logging, and the command itself reports the load error.
    pub fn logging_settings(&self) -> (String, LoggingConfig) {
        let config = match self.command {
            Commands::Init(_) => None,
            _ if !Path::new(&self.config).exists() => None,
            _ => load_config(&self.config).ok(),
        };

        let (file_level, logging) = match config {
            Some(config) => (config.application.log_level, config.logging),
            None => ("info".to_string(), LoggingConfig::console_only()),
        };

        (self.log_level.clone().unwrap_or(file_level), logging)
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Anonymise a single journal entry from a file or stdin
    Anonymise(commands::anonymise::AnonymiseArgs),

    /// Anonymise a JSON-lines file of journal entries
    Batch(commands::batch::BatchArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Show entity model and matcher status
    Status(commands::status::StatusArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
