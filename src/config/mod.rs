//! Configuration management for MindRep.
//!
//! MindRep uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `MINDREP_*` environment variable overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mindrep::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("mindrep.toml")?;
//! println!("Entity model: {}", config.anonymisation.model);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! name = "mindrep"
//! log_level = "info"
//!
//! [anonymisation]
//! model = "en_core_web_sm"
//! # model_path = "./models/custom.toml"
//! # pattern_library = "./patterns/pii_patterns.toml"
//!
//! [anonymisation.audit]
//! enabled = true
//! log_path = "${MINDREP_AUDIT_DIR}/anonymisation.log"
//!
//! [batch]
//! parallelism = 4
//!
//! [logging]
//! local_enabled = true
//! local_path = "./logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, parse_config};
pub use schema::{ApplicationConfig, BatchConfig, LoggingConfig, MindRepConfig};
