// MindRep - PII Anonymisation for Journal Entries
// Copyright (c) 2025 MindRep Contributors
// Licensed under the MIT License

//! # MindRep - PII anonymisation for journal entries
//!
//! MindRep strips personally identifying information from free-text mood
//! journal entries before that text is sent to a third-party classification
//! API. Only the sanitised text may leave the process; the accompanying
//! result records what was removed as category counts, never values.
//!
//! ## Architecture
//!
//! - [`anonymisation`] - Pattern and entity detectors, the pipeline service,
//!   audit log and batch report
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration management
//! - [`domain`] - Error type and result alias
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mindrep::anonymisation::{AnonymisationConfig, AnonymisationService};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = AnonymisationService::new(&AnonymisationConfig::default())?;
//!
//!     let result = service.anonymise(
//!         "My boss Sarah at Deloitte in Manchester is stressing me out",
//!     )?;
//!
//!     // "My boss [NAME] at [ORG] in [LOCATION] is stressing me out"
//!     println!("{}", result.sanitised_text());
//!     println!("{:?}", result.replacements());
//!     Ok(())
//! }
//! ```
//!
//! ## Detection Order
//!
//! Structured identifiers are replaced first, most specific matcher first:
//! emails, national identifiers, NHS numbers, phone numbers, postcodes, links
//! and numeric dates. The entity tagger then runs over the substituted text
//! for people, organisations, places, groups, dates and times. Any
//! capitalised proper noun the tagger left unclaimed becomes `[NAME]`.
//!
//! ## Degraded Mode
//!
//! When the configured entity model cannot be loaded the service still
//! starts and strips structured identifiers only. Check
//! [`anonymisation::AnonymisationService::ner_available`] or run
//! `mindrep status --strict` before relying on name removal.
//!
//! ## Error Handling
//!
//! Library operations return [`domain::Result`] over [`domain::MindRepError`]:
//!
//! ```rust,no_run
//! use mindrep::domain::MindRepError;
//!
//! fn example() -> Result<(), MindRepError> {
//!     let config = mindrep::config::load_config("mindrep.toml")?;
//!     let service = mindrep::anonymisation::AnonymisationService::new(&config.anonymisation)?;
//!     let _payload = service.prepare_api_payload("Call me on 07700 900123")?;
//!     Ok(())
//! }
//! ```

pub mod anonymisation;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
