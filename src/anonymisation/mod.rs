//! PII anonymisation for journal entries
//!
//! Journal text is sanitised here before it is sent to any external
//! language-model API. The pipeline consists of:
//! - **Pattern detection**: ordered regex matchers for structured identifiers
//! - **Entity detection**: a pluggable entity tagger for names, organisations,
//!   places, groups, dates and times
//! - **Audit**: optional per-entry log of replacement counts
//!
//! # Usage
//!
//! ```rust,ignore
//! use mindrep::anonymisation::{AnonymisationConfig, AnonymisationService};
//!
//! let service = AnonymisationService::new(&AnonymisationConfig::default())?;
//! let payload = service.prepare_api_payload(entry_text)?;
//! ```

pub mod audit;
pub mod config;
pub mod detector;
pub mod engine;
pub mod models;
pub mod report;
pub mod tagger;

// Re-export main types
pub use config::{AnonymisationConfig, AuditConfig};
pub use engine::AnonymisationService;
pub use models::{AnonymisationResult, AnonymisedEntry, JournalEntry, PiiCategory};
pub use report::BatchReport;
