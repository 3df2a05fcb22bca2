//! Anonymisation audit trail
//!
//! One record per anonymised entry: sizes and per-label replacement counts.
//! Records never carry journal text, detected values, or hashes of them.

pub mod logger;

pub use logger::AuditLogger;
