//! Anonymisation data models

pub mod category;
pub mod entry;
pub mod result;
pub mod span;

pub use category::PiiCategory;
pub use entry::{AnonymisedEntry, JournalEntry};
pub use result::AnonymisationResult;
pub use span::{apply_spans, DetectionSpan, ReplacementCounts};
