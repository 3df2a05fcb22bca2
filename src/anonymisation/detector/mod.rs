//! PII detection passes
//!
//! Anonymisation runs a fixed sequence of detectors over the working text.
//! Each detector finds its spans, substitutes placeholders right to left and
//! hands the rewritten text to the next one, so later detectors only ever
//! see what earlier ones left behind.

pub mod entity;
pub mod pattern;
pub mod patterns;

use crate::anonymisation::models::ReplacementCounts;
use crate::domain::Result;

pub use entity::EntityDetector;
pub use pattern::PatternDetector;
pub use patterns::{CompiledPattern, PatternRegistry};

/// One detection pass over journal text
pub trait Detector: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Replace every detected span in `text` and add the replacements to
    /// `replacements`
    fn strip(&self, text: &str, replacements: &mut ReplacementCounts) -> Result<String>;
}
