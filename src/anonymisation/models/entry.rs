//! Journal entries in and out of batch anonymisation

use super::{AnonymisationResult, ReplacementCounts};
use serde::{Deserialize, Serialize};

/// A raw journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Caller-assigned identifier
    pub id: String,
    /// Free text as written by the user
    pub text: String,
}

impl JournalEntry {
    /// Create an entry
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A journal entry after anonymisation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonymisedEntry {
    /// Identifier of the source entry
    pub id: String,
    /// Sanitised text
    pub sanitised_text: String,
    /// Replacement counts by detector label
    pub replacements: ReplacementCounts,
    /// Time spent anonymising this entry
    #[serde(default)]
    pub processing_time_ms: u64,
}

impl AnonymisedEntry {
    /// Pair an anonymisation result with its entry id
    pub fn new(id: impl Into<String>, result: AnonymisationResult, processing_time_ms: u64) -> Self {
        let replacements = result.replacements().clone();
        Self {
            id: id.into(),
            sanitised_text: result.into_sanitised_text(),
            replacements,
            processing_time_ms,
        }
    }

    /// Whether anything was replaced
    pub fn had_pii(&self) -> bool {
        self.replacements.values().any(|&count| count > 0)
    }
}
