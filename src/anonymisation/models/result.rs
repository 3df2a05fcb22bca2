//! Anonymisation result value object

use super::span::ReplacementCounts;
use serde::Serialize;

/// Outcome of one anonymisation call
///
/// Immutable after construction. The replacement tally only ever holds
/// detector labels and counts, never any part of a detected value, so the
/// whole result (minus the text itself, if preferred) is safe to log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnonymisationResult {
    sanitised_text: String,
    original_length: usize,
    sanitised_length: usize,
    replacements: ReplacementCounts,
}

impl AnonymisationResult {
    /// Build a result; lengths are counted in characters
    pub fn new(original: &str, sanitised_text: String, replacements: ReplacementCounts) -> Self {
        Self {
            original_length: original.chars().count(),
            sanitised_length: sanitised_text.chars().count(),
            sanitised_text,
            replacements,
        }
    }

    /// Result for empty or whitespace-only input
    pub fn empty() -> Self {
        Self {
            sanitised_text: String::new(),
            original_length: 0,
            sanitised_length: 0,
            replacements: ReplacementCounts::new(),
        }
    }

    /// Text with every detected PII span replaced by its placeholder
    pub fn sanitised_text(&self) -> &str {
        &self.sanitised_text
    }

    /// Character count of the input
    pub fn original_length(&self) -> usize {
        self.original_length
    }

    /// Character count of the output
    pub fn sanitised_length(&self) -> usize {
        self.sanitised_length
    }

    /// Replacement counts by detector label
    pub fn replacements(&self) -> &ReplacementCounts {
        &self.replacements
    }

    /// Whether anything was replaced
    pub fn had_pii(&self) -> bool {
        self.total_replacements() > 0
    }

    /// Sum of all replacement counts
    pub fn total_replacements(&self) -> usize {
        self.replacements.values().sum()
    }

    /// Consume the result, keeping only the sanitised text
    pub fn into_sanitised_text(self) -> String {
        self.sanitised_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = AnonymisationResult::empty();
        assert_eq!(result.sanitised_text(), "");
        assert_eq!(result.original_length(), 0);
        assert_eq!(result.sanitised_length(), 0);
        assert!(result.replacements().is_empty());
        assert!(!result.had_pii());
    }

    #[test]
    fn test_lengths_count_characters() {
        let result = AnonymisationResult::new("héllo 😭", "héllo 😭".to_string(), ReplacementCounts::new());
        assert_eq!(result.original_length(), 7);
        assert_eq!(result.sanitised_length(), 7);
    }

    #[test]
    fn test_totals() {
        let mut counts = ReplacementCounts::new();
        counts.insert("EMAIL".to_string(), 2);
        counts.insert("POSTCODE_UK".to_string(), 1);
        counts.insert("ZIP_US".to_string(), 0);

        let result = AnonymisationResult::new("x", "y".to_string(), counts);
        assert!(result.had_pii());
        assert_eq!(result.total_replacements(), 3);
    }

    #[test]
    fn test_zero_counts_are_not_pii() {
        let mut counts = ReplacementCounts::new();
        counts.insert("EMAIL".to_string(), 0);
        let result = AnonymisationResult::new("x", "x".to_string(), counts);
        assert!(!result.had_pii());
    }
}
