//! Batch anonymisation reporting
//!
//! Totals, per-label counts, timing and warnings for a batch run. A report
//! never carries journal text, sanitised or not.

use crate::anonymisation::models::{AnonymisedEntry, ReplacementCounts};
use serde::{Deserialize, Serialize};

/// Batch report with replacement statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Total entries anonymised
    pub total_entries: usize,

    /// Entries that failed and were left out of the output
    pub failed_entries: usize,

    /// Total replacements made
    pub total_replacements: usize,

    /// Replacements by detector label
    pub replacements_by_label: ReplacementCounts,

    /// Whether entity detection was active for the run
    pub ner_available: bool,

    /// Warnings raised during the run
    pub warnings: Vec<String>,

    /// Processing statistics
    pub stats: ProcessingStats,
}

/// Processing statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingStats {
    /// Average processing time per entry (ms)
    pub avg_processing_time_ms: u64,

    /// Total processing time (ms)
    pub total_processing_time_ms: u64,

    /// Entries with PII replaced
    pub entries_with_pii: usize,

    /// Entries without PII
    pub entries_without_pii: usize,
}

impl BatchReport {
    /// Create a new empty report
    pub fn new(ner_available: bool) -> Self {
        Self {
            total_entries: 0,
            failed_entries: 0,
            total_replacements: 0,
            replacements_by_label: ReplacementCounts::new(),
            ner_available,
            warnings: Vec::new(),
            stats: ProcessingStats::default(),
        }
    }

    /// Add an anonymised entry
    pub fn add_entry(&mut self, entry: &AnonymisedEntry) {
        self.total_entries += 1;
        self.stats.total_processing_time_ms += entry.processing_time_ms;

        if entry.had_pii() {
            self.stats.entries_with_pii += 1;
            for (label, count) in &entry.replacements {
                self.total_replacements += count;
                *self.replacements_by_label.entry(label.clone()).or_insert(0) += count;
            }
        } else {
            self.stats.entries_without_pii += 1;
        }

        self.stats.avg_processing_time_ms =
            self.stats.total_processing_time_ms / self.total_entries as u64;
    }

    /// Record an entry that could not be anonymised
    pub fn add_failure(&mut self, entry_id: &str, error: &str) {
        self.failed_entries += 1;
        self.add_warning(format!("Entry {entry_id} skipped: {error}"));
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                  BATCH ANONYMISATION REPORT                   \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!("  Entries Anonymised:      {}\n", self.total_entries));
        output.push_str(&format!("  Entries Skipped:         {}\n", self.failed_entries));
        output.push_str(&format!(
            "  Entries with PII:        {}\n",
            self.stats.entries_with_pii
        ));
        output.push_str(&format!(
            "  Entries without PII:     {}\n",
            self.stats.entries_without_pii
        ));
        output.push_str(&format!("  Total Replacements:      {}\n", self.total_replacements));
        output.push_str(&format!(
            "  Avg Processing Time:     {} ms\n",
            self.stats.avg_processing_time_ms
        ));
        output.push_str(&format!(
            "  Entity Detection:        {}\n",
            if self.ner_available { "active" } else { "UNAVAILABLE (pattern-only)" }
        ));
        output.push('\n');

        if !self.replacements_by_label.is_empty() {
            output.push_str("🔍 REPLACEMENTS BY LABEL\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            let mut labels: Vec<_> = self.replacements_by_label.iter().collect();
            labels.sort_by(|a, b| b.1.cmp(a.1));

            for (label, count) in labels {
                output.push_str(&format!("  {label:30} {count:>5}\n"));
            }
            output.push('\n');
        }

        if !self.warnings.is_empty() {
            output.push_str("⚠️  WARNINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for warning in &self.warnings {
                output.push_str(&format!("  • {warning}\n"));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write report to file
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self.format_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, counts: &[(&str, usize)], ms: u64) -> AnonymisedEntry {
        AnonymisedEntry {
            id: id.to_string(),
            sanitised_text: String::new(),
            replacements: counts
                .iter()
                .map(|(label, count)| (label.to_string(), *count))
                .collect(),
            processing_time_ms: ms,
        }
    }

    #[test]
    fn test_report_creation() {
        let report = BatchReport::new(true);
        assert_eq!(report.total_entries, 0);
        assert_eq!(report.total_replacements, 0);
        assert!(report.replacements_by_label.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_add_entry_without_pii() {
        let mut report = BatchReport::new(true);
        report.add_entry(&entry("a", &[], 10));

        assert_eq!(report.total_entries, 1);
        assert_eq!(report.stats.entries_without_pii, 1);
        assert_eq!(report.stats.entries_with_pii, 0);
        assert_eq!(report.stats.avg_processing_time_ms, 10);
    }

    #[test]
    fn test_add_entries_with_pii() {
        let mut report = BatchReport::new(true);
        report.add_entry(&entry("a", &[("EMAIL", 2), ("PERSON", 1)], 10));
        report.add_entry(&entry("b", &[("EMAIL", 1)], 20));

        assert_eq!(report.total_entries, 2);
        assert_eq!(report.total_replacements, 4);
        assert_eq!(report.replacements_by_label.get("EMAIL"), Some(&3));
        assert_eq!(report.stats.entries_with_pii, 2);
        assert_eq!(report.stats.avg_processing_time_ms, 15);
    }

    #[test]
    fn test_failures_become_warnings() {
        let mut report = BatchReport::new(false);
        report.add_failure("e9", "Detector error: boom");
        assert_eq!(report.failed_entries, 1);
        assert_eq!(report.warnings, vec!["Entry e9 skipped: Detector error: boom"]);
    }

    #[test]
    fn test_format_console() {
        let mut report = BatchReport::new(false);
        report.add_entry(&entry("a", &[("POSTCODE_UK", 1)], 4));

        let output = report.format_console();
        assert!(output.contains("BATCH ANONYMISATION REPORT"));
        assert!(output.contains("Entries Anonymised:      1"));
        assert!(output.contains("POSTCODE_UK"));
        assert!(output.contains("UNAVAILABLE (pattern-only)"));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let mut report = BatchReport::new(true);
        report.add_entry(&entry("a", &[("URL", 1)], 1));
        report.write_to_file(&path).unwrap();

        let parsed: BatchReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.total_replacements, 1);
    }
}
