//! Anonymisation service
//!
//! [`AnonymisationService`] strips PII from journal text before it leaves
//! the process. It runs two detectors in a fixed order:
//!
//! 1. **Patterns**: structured identifiers (emails, phone numbers, national
//!    identifiers, postcodes, links, numeric dates), most specific first.
//! 2. **Entities**: people, organisations, places, groups, narrative dates
//!    and times found by the entity tagger, plus any capitalised proper noun
//!    it left unclaimed.
//!
//! Whitespace runs left behind by replacements are then collapsed.
//!
//! When the entity model cannot be loaded the service still starts, logs a
//! warning, and runs pattern detection only; [`AnonymisationService::ner_available`]
//! reports the degraded state.
//!
//! # Examples
//!
//! ```no_run
//! use mindrep::anonymisation::{AnonymisationConfig, AnonymisationService};
//!
//! # fn example() -> mindrep::domain::Result<()> {
//! let service = AnonymisationService::new(&AnonymisationConfig::default())?;
//! let result = service.anonymise("Email me at jayin+mindrep@gmail.com")?;
//! assert_eq!(result.sanitised_text(), "Email me at [EMAIL]");
//! # Ok(())
//! # }
//! ```

use crate::anonymisation::{
    audit::AuditLogger,
    config::AnonymisationConfig,
    detector::{Detector, EntityDetector, PatternDetector, PatternRegistry},
    models::{AnonymisationResult, AnonymisedEntry, JournalEntry, ReplacementCounts},
    report::BatchReport,
    tagger::{load_model, EntityTagger, ModelInfo},
};
use crate::domain::{MindRepError, Result};
use regex::Regex;
use std::sync::Arc;
use std::time::Instant;

/// PII anonymisation service
///
/// # Thread Safety
///
/// The loaded model and matchers are immutable after construction; share a
/// single service across threads or tasks with `Arc`.
pub struct AnonymisationService {
    patterns: PatternDetector,
    entities: EntityDetector,
    whitespace: Regex,
    audit_logger: Option<AuditLogger>,
}

impl std::fmt::Debug for AnonymisationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnonymisationService")
            .field("patterns", &self.patterns.registry().len())
            .field("entities", &self.entities)
            .field("audit", &self.audit_logger.is_some())
            .finish()
    }
}

impl AnonymisationService {
    /// Create a service from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration validation fails
    /// - The pattern library cannot be loaded or a pattern fails to compile
    /// - The audit logger cannot be initialised
    ///
    /// An entity model that cannot be loaded is not an error.
    pub fn new(config: &AnonymisationConfig) -> Result<Self> {
        config.validate()?;

        let registry = match config.pattern_library {
            Some(ref path) => PatternRegistry::from_file(path)?,
            None => PatternRegistry::default_patterns()?,
        };

        let tagger = match load_model(&config.model, config.model_path.as_deref()) {
            Ok(tagger) => {
                let info = tagger.model_info();
                tracing::info!(
                    model = %info.name,
                    version = %info.version,
                    kind = %info.kind,
                    digest = %info.digest,
                    "Entity detection enabled"
                );
                Some(tagger)
            }
            Err(e) => {
                tracing::warn!(
                    model = %config.model,
                    error = %e,
                    "Entity model unavailable, running pattern-only anonymisation. \
                     Names, organisations and locations will NOT be stripped"
                );
                None
            }
        };

        let mut service = Self::with_components(registry, tagger)?;

        if config.audit.enabled {
            service.audit_logger = Some(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
            )?);
        }

        Ok(service)
    }

    /// Create a service from already-built parts
    ///
    /// Pass `None` as the tagger for pattern-only anonymisation.
    pub fn with_components(
        patterns: PatternRegistry,
        tagger: Option<Arc<dyn EntityTagger>>,
    ) -> Result<Self> {
        let whitespace = Regex::new(" {2,}")
            .map_err(|e| MindRepError::Pattern(format!("Invalid whitespace pattern: {e}")))?;

        Ok(Self {
            patterns: PatternDetector::with_registry(patterns),
            entities: tagger.map_or_else(EntityDetector::unavailable, EntityDetector::new),
            whitespace,
            audit_logger: None,
        })
    }

    /// Attach an audit logger
    pub fn with_audit_logger(mut self, logger: AuditLogger) -> Self {
        self.audit_logger = Some(logger);
        self
    }

    /// Whether entity detection is active
    pub fn ner_available(&self) -> bool {
        self.entities.is_available()
    }

    /// Identity of the loaded entity model
    pub fn model_info(&self) -> Option<&ModelInfo> {
        self.entities.model_info()
    }

    /// Labels of the pattern matchers, in precedence order
    pub fn pattern_labels(&self) -> Vec<&str> {
        self.patterns
            .registry()
            .all_patterns()
            .iter()
            .map(|p| p.label.as_str())
            .collect()
    }

    fn detectors(&self) -> [&dyn Detector; 2] {
        [&self.patterns, &self.entities]
    }

    /// Strip PII from `text`
    ///
    /// Empty and whitespace-only input yields an empty result. Detector
    /// failures are returned as errors; no partially sanitised text is ever
    /// returned.
    pub fn anonymise(&self, text: &str) -> Result<AnonymisationResult> {
        if text.trim().is_empty() {
            return Ok(AnonymisationResult::empty());
        }

        let mut replacements = ReplacementCounts::new();
        let mut working = text.to_string();

        for detector in self.detectors() {
            let before: usize = replacements.values().sum();
            working = detector.strip(&working, &mut replacements)?;
            tracing::debug!(
                detector = detector.name(),
                replaced = replacements.values().sum::<usize>() - before,
                "Detector pass complete"
            );
        }

        let sanitised = self.whitespace.replace_all(&working, " ").trim().to_string();
        let result = AnonymisationResult::new(text, sanitised, replacements);

        if result.had_pii() {
            tracing::info!(
                total = result.total_replacements(),
                replacements = ?result.replacements(),
                "PII stripped from journal entry"
            );
        }

        if let Some(ref logger) = self.audit_logger {
            logger.log_anonymisation(&result, self.ner_available())?;
        }

        Ok(result)
    }

    /// Anonymise and return only the sanitised text
    pub fn prepare_api_payload(&self, text: &str) -> Result<String> {
        Ok(self.anonymise(text)?.into_sanitised_text())
    }

    /// Anonymise a batch of entries
    ///
    /// Entries that fail are logged and left out of the output.
    pub fn anonymise_batch(&self, entries: Vec<JournalEntry>) -> Vec<AnonymisedEntry> {
        self.anonymise_batch_with_report(entries).0
    }

    /// Anonymise a batch and build a report
    pub fn anonymise_batch_with_report(
        &self,
        entries: Vec<JournalEntry>,
    ) -> (Vec<AnonymisedEntry>, BatchReport) {
        let mut results = Vec::with_capacity(entries.len());
        let mut report = BatchReport::new(self.ner_available());

        for entry in entries {
            match self.anonymise_entry(&entry) {
                Ok(anonymised) => {
                    report.add_entry(&anonymised);
                    results.push(anonymised);
                }
                Err(e) => {
                    tracing::error!(entry_id = %entry.id, error = %e, "Failed to anonymise entry");
                    report.add_failure(&entry.id, &e.to_string());
                }
            }
        }

        (results, report)
    }

    /// Anonymise a single entry, timing it
    pub fn anonymise_entry(&self, entry: &JournalEntry) -> Result<AnonymisedEntry> {
        let start = Instant::now();
        let result = self.anonymise(&entry.text)?;
        Ok(AnonymisedEntry::new(
            entry.id.clone(),
            result,
            start.elapsed().as_millis() as u64,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymisation::tagger::{TaggedText, DEFAULT_MODEL};

    fn service() -> AnonymisationService {
        AnonymisationService::new(&AnonymisationConfig::default()).unwrap()
    }

    struct FailingTagger(ModelInfo);

    impl EntityTagger for FailingTagger {
        fn analyse<'a>(&self, _text: &'a str) -> Result<TaggedText<'a>> {
            Err(MindRepError::Detector("tagger crashed".to_string()))
        }

        fn model_info(&self) -> &ModelInfo {
            &self.0
        }
    }

    #[test]
    fn test_service_creation() {
        let service = service();
        assert!(service.ner_available());
        assert_eq!(service.model_info().unwrap().name, DEFAULT_MODEL);
        assert_eq!(service.pattern_labels().first(), Some(&"EMAIL"));
    }

    #[test]
    fn test_unknown_model_degrades() {
        let config = AnonymisationConfig {
            model: "nonexistent_model_xyz".to_string(),
            ..Default::default()
        };
        let service = AnonymisationService::new(&config).unwrap();
        assert!(!service.ner_available());
        assert!(service.model_info().is_none());
    }

    #[test]
    fn test_empty_input() {
        let service = service();
        for text in ["", "   \n\t  "] {
            let result = service.anonymise(text).unwrap();
            assert_eq!(result, AnonymisationResult::empty());
        }
    }

    #[test]
    fn test_whitespace_collapsed_and_trimmed() {
        let service = service();
        let result = service.anonymise("  Saw dr.smith@clinic.com   yesterday  ").unwrap();
        assert_eq!(result.sanitised_text(), "Saw [EMAIL] yesterday");
    }

    #[test]
    fn test_prepare_api_payload() {
        let service = service();
        let payload = service
            .prepare_api_payload("Dr. Smith at john@nhs.net stressed me out")
            .unwrap();
        assert!(!payload.contains("john@nhs.net"));
        assert!(!payload.contains("Smith"));
    }

    #[test]
    fn test_detector_failure_propagates() {
        let tagger = FailingTagger(ModelInfo {
            name: "failing".to_string(),
            version: "0".to_string(),
            kind: "stub".to_string(),
            language: "en".to_string(),
            digest: String::new(),
            source: crate::anonymisation::tagger::ModelSource::Builtin,
        });
        let service = AnonymisationService::with_components(
            PatternRegistry::default_patterns().unwrap(),
            Some(Arc::new(tagger)),
        )
        .unwrap();

        let err = service.anonymise("mail me at a@b.com").unwrap_err();
        assert!(matches!(err, MindRepError::Detector(_)));
    }

    #[test]
    fn test_batch_skips_failures() {
        let tagger = FailingTagger(ModelInfo {
            name: "failing".to_string(),
            version: "0".to_string(),
            kind: "stub".to_string(),
            language: "en".to_string(),
            digest: String::new(),
            source: crate::anonymisation::tagger::ModelSource::Builtin,
        });
        let service = AnonymisationService::with_components(
            PatternRegistry::default_patterns().unwrap(),
            Some(Arc::new(tagger)),
        )
        .unwrap();

        let entries = vec![JournalEntry::new("1", ""), JournalEntry::new("2", "a@b.com")];
        let (results, report) = service.anonymise_batch_with_report(entries);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1");
        assert_eq!(report.failed_entries, 1);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_batch() {
        let service = service();
        let entries = vec![
            JournalEntry::new("a", "bad day. need to sleep"),
            JournalEntry::new("b", "Email me at test@example.com"),
        ];
        let results = service.anonymise_batch(entries);
        assert_eq!(results.len(), 2);
        assert!(!results[0].had_pii());
        assert_eq!(results[1].sanitised_text, "Email me at [EMAIL]");
    }

    #[test]
    fn test_audit_logging() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AnonymisationConfig::default();
        config.audit.enabled = true;
        config.audit.log_path = dir.path().join("audit.log");

        let service = AnonymisationService::new(&config).unwrap();
        service.anonymise("Email me at test@example.com").unwrap();
        service.anonymise("bad day").unwrap();

        let content = std::fs::read_to_string(dir.path().join("audit.log")).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(!content.contains("test@example.com"));
    }
}
