//! Structured-PII detector

use super::{Detector, PatternRegistry};
use crate::anonymisation::models::{apply_spans, ReplacementCounts};
use crate::domain::Result;
use std::sync::Arc;

/// Runs every pattern matcher in precedence order
///
/// Each matcher sees the text as rewritten by the matchers before it, so a
/// value claimed by an earlier matcher is already a placeholder by the time
/// a more general one runs.
#[derive(Debug, Clone)]
pub struct PatternDetector {
    registry: Arc<PatternRegistry>,
}

impl PatternDetector {
    /// Create a detector over the built-in matchers
    pub fn new() -> Result<Self> {
        Ok(Self::with_registry(PatternRegistry::default_patterns()?))
    }

    /// Create a detector over a custom registry
    pub fn with_registry(registry: PatternRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// The matchers this detector runs
    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }
}

impl Detector for PatternDetector {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn strip(&self, text: &str, replacements: &mut ReplacementCounts) -> Result<String> {
        let mut working = text.to_string();

        for pattern in self.registry.all_patterns() {
            let spans = pattern.find_spans(&working)?;
            if spans.is_empty() {
                continue;
            }
            tracing::trace!(pattern = %pattern.label, matches = spans.len(), "Pattern matched");
            working = apply_spans(&working, spans, replacements);
        }

        Ok(working)
    }
}
