//! Named-entity detector
//!
//! Runs the entity tagger over text the pattern pass has already rewritten
//! and replaces people, organisations, places, groups, dates and times.
//! A second pass replaces any remaining capitalised proper noun the tagger
//! did not claim as an entity with `[NAME]`.

use super::Detector;
use crate::anonymisation::models::{apply_spans, DetectionSpan, PiiCategory, ReplacementCounts};
use crate::anonymisation::tagger::{EntityLabel, EntityTagger, ModelInfo, PartOfSpeech};
use crate::domain::Result;
use std::collections::HashSet;
use std::sync::Arc;

/// Label the proper-noun pass counts replacements under
pub const PROPER_NOUN_LABEL: &str = "PERSON";

/// Map a tagger label onto the category it is anonymised as
pub fn category_for(label: &EntityLabel) -> Option<PiiCategory> {
    match label {
        EntityLabel::Person => Some(PiiCategory::Name),
        EntityLabel::Org => Some(PiiCategory::Organisation),
        EntityLabel::Gpe | EntityLabel::Loc | EntityLabel::Fac => Some(PiiCategory::Location),
        EntityLabel::Norp => Some(PiiCategory::Group),
        EntityLabel::Date => Some(PiiCategory::Date),
        EntityLabel::Time => Some(PiiCategory::Time),
        EntityLabel::Other(_) => None,
    }
}

fn follows_placeholder(text: &str, start: usize) -> bool {
    text[..start].chars().next_back() == Some('[')
}

/// Entity detector; a no-op when no tagger is loaded
#[derive(Clone, Default)]
pub struct EntityDetector {
    tagger: Option<Arc<dyn EntityTagger>>,
}

impl std::fmt::Debug for EntityDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityDetector")
            .field("model", &self.model_info().map(|info| info.name.as_str()))
            .finish()
    }
}

impl EntityDetector {
    /// Create a detector backed by `tagger`
    pub fn new(tagger: Arc<dyn EntityTagger>) -> Self {
        Self {
            tagger: Some(tagger),
        }
    }

    /// Create a detector that finds nothing
    pub fn unavailable() -> Self {
        Self { tagger: None }
    }

    /// Whether a tagger is loaded
    pub fn is_available(&self) -> bool {
        self.tagger.is_some()
    }

    /// Identity of the loaded model
    pub fn model_info(&self) -> Option<&ModelInfo> {
        self.tagger.as_ref().map(|tagger| tagger.model_info())
    }
}

impl Detector for EntityDetector {
    fn name(&self) -> &'static str {
        "entity"
    }

    fn strip(&self, text: &str, replacements: &mut ReplacementCounts) -> Result<String> {
        let Some(tagger) = &self.tagger else {
            return Ok(text.to_string());
        };

        let tagged = tagger.analyse(text)?;
        let mut spans = Vec::new();
        let mut covered: HashSet<usize> = HashSet::new();

        for entity in &tagged.entities {
            let Some(category) = category_for(&entity.label) else {
                continue;
            };
            // Never re-tag inside a placeholder left by the pattern pass.
            if follows_placeholder(text, entity.start) {
                continue;
            }
            // "today", "next week": no number, nothing identifying.
            if entity.label.is_temporal()
                && !tagged.entity_text(entity).chars().any(char::is_numeric)
            {
                continue;
            }

            spans.push(DetectionSpan::new(
                entity.start,
                entity.end,
                category.placeholder(),
                entity.label.as_str(),
            ));
            covered.extend(entity.tokens.clone());
        }

        for (index, token) in tagged.tokens.iter().enumerate() {
            if token.pos != PartOfSpeech::Propn || covered.contains(&index) {
                continue;
            }
            let word = tagged.token_text(index);
            let capitalised = word.chars().next().is_some_and(char::is_uppercase);
            if capitalised
                && word.chars().all(char::is_alphabetic)
                && !follows_placeholder(text, token.start)
            {
                spans.push(DetectionSpan::new(
                    token.start,
                    token.end,
                    PiiCategory::Name.placeholder(),
                    PROPER_NOUN_LABEL,
                ));
            }
        }

        Ok(apply_spans(text, spans, replacements))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymisation::tagger::tokenizer::tokenize;
    use crate::anonymisation::tagger::{EntitySpan, ModelSource, TaggedText, Token};

    /// Tags fixed words, for exercising the detector without a model
    struct StubTagger {
        info: ModelInfo,
        entities: Vec<(&'static str, EntityLabel)>,
        proper_nouns: Vec<&'static str>,
    }

    impl StubTagger {
        fn new(entities: Vec<(&'static str, EntityLabel)>, proper_nouns: Vec<&'static str>) -> Self {
            Self {
                info: ModelInfo {
                    name: "stub".to_string(),
                    version: "0".to_string(),
                    kind: "stub".to_string(),
                    language: "en".to_string(),
                    digest: String::new(),
                    source: ModelSource::Builtin,
                },
                entities,
                proper_nouns,
            }
        }
    }

    impl EntityTagger for StubTagger {
        fn analyse<'a>(&self, text: &'a str) -> Result<TaggedText<'a>> {
            let spans = tokenize(text);
            let tokens: Vec<Token> = spans
                .iter()
                .map(|&(start, end)| Token {
                    start,
                    end,
                    pos: if self.proper_nouns.iter().any(|p| *p == &text[start..end]) {
                        PartOfSpeech::Propn
                    } else {
                        PartOfSpeech::Noun
                    },
                })
                .collect();

            let mut entities = Vec::new();
            for (phrase, label) in &self.entities {
                if let Some(start) = text.find(phrase) {
                    let end = start + phrase.len();
                    let first = tokens.iter().position(|t| t.start == start).unwrap_or(0);
                    let last = tokens.iter().position(|t| t.end == end).unwrap_or(first);
                    entities.push(EntitySpan {
                        start,
                        end,
                        label: label.clone(),
                        tokens: first..last + 1,
                    });
                }
            }
            entities.sort_by_key(|e| e.start);
            Ok(TaggedText::new(text, tokens, entities))
        }

        fn model_info(&self) -> &ModelInfo {
            &self.info
        }
    }

    fn strip(tagger: StubTagger, text: &str) -> (String, ReplacementCounts) {
        let detector = EntityDetector::new(Arc::new(tagger));
        let mut counts = ReplacementCounts::new();
        let out = detector.strip(text, &mut counts).unwrap();
        (out, counts)
    }

    #[test]
    fn test_category_mapping() {
        assert_eq!(category_for(&EntityLabel::Gpe), Some(PiiCategory::Location));
        assert_eq!(category_for(&EntityLabel::Fac), Some(PiiCategory::Location));
        assert_eq!(category_for(&EntityLabel::Norp), Some(PiiCategory::Group));
        assert_eq!(category_for(&EntityLabel::Other("MONEY".into())), None);
    }

    #[test]
    fn test_replaces_entities() {
        let tagger = StubTagger::new(
            vec![
                ("Sarah", EntityLabel::Person),
                ("Deloitte", EntityLabel::Org),
                ("Manchester", EntityLabel::Gpe),
            ],
            vec!["Sarah", "Deloitte", "Manchester"],
        );
        let (out, counts) = strip(tagger, "My boss Sarah at Deloitte in Manchester");
        assert_eq!(out, "My boss [NAME] at [ORG] in [LOCATION]");
        assert_eq!(counts.get("PERSON"), Some(&1));
        assert_eq!(counts.get("ORG"), Some(&1));
        assert_eq!(counts.get("GPE"), Some(&1));
    }

    #[test]
    fn test_ignores_other_labels() {
        let tagger = StubTagger::new(vec![("five", EntityLabel::Other("CARDINAL".into()))], vec![]);
        let (out, counts) = strip(tagger, "slept five hours");
        assert_eq!(out, "slept five hours");
        assert!(counts.is_empty());
    }

    #[test]
    fn test_skips_entity_inside_placeholder() {
        let tagger = StubTagger::new(vec![("EMAIL", EntityLabel::Org)], vec!["EMAIL"]);
        let (out, counts) = strip(tagger, "wrote to [EMAIL] today");
        assert_eq!(out, "wrote to [EMAIL] today");
        assert!(counts.is_empty());
    }

    #[test]
    fn test_temporal_without_digit_kept() {
        let tagger = StubTagger::new(
            vec![("today", EntityLabel::Date), ("15 March", EntityLabel::Date)],
            vec![],
        );
        let (out, counts) = strip(tagger, "today I booked 15 March");
        assert_eq!(out, "today I booked [DATE]");
        assert_eq!(counts.get("DATE"), Some(&1));
    }

    #[test]
    fn test_skipped_temporal_proper_noun_falls_to_name_pass() {
        let tagger = StubTagger::new(vec![("Friday", EntityLabel::Date)], vec!["Friday"]);
        let (out, counts) = strip(tagger, "deadline for Friday");
        assert_eq!(out, "deadline for [NAME]");
        assert_eq!(counts.get("PERSON"), Some(&1));
        assert!(!counts.contains_key("DATE"));
    }

    #[test]
    fn test_proper_noun_pass() {
        let tagger = StubTagger::new(vec![], vec!["María", "Zed", "iPhone", "O'Neil"]);
        let (out, counts) = strip(tagger, "talked to María and Zed about my iPhone and O'Neil");
        assert_eq!(out, "talked to [NAME] and [NAME] about my iPhone and O'Neil");
        assert_eq!(counts.get("PERSON"), Some(&2));
    }

    #[test]
    fn test_covered_tokens_not_renamed() {
        let tagger = StubTagger::new(vec![("New York", EntityLabel::Gpe)], vec!["New", "York"]);
        let (out, counts) = strip(tagger, "moving to New York");
        assert_eq!(out, "moving to [LOCATION]");
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_unavailable_is_noop() {
        let detector = EntityDetector::unavailable();
        assert!(!detector.is_available());
        assert!(detector.model_info().is_none());
        let mut counts = ReplacementCounts::new();
        let out = detector.strip("Sarah at Deloitte", &mut counts).unwrap();
        assert_eq!(out, "Sarah at Deloitte");
        assert!(counts.is_empty());
    }
}
