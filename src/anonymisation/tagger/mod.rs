//! Entity tagging
//!
//! The entity detector talks to a tagger through [`EntityTagger`] so the
//! model behind it can be swapped (built-in lexicon model, a file-based
//! model, or a test double). A tagger is loaded once and then only read;
//! every implementation must be safe to share across threads.

pub mod lexicon;
pub mod registry;
pub mod tokenizer;

use crate::domain::Result;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

pub use lexicon::{LexiconModel, LexiconTagger};
pub use registry::{builtin_models, load_model, DEFAULT_MODEL};

/// Coarse part-of-speech tag (Universal Dependencies subset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    /// Proper noun
    Propn,
    /// Common noun
    Noun,
    /// Verb
    Verb,
    /// Auxiliary
    Aux,
    /// Adjective
    Adj,
    /// Adverb
    Adv,
    /// Pronoun
    Pron,
    /// Determiner
    Det,
    /// Adposition
    Adp,
    /// Coordinating conjunction
    Cconj,
    /// Subordinating conjunction
    Sconj,
    /// Particle
    Part,
    /// Interjection
    Intj,
    /// Numeral
    Num,
    /// Punctuation
    Punct,
    /// Symbol, emoji
    Sym,
    /// Anything else
    X,
}

impl PartOfSpeech {
    /// Parse a tag name as written in a model file
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PROPN" => Some(Self::Propn),
            "NOUN" => Some(Self::Noun),
            "VERB" => Some(Self::Verb),
            "AUX" => Some(Self::Aux),
            "ADJ" => Some(Self::Adj),
            "ADV" => Some(Self::Adv),
            "PRON" => Some(Self::Pron),
            "DET" => Some(Self::Det),
            "ADP" => Some(Self::Adp),
            "CCONJ" => Some(Self::Cconj),
            "SCONJ" => Some(Self::Sconj),
            "PART" => Some(Self::Part),
            "INTJ" => Some(Self::Intj),
            "NUM" => Some(Self::Num),
            "PUNCT" => Some(Self::Punct),
            "SYM" => Some(Self::Sym),
            "X" => Some(Self::X),
            _ => None,
        }
    }
}

/// Entity label produced by a tagger
///
/// Labels the anonymiser does not act on are kept as [`EntityLabel::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    /// People
    Person,
    /// Nationalities, religious or political groups
    Norp,
    /// Buildings, airports, stations
    Fac,
    /// Companies, agencies, institutions
    Org,
    /// Countries, cities, states
    Gpe,
    /// Non-political locations
    Loc,
    /// Dates and periods
    Date,
    /// Times of day
    Time,
    /// Any other label
    Other(String),
}

impl EntityLabel {
    /// Parse a label name
    pub fn parse(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "PERSON" => Self::Person,
            "NORP" => Self::Norp,
            "FAC" => Self::Fac,
            "ORG" => Self::Org,
            "GPE" => Self::Gpe,
            "LOC" => Self::Loc,
            "DATE" => Self::Date,
            "TIME" => Self::Time,
            other => Self::Other(other.to_string()),
        }
    }

    /// Label name as reported in replacement counts
    pub fn as_str(&self) -> &str {
        match self {
            Self::Person => "PERSON",
            Self::Norp => "NORP",
            Self::Fac => "FAC",
            Self::Org => "ORG",
            Self::Gpe => "GPE",
            Self::Loc => "LOC",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Other(name) => name,
        }
    }

    /// Whether this is a date or time label
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::Time)
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token with its byte offsets and part-of-speech
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
    /// Part-of-speech tag
    pub pos: PartOfSpeech,
}

/// A tagged entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
    /// Entity label
    pub label: EntityLabel,
    /// Indices of the tokens the entity covers
    pub tokens: Range<usize>,
}

/// Tagger output for one text
#[derive(Debug, Clone)]
pub struct TaggedText<'a> {
    source: &'a str,
    /// Tokens in text order
    pub tokens: Vec<Token>,
    /// Entities in text order, non-overlapping
    pub entities: Vec<EntitySpan>,
}

impl<'a> TaggedText<'a> {
    /// Create tagger output over `source`
    pub fn new(source: &'a str, tokens: Vec<Token>, entities: Vec<EntitySpan>) -> Self {
        Self {
            source,
            tokens,
            entities,
        }
    }

    /// Text of the token at `index`
    pub fn token_text(&self, index: usize) -> &'a str {
        let token = &self.tokens[index];
        &self.source[token.start..token.end]
    }

    /// Text of an entity
    pub fn entity_text(&self, entity: &EntitySpan) -> &'a str {
        &self.source[entity.start..entity.end]
    }
}

/// Where a model was loaded from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSource {
    /// Compiled into the binary
    Builtin,
    /// Loaded from a model file
    File(String),
}

/// Identity of a loaded model, for operators
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    /// Model identifier
    pub name: String,
    /// Model version
    pub version: String,
    /// How the model tags text (`lexicon` for the rule-based tagger)
    pub kind: String,
    /// Language code
    pub language: String,
    /// SHA-256 of the model source
    pub digest: String,
    /// Where it came from
    pub source: ModelSource,
}

/// Statistical or lexicon-based entity tagger
pub trait EntityTagger: Send + Sync {
    /// Tokenize, tag and find entities in `text`
    fn analyse<'a>(&self, text: &'a str) -> Result<TaggedText<'a>>;

    /// Identity of the loaded model
    fn model_info(&self) -> &ModelInfo;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_label_roundtrip_names() {
        for name in ["PERSON", "NORP", "FAC", "ORG", "GPE", "LOC", "DATE", "TIME"] {
            assert_eq!(EntityLabel::parse(name).as_str(), name);
        }
        assert_eq!(
            EntityLabel::parse("money"),
            EntityLabel::Other("MONEY".to_string())
        );
    }

    #[test]
    fn test_temporal_labels() {
        assert!(EntityLabel::Date.is_temporal());
        assert!(EntityLabel::Time.is_temporal());
        assert!(!EntityLabel::Person.is_temporal());
    }

    #[test]
    fn test_pos_parse() {
        assert_eq!(PartOfSpeech::parse("propn"), Some(PartOfSpeech::Propn));
        assert_eq!(PartOfSpeech::parse("CCONJ"), Some(PartOfSpeech::Cconj));
        assert_eq!(PartOfSpeech::parse("nonsense"), None);
    }
}
