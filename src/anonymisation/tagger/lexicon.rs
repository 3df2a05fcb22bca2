//! Lexicon-based entity tagger
//!
//! A compact English model: a common-word lexicon drives part-of-speech
//! tagging, gazetteers supply known people, organisations, places,
//! facilities and groups, and a handful of contextual rules pick up
//! honorific + name, "<Name> Ltd"-style organisations, and narrative dates
//! and times. Capitalised words the lexicon does not know are tagged as
//! proper nouns.
//!
//! Models are plain TOML; see `models/en_core_web_sm.toml` for the bundled
//! one and its layout.

use super::tokenizer::tokenize;
use super::{
    EntityLabel, EntitySpan, EntityTagger, ModelInfo, ModelSource, PartOfSpeech, TaggedText, Token,
};
use crate::domain::{MindRepError, Result};
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::{HashMap, HashSet};
use std::ops::Range;

/// Kind reported for lexicon models
pub const MODEL_KIND: &str = "lexicon";

/// Model header
#[derive(Debug, Clone, Deserialize)]
pub struct ModelHeader {
    /// Model identifier
    pub name: String,
    /// Model version
    pub version: String,
    /// Language code
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

/// Contextual rule vocabulary
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Honorifics preceding a name (`Dr`, `Prof`)
    pub titles: Vec<String>,
    /// Words closing an organisation name (`Ltd`, `University`)
    pub org_suffixes: Vec<String>,
    /// Month names, capitalised
    pub months: Vec<String>,
    /// Weekday names, capitalised
    pub weekdays: Vec<String>,
    /// Standalone day references (`today`)
    pub relative_dates: Vec<String>,
    /// Standalone time references (`tonight`)
    pub relative_times: Vec<String>,
    /// `this`, `next`, `last`
    pub period_modifiers: Vec<String>,
    /// Periods forming a date with a modifier (`week`)
    pub date_periods: Vec<String>,
    /// Periods forming a time with a modifier (`morning`)
    pub time_periods: Vec<String>,
    /// Words that make a following 4-digit number a year
    pub year_prepositions: Vec<String>,
    /// `am`, `pm`
    pub meridiem: Vec<String>,
}

/// Deserialized model file
#[derive(Debug, Clone, Deserialize)]
pub struct LexiconModel {
    /// Header
    pub model: ModelHeader,
    /// Part-of-speech tag → lowercase words
    #[serde(default)]
    pub lexicon: HashMap<String, Vec<String>>,
    /// Entity label → phrases
    #[serde(default)]
    pub gazetteer: HashMap<String, Vec<String>>,
    /// Rule vocabulary
    #[serde(default)]
    pub rules: RuleSet,
}

#[derive(Debug, Clone)]
struct GazetteerEntry {
    words: Vec<String>,
    label: EntityLabel,
}

fn lowercase_set(words: &[String]) -> HashSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

fn exact_set(words: &[String]) -> HashSet<String> {
    words.iter().cloned().collect()
}

fn is_capitalised(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn parse_day(word: &str) -> Option<u32> {
    let lower = word.to_ascii_lowercase();
    let digits = ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| lower.strip_suffix(suffix))
        .unwrap_or(&lower);
    if digits.is_empty() || digits.len() > 2 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|d| (1..=31).contains(d))
}

fn is_year(word: &str) -> bool {
    word.len() == 4
        && word.chars().all(|c| c.is_ascii_digit())
        && word.parse::<u32>().is_ok_and(|y| (1900..=2099).contains(&y))
}

/// Tagger backed by a [`LexiconModel`]
#[derive(Debug)]
pub struct LexiconTagger {
    info: ModelInfo,
    lexicon: HashMap<String, PartOfSpeech>,
    gazetteer: HashMap<String, Vec<GazetteerEntry>>,
    first_names: HashSet<String>,
    titles: HashSet<String>,
    org_suffixes: HashSet<String>,
    months: HashSet<String>,
    weekdays: HashSet<String>,
    relative_dates: HashSet<String>,
    relative_times: HashSet<String>,
    period_modifiers: HashSet<String>,
    date_periods: HashSet<String>,
    time_periods: HashSet<String>,
    year_prepositions: HashSet<String>,
    meridiem: HashSet<String>,
}

impl LexiconTagger {
    /// Parse and index a model from TOML source
    pub fn from_toml(content: &str, source: ModelSource) -> Result<Self> {
        let model: LexiconModel = toml::from_str(content)
            .map_err(|e| MindRepError::Configuration(format!("Failed to parse entity model: {e}")))?;

        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        let digest = format!("{:x}", hasher.finalize());

        Self::from_model(model, digest, source)
    }

    /// Index an already-parsed model
    pub fn from_model(model: LexiconModel, digest: String, source: ModelSource) -> Result<Self> {
        let mut lexicon = HashMap::new();
        for (tag, words) in &model.lexicon {
            let pos = PartOfSpeech::parse(tag).ok_or_else(|| {
                MindRepError::Configuration(format!("Unknown part-of-speech tag in lexicon: {tag}"))
            })?;
            for word in words {
                lexicon.insert(word.to_lowercase(), pos);
            }
        }

        let mut gazetteer: HashMap<String, Vec<GazetteerEntry>> = HashMap::new();
        let mut first_names = HashSet::new();
        for (label, phrases) in &model.gazetteer {
            let label = EntityLabel::parse(label);
            for phrase in phrases {
                let words: Vec<String> = tokenize(phrase)
                    .into_iter()
                    .map(|(s, e)| phrase[s..e].to_string())
                    .collect();
                let Some(first) = words.first().cloned() else {
                    continue;
                };
                if label == EntityLabel::Person {
                    first_names.insert(first.clone());
                }
                gazetteer.entry(first).or_default().push(GazetteerEntry {
                    words,
                    label: label.clone(),
                });
            }
        }
        for entries in gazetteer.values_mut() {
            entries.sort_by(|a, b| b.words.len().cmp(&a.words.len()));
        }

        let rules = &model.rules;
        Ok(Self {
            info: ModelInfo {
                name: model.model.name.clone(),
                version: model.model.version.clone(),
                kind: MODEL_KIND.to_string(),
                language: model.model.language.clone(),
                digest,
                source,
            },
            lexicon,
            gazetteer,
            first_names,
            titles: exact_set(&rules.titles),
            org_suffixes: exact_set(&rules.org_suffixes),
            months: exact_set(&rules.months),
            weekdays: exact_set(&rules.weekdays),
            relative_dates: lowercase_set(&rules.relative_dates),
            relative_times: lowercase_set(&rules.relative_times),
            period_modifiers: lowercase_set(&rules.period_modifiers),
            date_periods: lowercase_set(&rules.date_periods),
            time_periods: lowercase_set(&rules.time_periods),
            year_prepositions: lowercase_set(&rules.year_prepositions),
            meridiem: lowercase_set(&rules.meridiem),
        })
    }

    /// Tag a single word out of context
    pub fn part_of_speech(&self, word: &str) -> PartOfSpeech {
        let Some(first) = word.chars().next() else {
            return PartOfSpeech::X;
        };

        if !(first.is_alphanumeric() || first == '_') {
            return if first.is_ascii_punctuation()
                || matches!(first, '‘' | '’' | '“' | '”' | '–' | '—' | '…' | '«' | '»')
            {
                PartOfSpeech::Punct
            } else {
                PartOfSpeech::Sym
            };
        }
        if first.is_numeric() {
            return PartOfSpeech::Num;
        }
        if self.titles.contains(word) {
            return PartOfSpeech::Noun;
        }

        let capitalised = first.is_uppercase();
        if capitalised
            && (self.first_names.contains(word)
                || self.months.contains(word)
                || self.weekdays.contains(word))
        {
            return PartOfSpeech::Propn;
        }
        if let Some(pos) = self.lexicon.get(&word.to_lowercase()) {
            return *pos;
        }

        let letters = word.chars().filter(|c| c.is_alphabetic()).count();
        if letters >= 2 && !word.chars().any(char::is_lowercase) {
            // Acronyms (NHS, GP) read as common nouns.
            return PartOfSpeech::Noun;
        }
        if capitalised && letters >= 2 {
            return PartOfSpeech::Propn;
        }
        if capitalised {
            return PartOfSpeech::X;
        }
        PartOfSpeech::Noun
    }

    /// Tag a word given whether it opens a sentence
    ///
    /// Mid-sentence, a capitalised word is a proper noun even when the
    /// lexicon knows it as a common word ("texted Will", "my sister Hope").
    /// Acronyms and titles keep their lexicon tag.
    pub fn part_of_speech_at(&self, word: &str, sentence_start: bool) -> PartOfSpeech {
        let pos = self.part_of_speech(word);
        if sentence_start || pos == PartOfSpeech::Propn || self.titles.contains(word) {
            return pos;
        }
        let proper = is_capitalised(word)
            && word.chars().count() >= 2
            && word.chars().all(char::is_alphabetic)
            && word.chars().any(char::is_lowercase);
        if proper {
            PartOfSpeech::Propn
        } else {
            pos
        }
    }

    /// Whether each token opens a sentence
    fn sentence_starts(&self, text: &str, spans: &[(usize, usize)]) -> Vec<bool> {
        let mut starts = Vec::with_capacity(spans.len());
        let mut at_start = true;
        let mut previous: Option<&str> = None;
        let mut previous_end = 0;

        for &(start, end) in spans {
            let word = &text[start..end];
            if text[previous_end..start].contains('\n') {
                at_start = true;
            }
            starts.push(at_start);

            let first = word.chars().next().unwrap_or(' ');
            at_start = match word {
                "." => previous.map_or(true, |prev| !self.titles.contains(prev)),
                "!" | "?" | "…" => true,
                "\"" | "'" | "(" | "[" | "“" | "‘" => at_start,
                _ => at_start && !(first.is_alphanumeric() || first.is_ascii_punctuation()),
            };
            previous = Some(word);
            previous_end = end;
        }

        starts
    }

    fn match_at(&self, w: &Window<'_>, i: usize) -> Option<(Range<usize>, EntityLabel)> {
        self.match_org_suffix(w, i)
            .or_else(|| self.match_gazetteer(w, i))
            .or_else(|| self.match_honorific(w, i))
            .or_else(|| self.match_time(w, i))
            .or_else(|| self.match_date(w, i))
    }

    fn is_surname(&self, w: &Window<'_>, j: usize) -> bool {
        w.is_name_like(j)
            && w.word(j).is_some_and(|word| {
                !self.months.contains(word)
                    && !self.weekdays.contains(word)
                    && !self.org_suffixes.contains(word)
            })
    }

    fn match_gazetteer(&self, w: &Window<'_>, i: usize) -> Option<(Range<usize>, EntityLabel)> {
        let entries = self.gazetteer.get(w.word(i)?)?;
        let entry = entries.iter().find(|entry| {
            entry
                .words
                .iter()
                .enumerate()
                .all(|(k, expected)| w.word(i + k) == Some(expected.as_str()))
        })?;

        let mut end = i + entry.words.len();
        if entry.label == EntityLabel::Person {
            while self.is_surname(w, end) {
                end += 1;
            }
        }
        Some((i..end, entry.label.clone()))
    }

    fn match_honorific(&self, w: &Window<'_>, i: usize) -> Option<(Range<usize>, EntityLabel)> {
        if !self.titles.contains(w.word(i)?) {
            return None;
        }
        let mut start = i + 1;
        if w.word(start) == Some(".") {
            start += 1;
        }
        let mut end = start;
        while self.is_surname(w, end) {
            end += 1;
        }
        (end > start).then_some((start..end, EntityLabel::Person))
    }

    fn match_org_suffix(&self, w: &Window<'_>, i: usize) -> Option<(Range<usize>, EntityLabel)> {
        let mut j = i;
        while w.is_name_like(j) && !self.org_suffixes.contains(w.word(j)?) {
            j += 1;
        }
        if j > i && self.org_suffixes.contains(w.word(j)?) {
            return Some((i..j + 1, EntityLabel::Org));
        }
        None
    }

    fn is_meridiem(&self, w: &Window<'_>, j: usize) -> bool {
        w.word(j)
            .is_some_and(|word| self.meridiem.contains(&word.to_lowercase()))
    }

    fn match_time(&self, w: &Window<'_>, i: usize) -> Option<(Range<usize>, EntityLabel)> {
        let word = w.word(i)?;
        let lower = word.to_lowercase();

        // 15:30, 9:15 pm
        if word.contains(':') && word.chars().all(|c| c.is_ascii_digit() || c == ':') {
            let end = if self.is_meridiem(w, i + 1) { i + 2 } else { i + 1 };
            return Some((i..end, EntityLabel::Time));
        }

        // 3pm, 11am
        let compact = self.meridiem.iter().any(|m| {
            lower.strip_suffix(m.as_str()).is_some_and(|hour| {
                !hour.is_empty()
                    && hour.len() <= 2
                    && hour.chars().all(|c| c.is_ascii_digit())
                    && hour.parse::<u32>().is_ok_and(|h| (1..=12).contains(&h))
            })
        });
        if compact {
            return Some((i..i + 1, EntityLabel::Time));
        }

        // 3 pm
        if parse_day(word).is_some_and(|h| h <= 12)
            && word.chars().all(|c| c.is_ascii_digit())
            && self.is_meridiem(w, i + 1)
        {
            return Some((i..i + 2, EntityLabel::Time));
        }

        if self.relative_times.contains(&lower) {
            return Some((i..i + 1, EntityLabel::Time));
        }

        // this morning, last night
        if self.period_modifiers.contains(&lower)
            && w
                .word(i + 1)
                .is_some_and(|next| self.time_periods.contains(&next.to_lowercase()))
        {
            return Some((i..i + 2, EntityLabel::Time));
        }

        None
    }

    fn extend_with_year(&self, w: &Window<'_>, end: usize) -> usize {
        if w.word(end) == Some(",") && w.word(end + 1).is_some_and(is_year) {
            end + 2
        } else if w.word(end).is_some_and(is_year) {
            end + 1
        } else {
            end
        }
    }

    fn match_date(&self, w: &Window<'_>, i: usize) -> Option<(Range<usize>, EntityLabel)> {
        let word = w.word(i)?;
        let lower = word.to_lowercase();
        let is_month = |j: usize| w.word(j).is_some_and(|m| self.months.contains(m));

        // 15 March, 15th of March 2024
        if parse_day(word).is_some() {
            let end = if is_month(i + 1) {
                Some(i + 2)
            } else if w.word(i + 1) == Some("of") && is_month(i + 2) {
                Some(i + 3)
            } else {
                None
            };
            return end.map(|end| (i..self.extend_with_year(w, end), EntityLabel::Date));
        }

        // March 15, March 15 1998, March 2024, March
        if is_month(i) {
            if w.word(i + 1).and_then(parse_day).is_some() {
                return Some((i..self.extend_with_year(w, i + 2), EntityLabel::Date));
            }
            if w.word(i + 1).is_some_and(is_year) {
                return Some((i..i + 2, EntityLabel::Date));
            }
            return Some((i..i + 1, EntityLabel::Date));
        }

        if self.period_modifiers.contains(&lower) {
            let next = w.word(i + 1)?;
            if self.weekdays.contains(next) || self.date_periods.contains(&next.to_lowercase()) {
                return Some((i..i + 2, EntityLabel::Date));
            }
            return None;
        }

        if self.weekdays.contains(word) || self.relative_dates.contains(&lower) {
            return Some((i..i + 1, EntityLabel::Date));
        }

        // in 1998, since 2019
        if is_year(word)
            && i > 0
            && w
                .word(i - 1)
                .is_some_and(|prev| self.year_prepositions.contains(&prev.to_lowercase()))
        {
            return Some((i..i + 1, EntityLabel::Date));
        }

        None
    }
}

/// Token view over the text being analysed
struct Window<'t> {
    tokens: &'t [Token],
    words: Vec<&'t str>,
}

impl<'t> Window<'t> {
    fn word(&self, j: usize) -> Option<&'t str> {
        self.words.get(j).copied()
    }

    fn is_name_like(&self, j: usize) -> bool {
        match (self.tokens.get(j), self.word(j)) {
            (Some(token), Some(word)) => {
                token.pos == PartOfSpeech::Propn
                    && is_capitalised(word)
                    && word
                        .chars()
                        .all(|c| c.is_alphabetic() || c == '\'' || c == '\u{2019}')
            }
            _ => false,
        }
    }
}

impl EntityTagger for LexiconTagger {
    fn analyse<'a>(&self, text: &'a str) -> Result<TaggedText<'a>> {
        let spans = tokenize(text);
        let starts = self.sentence_starts(text, &spans);
        let mut tokens: Vec<Token> = spans
            .iter()
            .zip(&starts)
            .map(|(&(start, end), &sentence_start)| Token {
                start,
                end,
                pos: self.part_of_speech_at(&text[start..end], sentence_start),
            })
            .collect();

        // Sentence-initial adjective before an auxiliary is a name ("Sunny was mean").
        for i in 0..tokens.len().saturating_sub(1) {
            let word = &text[tokens[i].start..tokens[i].end];
            if starts[i]
                && tokens[i].pos == PartOfSpeech::Adj
                && tokens[i + 1].pos == PartOfSpeech::Aux
                && is_capitalised(word)
            {
                tokens[i].pos = PartOfSpeech::Propn;
            }
        }

        let mut entities = Vec::new();
        {
            let window = Window {
                tokens: &tokens,
                words: tokens.iter().map(|t| &text[t.start..t.end]).collect(),
            };
            let mut i = 0;
            while i < tokens.len() {
                match self.match_at(&window, i) {
                    Some((range, label)) => {
                        entities.push(EntitySpan {
                            start: tokens[range.start].start,
                            end: tokens[range.end - 1].end,
                            label,
                            tokens: range.clone(),
                        });
                        i = range.end;
                    }
                    None => i += 1,
                }
            }
        }

        Ok(TaggedText::new(text, tokens, entities))
    }

    fn model_info(&self) -> &ModelInfo {
        &self.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: &str = r#"
[model]
name = "test_model"
version = "0.0.1"

[lexicon]
PRON = ["my", "i", "me"]
VERB = ["met", "email", "saw"]
ADP = ["at", "in", "on", "with", "of"]
NOUN = ["boss", "number", "university"]

[gazetteer]
PERSON = ["Sarah", "James"]
ORG = ["Deloitte", "Goldman Sachs"]
GPE = ["Manchester", "New York"]

[rules]
titles = ["Dr", "Prof"]
org_suffixes = ["Ltd", "University"]
months = ["March"]
weekdays = ["Friday"]
relative_dates = ["today"]
relative_times = ["tonight"]
period_modifiers = ["this", "next", "last"]
date_periods = ["week"]
time_periods = ["morning"]
year_prepositions = ["in"]
meridiem = ["am", "pm"]
"#;

    fn tagger() -> LexiconTagger {
        LexiconTagger::from_toml(MODEL, ModelSource::Builtin).unwrap()
    }

    fn entities(text: &str) -> Vec<(String, String)> {
        let tagger = tagger();
        let tagged = tagger.analyse(text).unwrap();
        tagged
            .entities
            .iter()
            .map(|e| (tagged.entity_text(e).to_string(), e.label.to_string()))
            .collect()
    }

    fn pair(text: &str, label: &str) -> (String, String) {
        (text.to_string(), label.to_string())
    }

    #[test]
    fn test_model_info() {
        let tagger = tagger();
        assert_eq!(tagger.model_info().name, "test_model");
        assert_eq!(tagger.model_info().kind, MODEL_KIND);
        assert_eq!(tagger.model_info().language, "en");
        assert_eq!(tagger.model_info().digest.len(), 64);
    }

    #[test]
    fn test_gazetteer_longest_match() {
        assert_eq!(
            entities("Work at Goldman Sachs then New York"),
            vec![pair("Goldman Sachs", "ORG"), pair("New York", "GPE")]
        );
    }

    #[test]
    fn test_person_surname_extension() {
        assert_eq!(entities("met James Wilson"), vec![pair("James Wilson", "PERSON")]);
    }

    #[test]
    fn test_honorific() {
        assert_eq!(entities("with Dr. Okafor today"), vec![
            pair("Okafor", "PERSON"),
            pair("today", "DATE"),
        ]);
    }

    #[test]
    fn test_org_suffix() {
        assert_eq!(entities("at Acme Ltd"), vec![pair("Acme Ltd", "ORG")]);
        assert_eq!(entities("in Manchester University"), vec![pair("Manchester University", "ORG")]);
    }

    #[test]
    fn test_dates() {
        assert_eq!(entities("on 15 March"), vec![pair("15 March", "DATE")]);
        assert_eq!(entities("on 15th of March 2024"), vec![pair("15th of March 2024", "DATE")]);
        assert_eq!(entities("March 15, 1998"), vec![pair("March 15, 1998", "DATE")]);
        assert_eq!(entities("next Friday"), vec![pair("next Friday", "DATE")]);
        assert_eq!(entities("last week"), vec![pair("last week", "DATE")]);
        assert_eq!(entities("in 1998"), vec![pair("1998", "DATE")]);
        assert!(entities("ran 2000 steps").is_empty());
    }

    #[test]
    fn test_times() {
        assert_eq!(entities("at 3pm"), vec![pair("3pm", "TIME")]);
        assert_eq!(entities("at 3 pm"), vec![pair("3 pm", "TIME")]);
        assert_eq!(entities("at 15:30"), vec![pair("15:30", "TIME")]);
        assert_eq!(entities("this morning"), vec![pair("this morning", "TIME")]);
        assert_eq!(entities("tonight"), vec![pair("tonight", "TIME")]);
    }

    #[test]
    fn test_durations_are_not_times() {
        assert!(entities("a 30 min walk").is_empty());
        assert!(entities("ran 5k").is_empty());
    }

    #[test]
    fn test_part_of_speech() {
        let tagger = tagger();
        assert_eq!(tagger.part_of_speech("Email"), PartOfSpeech::Verb);
        assert_eq!(tagger.part_of_speech("My"), PartOfSpeech::Pron);
        assert_eq!(tagger.part_of_speech("NHS"), PartOfSpeech::Noun);
        assert_eq!(tagger.part_of_speech("Zanele"), PartOfSpeech::Propn);
        assert_eq!(tagger.part_of_speech("Friday"), PartOfSpeech::Propn);
        assert_eq!(tagger.part_of_speech("Dr"), PartOfSpeech::Noun);
        assert_eq!(tagger.part_of_speech("B"), PartOfSpeech::X);
        assert_eq!(tagger.part_of_speech("5k"), PartOfSpeech::Num);
        assert_eq!(tagger.part_of_speech(","), PartOfSpeech::Punct);
        assert_eq!(tagger.part_of_speech("😭"), PartOfSpeech::Sym);
    }

    #[test]
    fn test_capitalised_common_word_mid_sentence_is_proper_noun() {
        let tagger = tagger();
        assert_eq!(tagger.part_of_speech_at("Saw", true), PartOfSpeech::Verb);
        assert_eq!(tagger.part_of_speech_at("Saw", false), PartOfSpeech::Propn);
        assert_eq!(tagger.part_of_speech_at("NHS", false), PartOfSpeech::Noun);
        assert_eq!(tagger.part_of_speech_at("Dr", false), PartOfSpeech::Noun);
        assert_eq!(tagger.part_of_speech_at("saw", false), PartOfSpeech::Verb);
        assert_eq!(tagger.part_of_speech_at("I", false), PartOfSpeech::Pron);
    }

    #[test]
    fn test_sentence_starts() {
        let tagger = tagger();
        let text = "met Dr. Saw today. Saw him!\nSaw \"Saw\" and Saw";
        let pos: Vec<(String, PartOfSpeech)> = tagger
            .analyse(text)
            .unwrap()
            .tokens
            .iter()
            .map(|t| (text[t.start..t.end].to_string(), t.pos))
            .filter(|(word, _)| word == "Saw")
            .collect();
        let tags: Vec<PartOfSpeech> = pos.into_iter().map(|(_, p)| p).collect();
        assert_eq!(
            tags,
            vec![
                PartOfSpeech::Propn,
                PartOfSpeech::Verb,
                PartOfSpeech::Verb,
                PartOfSpeech::Propn,
                PartOfSpeech::Propn,
            ]
        );
    }

    #[test]
    fn test_sentence_initial_adjective_before_auxiliary() {
        let model = MODEL.replace(
            "NOUN = [\"boss\"",
            "ADJ = [\"sunny\", \"tired\"]\nAUX = [\"was\"]\nNOUN = [\"boss\"",
        );
        let tagger = LexiconTagger::from_toml(&model, ModelSource::Builtin).unwrap();
        let tagged = tagger.analyse("Sunny was mean").unwrap();
        assert_eq!(tagged.tokens[0].pos, PartOfSpeech::Propn);
        let tagged = tagger.analyse("Tired again").unwrap();
        assert_eq!(tagged.tokens[0].pos, PartOfSpeech::Adj);
    }

    #[test]
    fn test_unknown_pos_tag_rejected() {
        let model = "[model]\nname = \"x\"\nversion = \"1\"\n[lexicon]\nWIDGET = [\"a\"]\n";
        assert!(LexiconTagger::from_toml(model, ModelSource::Builtin).is_err());
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(LexiconTagger::from_toml("not = [valid", ModelSource::Builtin).is_err());
    }
}
