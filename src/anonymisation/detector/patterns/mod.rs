//! Pattern library for structured PII
//!
//! Matchers are held in an explicit ordered list and always run in that
//! order. Earlier, more specific formats claim their text before a later,
//! more general matcher sees it: emails before anything numeric, national
//! identifiers before phone numbers, the spaced NHS grouping before its
//! contiguous sibling and before generic 10-digit phone formats.

use crate::anonymisation::models::{DetectionSpan, PiiCategory};
use crate::domain::{MindRepError, Result};
use serde::Deserialize;
use std::path::Path;

/// Built-in matcher definition
#[derive(Debug, Clone, Copy)]
pub struct BuiltinPattern {
    /// Label replacements are counted under
    pub label: &'static str,
    /// Category deciding the placeholder
    pub category: PiiCategory,
    /// Regex source
    pub pattern: &'static str,
}

/// Built-in matchers, in precedence order
pub const BUILTIN_PATTERNS: &[BuiltinPattern] = &[
    BuiltinPattern {
        label: "EMAIL",
        category: PiiCategory::Email,
        pattern: r"\b[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}\b",
    },
    // US Social Security Number: 123-45-6789
    BuiltinPattern {
        label: "SSN",
        category: PiiCategory::Ssn,
        pattern: r"\b\d{3}-\d{2}-\d{4}\b",
    },
    // UK National Insurance number: AB 12 34 56 C
    BuiltinPattern {
        label: "NI_NUMBER",
        category: PiiCategory::NiNumber,
        pattern: r"(?i)\b[A-CEGHJ-PR-TW-Z]{2}\s?\d{2}\s?\d{2}\s?\d{2}\s?[A-D]\b",
    },
    // NHS number in 3-3-4 grouping: 943 476 5919
    BuiltinPattern {
        label: "NHS_NUMBER",
        category: PiiCategory::NhsNumber,
        pattern: r"\b\d{3}\s\d{3}\s\d{4}\b",
    },
    BuiltinPattern {
        label: "NHS_NUMBER_NOSPACE",
        category: PiiCategory::NhsNumber,
        pattern: r"\b\d{10}\b",
    },
    // +44 and domestic trunk-prefixed UK numbers; must end on a digit
    BuiltinPattern {
        label: "PHONE_UK",
        category: PiiCategory::Phone,
        pattern: r"(?<!\d)(?:\+44\s?\(?\d\)?\s?\d[\d\s\-]{6,9}\d|0[1-9][\d\s\-]{7,11}\d)(?!\d)",
    },
    // (212) 555-0198, 212-555-0198, +1 212 555 0198
    BuiltinPattern {
        label: "PHONE_US",
        category: PiiCategory::Phone,
        pattern: r"(?<!\d)(?:\+?1[\s\-]?\(?\d{3}\)?[\s\-]?\d{3}[\s\-]?\d{4}|\(?\d{3}\)?[\s\-]?\d{3}[\s\-]?\d{4})(?!\d)",
    },
    // SW1A 1AA, EC2R8AH, M1 1AE
    BuiltinPattern {
        label: "POSTCODE_UK",
        category: PiiCategory::Postcode,
        pattern: r"(?i)\b[A-Z]{1,2}\d[A-Z\d]?\s*\d[A-Z]{2}\b",
    },
    // 12345 or 12345-6789; collides with bare 5-digit numbers
    BuiltinPattern {
        label: "ZIP_US",
        category: PiiCategory::Zipcode,
        pattern: r"\b\d{5}(?:-\d{4})?\b",
    },
    BuiltinPattern {
        label: "URL",
        category: PiiCategory::Url,
        pattern: r#"https?://[^\s,;"'<>)}\]]{3,}|www\.[^\s,;"'<>)}\]]{3,}"#,
    },
    // 15/03/1998, 22-11-2001, 1.2.24
    BuiltinPattern {
        label: "DATE",
        category: PiiCategory::Date,
        pattern: r"\b\d{1,2}[/\-\.]\d{1,2}[/\-\.]\d{2,4}\b",
    },
];

/// Pattern definition from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// Label replacements are counted under
    pub label: String,
    /// PII category name (see [`PiiCategory::parse`])
    pub category: String,
    /// Regex source
    pub pattern: String,
}

/// Pattern library container; `[[patterns]]` keeps file order
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    patterns: Vec<PatternDefinition>,
}

/// Look-behind forbidding a digit before the match
const NO_DIGIT_BEFORE: &str = r"(?<!\d)";

/// Look-ahead forbidding a digit after the match
const NO_DIGIT_AFTER: &str = r"(?!\d)";

/// Backtracking budget for library patterns that need look-around
const BACKTRACK_LIMIT: usize = 50_000_000;

/// How a pattern is executed
#[derive(Debug, Clone)]
enum Matcher {
    /// Linear-time regex
    Linear(regex::Regex),
    /// Linear-time regex whose matches may not touch a digit on either side
    DigitBounded(regex::Regex),
    /// Backtracking regex, for look-around the linear engine cannot run
    Backtracking(fancy_regex::Regex),
}

/// Compiled matcher with metadata
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Label replacements are counted under
    pub label: String,
    /// PII category
    pub category: PiiCategory,
    source: String,
    matcher: Matcher,
}

impl CompiledPattern {
    /// Compile a single matcher
    ///
    /// Patterns run on the linear-time `regex` engine. A pattern wrapped in
    /// `(?<!\d)` and `(?!\d)` keeps that form: the digit boundaries are
    /// checked around each match instead. Any other look-around falls back
    /// to `fancy_regex`.
    pub fn new(label: impl Into<String>, category: PiiCategory, pattern: &str) -> Result<Self> {
        let label = label.into();
        let inner = pattern
            .strip_prefix(NO_DIGIT_BEFORE)
            .and_then(|p| p.strip_suffix(NO_DIGIT_AFTER));

        let matcher = match inner.map(regex::Regex::new) {
            Some(Ok(regex)) => Matcher::DigitBounded(regex),
            _ => match regex::Regex::new(pattern) {
                Ok(regex) => Matcher::Linear(regex),
                Err(_) => Matcher::Backtracking(
                    fancy_regex::RegexBuilder::new(pattern)
                        .backtrack_limit(BACKTRACK_LIMIT)
                        .build()
                        .map_err(|e| {
                            MindRepError::Pattern(format!("Invalid regex in pattern '{label}': {e}"))
                        })?,
                ),
            },
        };

        Ok(Self {
            source: pattern.to_string(),
            label,
            category,
            matcher,
        })
    }

    /// Regex source as written
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the pattern runs on the backtracking engine
    pub fn is_backtracking(&self) -> bool {
        matches!(self.matcher, Matcher::Backtracking(_))
    }

    /// Every non-overlapping match in `text`, as replacement spans
    pub fn find_spans(&self, text: &str) -> Result<Vec<DetectionSpan>> {
        let ranges: Vec<(usize, usize)> = match &self.matcher {
            Matcher::Linear(regex) => regex.find_iter(text).map(|m| (m.start(), m.end())).collect(),
            Matcher::DigitBounded(regex) => digit_bounded_matches(regex, text),
            Matcher::Backtracking(regex) => regex
                .find_iter(text)
                .map(|found| {
                    found.map(|m| (m.start(), m.end())).map_err(|e| {
                        MindRepError::Pattern(format!(
                            "Pattern '{}' failed to execute: {e}",
                            self.label
                        ))
                    })
                })
                .collect::<Result<Vec<_>>>()?,
        };

        Ok(ranges
            .into_iter()
            .map(|(start, end)| {
                DetectionSpan::new(start, end, self.category.placeholder(), self.label.clone())
            })
            .collect())
    }
}

fn is_digit_at(text: &str, index: usize) -> bool {
    text[index..].chars().next().is_some_and(char::is_numeric)
}

fn is_digit_before(text: &str, index: usize) -> bool {
    text[..index].chars().next_back().is_some_and(char::is_numeric)
}

fn next_boundary(text: &str, index: usize) -> usize {
    text[index..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| index + c.len_utf8())
}

/// Non-overlapping matches with no digit directly before or after
///
/// A match that runs into a digit is cut back to the end of an earlier
/// digit run when the pattern still matches there; otherwise the search
/// resumes one character past its start.
fn digit_bounded_matches(regex: &regex::Regex, text: &str) -> Vec<(usize, usize)> {
    let mut found = Vec::new();
    let mut at = 0;

    while at <= text.len() {
        let Some(m) = regex.find_at(text, at) else {
            break;
        };
        let start = m.start();
        if is_digit_before(text, start) {
            at = next_boundary(text, start);
            continue;
        }

        let mut end = m.end();
        while end < text.len() && is_digit_at(text, end) {
            // Largest cut point inside the match that is not a digit
            let Some(limit) = text[start..end]
                .char_indices()
                .rev()
                .find(|(_, c)| !c.is_numeric())
                .map(|(i, _)| start + i)
            else {
                break;
            };
            match regex.find_at(&text[..limit], start) {
                Some(shorter) if shorter.start() == start => end = shorter.end(),
                _ => break,
            }
        }

        if end < text.len() && is_digit_at(text, end) {
            at = next_boundary(text, start);
            continue;
        }

        found.push((start, end));
        at = if end > start { end } else { next_boundary(text, end) };
    }

    found
}

/// Ordered registry of structured-PII matchers
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    patterns: Vec<CompiledPattern>,
}

impl PatternRegistry {
    /// Create a registry from a TOML pattern library file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MindRepError::Configuration(format!(
                "Failed to read pattern library {}: {e}",
                path.display()
            ))
        })?;

        Self::from_toml(&content)
    }

    /// Create a registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary = toml::from_str(content)
            .map_err(|e| MindRepError::Configuration(format!("Failed to parse pattern library: {e}")))?;

        if library.patterns.is_empty() {
            return Err(MindRepError::Configuration(
                "Pattern library defines no patterns".to_string(),
            ));
        }

        let patterns = library
            .patterns
            .iter()
            .map(|def| {
                let category = PiiCategory::parse(&def.category)?;
                CompiledPattern::new(def.label.clone(), category, &def.pattern)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Create the built-in registry
    pub fn default_patterns() -> Result<Self> {
        let patterns = BUILTIN_PATTERNS
            .iter()
            .map(|p| CompiledPattern::new(p.label, p.category, p.pattern))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// All matchers, in precedence order
    pub fn all_patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Number of matchers
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the registry has no matchers
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
