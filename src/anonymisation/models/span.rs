//! Detection spans and right-to-left substitution

use std::collections::BTreeMap;

/// Running tally of replacements, keyed by detector label
pub type ReplacementCounts = BTreeMap<String, usize>;

/// One PII occurrence inside the current working text
///
/// Offsets are byte offsets into the text the span was detected in and
/// always fall on `char` boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionSpan {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
    /// Token written in place of the span
    pub placeholder: &'static str,
    /// Label the replacement is counted under
    pub label: String,
}

impl DetectionSpan {
    /// Create a new span
    pub fn new(start: usize, end: usize, placeholder: &'static str, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            placeholder,
            label: label.into(),
        }
    }
}

/// Replace every span in `text` with its placeholder and tally the labels.
///
/// Spans are ordered by start offset descending and applied right to left,
/// so offsets of spans further left stay valid whatever the placeholder
/// length. A span overlapping one already applied to its right is dropped
/// and not counted.
pub fn apply_spans(
    text: &str,
    mut spans: Vec<DetectionSpan>,
    replacements: &mut ReplacementCounts,
) -> String {
    if spans.is_empty() {
        return text.to_string();
    }

    spans.sort_by(|a, b| b.start.cmp(&a.start).then(b.end.cmp(&a.end)));

    let mut kept: Vec<DetectionSpan> = Vec::with_capacity(spans.len());
    let mut boundary = text.len();
    for span in spans {
        if span.start > span.end || span.end > boundary {
            continue;
        }
        boundary = span.start;
        kept.push(span);
    }

    // `kept` is right-to-left; stitch the untouched slices back together.
    let mut pieces: Vec<&str> = Vec::with_capacity(kept.len() * 2 + 1);
    let mut tail_end = text.len();
    for span in &kept {
        pieces.push(&text[span.end..tail_end]);
        pieces.push(span.placeholder);
        tail_end = span.start;
        *replacements.entry(span.label.clone()).or_insert(0) += 1;
    }
    pieces.push(&text[..tail_end]);
    pieces.reverse();
    pieces.concat()
}
