//! Bracket-span scanning for the right-page text.
//!
//! Story text marks interactive words with square brackets: `It's
//! [waiting].` Each bracketed span becomes a clickable highlight; spans
//! containing a static trigger word also fire the static burst when
//! clicked.

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use crate::data::Settings;

static SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]").expect("span pattern should compile"));

/// One slice of a content block after scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSpan {
    Plain(String),
    Highlight { text: String, glitchy: bool },
}

pub type Spans = SmallVec<[TextSpan; 4]>;

/// Case-insensitive substring match against the trigger word list.
#[must_use]
pub fn has_trigger_word(text: &str, words: &[String]) -> bool {
    let lowered = text.to_lowercase();
    words
        .iter()
        .any(|word| lowered.contains(&word.to_lowercase()))
}

/// Split a block of story text into plain and highlight spans.
#[must_use]
pub fn scan_spans(text: &str, settings: &Settings) -> Spans {
    let mut spans = Spans::new();
    let mut cursor = 0;

    for capture in SPAN_RE.captures_iter(text) {
        let whole = capture.get(0).expect("capture 0 always present");
        let inner = &capture[1];
        if whole.start() > cursor {
            spans.push(TextSpan::Plain(text[cursor..whole.start()].to_string()));
        }
        spans.push(TextSpan::Highlight {
            text: inner.to_string(),
            glitchy: has_trigger_word(inner, &settings.static_trigger_words),
        });
        cursor = whole.end();
    }

    if cursor < text.len() {
        spans.push(TextSpan::Plain(text[cursor..].to_string()));
    }
    spans
}
