//! Sentence segmentation over raw (un-normalized) text.
//!
//! Sentences keep their original casing and punctuation so they can be shown
//! verbatim as match evidence; only their similarity scoring happens over
//! normalized forms. Boundary detection runs UAX #29 sentence bounds and then
//! merges segments that UAX #29 over-splits after common abbreviations
//! ("Mr. Smith", "e.g. this one").

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// A sentence as it appears in the source document.
///
/// `start`/`end` are byte offsets of the (trimmed) sentence within the
/// original text, so `&original[start..end] == text` always holds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sentence {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Sentence {
    /// Sentence length in Unicode scalar values.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Abbreviations that must not terminate a sentence even when followed by an
/// uppercase word. Lowercase, without the trailing period. Built once per
/// process.
fn abbreviations() -> &'static HashSet<&'static str> {
    static ABBREVIATIONS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    ABBREVIATIONS.get_or_init(|| {
        [
            "mr", "mrs", "ms", "dr", "prof", "rev", "gen", "sen", "st", "sr", "jr", "jan", "feb",
            "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "vs", "etc",
            "e.g", "i.e", "cf", "al", "fig", "figs", "no", "nos", "vol", "vols", "pp", "approx",
            "dept", "univ", "assn", "inc", "ltd", "co",
        ]
        .into_iter()
        .collect()
    })
}

/// Split raw text into its ordered sentence sequence.
///
/// Deterministic for identical input; each returned sentence is an exact
/// (whitespace-trimmed) substring of the input in original order. Empty or
/// whitespace-only input yields an empty vec.
pub fn segment(text: &str) -> Vec<Sentence> {
    let mut out = Vec::new();
    let mut pending_start: Option<usize> = None;

    for (offset, bound) in text.split_sentence_bound_indices() {
        let start = pending_start.take().unwrap_or(offset);
        let end = offset + bound.len();
        // Hold the segment open when it ends in an abbreviation; the next
        // bound belongs to the same sentence.
        if end < text.len() && ends_with_abbreviation(&text[start..end]) {
            pending_start = Some(start);
            continue;
        }
        push_trimmed(text, start, end, &mut out);
    }

    if let Some(start) = pending_start {
        push_trimmed(text, start, text.len(), &mut out);
    }

    out
}

/// True when the segment's last word is a known abbreviation (or a single
/// initial like "J.") followed by its period.
fn ends_with_abbreviation(segment: &str) -> bool {
    let trimmed = segment.trim_end();
    let Some(stripped) = trimmed.strip_suffix('.') else {
        return false;
    };
    let last_word = stripped
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or(stripped);
    if last_word.is_empty() {
        return false;
    }

    // Single-letter initials: "J. R. Tolkien".
    let mut chars = last_word.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_alphabetic() && c.is_uppercase() {
            return true;
        }
    }

    abbreviations().contains(last_word.to_lowercase().as_str())
}

fn push_trimmed(text: &str, start: usize, end: usize, out: &mut Vec<Sentence>) {
    let slice = &text[start..end];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }
    let lead = slice.len() - slice.trim_start().len();
    let trimmed_start = start + lead;
    out.push(Sentence {
        text: trimmed.to_string(),
        start: trimmed_start,
        end: trimmed_start + trimmed.len(),
    });
}
