//! Text normalization for similarity scoring.
//!
//! Every downstream stage that compares text (vector scoring, shingling)
//! works over the output of [`normalize`], so two documents that differ only
//! in case, punctuation, or whitespace layout normalize to identical strings.

use unicode_normalization::UnicodeNormalization;

/// Normalize raw text into the comparable form used for scoring.
///
/// The pipeline is: NFKC Unicode normalization, lowercasing, dropping every
/// character that is neither alphanumeric nor whitespace, collapsing
/// whitespace runs to a single space, and trimming the edges.
///
/// Pure and total: empty input (or input that is all punctuation) yields an
/// empty string, never an error.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Whether the previous emitted character needs a space before the next
    // word. Starts false so leading whitespace is trimmed for free.
    let mut pending_space = false;

    for ch in text.nfkc() {
        if ch.is_whitespace() {
            if !out.is_empty() {
                pending_space = true;
            }
            continue;
        }
        if !ch.is_alphanumeric() {
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        // Lowercasing can expand a single character into several (e.g. İ).
        for lower in ch.to_lowercase() {
            out.push(lower);
        }
    }

    out
}

/// Split normalized text into its word sequence.
///
/// Normalized text uses single spaces as the only delimiter, so this is a
/// plain split; it exists so shingling and vectorization agree on what a
/// word is.
pub fn words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(' ').filter(|w| !w.is_empty())
}
