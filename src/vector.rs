//! Pair-local TF-IDF cosine similarity.
//!
//! The vector space is scoped to the vocabulary of exactly the two texts
//! being compared: term weighting is fitted fresh on every call, with
//! document frequencies taken over the two-document "corpus" {a, b}. This is
//! deliberate — scores depend only on the pair, never on any global corpus —
//! and it holds at both whole-document and single-sentence granularity.

use std::collections::HashMap;

use crate::normalize::{normalize, words};

/// Tokens shorter than this (in chars) carry no weight. Single-letter words
/// are noise at the granularity this engine scores.
const MIN_TOKEN_CHARS: usize = 2;

/// Term-weighted cosine similarity between two texts, as a percentage.
///
/// Both texts are normalized internally. Returns a score in [0, 100]; an
/// empty normalized text (or one with no scorable tokens) on either side
/// yields 0, never a fault.
pub fn similarity(a: &str, b: &str) -> f64 {
    let norm_a = normalize(a);
    let norm_b = normalize(b);
    similarity_normalized(&norm_a, &norm_b)
}

/// [`similarity`] over texts that are already normalized.
///
/// Callers that score many pairs from the same documents can normalize once
/// and reuse the results; output is identical to [`similarity`] on the raw
/// texts.
pub fn similarity_normalized(norm_a: &str, norm_b: &str) -> f64 {
    let tf_a = term_frequencies(norm_a);
    let tf_b = term_frequencies(norm_b);
    (cosine(&tf_a, &tf_b) * 100.0).clamp(0.0, 100.0)
}

/// Raw term counts over scorable tokens of one normalized text.
fn term_frequencies(normalized: &str) -> HashMap<&str, f64> {
    let mut tf: HashMap<&str, f64> = HashMap::new();
    for word in words(normalized) {
        if word.chars().count() < MIN_TOKEN_CHARS {
            continue;
        }
        *tf.entry(word).or_insert(0.0) += 1.0;
    }
    tf
}

/// Smoothed inverse document frequency over the two-document corpus.
///
/// `ln((1 + n) / (1 + df)) + 1` with n = 2, so a term present in both texts
/// weighs 1.0 and a term unique to one side weighs `ln(3/2) + 1`.
fn idf(in_both: bool) -> f64 {
    let df: f64 = if in_both { 2.0 } else { 1.0 };
    ((1.0 + 2.0) / (1.0 + df)).ln() + 1.0
}

/// Cosine of the angle between the pair-local TF-IDF vectors, in [0, 1].
fn cosine(tf_a: &HashMap<&str, f64>, tf_b: &HashMap<&str, f64>) -> f64 {
    let mut dot = 0.0;
    let mut norm_a_sq = 0.0;
    let mut norm_b_sq = 0.0;

    for (term, &count_a) in tf_a {
        let shared = tf_b.contains_key(term);
        let weight_a = count_a * idf(shared);
        norm_a_sq += weight_a * weight_a;
        if let Some(&count_b) = tf_b.get(term) {
            dot += weight_a * count_b * idf(true);
        }
    }
    for (term, &count_b) in tf_b {
        let weight_b = count_b * idf(tf_a.contains_key(term));
        norm_b_sq += weight_b * weight_b;
    }

    if norm_a_sq == 0.0 || norm_b_sq == 0.0 {
        return 0.0;
    }
    dot / (norm_a_sq.sqrt() * norm_b_sq.sqrt())
}
