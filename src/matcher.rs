//! Sentence-level matching between two documents.
//!
//! Every eligible (target sentence, reference sentence) pair is scored with
//! the pair-local vector model; pairs at or above the match threshold become
//! evidence in the detection report. This O(n·m) grid is the dominant cost
//! of the engine, so each sentence is normalized once up front and the grid
//! can run on the rayon pool.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::DetectConfig;
use crate::normalize::normalize;
use crate::segment::{segment, Sentence};
use crate::vector;

/// One matching sentence pair, with original sentence text on both sides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentenceMatch {
    /// Sentence from the target document, verbatim.
    pub target_sentence: String,
    /// Sentence from the reference document, verbatim.
    pub reference_sentence: String,
    /// Pairwise similarity in [0, 100].
    pub similarity: f64,
}

/// A sentence plus its precomputed normalized form, kept only when long
/// enough to be eligible for matching.
struct Candidate {
    sentence: Sentence,
    normalized: String,
}

fn candidates(text: &str, min_chars: usize) -> Vec<Candidate> {
    segment(text)
        .into_iter()
        .filter(|s| s.char_len() >= min_chars)
        .map(|sentence| {
            let normalized = normalize(&sentence.text);
            Candidate {
                sentence,
                normalized,
            }
        })
        .collect()
}

/// Find matching sentences between a target and a reference document.
///
/// Pairs where either raw sentence is shorter than
/// [`min_sentence_chars`](DetectConfig::min_sentence_chars) are skipped;
/// surviving pairs are kept when their similarity reaches
/// `sentence_match_threshold × 100`. Output order is the nested iteration
/// order: all matches for the target's first sentence (in reference order),
/// then its second, and so on — identical whether or not the parallel path
/// is taken.
pub fn match_sentences(target: &str, reference: &str, cfg: &DetectConfig) -> Vec<SentenceMatch> {
    let target_sentences = candidates(target, cfg.min_sentence_chars);
    let reference_sentences = candidates(reference, cfg.min_sentence_chars);
    if target_sentences.is_empty() || reference_sentences.is_empty() {
        return Vec::new();
    }

    let cutoff = cfg.sentence_match_threshold * 100.0;
    let score_pair = |t: &Candidate, r: &Candidate| -> Option<SentenceMatch> {
        let similarity = vector::similarity_normalized(&t.normalized, &r.normalized);
        (similarity >= cutoff).then(|| SentenceMatch {
            target_sentence: t.sentence.text.clone(),
            reference_sentence: r.sentence.text.clone(),
            similarity,
        })
    };

    if cfg.use_parallel {
        // rayon's collect keeps the pair order, so the output matches the
        // sequential path exactly.
        let pairs: Vec<(&Candidate, &Candidate)> = target_sentences
            .iter()
            .flat_map(|t| reference_sentences.iter().map(move |r| (t, r)))
            .collect();
        pairs
            .into_par_iter()
            .filter_map(|(t, r)| score_pair(t, r))
            .collect()
    } else {
        target_sentences
            .iter()
            .flat_map(|t| reference_sentences.iter().filter_map(|r| score_pair(t, r)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> DetectConfig {
        DetectConfig::default()
    }

    #[test]
    fn identical_long_sentences_match() {
        let text = "The quick brown fox jumps over the lazy dog everyday.";
        let matches = match_sentences(text, text, &cfg());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].target_sentence, text);
        assert_eq!(matches[0].reference_sentence, text);
        assert!(matches[0].similarity > 99.0);
    }

    #[test]
    fn short_sentences_are_skipped() {
        // Both under 20 chars, even though identical.
        let matches = match_sentences("Yes. OK.", "Yes. OK.", &cfg());
        assert!(matches.is_empty());
    }

    #[test]
    fn no_match_never_returns_short_side() {
        let long = "This sentence is comfortably longer than twenty characters.";
        let mixed = format!("OK. {long}");
        let matches = match_sentences(&mixed, &mixed, &cfg());
        for m in &matches {
            assert!(m.target_sentence.chars().count() >= 20);
            assert!(m.reference_sentence.chars().count() >= 20);
        }
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn unrelated_sentences_do_not_match() {
        let matches = match_sentences(
            "Completely unrelated content about aquatic biology and coral reefs.",
            "A tutorial on compiling distributed systems in a functional language.",
            &cfg(),
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn output_follows_nested_iteration_order() {
        let a1 = "Alpha sentence number one, long enough to count.";
        let a2 = "Beta sentence number two, long enough to count.";
        let target = format!("{a1} {a2}");
        let reference = format!("{a2} {a1}");
        let matches = match_sentences(&target, &reference, &cfg());
        // a1 matches itself and a2 matches itself; target order wins.
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].target_sentence, a1);
        assert_eq!(matches[1].target_sentence, a2);
    }

    #[test]
    fn parallel_path_matches_sequential_output() {
        let target = "The quick brown fox jumps over the lazy dog everyday. \
                      A second sentence with plenty of characters in it. \
                      Completely different words about marine life here.";
        let reference = "The quick brown fox jumps over the lazy dog everyday. \
                         A second sentence with plenty of characters in it.";
        let sequential = match_sentences(target, reference, &cfg());
        let parallel_cfg = DetectConfig {
            use_parallel: true,
            ..cfg()
        };
        let parallel = match_sentences(target, reference, &parallel_cfg);
        assert_eq!(sequential, parallel);
        assert!(!sequential.is_empty());
    }

    #[test]
    fn empty_inputs_yield_no_matches() {
        assert!(match_sentences("", "", &cfg()).is_empty());
        assert!(match_sentences("Some long enough sentence right here.", "", &cfg()).is_empty());
    }
}
