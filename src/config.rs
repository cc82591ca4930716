//! Configuration surface for the detection engine.
//!
//! All thresholds the engine applies live here as named constants with a
//! [`DetectConfig`] carrying them per engine instance. The defaults are the
//! policy values the engine ships with; callers that need different values
//! construct a config explicitly and run it through [`DetectConfig::validate`].

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Number of consecutive words per shingle.
pub const SHINGLE_K: usize = 5;

/// Minimum pairwise similarity (on a 0–1 scale) for two sentences to count
/// as a match.
pub const SENTENCE_MATCH_THRESHOLD: f64 = 0.8;

/// Combined score (0–100) a reference must strictly exceed to appear in the
/// report at all.
pub const SIGNIFICANCE_THRESHOLD: f64 = 20.0;

/// Sentences shorter than this (in chars, pre-normalization) are never
/// considered for sentence matching. Suppresses trivial matches on "Yes."
/// and friends.
pub const MIN_SENTENCE_CHARS: usize = 20;

/// Runtime configuration for one [`DetectionEngine`](crate::DetectionEngine).
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// configs or logged alongside results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectConfig {
    /// Words per shingle for the fingerprint signal.
    pub shingle_k: usize,
    /// Sentence-match threshold on a 0–1 scale.
    pub sentence_match_threshold: f64,
    /// Significance cutoff for a reference match, on the 0–100 score scale.
    pub significance_threshold: f64,
    /// Minimum raw sentence length (chars) eligible for sentence matching.
    pub min_sentence_chars: usize,
    /// Run the reference loop and the sentence-pair grid on the rayon pool.
    /// Output ordering is identical to the sequential path.
    pub use_parallel: bool,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            shingle_k: SHINGLE_K,
            sentence_match_threshold: SENTENCE_MATCH_THRESHOLD,
            significance_threshold: SIGNIFICANCE_THRESHOLD,
            min_sentence_chars: MIN_SENTENCE_CHARS,
            use_parallel: false,
        }
    }
}

impl DetectConfig {
    /// Validate the configuration.
    ///
    /// Rejects degenerate values that would make the engine's invariants
    /// meaningless (zero-width shingles, thresholds outside their scales).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shingle_k == 0 {
            return Err(ConfigError::InvalidShingleK { k: self.shingle_k });
        }
        if !(0.0..=1.0).contains(&self.sentence_match_threshold) {
            return Err(ConfigError::InvalidSentenceThreshold {
                value: self.sentence_match_threshold,
            });
        }
        if !(0.0..=100.0).contains(&self.significance_threshold) {
            return Err(ConfigError::InvalidSignificanceThreshold {
                value: self.significance_threshold,
            });
        }
        Ok(())
    }
}
