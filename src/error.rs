//! Error types for the detection engine and its extraction adapter.
//!
//! The engine itself is total over text inputs (degenerate input degrades to
//! a similarity of 0 by definition), so the error surface is small: invalid
//! configuration, and the upstream text-extraction adapter refusing a media
//! type it does not recognize. All errors are typed, cloneable, and
//! comparable so callers and tests can match on them precisely.

use thiserror::Error;

/// Errors produced by [`DetectConfig::validate`](crate::DetectConfig::validate).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid config: shingle_k must be >= 1 (got {k})")]
    InvalidShingleK { k: usize },

    #[error("invalid config: sentence_match_threshold must lie in [0, 1] (got {value})")]
    InvalidSentenceThreshold { value: f64 },

    #[error("invalid config: significance_threshold must lie in [0, 100] (got {value})")]
    InvalidSignificanceThreshold { value: f64 },
}

/// Errors produced by the text-extraction adapter.
///
/// Extraction runs once per uploaded document, before any text reaches the
/// engine. An unrecognized media type is an explicit error naming the type,
/// never a silent empty string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The declared media type is not one the adapter recognizes.
    #[error("unsupported file type: {declared}")]
    UnsupportedMediaType { declared: String },

    /// The media type is recognized but this extractor has no decoder for it.
    #[error("no decoder available for {media_type} documents")]
    NoDecoder { media_type: &'static str },
}
