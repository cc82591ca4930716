//! # docsim
//!
//! Document similarity detection engine. Given a target document and an
//! ordered collection of reference documents, docsim combines three
//! independent signals into one explainable report:
//!
//! - **Vector similarity**: pair-local TF-IDF cosine between the two texts,
//!   with the vocabulary fitted fresh for every comparison ([`vector`]).
//! - **Shingle fingerprints**: Jaccard similarity over sets of hashed
//!   five-word windows ([`shingle`]).
//! - **Sentence matching**: every long-enough sentence pair scored with the
//!   same pair-local vector model, kept above a match threshold as verbatim
//!   evidence ([`matcher`]).
//!
//! Per reference, the combined score is the mean of the document-level
//! cosine and Jaccard signals; references that don't clear the significance
//! threshold are dropped entirely, and the overall score is the mean over
//! the survivors ([`engine`]).
//!
//! The engine is a pure in-process library: no persistence, no network
//! surface, no state between calls. Degenerate input (empty text, empty
//! shingle sets, zero vectors) scores 0 by definition rather than failing.
//!
//! ## Example
//!
//! ```
//! use docsim::{detect, Reference, SourceDescriptor};
//!
//! let target = "The quick brown fox jumps over the lazy dog everyday.";
//! let references = [
//!     Reference::new(target, SourceDescriptor::submission("essay-7", "Essay 7")),
//!     Reference::new(
//!         "A tutorial on compiling distributed systems in a functional language.",
//!         SourceDescriptor::submission("essay-9", "Essay 9"),
//!     ),
//! ];
//!
//! let report = detect(target, &references);
//! assert_eq!(report.matches.len(), 1);
//! assert!(report.overall_score > 99.0);
//! assert_eq!(report.matches[0].source.id, "essay-7");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod normalize;
pub mod segment;
pub mod shingle;
pub mod vector;

pub use config::{
    DetectConfig, MIN_SENTENCE_CHARS, SENTENCE_MATCH_THRESHOLD, SHINGLE_K, SIGNIFICANCE_THRESHOLD,
};
pub use engine::{
    detect, DetectionEngine, DetectionReport, Reference, ReferenceMatch, SourceDescriptor,
    SourceKind,
};
pub use error::{ConfigError, ExtractError};
pub use extract::{MediaType, PlainTextExtractor, TextExtractor};
pub use matcher::{match_sentences, SentenceMatch};
pub use normalize::normalize;
pub use segment::{segment, Sentence};
pub use shingle::ShingleSet;
pub use vector::similarity;
