//! Detection orchestrator: combines the vector, shingle, and sentence
//! signals into a per-reference verdict and an overall score.
//!
//! The engine is a pure function of `(target, references, config)`. It holds
//! no state between calls beyond its config; every comparison fits its own
//! vector model and fingerprints, so references are data-independent and the
//! reference loop can run on the rayon pool with results collected back into
//! input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, Level};

use crate::config::DetectConfig;
use crate::error::ConfigError;
use crate::matcher::{match_sentences, SentenceMatch};
use crate::shingle::ShingleSet;
use crate::vector;

/// Provenance tag for a reference text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Another submitted document in the same corpus.
    Submission,
    /// Crawled or externally supplied web content.
    Internet,
    /// A curated reference database.
    Database,
}

/// Ready-made source descriptor for callers that don't carry their own.
///
/// The engine never reads descriptor contents; this struct only mirrors what
/// reporting layers typically store per match: an identifier, a display
/// name, a provenance kind, and a URL that is only meaningful for
/// non-submission provenance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub id: String,
    pub name: String,
    pub kind: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl SourceDescriptor {
    /// Descriptor for another submission in the corpus.
    pub fn submission(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: SourceKind::Submission,
            url: None,
        }
    }
}

/// One reference text plus its caller-supplied descriptor.
///
/// The descriptor is opaque associated data: the engine copies it into the
/// report untouched and never inspects it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reference<D> {
    pub text: String,
    pub source: D,
}

impl<D> Reference<D> {
    pub fn new(text: impl Into<String>, source: D) -> Self {
        Self {
            text: text.into(),
            source,
        }
    }
}

/// The engine's verdict for one target-vs-reference comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferenceMatch<D> {
    /// The reference's descriptor, copied through verbatim.
    pub source: D,
    /// Mean of the document-level cosine and shingle Jaccard signals,
    /// in (significance threshold, 100].
    pub combined_score: f64,
    /// Sentence-level evidence, untruncated, in nested iteration order.
    pub sentence_matches: Vec<SentenceMatch>,
}

impl<D> ReferenceMatch<D> {
    /// Target-side text of the first `limit` sentence matches, joined with
    /// newlines. Reporting layers store a bounded sample rather than the
    /// full match list; the report itself stays untruncated.
    pub fn matched_text(&self, limit: usize) -> String {
        self.sentence_matches
            .iter()
            .take(limit)
            .map(|m| m.target_sentence.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Full engine output for one detection call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectionReport<D> {
    /// Mean combined score across surviving references; exactly 0 when no
    /// reference exceeded the significance threshold.
    pub overall_score: f64,
    /// Surviving references, in input order.
    pub matches: Vec<ReferenceMatch<D>>,
}

impl<D> DetectionReport<D> {
    /// Report with no matches and a zero score.
    pub fn empty() -> Self {
        Self {
            overall_score: 0.0,
            matches: Vec::new(),
        }
    }
}

/// Similarity-detection engine.
///
/// Construct once with a config and reuse freely; `detect` is `&self` and
/// thread-safe.
#[derive(Debug, Clone, Default)]
pub struct DetectionEngine {
    cfg: DetectConfig,
}

impl DetectionEngine {
    /// Engine with the default policy constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with an explicit, validated config.
    pub fn with_config(cfg: DetectConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &DetectConfig {
        &self.cfg
    }

    /// Compare a target document against an ordered set of references.
    ///
    /// Per reference, in input order: the combined score is the mean of the
    /// document-level vector similarity and the shingle Jaccard similarity;
    /// a [`ReferenceMatch`] is emitted only when that score strictly exceeds
    /// the significance threshold, with sentence matches as evidence. The
    /// overall score is the mean of the emitted combined scores, 0 when none
    /// survive. Empty target or reference text degrades to 0 scores, never
    /// an error.
    pub fn detect<D>(&self, target: &str, references: &[Reference<D>]) -> DetectionReport<D>
    where
        D: Clone + Send + Sync,
    {
        let span = tracing::span!(
            Level::INFO,
            "docsim.detect",
            target_chars = target.chars().count(),
            references = references.len()
        );
        let _guard = span.enter();

        let target_fingerprint = ShingleSet::fingerprint(target, self.cfg.shingle_k);

        let matches: Vec<ReferenceMatch<D>> = if self.cfg.use_parallel {
            references
                .par_iter()
                .filter_map(|r| self.compare_reference(target, &target_fingerprint, r))
                .collect()
        } else {
            references
                .iter()
                .filter_map(|r| self.compare_reference(target, &target_fingerprint, r))
                .collect()
        };

        let overall_score = if matches.is_empty() {
            0.0
        } else {
            matches.iter().map(|m| m.combined_score).sum::<f64>() / matches.len() as f64
        };

        info!(
            overall_score,
            surviving = matches.len(),
            compared = references.len(),
            "detection_complete"
        );

        DetectionReport {
            overall_score,
            matches,
        }
    }

    fn compare_reference<D: Clone>(
        &self,
        target: &str,
        target_fingerprint: &ShingleSet,
        reference: &Reference<D>,
    ) -> Option<ReferenceMatch<D>> {
        let cosine = vector::similarity(target, &reference.text);
        let reference_fingerprint = ShingleSet::fingerprint(&reference.text, self.cfg.shingle_k);
        let jaccard = target_fingerprint.jaccard(&reference_fingerprint);
        let combined_score = (cosine + jaccard) / 2.0;

        if combined_score <= self.cfg.significance_threshold {
            debug!(cosine, jaccard, combined_score, "reference_filtered");
            return None;
        }

        // Sentence evidence is the expensive part; only surviving references
        // pay for it. The score itself never depends on it.
        let sentence_matches = match_sentences(target, &reference.text, &self.cfg);
        debug!(
            cosine,
            jaccard,
            combined_score,
            sentence_matches = sentence_matches.len(),
            "reference_matched"
        );

        Some(ReferenceMatch {
            source: reference.source.clone(),
            combined_score,
            sentence_matches,
        })
    }
}

/// One-shot detection with the default config.
pub fn detect<D>(target: &str, references: &[Reference<D>]) -> DetectionReport<D>
where
    D: Clone + Send + Sync,
{
    DetectionEngine::new().detect(target, references)
}
