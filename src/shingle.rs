//! Word k-gram fingerprints and Jaccard comparison.
//!
//! A document's fingerprint is the set of every contiguous k-word window of
//! its normalized text. Windows are hashed (seeded xxh3 over the
//! space-joined words) so set membership is cheap; Jaccard over the hash
//! sets matches Jaccard over the underlying word sequences.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64_with_seed;

use crate::normalize::{normalize, words};

/// Fixed seed so fingerprints are comparable across processes and runs.
const SHINGLE_SEED: u64 = 0x00D5_13D0_C51A_17E5;

/// Set of hashed k-word shingles for one document.
///
/// Order-insensitive, duplicates collapsed. Two fingerprints are only
/// comparable when built with the same `k`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShingleSet {
    hashes: HashSet<u64>,
}

impl ShingleSet {
    /// Fingerprint raw text with k-word shingles.
    ///
    /// The text is normalized, split into words, and every window of `k`
    /// consecutive words becomes one shingle. Texts with fewer than `k`
    /// words (including empty text, or `k == 0`) produce an empty set.
    pub fn fingerprint(text: &str, k: usize) -> Self {
        let normalized = normalize(text);
        let tokens: Vec<&str> = words(&normalized).collect();
        if k == 0 || tokens.len() < k {
            return Self::default();
        }

        let mut hashes = HashSet::with_capacity(tokens.len() - k + 1);
        let mut buf = String::new();
        for window in tokens.windows(k) {
            buf.clear();
            for (i, word) in window.iter().enumerate() {
                if i > 0 {
                    buf.push(' ');
                }
                buf.push_str(word);
            }
            hashes.insert(xxh3_64_with_seed(buf.as_bytes(), SHINGLE_SEED));
        }
        Self { hashes }
    }

    /// Number of distinct shingles.
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Jaccard similarity against another fingerprint, as a percentage.
    ///
    /// |A ∩ B| / |A ∪ B| × 100; defined as 0 when both sets are empty.
    pub fn jaccard(&self, other: &Self) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (&self.hashes, &other.hashes)
        } else {
            (&other.hashes, &self.hashes)
        };
        let intersection = small.iter().filter(|h| large.contains(h)).count();
        let union = self.len() + other.len() - intersection;
        if union == 0 {
            return 0.0;
        }
        (intersection as f64 / union as f64) * 100.0
    }
}
