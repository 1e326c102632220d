//! Cosine-similarity classification with a rejection threshold.

use crate::models::MatchResult;

/// Cosine similarity: dot product over the product of Euclidean norms,
/// 0.0 (not undefined) when either vector is zero.
pub(crate) fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Scores queries against the pre-encoded pattern vectors.
///
/// `tags[i]` owns `pattern_vectors[i]`; both orderings are fixed when the
/// knowledge base is loaded.
pub struct Classifier {
    tags: Vec<String>,
    pattern_vectors: Vec<Vec<f64>>,
    threshold: f64,
}

impl Classifier {
    /// Build from the training index. `tags` and `pattern_vectors` must be
    /// parallel sequences.
    pub fn new(tags: Vec<String>, pattern_vectors: Vec<Vec<f64>>, threshold: f64) -> Self {
        debug_assert_eq!(tags.len(), pattern_vectors.len());
        Self {
            tags,
            pattern_vectors,
            threshold,
        }
    }

    /// Best pattern by cosine similarity, ties broken by smallest index.
    /// The tag is accepted only strictly above the threshold.
    pub fn classify(&self, query: &[f64]) -> MatchResult {
        let mut best_idx = 0usize;
        let mut best_score = -1.0f64;
        for (idx, pattern) in self.pattern_vectors.iter().enumerate() {
            let score = cosine_similarity(query, pattern);
            if score > best_score {
                best_idx = idx;
                best_score = score;
            }
        }

        if best_score > self.threshold {
            MatchResult {
                tag: Some(self.tags[best_idx].clone()),
                score: best_score,
            }
        } else {
            MatchResult {
                tag: None,
                score: best_score.max(0.0),
            }
        }
    }
}
