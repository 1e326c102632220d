//! Fixed-vocabulary term-frequency vector space.
//!
//! The term set is learned once from all catalog patterns; encoding later
//! text never grows it. Out-of-vocabulary terms contribute nothing.

use std::collections::HashMap;

/// Tokenize into lowercase words, splitting on anything non-alphanumeric.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Count-vector encoder over a vocabulary learned from the patterns.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    /// term → dimension index
    vocabulary: HashMap<String, usize>,
}

impl VectorSpace {
    /// Learn the term set. Called exactly once per knowledge base load,
    /// before any encoding.
    pub fn fit<'a>(patterns: impl IntoIterator<Item = &'a str>) -> Self {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        for pattern in patterns {
            for token in tokenize(pattern) {
                let next = vocabulary.len();
                vocabulary.entry(token).or_insert(next);
            }
        }
        Self { vocabulary }
    }

    /// Number of dimensions (distinct terms).
    pub fn dims(&self) -> usize {
        self.vocabulary.len()
    }

    /// Encode text as a term-count vector. Deterministic, never errors,
    /// never mutates the vocabulary.
    pub fn encode(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];
        for token in tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                vector[idx] += 1.0;
            }
        }
        vector
    }
}
