//! Typo correction against the pattern vocabulary.
//!
//! Each input word is snapped to the closest known vocabulary word when the
//! similarity clears the cutoff; otherwise it is kept unchanged.

use std::collections::BTreeSet;

use strsim::{jaro_winkler, normalized_levenshtein};

/// Combined word similarity: Jaro-Winkler is strong on typos and shared
/// prefixes, normalized Levenshtein on overall edit distance.
pub(crate) fn fuzzy_score(a: &str, b: &str) -> f64 {
    jaro_winkler(a, b) * 0.6 + normalized_levenshtein(a, b) * 0.4
}

/// Vocabulary-driven spelling corrector.
///
/// The vocabulary is an ordered set of every whitespace-delimited lowercase
/// word across the catalog patterns. Ordering matters: candidates are
/// scanned in lexicographic order with a strict-greater comparison, so ties
/// resolve to the lexicographically smallest word on every run.
#[derive(Debug, Clone)]
pub struct Corrector {
    vocabulary: BTreeSet<String>,
    cutoff: f64,
}

impl Corrector {
    /// Build the vocabulary from all pattern strings.
    pub fn from_patterns<'a>(patterns: impl IntoIterator<Item = &'a str>, cutoff: f64) -> Self {
        let vocabulary = patterns
            .into_iter()
            .flat_map(str::split_whitespace)
            .map(str::to_lowercase)
            .collect();
        Self { vocabulary, cutoff }
    }

    /// Whether a word is already known.
    pub fn contains(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    /// Number of distinct vocabulary words.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Correct a whole input line. Pure function of the input and the
    /// vocabulary; an input with no tokens yields the empty string.
    pub fn correct(&self, input: &str) -> String {
        input
            .split_whitespace()
            .map(|word| self.correct_word(&word.to_lowercase()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Best vocabulary candidate at or above the cutoff, else the word
    /// unchanged. An exact vocabulary word matches itself at 1.0.
    fn correct_word(&self, word: &str) -> String {
        if self.vocabulary.contains(word) {
            return word.to_string();
        }

        let mut best: Option<(&str, f64)> = None;
        for candidate in &self.vocabulary {
            let score = fuzzy_score(word, candidate);
            if score >= self.cutoff && best.map_or(true, |(_, s)| score > s) {
                best = Some((candidate, score));
            }
        }

        match best {
            Some((candidate, _)) => candidate.to_string(),
            None => word.to_string(),
        }
    }
}
