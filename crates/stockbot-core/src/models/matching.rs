//! Matching results and pipeline tunables.

use serde::{Deserialize, Serialize};

/// Outcome of classifying one input against the knowledge base.
///
/// Produced fresh per query; never retained by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Accepted subject tag, or `None` when no pattern cleared the threshold
    pub tag: Option<String>,
    /// Cosine similarity of the best pattern, in [0, 1]
    pub score: f64,
}

impl MatchResult {
    /// No pattern matched at all (empty or fully out-of-vocabulary input).
    pub fn no_match() -> Self {
        Self {
            tag: None,
            score: 0.0,
        }
    }
}

/// Tunable thresholds for the matching pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MatcherConfig {
    /// Minimum cosine similarity (strict greater-than) for a match to be
    /// accepted rather than resolved as no-match.
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,
    /// Minimum word similarity for a typo to be snapped onto a vocabulary
    /// word by the corrector.
    #[serde(default = "default_correction_cutoff")]
    pub correction_cutoff: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            match_threshold: default_match_threshold(),
            correction_cutoff: default_correction_cutoff(),
        }
    }
}

fn default_match_threshold() -> f64 {
    0.5
}

fn default_correction_cutoff() -> f64 {
    0.8
}
