//! The intent matching pipeline.
//!
//! Pipeline: Typo Correction → Count Vectorization → Cosine Classification

mod classifier;
mod corrector;
mod vectorizer;

pub use classifier::*;
pub use corrector::*;
pub use vectorizer::*;

use tracing::debug;

use crate::models::{KnowledgeBase, MatchResult, MatcherConfig};

/// The full matching pipeline, built once per loaded knowledge base.
///
/// All load-time structures (vocabulary, vector space, pattern vectors) are
/// learned here and never mutated afterwards, so one matcher can be shared
/// by concurrent readers.
pub struct IntentMatcher {
    corrector: Corrector,
    space: VectorSpace,
    classifier: Classifier,
}

impl IntentMatcher {
    /// Flatten the knowledge base into the training index (parallel
    /// pattern/tag sequences), learn the vector space, and precompute one
    /// vector per pattern.
    pub fn new(kb: &KnowledgeBase, config: MatcherConfig) -> Self {
        let mut patterns = Vec::new();
        let mut tags = Vec::new();
        for entry in &kb.entries {
            for pattern in &entry.patterns {
                patterns.push(pattern.to_lowercase());
                tags.push(entry.tag.clone());
            }
        }

        let corrector = Corrector::from_patterns(
            patterns.iter().map(String::as_str),
            config.correction_cutoff,
        );
        let space = VectorSpace::fit(patterns.iter().map(String::as_str));
        let pattern_vectors: Vec<Vec<f64>> =
            patterns.iter().map(|p| space.encode(p)).collect();
        let classifier = Classifier::new(tags, pattern_vectors, config.match_threshold);

        Self {
            corrector,
            space,
            classifier,
        }
    }

    /// Classify one input. Pure and total: empty or unmatchable input
    /// resolves to a `MatchResult` with no tag, never an error.
    pub fn classify(&self, input: &str) -> MatchResult {
        let corrected = self.corrector.correct(input);
        debug!(corrected = %corrected, "corrected input");
        let query = self.space.encode(&corrected);
        self.classifier.classify(&query)
    }

    /// The typo corrector, for direct access.
    pub fn corrector(&self) -> &Corrector {
        &self.corrector
    }

    /// The vector space, for direct access.
    pub fn vector_space(&self) -> &VectorSpace {
        &self.space
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{KnowledgeEntry, ResponseMode};

    fn setup_kb() -> KnowledgeBase {
        KnowledgeBase {
            entries: vec![
                KnowledgeEntry {
                    tag: "Amoxicillin".into(),
                    patterns: vec![
                        "do you have amoxicillin in stock".into(),
                        "is there amoxicillin available".into(),
                    ],
                    responses: vec![],
                    response_mode: ResponseMode::Templated,
                },
                KnowledgeEntry {
                    tag: "Ibuprofen".into(),
                    patterns: vec!["do you have ibuprofen in stock".into()],
                    responses: vec![],
                    response_mode: ResponseMode::Templated,
                },
            ],
        }
    }

    #[test]
    fn test_self_match_every_pattern() {
        let kb = setup_kb();
        let matcher = IntentMatcher::new(&kb, MatcherConfig::default());

        for entry in &kb.entries {
            for pattern in &entry.patterns {
                let result = matcher.classify(pattern);
                assert_eq!(result.tag.as_deref(), Some(entry.tag.as_str()));
                assert!(
                    (result.score - 1.0).abs() < 1e-9,
                    "self-match for '{}' scored {}",
                    pattern,
                    result.score
                );
            }
        }
    }

    #[test]
    fn test_typo_still_matches() {
        let kb = setup_kb();
        let matcher = IntentMatcher::new(&kb, MatcherConfig::default());

        let result = matcher.classify("do you hav amoxicillin in stok");
        assert_eq!(result.tag.as_deref(), Some("Amoxicillin"));
        assert!((result.score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_input_is_no_match() {
        let kb = setup_kb();
        let matcher = IntentMatcher::new(&kb, MatcherConfig::default());

        let result = matcher.classify("completely unrelated gibberish zzzxq");
        assert!(result.tag.is_none());
    }

    #[test]
    fn test_empty_input_is_no_match() {
        let kb = setup_kb();
        let matcher = IntentMatcher::new(&kb, MatcherConfig::default());

        let result = matcher.classify("");
        assert!(result.tag.is_none());
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let kb = setup_kb();
        let matcher = IntentMatcher::new(&kb, MatcherConfig::default());

        let a = matcher.classify("do you have amoxicillin");
        let b = matcher.classify("do you have amoxicillin");
        assert_eq!(a, b);
    }
}
