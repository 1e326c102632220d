//! Construct-once chat engine shared across requests.

use std::path::Path;

use rand::Rng;
use tracing::info;

use crate::matcher::IntentMatcher;
use crate::models::{KnowledgeBase, KnowledgeError, MatchResult, MatcherConfig};
use crate::responder::select_reply;

/// Immutable matching engine.
///
/// Build one at startup and share it by reference (or behind an `Arc`)
/// with every request handler. A catalog reload means building a fully
/// new engine and swapping the handle atomically; nothing here is ever
/// mutated after construction, so concurrent reads need no locking.
pub struct ChatEngine {
    kb: KnowledgeBase,
    matcher: IntentMatcher,
}

impl ChatEngine {
    /// Build the engine from a loaded knowledge base. All load-time work
    /// (vocabulary, vector space, pattern vectors) happens here, once.
    pub fn new(kb: KnowledgeBase, config: MatcherConfig) -> Self {
        let matcher = IntentMatcher::new(&kb, config);
        info!(
            entries = kb.entries.len(),
            vocabulary = matcher.corrector().vocabulary_len(),
            "chat engine ready"
        );
        Self { kb, matcher }
    }

    /// Load a catalog file and build the engine from it.
    pub fn from_path(
        path: impl AsRef<Path>,
        config: MatcherConfig,
    ) -> Result<Self, KnowledgeError> {
        Ok(Self::new(KnowledgeBase::from_path(path)?, config))
    }

    /// The loaded knowledge base.
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Classify one input to a tag-or-none with its similarity score.
    pub fn classify(&self, input: &str) -> MatchResult {
        self.matcher.classify(input)
    }

    /// Full pipeline: classify and render the reply. Always returns a
    /// string; unmatched input degrades to the fallback reply.
    pub fn reply(&self, input: &str) -> String {
        self.reply_with_rng(input, &mut rand::thread_rng())
    }

    /// Like [`reply`](Self::reply), with the RNG injected so curated
    /// replies can be made reproducible in tests.
    pub fn reply_with_rng<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> String {
        let result = self.classify(input);
        select_reply(&self.kb, result.tag.as_deref(), rng)
    }
}
