//! Reply selection for accepted (or rejected) matches.
//!
//! Randomness lives only here: curated entries pick a reply through an
//! injected RNG so tests can pin a seed while the matching path stays
//! fully deterministic.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{KnowledgeBase, ResponseMode};

/// Reply used whenever no subject clears the match threshold.
pub const FALLBACK_REPLY: &str = "Sorry, I didn't understand your question.";

/// Render the reply for an accepted tag, or the fallback for none.
pub fn select_reply<R: Rng + ?Sized>(
    kb: &KnowledgeBase,
    tag: Option<&str>,
    rng: &mut R,
) -> String {
    let entry = match tag.and_then(|t| kb.entry(t)) {
        Some(entry) => entry,
        None => return FALLBACK_REPLY.to_string(),
    };

    match entry.response_mode {
        ResponseMode::Templated => format!("Stock for {} is available.", entry.tag),
        ResponseMode::CuratedRandom => entry
            .responses
            .choose(rng)
            .cloned()
            // Unreachable for a validated catalog; curated entries must
            // carry at least one response.
            .unwrap_or_else(|| FALLBACK_REPLY.to_string()),
    }
}
