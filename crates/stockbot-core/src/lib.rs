//! Stockbot Core Library
//!
//! Conversational intent matching for a pharmacy stock chatbot: given a
//! free-text question, identify which catalog subject (drug name) the user
//! is asking about while tolerating misspellings, then produce a reply.
//!
//! # Architecture
//!
//! ```text
//! raw text → Corrector → VectorSpace (encode) → Classifier → tag-or-none
//!                                                                 │
//!                                                          Response Selector
//!                                                                 │
//!                                                             reply string
//! ```
//!
//! The vocabulary, the vector space, and every pattern vector are learned
//! once when a [`KnowledgeBase`] is loaded. The resulting [`ChatEngine`] is
//! immutable and can be shared across concurrent readers; a catalog reload
//! means building a fresh engine and swapping the handle.
//!
//! # Modules
//!
//! - [`models`]: Domain types (KnowledgeBase, MatchResult, MatcherConfig)
//! - [`matcher`]: The matching pipeline (corrector + vectorizer + classifier)
//! - [`responder`]: Reply selection (templated or curated-random)
//! - [`engine`]: Construct-once facade over the whole pipeline

pub mod engine;
pub mod matcher;
pub mod models;
pub mod responder;

// Re-export commonly used types
pub use engine::ChatEngine;
pub use matcher::IntentMatcher;
pub use models::{
    KnowledgeBase, KnowledgeEntry, KnowledgeError, MatchResult, MatcherConfig, ResponseMode,
};
pub use responder::FALLBACK_REPLY;
