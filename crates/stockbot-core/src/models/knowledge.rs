//! Knowledge base models: the static catalog the matcher is built from.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reply policy for a knowledge entry, decided at catalog-authoring time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    /// Synthesize the stock-availability sentence from the tag.
    #[default]
    Templated,
    /// Pick uniformly at random from the entry's curated responses
    /// (e.g. discontinued items with special-cased messaging).
    CuratedRandom,
}

/// A single subject the bot can answer about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeEntry {
    /// Unique subject tag (a drug name)
    pub tag: String,
    /// Example phrasings a user might ask with
    pub patterns: Vec<String>,
    /// Curated replies; consulted only in `CuratedRandom` mode
    #[serde(default)]
    pub responses: Vec<String>,
    /// Reply policy for this entry
    #[serde(default)]
    pub response_mode: ResponseMode,
}

/// The catalog of known subjects. Loaded once at startup and immutable
/// for the lifetime of the engine built from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeBase {
    pub entries: Vec<KnowledgeEntry>,
}

/// Load-time errors. All of them are fatal: the process must not serve
/// classification requests from a partial or invalid catalog.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog has no entries")]
    Empty,

    #[error("Duplicate tag: {0}")]
    DuplicateTag(String),

    #[error("Entry '{0}' has no patterns")]
    NoPatterns(String),

    #[error("Entry '{0}' is curated-random but has no responses")]
    NoResponses(String),
}

impl KnowledgeBase {
    /// Parse and validate a catalog from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, KnowledgeError> {
        let kb: KnowledgeBase = serde_json::from_str(json)?;
        kb.validate()?;
        Ok(kb)
    }

    /// Read, parse, and validate a catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, KnowledgeError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Look up an entry by its tag.
    pub fn entry(&self, tag: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|e| e.tag == tag)
    }

    fn validate(&self) -> Result<(), KnowledgeError> {
        if self.entries.is_empty() {
            return Err(KnowledgeError::Empty);
        }
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.tag.as_str()) {
                return Err(KnowledgeError::DuplicateTag(entry.tag.clone()));
            }
            if entry.patterns.is_empty() {
                return Err(KnowledgeError::NoPatterns(entry.tag.clone()));
            }
            if entry.response_mode == ResponseMode::CuratedRandom && entry.responses.is_empty() {
                return Err(KnowledgeError::NoResponses(entry.tag.clone()));
            }
        }
        Ok(())
    }
}
