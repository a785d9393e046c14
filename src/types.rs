// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that cross the index boundary.
//!
//! Documents come in as `TokenizedDocument` (an id plus already-normalized
//! words), results go out as `SearchResult`. Inside the index a document is a
//! `DocId`: its position in first-seen order. That position doubles as the
//! ranking tiebreaker, so it is never reassigned.
//!
//! # Invariants
//!
//! - **DocId**: `doc_id < index.documents().len()`. Ids are handed out
//!   sequentially by the index and never reused.
//! - **SearchResult**: `frequency ≥ 1` and `frequency ≤ word_count`. A row only
//!   exists for a document that contains the term.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Type-safe document slot inside a built index.
///
/// Slots are assigned in the order documents are first seen during build, so
/// comparing two `DocId`s compares their first-seen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    /// Position in `TrieIndex::documents()`.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

// =============================================================================
// INPUT
// =============================================================================

/// One document as handed to the index: a name and its word stream.
///
/// Tokens are expected to be folded the same way queries are (see
/// [`crate::fold`]); the index stores them verbatim.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenizedDocument {
    pub id: String,
    #[serde(default)]
    pub tokens: Vec<String>,
}

impl TokenizedDocument {
    pub fn new(id: impl Into<String>, tokens: Vec<String>) -> Self {
        Self {
            id: id.into(),
            tokens,
        }
    }

    /// Build a document from a whitespace-separated word list.
    pub fn from_words(id: impl Into<String>, words: &str) -> Self {
        Self::new(id, words.split_whitespace().map(str::to_string).collect())
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// One row of a ranked lookup.
///
/// `word_count` is an index-wide quantity: the total number of times the
/// queried term occurs in the corpus. It is the same on every row of a result.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub document_id: String,
    pub frequency: u64,
    pub word_count: u64,
}

/// Shape of a built index, for build summaries.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    /// Distinct documents registered, including ones with no tokens.
    pub documents: usize,
    /// Trie nodes, root included.
    pub nodes: usize,
    /// Distinct words (terminal nodes).
    pub distinct_words: usize,
    /// Total tokens inserted.
    pub total_words: u64,
}

// =============================================================================
// ERRORS
// =============================================================================

/// Malformed input rejected at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A document entry has an empty identifier.
    MissingDocumentId { position: usize },
    /// More documents than a `DocId` can address.
    TooManyDocuments { limit: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingDocumentId { position } => {
                write!(f, "document at position {} has no identifier", position)
            }
            BuildError::TooManyDocuments { limit } => {
                write!(f, "corpus exceeds {} documents", limit)
            }
        }
    }
}

impl std::error::Error for BuildError {}
