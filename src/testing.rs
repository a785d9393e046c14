// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::index::TrieIndex;
use crate::types::TokenizedDocument;

/// Build a document whose tokens are `term` repeated `count` times.
pub fn make_repeated_doc(id: &str, term: &str, count: u32) -> TokenizedDocument {
    TokenizedDocument::new(id, (0..count).map(|_| term.to_string()).collect())
}

/// Build an index from `(id, whitespace-separated words)` pairs.
pub fn build_from_words(docs: &[(&str, &str)]) -> TrieIndex {
    TrieIndex::build(
        docs.iter()
            .map(|(id, words)| TokenizedDocument::from_words(*id, words)),
    )
    .expect("test documents have ids")
}

/// Build an index where each document holds `term` a given number of times.
pub fn build_from_counts(term: &str, counts: &[(&str, u32)]) -> TrieIndex {
    TrieIndex::build(
        counts
            .iter()
            .map(|(id, count)| make_repeated_doc(id, term, *count)),
    )
    .expect("test documents have ids")
}
