// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact-word lookup against a built index.
//!
//! A query is normalized (whitespace removed, case folded), walked through the
//! trie one character at a time, and the node where it ends supplies the
//! answer: one row per document that contains the word, most frequent first.
//! A missing edge anywhere on the way means the word was never indexed, and
//! the walk stops there.

pub mod ranking;

use crate::contracts::check_results_ranked;
use crate::index::TrieIndex;
use crate::types::SearchResult;
use crate::util::normalize::normalize_query;

use ranking::compare_hits;

impl TrieIndex {
    /// Every document containing `query`, most frequent first.
    ///
    /// Shorthand for [`search_with_limit`](Self::search_with_limit) with no
    /// limit.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        self.search_with_limit(query, None)
    }

    /// At most `limit` documents containing `query`, most frequent first.
    ///
    /// Documents with equal frequency come back in the order they were first
    /// seen during build. An unknown word yields an empty vector; there is no
    /// error case.
    pub fn search_with_limit(&self, query: &str, limit: Option<usize>) -> Vec<SearchResult> {
        let key = normalize_query(query);
        let Some(node) = self.find_node(&key) else {
            return Vec::new();
        };

        if !node.is_terminal() || limit == Some(0) {
            return Vec::new();
        }

        let mut hits: Vec<_> = node.document_frequencies().collect();
        hits.sort_by(compare_hits);
        if let Some(limit) = limit {
            hits.truncate(limit);
        }

        let word_count = node.completion_count();
        let results: Vec<SearchResult> = hits
            .into_iter()
            .filter_map(|(doc, frequency)| {
                self.document_name(doc).map(|name| SearchResult {
                    document_id: name.to_string(),
                    frequency,
                    word_count,
                })
            })
            .collect();

        check_results_ranked(&results, limit);
        results
    }
}
