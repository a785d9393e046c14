// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the lookup API to verify it never
//! panics, never mutates the index, and always returns ranked, bounded rows.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;
use wordex::{TokenizedDocument, TrieIndex};

fn corpus() -> Vec<TokenizedDocument> {
    vec![
        TokenizedDocument::from_words("a.html", "cat car cart cat naïve 日本 日本語 🦀"),
        TokenizedDocument::from_words("b.html", "cat dog dog c++ naive"),
        TokenizedDocument::from_words("c.html", "cart cart cart dog"),
        TokenizedDocument::from_words("d.html", ""),
    ]
}

fuzz_target!(|data: &[u8]| {
    static INDEX: OnceLock<TrieIndex> = OnceLock::new();
    let index = INDEX.get_or_init(|| TrieIndex::build(corpus()).expect("corpus has ids"));

    let Some((&limit_byte, query)) = data.split_first() else {
        return;
    };
    // Cap query length to avoid timeout
    let query: String = String::from_utf8_lossy(query).chars().take(200).collect();
    let limit = (limit_byte < 200).then_some(usize::from(limit_byte % 8));

    let nodes_before = index.node_count();

    // INVARIANT 1: search never panics
    let results = index.search_with_limit(&query, limit);

    // INVARIANT 2: bounded by limit
    if let Some(limit) = limit {
        assert!(results.len() <= limit, "{} results over limit {}", results.len(), limit);
    }

    // INVARIANT 3: sorted, positive, consistent word count
    for pair in results.windows(2) {
        assert!(pair[0].frequency >= pair[1].frequency);
        assert_eq!(pair[0].word_count, pair[1].word_count);
    }
    for row in &results {
        assert!(row.frequency > 0);
        assert!(row.frequency <= row.word_count);
        assert!(index.documents().contains(&row.document_id));
    }

    // INVARIANT 4: read-only
    assert_eq!(index.node_count(), nodes_before);
});
