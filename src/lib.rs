// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word-frequency search over a document corpus.
//!
//! Documents are tokenized into words and inserted into a character trie.
//! Each node where a word ends keeps two numbers: how often the word occurs
//! in the whole corpus, and how often in each document. A lookup walks the
//! query's characters and reads those numbers off the last node, so its cost
//! is the query length plus the number of documents returned.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   build/    │────▶│   index/     │────▶│  search/    │
//! │ (files →    │     │ (TrieIndex,  │     │ (normalize, │
//! │  tokens)    │     │  TrieNode)   │     │  walk, rank)│
//! └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! The index is built once from a complete batch and only read afterwards.
//! `TrieIndex` is `Send + Sync`; share it behind an `Arc` for concurrent
//! queries.
//!
//! # Usage
//!
//! ```
//! use wordex::{TokenizedDocument, TrieIndex};
//!
//! let index = TrieIndex::build(vec![
//!     TokenizedDocument::from_words("a.html", "rust trie rust"),
//!     TokenizedDocument::from_words("b.html", "rust"),
//! ])
//! .unwrap();
//!
//! let results = index.search_with_limit(" Rust ", Some(1));
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].document_id, "a.html");
//! assert_eq!(results[0].word_count, 3);
//! ```

pub mod build;
pub mod contracts;
pub mod index;
pub mod search;
pub mod testing;
mod types;
pub mod util;

pub use index::{NodeId, TrieIndex, TrieNode};
pub use search::ranking::compare_hits;
pub use types::{BuildError, DocId, IndexStats, SearchResult, TokenizedDocument};
pub use util::normalize::{fold, normalize_query};
