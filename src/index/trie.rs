// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Batch construction of the word trie.
//!
//! Build is one pass over every token of every document: walk the token's
//! characters from the root, creating nodes on the way, then count the
//! occurrence at the node where the token ends. Nothing is sorted or
//! compacted afterwards, so the cost is linear in the total number of
//! characters indexed and the node count is bounded by distinct prefixes.
//!
//! Once built, the index is only read. Searching takes `&self`, and the type
//! is `Send + Sync`, so a built index can sit behind an `Arc` and serve any
//! number of threads without locking.

use std::collections::HashMap;

use crate::contracts::{check_completion_counts, check_tree_shape};
use crate::types::{BuildError, DocId, IndexStats, TokenizedDocument};
use crate::util::normalize::normalize_query;

use super::node::{NodeId, TrieNode};

/// Word index over a fixed corpus.
#[derive(Debug, Clone)]
pub struct TrieIndex {
    /// `nodes[0]` is the root.
    nodes: Vec<TrieNode>,
    /// Document names by slot, in first-seen order.
    documents: Vec<String>,
    slots: HashMap<String, DocId>,
    total_words: u64,
}

impl Default for TrieIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieIndex {
    /// An index over the empty corpus.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            documents: Vec::new(),
            slots: HashMap::new(),
            total_words: 0,
        }
    }

    /// Build an index from a complete batch of documents.
    ///
    /// Documents are inserted in iteration order; that order is the ranking
    /// tiebreaker for equal frequencies. Fails on the first document with an
    /// empty id, in which case no index is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use wordex::{TokenizedDocument, TrieIndex};
    ///
    /// let index = TrieIndex::build(vec![
    ///     TokenizedDocument::from_words("a.txt", "cat dog cat"),
    ///     TokenizedDocument::from_words("b.txt", "cat"),
    /// ])
    /// .unwrap();
    ///
    /// let results = index.search("cat");
    /// assert_eq!(results[0].document_id, "a.txt");
    /// assert_eq!(results[0].frequency, 2);
    /// assert_eq!(results[0].word_count, 3);
    /// ```
    pub fn build<I>(documents: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = TokenizedDocument>,
    {
        let mut index = Self::new();
        for (position, doc) in documents.into_iter().enumerate() {
            if doc.id.is_empty() {
                return Err(BuildError::MissingDocumentId { position });
            }
            index.insert_document(&doc.id, &doc.tokens)?;
        }

        check_completion_counts(&index);
        check_tree_shape(&index);
        Ok(index)
    }

    /// Insert one document's tokens.
    ///
    /// A document id seen before keeps its original slot and its counts are
    /// merged. Documents without tokens are still registered.
    pub fn insert_document<I>(&mut self, id: &str, tokens: I) -> Result<DocId, BuildError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let doc = self.register_document(id)?;
        for token in tokens {
            self.insert_word(doc, token.as_ref());
        }
        Ok(doc)
    }

    fn register_document(&mut self, id: &str) -> Result<DocId, BuildError> {
        if id.is_empty() {
            return Err(BuildError::MissingDocumentId {
                position: self.documents.len(),
            });
        }
        if let Some(&doc) = self.slots.get(id) {
            return Ok(doc);
        }

        let slot = u32::try_from(self.documents.len()).map_err(|_| {
            BuildError::TooManyDocuments {
                limit: u32::MAX as usize,
            }
        })?;
        let doc = DocId(slot);
        self.documents.push(id.to_string());
        self.slots.insert(id.to_string(), doc);
        Ok(doc)
    }

    fn insert_word(&mut self, doc: DocId, word: &str) {
        let mut current = NodeId::ROOT;
        for ch in word.chars() {
            current = match self.nodes[current.as_usize()].child(ch) {
                Some(next) => next,
                None => {
                    let next = NodeId(self.nodes.len());
                    self.nodes.push(TrieNode::default());
                    self.nodes[current.as_usize()].link(ch, next);
                    next
                }
            };
        }

        self.nodes[current.as_usize()].record(doc);
        self.total_words += 1;
    }

    // =========================================================================
    // READ-ONLY ACCESS
    // =========================================================================

    /// Walk `key` from the root exactly as given (no normalization).
    ///
    /// Returns `None` at the first character without an edge.
    pub fn find_node(&self, key: &str) -> Option<&TrieNode> {
        let mut current = self.root();
        for ch in key.chars() {
            let next = current.child(ch)?;
            current = &self.nodes[next.as_usize()];
        }
        Some(current)
    }

    /// Whether any indexed word starts with the normalized `prefix`.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.find_node(&normalize_query(prefix)).is_some()
    }

    /// Corpus-wide occurrences of the normalized `term`; 0 when never indexed.
    pub fn word_count(&self, term: &str) -> u64 {
        self.find_node(&normalize_query(term))
            .map_or(0, TrieNode::completion_count)
    }

    pub fn root(&self) -> &TrieNode {
        &self.nodes[NodeId::ROOT.as_usize()]
    }

    /// Every node in the arena, root first.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &TrieNode> + '_ {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Document names in first-seen order; `documents()[doc.as_usize()]`.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn document_name(&self, doc: DocId) -> Option<&str> {
        self.documents.get(doc.as_usize()).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.total_words == 0
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.documents.len(),
            nodes: self.nodes.len(),
            distinct_words: self.nodes.iter().filter(|n| n.is_terminal()).count(),
            total_words: self.total_words,
        }
    }
}
