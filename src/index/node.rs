// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Trie nodes and the arena handles that link them.
//!
//! Nodes live in one `Vec<TrieNode>` owned by the index. A child edge is a
//! `char` mapped to the child's `NodeId`, and every `NodeId` except the root's
//! appears in exactly one parent's child map. That keeps the structure a tree
//! without recursive ownership or reference counting.
//!
//! A node only carries statistics when some word terminates exactly at it:
//! `completion_count` is the corpus-wide occurrence count of that word and
//! `document_frequencies` splits the same count per document.

use std::collections::{BTreeMap, HashMap};

use crate::types::DocId;

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The empty prefix.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

/// One character position in the prefix tree.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: HashMap<char, NodeId>,
    completion_count: u64,
    /// Keyed by slot, so iteration yields documents in first-seen order.
    document_frequencies: BTreeMap<DocId, u64>,
}

impl TrieNode {
    /// Follow the edge labelled `ch`, if one exists.
    #[inline]
    pub fn child(&self, ch: char) -> Option<NodeId> {
        self.children.get(&ch).copied()
    }

    /// Outgoing edges, in no particular order.
    pub fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.children.iter().map(|(&ch, &id)| (ch, id))
    }

    /// Times a word ending exactly here was inserted, across all documents.
    #[inline]
    pub fn completion_count(&self) -> u64 {
        self.completion_count
    }

    /// True when at least one indexed word ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.completion_count > 0
    }

    /// Occurrences of this node's word in `doc`; 0 when absent.
    pub fn frequency(&self, doc: DocId) -> u64 {
        self.document_frequencies.get(&doc).copied().unwrap_or(0)
    }

    /// Per-document counts in first-seen document order.
    pub fn document_frequencies(&self) -> impl ExactSizeIterator<Item = (DocId, u64)> + '_ {
        self.document_frequencies.iter().map(|(&doc, &freq)| (doc, freq))
    }

    pub(crate) fn link(&mut self, ch: char, child: NodeId) {
        self.children.insert(ch, child);
    }

    /// Count one occurrence of the word ending here in `doc`.
    pub(crate) fn record(&mut self, doc: DocId) {
        self.completion_count += 1;
        *self.document_frequencies.entry(doc).or_insert(0) += 1;
    }
}
