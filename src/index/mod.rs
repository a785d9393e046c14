// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the word trie and its nodes.
//!
//! One character per edge, statistics on the node where a word ends. Prefixes
//! share nodes, so a corpus with a million tokens but a few thousand distinct
//! words stays small.

mod node;
mod trie;

pub use node::*;
pub use trie::*;
