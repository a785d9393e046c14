//! Structural invariants of a built index.

use proptest::prelude::*;
use std::collections::HashMap;

use super::{corpus_strategy, unicode_word_strategy, word_strategy};
use crate::common::assert_index_well_formed;
use wordex::{TokenizedDocument, TrieIndex};

fn build(corpus: &[(String, Vec<String>)]) -> TrieIndex {
    TrieIndex::build(
        corpus
            .iter()
            .map(|(id, tokens)| TokenizedDocument::new(id.clone(), tokens.clone())),
    )
    .unwrap()
}

proptest! {
    /// Property: every node's completion count is the sum of its per-document
    /// frequencies.
    #[test]
    fn prop_completion_count_is_frequency_sum(corpus in corpus_strategy()) {
        let index = build(&corpus);
        assert_index_well_formed(&index);
    }

    /// Property: word counts agree with a naive count over the input.
    #[test]
    fn prop_word_count_matches_naive_count(corpus in corpus_strategy()) {
        let index = build(&corpus);

        let mut expected: HashMap<&str, u64> = HashMap::new();
        for (_, tokens) in &corpus {
            for token in tokens {
                *expected.entry(token.as_str()).or_insert(0) += 1;
            }
        }

        for (word, count) in &expected {
            prop_assert_eq!(index.word_count(word), *count);
        }
        prop_assert_eq!(index.stats().distinct_words, expected.len());
    }

    /// Property: inserting a pair twice adds exactly two to its counts.
    #[test]
    fn prop_double_insert_adds_two(corpus in corpus_strategy(), word in word_strategy()) {
        let mut index = build(&corpus);
        let before = index.word_count(&word);

        let doc = index.insert_document("extra", [word.as_str(), word.as_str()]).unwrap();

        prop_assert_eq!(index.word_count(&word), before + 2);
        prop_assert_eq!(index.find_node(&word).unwrap().frequency(doc), 2);
    }

    /// Property: the node count never exceeds one per indexed character plus
    /// the root.
    #[test]
    fn prop_node_count_bounded_by_characters(corpus in corpus_strategy()) {
        let index = build(&corpus);
        let chars: usize = corpus
            .iter()
            .flat_map(|(_, tokens)| tokens.iter())
            .map(|t| t.chars().count())
            .sum();
        prop_assert!(index.node_count() <= chars + 1);
    }

    /// Property: Unicode tokens are indexed by character and found again by a
    /// raw key walk.
    #[test]
    fn prop_unicode_words_round_trip(words in prop::collection::vec(unicode_word_strategy(), 1..10)) {
        let index = TrieIndex::build(vec![TokenizedDocument::new("u", words.clone())]).unwrap();
        assert_index_well_formed(&index);
        for word in &words {
            let node = index.find_node(word);
            prop_assert!(node.is_some_and(|n| n.is_terminal()), "{} should be indexed", word);
        }
    }
}
