//! Tests for lookup, ranking and truncation.

use std::sync::Arc;
use std::thread;

use crate::common::{build_from_counts, build_from_words, ranked};
use wordex::{TokenizedDocument, TrieIndex};

#[test]
fn test_ranking_by_descending_frequency() {
    let index = build_from_counts("term", &[("A", 5), ("B", 9), ("C", 1)]);
    let results = index.search("term");

    assert_eq!(ranked(&results), vec![("B", 9), ("A", 5), ("C", 1)]);
    assert!(results.iter().all(|r| r.word_count == 15));
}

#[test]
fn test_limit_keeps_highest_three() {
    let counts: Vec<(String, u32)> = (1..=10).map(|i| (format!("doc{:02}", i), i)).collect();
    let borrowed: Vec<(&str, u32)> = counts.iter().map(|(id, c)| (id.as_str(), *c)).collect();
    let index = build_from_counts("term", &borrowed);

    let results = index.search_with_limit("term", Some(3));
    assert_eq!(
        ranked(&results),
        vec![("doc10", 10), ("doc09", 9), ("doc08", 8)]
    );
}

#[test]
fn test_limit_larger_than_matches() {
    let index = build_from_counts("term", &[("a", 1), ("b", 2)]);
    assert_eq!(index.search_with_limit("term", Some(50)).len(), 2);
}

#[test]
fn test_zero_limit_returns_nothing() {
    let index = build_from_counts("term", &[("a", 1)]);
    assert!(index.search_with_limit("term", Some(0)).is_empty());
}

#[test]
fn test_ties_keep_first_seen_order() {
    let index = build_from_counts("term", &[("first", 2), ("big", 7), ("second", 2), ("third", 2)]);
    let ids: Vec<String> = index.search("term").into_iter().map(|r| r.document_id).collect();
    assert_eq!(ids, vec!["big", "first", "second", "third"]);
}

#[test]
fn test_case_and_whitespace_normalization() {
    let index = build_from_words(&[("a", "cat cat dog"), ("b", "cat")]);
    assert_eq!(index.search(" CAT "), index.search("cat"));
    assert_eq!(index.search("c a\tt"), index.search("cat"));
    assert!(!index.search("cat").is_empty());
}

#[test]
fn test_missing_edge_short_circuits_without_mutation() {
    let index = build_from_words(&[("a", "cart car")]);
    let nodes_before = index.node_count();

    assert!(index.search("cab").is_empty());
    assert!(index.search("xyz").is_empty());
    assert!(index.search("cartography").is_empty());
    assert_eq!(index.node_count(), nodes_before);
}

#[test]
fn test_prefix_without_completion_is_empty() {
    let index = build_from_words(&[("a", "cart")]);
    assert!(index.search("ca").is_empty());
    assert!(index.search("car").is_empty());
    assert_eq!(index.search("cart").len(), 1);
}

#[test]
fn test_empty_query_is_empty() {
    let index = build_from_words(&[("a", "cat")]);
    assert!(index.search("").is_empty());
    assert!(index.search("   ").is_empty());
}

#[test]
fn test_empty_corpus_search() {
    let index = TrieIndex::build(Vec::<TokenizedDocument>::new()).unwrap();
    assert!(index.search("anything").is_empty());
    assert!(index.search_with_limit("anything", Some(3)).is_empty());
}

#[test]
fn test_word_count_is_corpus_total() {
    let index = build_from_words(&[("a", "cat cat"), ("b", "cat"), ("c", "dog")]);
    let results = index.search_with_limit("cat", Some(1));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].word_count, 3);
}

#[test]
fn test_concurrent_readers_see_same_results() {
    let index = Arc::new(build_from_counts("term", &[("a", 3), ("b", 1), ("c", 2)]));
    let expected = index.search("term");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || index.search("TERM"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
