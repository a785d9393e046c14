//! Tests for trie construction and node bookkeeping.

use crate::common::{assert_index_well_formed, build_from_tokens, build_from_words};
use wordex::{BuildError, DocId, TokenizedDocument, TrieIndex};

#[test]
fn test_completion_count_matches_document_frequencies() {
    let index = build_from_words(&[
        ("a.html", "cat car cart cat cat"),
        ("b.html", "car dog cat"),
        ("c.html", "dog dog"),
    ]);
    assert_index_well_formed(&index);

    let cat = index.find_node("cat").expect("cat is indexed");
    assert_eq!(cat.completion_count(), 4);
    let per_doc: Vec<(DocId, u64)> = cat.document_frequencies().collect();
    assert_eq!(per_doc, vec![(DocId(0), 3), (DocId(1), 1)]);
}

#[test]
fn test_same_pair_twice_counts_two() {
    let once = build_from_tokens(&[("a", &["cat"])]);
    let twice = build_from_tokens(&[("a", &["cat", "cat"])]);

    let once_node = once.find_node("cat").unwrap();
    let twice_node = twice.find_node("cat").unwrap();
    assert_eq!(twice_node.frequency(DocId(0)), 2);
    assert_eq!(twice_node.completion_count(), once_node.completion_count() + 1);
    assert_eq!(twice.node_count(), once.node_count());
}

#[test]
fn test_repeated_insert_adds_exactly_two() {
    let mut index = TrieIndex::new();
    let doc = index.insert_document("a", ["dog"]).unwrap();
    let before = index.word_count("cat");

    index.insert_document("a", ["cat"]).unwrap();
    index.insert_document("a", ["cat"]).unwrap();

    assert_eq!(index.word_count("cat"), before + 2);
    assert_eq!(index.find_node("cat").unwrap().frequency(doc), 2);
}

#[test]
fn test_empty_token_sequence_adds_no_nodes() {
    let base = build_from_words(&[("a", "cat")]);
    let with_empty = build_from_words(&[("a", "cat"), ("b", "")]);

    assert_eq!(base.node_count(), with_empty.node_count());
    assert_eq!(with_empty.documents().len(), 2);
    assert!(with_empty.search("cat").iter().all(|r| r.document_id == "a"));
}

#[test]
fn test_shared_word_uses_one_terminal_node() {
    let index = build_from_words(&[("a", "trie"), ("b", "trie"), ("c", "trie")]);
    // root + t, r, i, e
    assert_eq!(index.node_count(), 5);
    assert_eq!(index.find_node("trie").unwrap().document_frequencies().len(), 3);
}

#[test]
fn test_empty_corpus_builds() {
    let index = TrieIndex::build(Vec::<TokenizedDocument>::new()).unwrap();
    assert!(index.is_empty());
    assert_eq!(index.node_count(), 1);
    assert_eq!(index.stats().documents, 0);
}

#[test]
fn test_missing_id_fails_build() {
    let result = TrieIndex::build(vec![
        TokenizedDocument::from_words("a", "cat"),
        TokenizedDocument::from_words("b", "dog"),
        TokenizedDocument::from_words("", "bird"),
    ]);
    assert_eq!(result.unwrap_err(), BuildError::MissingDocumentId { position: 2 });
}

#[test]
fn test_missing_id_error_message() {
    let err = TrieIndex::build(vec![TokenizedDocument::from_words("", "cat")]).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("0"), "Error should name the position: {}", message);
}

#[test]
fn test_any_character_is_an_edge() {
    let index = build_from_tokens(&[("a", &["c++", "naïve", "🦀", "a b"])]);
    assert_index_well_formed(&index);
    assert_eq!(index.find_node("c++").unwrap().completion_count(), 1);
    assert_eq!(index.find_node("🦀").unwrap().completion_count(), 1);
    // Raw key walk keeps the space; the token was inserted verbatim.
    assert_eq!(index.find_node("a b").unwrap().completion_count(), 1);
}

#[test]
fn test_empty_token_lands_on_root() {
    let index = build_from_tokens(&[("a", &["", "cat"])]);
    assert_eq!(index.root().completion_count(), 1);
    assert!(index.root().is_terminal());
    assert_index_well_formed(&index);
}

#[test]
fn test_document_slots_follow_first_seen_order() {
    let index = build_from_words(&[("zeta", "x"), ("alpha", "x"), ("mid", "x")]);
    assert_eq!(index.documents(), &["zeta", "alpha", "mid"]);
    assert_eq!(index.document_name(DocId(1)), Some("alpha"));
    assert_eq!(index.document_name(DocId(9)), None);
}

#[test]
fn test_stats_count_distinct_and_total() {
    let index = build_from_words(&[("a", "to be or not to be"), ("b", "be")]);
    let stats = index.stats();
    assert_eq!(stats.documents, 2);
    assert_eq!(stats.total_words, 7);
    assert_eq!(stats.distinct_words, 4);
}

#[test]
fn test_word_count_and_prefix_queries_normalize() {
    let index = build_from_words(&[("a", "rustacean rust rust")]);
    assert_eq!(index.word_count(" RUST "), 2);
    assert_eq!(index.word_count("rusta"), 0);
    assert_eq!(index.word_count("python"), 0);
    assert!(index.contains_prefix("Rusta"));
    assert!(!index.contains_prefix("rustx"));
}
