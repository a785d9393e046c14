//! End-to-end tests for the build workflow.

use std::path::PathBuf;

use crate::common::{corpus_dir, html_page, ranked};
use wordex::build::{build_from_dir, BuildOptions};

fn quiet(dir: &std::path::Path) -> BuildOptions {
    BuildOptions {
        quiet: true,
        ..BuildOptions::new(dir)
    }
}

#[test]
fn test_build_and_search_html_corpus() {
    let dir = corpus_dir(&[
        (
            "ferris.html",
            html_page("Ferris", "<p>Ferris is a crab. Crab crab!</p>").as_str(),
        ),
        (
            "ocean.html",
            html_page("Ocean", "<p>The ocean has one crab.</p><!-- crab crab crab -->").as_str(),
        ),
        ("notes.txt", "crab crab"),
    ]);

    let index = build_from_dir(&quiet(dir.path())).unwrap();
    let results = index.search("Crab");

    assert_eq!(
        ranked(&results),
        vec![("ferris.html", 3), ("notes.txt", 2), ("ocean.html", 1)]
    );
    assert!(results.iter().all(|r| r.word_count == 6));
}

#[test]
fn test_equal_frequencies_rank_by_file_name() {
    let dir = corpus_dir(&[("c.txt", "word"), ("a.txt", "word"), ("b.txt", "word word")]);
    let index = build_from_dir(&quiet(dir.path())).unwrap();

    assert_eq!(
        ranked(&index.search("word")),
        vec![("b.txt", 2), ("a.txt", 1), ("c.txt", 1)]
    );
}

#[test]
fn test_script_and_style_are_not_indexed() {
    let dir = corpus_dir(&[("page.html", html_page("T", "<p>visible</p>").as_str())]);
    let index = build_from_dir(&quiet(dir.path())).unwrap();

    assert_eq!(index.search("visible").len(), 1);
    assert!(index.search("secret").is_empty());
    assert!(index.search("color").is_empty());
}

#[test]
fn test_empty_directory_builds_empty_index() {
    let dir = corpus_dir(&[]);
    let index = build_from_dir(&quiet(dir.path())).unwrap();

    assert!(index.is_empty());
    assert!(index.search("anything").is_empty());
}

#[test]
fn test_missing_directory_is_an_error() {
    let options = quiet(&PathBuf::from("/nonexistent/wordex/corpus"));
    let err = build_from_dir(&options).unwrap_err();
    assert!(err.contains("Failed to read data directory"), "{}", err);
}

#[test]
fn test_contractions_match_without_apostrophe() {
    let dir = corpus_dir(&[("a.txt", "Ferris's shell. Ferris’s claws.")]);
    let index = build_from_dir(&quiet(dir.path())).unwrap();

    assert_eq!(index.word_count("ferriss"), 2);
}

#[test]
fn test_stats_after_build() {
    let dir = corpus_dir(&[("a.txt", "alpha beta"), ("b.txt", ""), ("c.txt", "alpha")]);
    let stats = build_from_dir(&quiet(dir.path())).unwrap().stats();

    assert_eq!(stats.documents, 3);
    assert_eq!(stats.total_words, 3);
    assert_eq!(stats.distinct_words, 2);
}

#[test]
fn test_limit_on_built_corpus() {
    let files: Vec<(String, String)> = (0..10)
        .map(|i| (format!("doc{}.txt", i), "term ".repeat(i + 1)))
        .collect();
    let borrowed: Vec<(&str, &str)> = files
        .iter()
        .map(|(name, body)| (name.as_str(), body.as_str()))
        .collect();
    let dir = corpus_dir(&borrowed);

    let index = build_from_dir(&quiet(dir.path())).unwrap();
    assert_eq!(
        ranked(&index.search_with_limit("term", Some(3))),
        vec![("doc9.txt", 10), ("doc8.txt", 9), ("doc7.txt", 8)]
    );
}
