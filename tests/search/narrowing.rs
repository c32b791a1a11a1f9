//! Narrowing stored results with a second word.

use crate::common::{load_sample, make_dataset, mention_page};
use klein::{narrow, search};

#[test]
fn test_narrow_keeps_blocks_with_a_matching_line() {
    let results = search(&make_dataset(vec![mention_page()]), "[meganii.icon]");
    let narrowed = narrow(&results, "world");

    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].text, "[meganii.icon] hello\nworld");
}

#[test]
fn test_narrow_with_empty_word_is_identity() {
    let results = search(&make_dataset(vec![mention_page()]), "[meganii.icon]");
    let narrowed: Vec<_> = narrow(&results, "").into_iter().cloned().collect();
    assert_eq!(narrowed, results);
}

#[test]
fn test_narrow_does_not_match_across_lines() {
    let results = search(&make_dataset(vec![mention_page()]), "hello");
    assert_eq!(results.len(), 1);
    assert!(narrow(&results, "hello\nworld").is_empty());
    assert!(narrow(&results, "helloworld").is_empty());
}

#[test]
fn test_narrow_preserves_order() {
    let results = search(&load_sample(), "[meganii.icon]");
    let narrowed = narrow(&results, "[");

    assert_eq!(narrowed.len(), results.len());
    for (kept, original) in narrowed.iter().zip(results.iter()) {
        assert_eq!(*kept, original);
    }
}

#[test]
fn test_narrow_sample_to_one_page() {
    let results = search(&load_sample(), "[meganii.icon]");
    let narrowed = narrow(&results, "所有権");

    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].title, "Rust");
}

#[test]
fn test_narrow_with_no_match_is_empty() {
    let results = search(&load_sample(), "[meganii.icon]");
    assert!(narrow(&results, "no such word").is_empty());
}
