//! End-to-end search scenarios over small pages and the sample export.

use crate::common::{anchors, assert_ordered, line_id, load_sample, make_dataset, make_page, make_page_at, mention_page};
use klein::search;

const ICON: &str = "[meganii.icon]";

#[test]
fn test_mention_page_returns_both_mentioning_blocks() {
    let dataset = make_dataset(vec![mention_page()]);
    let results = search(&dataset, ICON);

    assert_eq!(results.len(), 2);

    // Newest block first: "again" was updated at 15, "hello world" at 11.
    assert_eq!(results[0].text, "[meganii.icon] again");
    assert_eq!(results[0].anchor.as_str(), line_id("p1", 6));
    assert_eq!(results[0].updated, 15);

    assert_eq!(results[1].text, "[meganii.icon] hello\nworld");
    assert_eq!(results[1].anchor.as_str(), line_id("p1", 1));
    assert_eq!(results[1].updated, 11);

    assert!(results.iter().all(|b| !b.text.contains("unrelated")));
}

#[test]
fn test_page_of_one_empty_line_has_no_blocks() {
    let dataset = make_dataset(vec![make_page_at("p", "Empty", &[""], 1)]);
    assert!(search(&dataset, "a").is_empty());
    assert!(search(&dataset, "").is_empty());
}

#[test]
fn test_block_without_match_line_is_excluded() {
    let page = make_page_at("p", "T", &["one", "two", "", "three"], 1);
    let dataset = make_dataset(vec![page]);

    let results = search(&dataset, "two");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].text, "one\ntwo");
}

#[test]
fn test_consecutive_empty_lines_make_empty_blocks() {
    let page = make_page(
        "p",
        "T",
        &[("a", 1), ("", 2), ("", 3), ("", 4), ("b a", 5)],
    );
    let dataset = make_dataset(vec![page]);

    let results = search(&dataset, "a");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].text, "b a");
    assert_eq!(results[0].anchor.as_str(), line_id("p", 5));
    assert_eq!(results[1].text, "a");
}

#[test]
fn test_whitespace_only_line_is_not_a_delimiter() {
    let page = make_page_at("p", "T", &["word", " ", "tail"], 1);
    let dataset = make_dataset(vec![page]);

    let results = search(&dataset, "word");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].text, "word\n \ntail");
}

#[test]
fn test_match_is_case_sensitive_and_literal() {
    let page = make_page_at("p", "T", &["Rust", "", "100% sure", "", "a_b"], 1);
    let dataset = make_dataset(vec![page]);

    assert!(search(&dataset, "rust").is_empty());
    assert_eq!(search(&dataset, "Rust").len(), 1);
    // Wildcard-looking characters match only themselves.
    assert_eq!(search(&dataset, "%").len(), 1);
    assert_eq!(search(&dataset, "a_b").len(), 1);
    assert!(search(&dataset, "a%b").is_empty());
}

#[test]
fn test_empty_needle_selects_every_non_empty_block() {
    let page = make_page_at("p", "T", &["a", "", "b", "c", "", ""], 1);
    let dataset = make_dataset(vec![page]);

    let results = search(&dataset, "");
    assert_eq!(results.len(), 2);
}

#[test]
fn test_title_is_not_searched() {
    let page = make_page_at("p", "needle in title", &["body"], 1);
    let dataset = make_dataset(vec![page]);
    assert!(search(&dataset, "needle").is_empty());
}

#[test]
fn test_block_update_time_is_max_over_lines() {
    let page = make_page("p", "T", &[("x", 5), ("y", 20), ("z", 7)]);
    let dataset = make_dataset(vec![page]);

    let results = search(&dataset, "z");
    assert_eq!(results[0].updated, 20);
    assert_eq!(results[0].anchor.as_str(), line_id("p", 1));
}

#[test]
fn test_sample_export_icon_search() {
    let dataset = load_sample();
    let results = search(&dataset, ICON);

    assert_ordered(&results);
    assert_eq!(
        anchors(&results),
        vec![
            "6630a0000000000000000005",
            "6620b0000000000000000001",
            "6630a0000000000000000001",
        ]
    );
    assert_eq!(results[0].title, "井戸端2024/05/01");
    assert_eq!(results[0].text, "[takker.icon] Rust の話\n [meganii.icon] 分かる");
    assert_eq!(results[2].text.lines().count(), 3);
}

#[test]
fn test_sample_export_search_is_deterministic() {
    let dataset = load_sample();
    let first = search(&dataset, "の");
    let second = search(&dataset, "の");
    assert_eq!(first, second);
}
