//! Result ordering: newest first, ties broken by page id.

use crate::common::{assert_ordered, make_dataset, make_page, make_page_at, tied_pages};
use klein::search;

#[test]
fn test_equal_timestamps_order_by_page_id() {
    let dataset = make_dataset(tied_pages());
    let results = search(&dataset, "word");

    let pages: Vec<&str> = results.iter().map(|b| b.page_id.as_str()).collect();
    assert_eq!(pages, vec!["pa", "pb", "pc"]);
}

#[test]
fn test_page_order_in_dataset_does_not_matter() {
    let mut reversed = tied_pages();
    reversed.reverse();

    let forward = search(&make_dataset(tied_pages()), "word");
    let backward = search(&make_dataset(reversed), "word");
    assert_eq!(forward, backward);
}

#[test]
fn test_blocks_of_one_page_keep_block_order_on_ties() {
    let page = make_page_at("p", "T", &["x first", "", "x second", "", "x third"], 9);
    let results = search(&make_dataset(vec![page]), "x");

    let texts: Vec<&str> = results.iter().map(|b| b.text.as_str()).collect();
    assert_eq!(texts, vec!["x first", "x second", "x third"]);
}

#[test]
fn test_page_id_order_is_bytewise() {
    let pages = vec![
        make_page_at("b", "T", &["w"], 1),
        make_page_at("B", "T", &["w"], 1),
        make_page_at("a", "T", &["w"], 1),
    ];
    let results = search(&make_dataset(pages), "w");

    let pages: Vec<&str> = results.iter().map(|b| b.page_id.as_str()).collect();
    assert_eq!(pages, vec!["B", "a", "b"]);
}

#[test]
fn test_many_pages_are_ordered() {
    let pages: Vec<_> = (0..50)
        .map(|i| {
            let id = format!("page-{:02}", i);
            make_page(&id, "T", &[("w", (i * 7 % 13) as i64), ("", 0), ("w", (i % 5) as i64)])
        })
        .collect();
    let results = search(&make_dataset(pages), "w");

    assert_eq!(results.len(), 100);
    assert_ordered(&results);
}
