//! Searching unvalidated line sequences.

use crate::common::{make_page, mention_page};
use klein::search::expand::expand_pages;
use klein::{search, search_lines, Dataset, Error};

#[test]
fn test_shuffled_lines_give_same_results() {
    let pages = vec![
        mention_page(),
        make_page("p2", "P2", &[("[meganii.icon] x", 3), ("", 4), ("y", 5)]),
    ];
    let expected = search(&Dataset::from_pages(pages.clone()).unwrap(), "[meganii.icon]");

    let mut lines: Vec<_> = expand_pages(&pages).collect();
    lines.reverse();
    let actual = search_lines(lines, "[meganii.icon]").unwrap();

    assert_eq!(actual, expected);
}

#[test]
fn test_duplicate_ordinal_is_malformed() {
    let page = make_page("p", "T", &[("a", 1), ("b", 2)]);
    let mut lines: Vec<_> = expand_pages(std::slice::from_ref(&page)).collect();
    lines[1].line_no = 1;

    let err = search_lines(lines, "a").unwrap_err();
    match err {
        Error::MalformedDataset { page_id, reason } => {
            assert_eq!(page_id.as_str(), "p");
            assert!(reason.contains("duplicate ordinal"));
        }
        other => panic!("expected MalformedDataset, got {:?}", other),
    }
}

#[test]
fn test_ordinal_gaps_are_allowed() {
    let page = make_page("p", "T", &[("a", 1), ("", 2), ("a again", 3)]);
    let mut lines: Vec<_> = expand_pages(std::slice::from_ref(&page)).collect();
    for (i, line) in lines.iter_mut().enumerate() {
        line.line_no = (i as u32 + 1) * 10;
    }

    let results = search_lines(lines, "a").unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].text, "a again");
}

#[test]
fn test_empty_input_gives_empty_output() {
    let results = search_lines(Vec::new(), "a").unwrap();
    assert!(results.is_empty());
}
