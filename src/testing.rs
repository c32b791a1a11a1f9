//! Page and dataset builders for tests and benchmarks.
//!
//! `make_page` derives line ids from the page id and ordinal, so anchors name
//! the line they came from. `make_page_at` stamps every line with one update
//! time. `mention_page` has two `[meganii.icon]` blocks and is what most
//! session and cache tests search.

#![doc(hidden)]

use crate::dataset::Dataset;
use crate::types::{Line, LineId, Page, PageId, Timestamp};

/// Create a line with a fixed author and `created == updated`.
pub fn make_line(id: &str, text: &str, updated: Timestamp) -> Line {
    Line {
        id: LineId::from(id),
        text: text.to_string(),
        created: updated,
        updated,
        user_id: "user".to_string(),
    }
}

/// Create a page from `(text, updated)` pairs.
///
/// Line ids are `"{page_id}-{ordinal}"`, so the anchor of a result tells you
/// which ordinal it came from.
pub fn make_page(id: &str, title: &str, lines: &[(&str, Timestamp)]) -> Page {
    Page {
        id: PageId::from(id),
        title: title.to_string(),
        created: 0,
        updated: lines.iter().map(|(_, t)| *t).max().unwrap_or(0),
        lines: lines
            .iter()
            .enumerate()
            .map(|(i, (text, updated))| make_line(&line_id(id, i + 1), text, *updated))
            .collect(),
    }
}

/// Create a page whose lines all share one timestamp.
pub fn make_page_at(id: &str, title: &str, texts: &[&str], updated: Timestamp) -> Page {
    let lines: Vec<(&str, Timestamp)> = texts.iter().map(|t| (*t, updated)).collect();
    make_page(id, title, &lines)
}

/// Line id that `make_page` assigns to the given 1-based ordinal.
pub fn line_id(page_id: &str, ordinal: usize) -> String {
    format!("{}-{}", page_id, ordinal)
}

/// Build a dataset, panicking on invalid fixtures.
pub fn make_dataset(pages: Vec<Page>) -> Dataset {
    Dataset::from_pages(pages).expect("test fixture must be a valid dataset")
}

/// The mention page used throughout the docs and tests.
pub fn mention_page() -> Page {
    make_page(
        "p1",
        "P1",
        &[
            ("[meganii.icon] hello", 10),
            ("world", 11),
            ("", 12),
            ("unrelated", 13),
            ("", 14),
            ("[meganii.icon] again", 15),
        ],
    )
}
