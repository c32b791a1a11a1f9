// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for block segmentation.
//!
//! Block ids are what the whole search stands on. If a line lands in the
//! wrong block, results silently merge or split paragraphs.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use klein::search::expand::expand_pages;
use klein::search::segment::segment;
use klein::testing::make_page;
use klein::{search_lines, Timestamp};

#[derive(Debug, Arbitrary)]
struct Input {
    pages: Vec<Vec<(String, i16)>>,
    needle: String,
}

fuzz_target!(|input: Input| {
    let pages: Vec<_> = input
        .pages
        .iter()
        .take(8)
        .enumerate()
        .map(|(i, lines)| {
            let lines: Vec<(&str, Timestamp)> = lines
                .iter()
                .take(64)
                .map(|(text, updated)| (text.as_str(), Timestamp::from(*updated)))
                .collect();
            make_page(&format!("p{}", i), "T", &lines)
        })
        .collect();

    // Property 1: block id is the count of delimiters so far in the page
    let segmented = segment(expand_pages(&pages)).expect("generated ordinals are unique");
    let mut current = None;
    let mut delimiters = 0u32;
    for line in &segmented {
        if current != Some(line.line.page_id) {
            current = Some(line.line.page_id);
            delimiters = 0;
        }
        if line.line.is_delimiter() {
            delimiters += 1;
        }
        assert_eq!(line.block_id.get(), delimiters);
    }

    // Property 2: every result is non-empty and mentions the needle
    let results = search_lines(expand_pages(&pages), &input.needle)
        .expect("generated ordinals are unique");
    for block in &results {
        assert!(block.lines().all(|l| !l.is_empty()));
        assert!(block.lines().any(|l| l.contains(input.needle.as_str())));
    }

    // Property 3: newest first, ties by page id
    for pair in results.windows(2) {
        assert!(
            pair[0].updated > pair[1].updated
                || (pair[0].updated == pair[1].updated && pair[0].page_id <= pair[1].page_id)
        );
    }
});
