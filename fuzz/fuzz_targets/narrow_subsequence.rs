// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for narrowing.
//!
//! Narrowing must only ever drop blocks: same blocks, same order, each with
//! a line containing the filter.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use klein::testing::{make_dataset, make_page_at};
use klein::{narrow, search};

#[derive(Debug, Arbitrary)]
struct Input {
    lines: Vec<String>,
    needle: String,
    filter: String,
}

fuzz_target!(|input: Input| {
    let texts: Vec<&str> = input.lines.iter().take(128).map(String::as_str).collect();
    let dataset = make_dataset(vec![make_page_at("p", "T", &texts, 0)]);

    let results = search(&dataset, &input.needle);
    let narrowed = narrow(&results, &input.filter);

    let mut rest = results.iter();
    for kept in &narrowed {
        assert!(rest.any(|b| b == *kept), "narrowed result is not a subsequence");
        assert!(kept.lines().any(|l| l.contains(input.filter.as_str())));
    }

    if input.filter.is_empty() {
        assert_eq!(narrowed.len(), results.len());
    }
});
