// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pick the blocks that mention the search word.
//!
//! Matching is a plain, case-sensitive `str::contains`. `%`, `_`, `*` and
//! friends are literal characters. Delimiters never match, not even the empty
//! word, so every selected block has at least one non-empty line.

use std::collections::HashSet;

use crate::types::{BlockKey, SegmentedLine};

/// True when a non-empty line contains `needle`.
#[inline]
pub fn line_matches(text: &str, needle: &str) -> bool {
    !text.is_empty() && text.contains(needle)
}

/// Distinct (page, block) keys with at least one matching line.
///
/// A block with several matching lines shows up once.
pub fn match_blocks<'a>(lines: &[SegmentedLine<'a>], needle: &str) -> HashSet<BlockKey<'a>> {
    lines
        .iter()
        .filter(|l| line_matches(l.line.text, needle))
        .map(SegmentedLine::key)
        .collect()
}
