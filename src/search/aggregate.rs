// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Collapse matched blocks into one record each.
//!
//! For every matched (page, block) key: drop the delimiters, order the rest by
//! `line_no`, take the first line's id as the anchor, join the texts with `\n`
//! and keep the latest update timestamp.
//!
//! Groups come out in order of first appearance in the input, which for
//! page-ordered input means page order, then block id.

use std::collections::{HashMap, HashSet};

use crate::types::{AggregatedBlock, BlockKey, ExpandedLine, LineId, PageId, SegmentedLine, Timestamp};

/// Lines of one block collected so far.
struct BlockGroup<'a> {
    page_id: &'a PageId,
    title: &'a str,
    lines: Vec<(u32, &'a LineId, &'a str)>,
    updated: Timestamp,
}

impl<'a> BlockGroup<'a> {
    fn new(line: &ExpandedLine<'a>) -> Self {
        BlockGroup {
            page_id: line.page_id,
            title: line.title,
            lines: Vec::new(),
            updated: line.updated,
        }
    }

    fn push(&mut self, line: &ExpandedLine<'a>) {
        self.lines.push((line.line_no, line.line_id, line.text));
        self.updated = self.updated.max(line.updated);
    }

    /// Groups are created on their first line, so `lines` is never empty.
    fn finish(mut self) -> Option<AggregatedBlock> {
        self.lines.sort_unstable_by_key(|(line_no, _, _)| *line_no);
        let anchor = self.lines.first()?.1.clone();
        let text = self
            .lines
            .iter()
            .map(|(_, _, text)| *text)
            .collect::<Vec<_>>()
            .join("\n");

        Some(AggregatedBlock {
            page_id: self.page_id.clone(),
            title: self.title.to_string(),
            anchor,
            text,
            updated: self.updated,
        })
    }
}

/// Aggregate the non-empty lines of every matched block.
pub fn aggregate_blocks<'a>(
    lines: &[SegmentedLine<'a>],
    matched: &HashSet<BlockKey<'a>>,
) -> Vec<AggregatedBlock> {
    if matched.is_empty() {
        return Vec::new();
    }

    let mut slots: HashMap<BlockKey<'a>, usize> = HashMap::with_capacity(matched.len());
    let mut groups: Vec<BlockGroup<'a>> = Vec::with_capacity(matched.len());

    for segmented in lines.iter().filter(|l| !l.line.is_delimiter()) {
        let key = segmented.key();
        if !matched.contains(&key) {
            continue;
        }
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push(BlockGroup::new(&segmented.line));
            groups.len() - 1
        });
        groups[slot].push(&segmented.line);
    }

    groups.into_iter().filter_map(BlockGroup::finish).collect()
}
