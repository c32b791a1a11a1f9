// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Block segmentation: a running count of delimiters, per page.
//!
//! A line's block id is the number of empty lines at or before it in its page.
//! The delimiter is counted before it is tagged, so it carries the same id as
//! the non-empty lines that follow it:
//!
//! ```text
//! line_no  text                  block_id
//!   1      "[meganii.icon] hi"      0
//!   2      "world"                  0
//!   3      ""                       1   <- counted, then tagged
//!   4      "unrelated"              1
//!   5      ""                       2
//!   6      "[meganii.icon] again"   2
//! ```
//!
//! Delimiters never reach the aggregated output, so which side of the boundary
//! they land on only matters for the block-id arithmetic. Only the exact empty
//! string is a delimiter; whitespace-only lines are content.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::types::{BlockId, ExpandedLine, PageId, SegmentedLine};

/// Tag the lines of a single page with block ids.
///
/// The input must be one page in ordinal order, which is what `expand_page`
/// yields. The counter starts at 0 and lives only as long as the iterator.
pub fn segment_page<'a>(
    lines: impl IntoIterator<Item = ExpandedLine<'a>>,
) -> impl Iterator<Item = SegmentedLine<'a>> {
    lines.into_iter().scan(0u32, |delimiters, line| {
        if line.is_delimiter() {
            *delimiters += 1;
        }
        Some(SegmentedLine {
            line,
            block_id: BlockId(*delimiters),
        })
    })
}

/// Tag an arbitrary cross-page sequence with block ids.
///
/// Lines are partitioned by page (in order of first appearance) and each
/// partition is ordered by `line_no` before scanning, so interleaved or
/// shuffled input gets the same ids as page-ordered input.
///
/// Fails with `MalformedDataset` when two lines of a page share a `line_no`.
pub fn segment<'a>(
    lines: impl IntoIterator<Item = ExpandedLine<'a>>,
) -> Result<Vec<SegmentedLine<'a>>> {
    let mut partitions: Vec<Vec<ExpandedLine<'a>>> = Vec::new();
    let mut slots: HashMap<&'a PageId, usize> = HashMap::new();
    let mut total = 0;

    for line in lines {
        let slot = *slots.entry(line.page_id).or_insert_with(|| {
            partitions.push(Vec::new());
            partitions.len() - 1
        });
        partitions[slot].push(line);
        total += 1;
    }

    let mut segmented = Vec::with_capacity(total);
    for mut partition in partitions {
        partition.sort_by_key(|line| line.line_no);
        if let Some(pair) = partition
            .windows(2)
            .find(|pair| pair[0].line_no == pair[1].line_no)
        {
            return Err(Error::malformed(
                pair[0].page_id,
                format!("duplicate ordinal position {}", pair[0].line_no),
            ));
        }
        segmented.extend(segment_page(partition));
    }

    Ok(segmented)
}
