// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The mention search pipeline.
//!
//! ```text
//! pages ──▶ expand ──▶ segment ──▶ match ──▶ aggregate ──▶ order ──▶ results
//!                                                                     │
//!                                                         narrow ◀────┘
//! ```
//!
//! Pages are independent partitions: block ids never cross a page, so each
//! page runs through expand/segment/match/aggregate on its own. With the
//! `parallel` feature that happens on the rayon pool. Ordering is a single
//! stable sort at the end, which makes the result identical either way.

pub mod aggregate;
pub mod expand;
pub mod matcher;
pub mod narrow;
pub mod order;
pub mod segment;

use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::contracts::{check_block_ids, check_results_ordered};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::types::{AggregatedBlock, ExpandedLine, Page};

pub use aggregate::aggregate_blocks;
pub use expand::{expand_page, expand_pages};
pub use matcher::{line_matches, match_blocks};
pub use narrow::{block_mentions, narrow};
pub use order::{compare_blocks, order_blocks};
pub use segment::{segment, segment_page};

/// Find every block that mentions `needle`, newest first.
///
/// The empty needle returns every non-empty block. No match is an empty
/// vector, not an error.
///
/// # Example
///
/// ```
/// use klein::testing::{make_dataset, mention_page};
///
/// let dataset = make_dataset(vec![mention_page()]);
/// let results = klein::search(&dataset, "[meganii.icon]");
///
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].text, "[meganii.icon] again");
/// assert_eq!(results[1].text, "[meganii.icon] hello\nworld");
/// ```
pub fn search(dataset: &Dataset, needle: &str) -> Vec<AggregatedBlock> {
    let started = Instant::now();

    #[cfg(feature = "parallel")]
    let mut blocks: Vec<AggregatedBlock> = dataset
        .pages()
        .par_iter()
        .flat_map_iter(|page| search_page(page, needle))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let mut blocks: Vec<AggregatedBlock> = dataset
        .pages()
        .iter()
        .flat_map(|page| search_page(page, needle))
        .collect();

    order_blocks(&mut blocks);
    check_results_ordered(&blocks);

    tracing::debug!(
        needle,
        pages = dataset.page_count(),
        blocks = blocks.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "search finished"
    );
    blocks
}

/// Run the pipeline over a raw cross-page line sequence.
///
/// Unlike `search`, the input hasn't been validated, so duplicate ordinals
/// surface as `MalformedDataset`.
pub fn search_lines<'a>(
    lines: impl IntoIterator<Item = ExpandedLine<'a>>,
    needle: &str,
) -> Result<Vec<AggregatedBlock>> {
    let lines = segment(lines)?;
    check_block_ids(&lines);
    let matched = match_blocks(&lines, needle);
    let mut blocks = aggregate_blocks(&lines, &matched);
    order_blocks(&mut blocks);
    check_results_ordered(&blocks);
    Ok(blocks)
}

/// Matched blocks of a single page, in block order.
fn search_page(page: &Page, needle: &str) -> Vec<AggregatedBlock> {
    let lines: Vec<_> = segment_page(expand_page(page)).collect();
    check_block_ids(&lines);
    let matched = match_blocks(&lines, needle);
    aggregate_blocks(&lines, &matched)
}
