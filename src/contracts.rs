// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the search pipeline.
//!
//! Debug-mode assertions that check the pipeline's invariants on real data:
//!
//! 1. **Zero-cost in release builds** (everything sits behind `debug_assert!`
//!    or `cfg(debug_assertions)`)
//! 2. **Early failure detection** while running the test suite
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function        | Invariant                                          |
//! |--------------------------|----------------------------------------------------|
//! | `check_block_ids`        | block id = running count of delimiters, per page   |
//! | `check_results_ordered`  | updated descending, then page id ascending         |
//!
//! # Usage
//!
//! ```ignore
//! let lines: Vec<_> = segment_page(expand_page(&page)).collect();
//! check_block_ids(&lines); // panics in debug builds if ids drift
//! ```

use std::cmp::Ordering;

use crate::search::order::compare_blocks;
use crate::types::{AggregatedBlock, SegmentedLine};

/// Check that every block id equals the running delimiter count of its page.
///
/// The first line of each page starts from zero, and each following line of
/// the same page adds one exactly when it is a delimiter.
///
/// # Panics (debug builds only)
/// Panics on the first line whose id doesn't follow from its predecessor.
#[inline]
pub fn check_block_ids(lines: &[SegmentedLine<'_>]) {
    #[cfg(debug_assertions)]
    {
        let mut previous: Option<&SegmentedLine<'_>> = None;
        for line in lines {
            let step = u32::from(line.line.is_delimiter());
            let expected = match previous {
                Some(prev) if prev.line.page_id == line.line.page_id => prev.block_id.get() + step,
                _ => step,
            };
            debug_assert_eq!(
                line.block_id.get(),
                expected,
                "Contract violation: page {} line {} has block id {}, expected {}",
                line.line.page_id,
                line.line.line_no,
                line.block_id.get(),
                expected
            );
            previous = Some(line);
        }
    }
    #[cfg(not(debug_assertions))]
    let _ = lines;
}

/// Check that results are in result order.
///
/// # Panics (debug builds only)
/// Panics if some adjacent pair compares as `Greater`.
#[inline]
pub fn check_results_ordered(blocks: &[AggregatedBlock]) {
    debug_assert!(
        blocks
            .windows(2)
            .all(|pair| compare_blocks(&pair[0], &pair[1]) != Ordering::Greater),
        "Contract violation: results are not ordered by (updated desc, page id asc)"
    );
}
