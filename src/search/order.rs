// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering: most recently touched blocks first.
//!
//! Sort order:
//! 1. **Updated** - latest update timestamp, descending
//! 2. **Page id** - ascending, byte-wise
//!
//! The sort is stable, so blocks of one page with the same timestamp keep the
//! order the aggregator produced them in (block id order).

use std::cmp::Ordering;

use crate::types::AggregatedBlock;

/// Compare two blocks for result order.
pub fn compare_blocks(a: &AggregatedBlock, b: &AggregatedBlock) -> Ordering {
    b.updated
        .cmp(&a.updated)
        .then_with(|| a.page_id.cmp(&b.page_id))
}

/// Sort blocks into result order in place.
pub fn order_blocks(blocks: &mut [AggregatedBlock]) {
    blocks.sort_by(compare_blocks);
}
