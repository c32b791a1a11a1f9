// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Narrow an existing result set without searching again.
//!
//! Each block is split back into its lines and kept when any line contains the
//! filter word. The input order is kept as is. This only reads the results, so
//! it is safe to run over and over against a cached result.

use crate::types::AggregatedBlock;

/// True when some line of the block contains `needle`.
///
/// The empty needle keeps every block.
pub fn block_mentions(block: &AggregatedBlock, needle: &str) -> bool {
    needle.is_empty() || block.lines().any(|line| line.contains(needle))
}

/// Blocks with at least one line containing `needle`, in input order.
pub fn narrow<'a>(results: &'a [AggregatedBlock], needle: &str) -> Vec<&'a AggregatedBlock> {
    results
        .iter()
        .filter(|block| block_mentions(block, needle))
        .collect()
}
