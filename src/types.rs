// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a mention search.
//!
//! Pages and lines come straight from the export. Everything else here is
//! derived per query: expanded lines borrow from the dataset, segmented lines
//! add a block id, and `AggregatedBlock` is the owned result handed to callers.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **ExpandedLine**: `line_no` starts at 1 and increases by exactly one
//!   within a page. No two lines of a page share a `line_no`.
//!
//! - **SegmentedLine**: `block_id` is non-decreasing in `line_no` order and
//!   starts at 0 for every page. Block ids never leak across pages.
//!
//! - **AggregatedBlock**: `text` is never empty and `anchor` is the line id of
//!   the first non-empty line of the block.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unix timestamp in seconds, as stored in the export.
pub type Timestamp = i64;

// =============================================================================
// NEWTYPES: Identities
// =============================================================================

/// Page identity. Unique within a dataset snapshot.
///
/// Ordering is byte-wise on the underlying string; result tie-breaks rely on it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub String);

impl PageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        PageId(id.to_string())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Line identity. Unique within its page; used as the deep-link anchor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub String);

impl LineId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LineId {
    fn from(id: &str) -> Self {
        LineId(id.to_string())
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Page-scoped block sequence number.
///
/// The running count of empty lines at or before a line, within its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct BlockId(pub u32);

impl BlockId {
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

// =============================================================================
// EXPORT RECORDS
// =============================================================================

/// One line of a page, exactly as exported.
///
/// Empty `text` is the block delimiter. Whitespace-only text is content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub id: LineId,
    pub text: String,
    #[serde(default)]
    pub created: Timestamp,
    pub updated: Timestamp,
    #[serde(default)]
    pub user_id: String,
}

impl Line {
    /// True for the block delimiter (exactly empty text).
    #[inline]
    pub fn is_delimiter(&self) -> bool {
        self.text.is_empty()
    }
}

/// A page with its lines in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub title: String,
    pub created: Timestamp,
    #[serde(default)]
    pub updated: Timestamp,
    #[serde(default)]
    pub lines: Vec<Line>,
}

// =============================================================================
// DERIVED RECORDS
// =============================================================================

/// A line flattened together with its page, borrowed from the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandedLine<'a> {
    pub page_id: &'a PageId,
    pub title: &'a str,
    pub page_created: Timestamp,
    /// 1-based ordinal position within the page.
    pub line_no: u32,
    pub line_id: &'a LineId,
    pub text: &'a str,
    pub updated: Timestamp,
    pub user_id: &'a str,
}

impl ExpandedLine<'_> {
    #[inline]
    pub fn is_delimiter(&self) -> bool {
        self.text.is_empty()
    }
}

/// An expanded line tagged with its page-scoped block id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentedLine<'a> {
    pub line: ExpandedLine<'a>,
    pub block_id: BlockId,
}

impl<'a> SegmentedLine<'a> {
    #[inline]
    pub fn key(&self) -> BlockKey<'a> {
        BlockKey {
            page_id: self.line.page_id,
            block_id: self.block_id,
        }
    }
}

/// Grouping key of a block: (page identity, block id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockKey<'a> {
    pub page_id: &'a PageId,
    pub block_id: BlockId,
}

/// One matched block, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedBlock {
    pub page_id: PageId,
    pub title: String,
    /// Line id of the first non-empty line of the block.
    pub anchor: LineId,
    /// Non-empty line texts joined with `\n`, in page order.
    pub text: String,
    /// Latest update timestamp across the block's lines.
    pub updated: Timestamp,
}

impl AggregatedBlock {
    /// The block's lines in page order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }
}
