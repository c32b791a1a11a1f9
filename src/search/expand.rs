// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Flatten pages into expanded lines.
//!
//! Nothing is copied: every `ExpandedLine` borrows its strings from the page.
//! The iterators hold no state beyond their position, so expanding the same
//! pages twice gives the same sequence.

use crate::types::{ExpandedLine, Page};

/// Expand one page into its lines, numbered from 1 in page order.
///
/// A page with no lines yields nothing.
pub fn expand_page(page: &Page) -> impl Iterator<Item = ExpandedLine<'_>> + '_ {
    page.lines.iter().zip(1u32..).map(move |(line, line_no)| ExpandedLine {
        page_id: &page.id,
        title: &page.title,
        page_created: page.created,
        line_no,
        line_id: &line.id,
        text: &line.text,
        updated: line.updated,
        user_id: &line.user_id,
    })
}

/// Expand every page, page after page.
pub fn expand_pages(pages: &[Page]) -> impl Iterator<Item = ExpandedLine<'_>> + '_ {
    pages.iter().flat_map(expand_page)
}
