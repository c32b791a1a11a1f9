// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deep links back to the anchor line of a block.
//!
//! `{base}/{project}/{title}#{anchor}`, with the title percent-encoded except
//! for `/`, which stays as is.

use crate::types::AggregatedBlock;

/// Default wiki host.
pub const DEFAULT_BASE_URL: &str = "https://scrapbox.io";

/// Link to `anchor` on the page titled `title`.
pub fn deep_link(base_url: &str, project: &str, title: &str, anchor: &str) -> String {
    let title = urlencoding::encode(title).replace("%2F", "/");
    format!(
        "{}/{}/{}#{}",
        base_url.trim_end_matches('/'),
        project,
        title,
        anchor
    )
}

/// Link to the anchor line of a result block.
pub fn block_link(base_url: &str, project: &str, block: &AggregatedBlock) -> String {
    deep_link(base_url, project, &block.title, block.anchor.as_str())
}
