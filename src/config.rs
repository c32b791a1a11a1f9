// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime settings shared by the CLI commands.
//!
//! Every field has a flag and a `KLEIN_*` environment variable on the CLI
//! side; the defaults below apply when neither is set.

use std::time::Duration;

use crate::cache::DEFAULT_CACHE_CAPACITY;
use crate::link::DEFAULT_BASE_URL;

/// Nightly Parquet export of the villagepump project.
pub const VILLAGEPUMP_DATA_URL: &str =
    "https://github.com/meganii/sandbox-github-actions-scheduler/releases/latest/download/pages.parquet";

/// Dataset location used when none is given.
pub const DEFAULT_DATA: &str = VILLAGEPUMP_DATA_URL;

/// Project name used in deep links.
pub const DEFAULT_PROJECT: &str = "villagepump";

/// Search word used when the shell gets an empty line.
pub const DEFAULT_WORD: &str = "[meganii.icon]";

/// Fetch timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Blocks with more lines than this are collapsed in terminal output.
pub const DEFAULT_COLLAPSE_LINES: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File path or HTTP(S) URL of a JSON or Parquet export.
    pub data: String,
    pub project: String,
    pub base_url: String,
    pub timeout: Duration,
    pub collapse_lines: usize,
    pub cache_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DEFAULT_DATA.to_string(),
            project: DEFAULT_PROJECT.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            collapse_lines: DEFAULT_COLLAPSE_LINES,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}
