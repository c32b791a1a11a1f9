// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Validated, immutable dataset snapshots.
//!
//! A `Dataset` can only be built through `from_pages`, which checks the
//! structural invariants once. After that the search pipeline can't hit a
//! malformed page, so `search` doesn't need to return a `Result`.
//!
//! Each snapshot also carries a `version`: a CRC32 over everything the
//! search can observe. Two snapshots with the same content share a version,
//! which is what the query cache keys on.

use serde::Deserialize;
use std::collections::HashSet;

use crate::columnar;
use crate::error::{Error, Result};
use crate::types::{Page, PageId};

/// Immutable, validated snapshot of all pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pages: Vec<Page>,
    version: u32,
}

/// Either a project export object or a bare array of pages.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Export {
        #[serde(default)]
        name: Option<String>,
        pages: Vec<Page>,
    },
    Pages(Vec<Page>),
}

impl Dataset {
    /// Validate pages and compute the snapshot version.
    ///
    /// Fails with `MalformedDataset` on the first page that repeats a page id
    /// or contains two lines with the same line id.
    pub fn from_pages(pages: Vec<Page>) -> Result<Self> {
        let mut seen_pages: HashSet<&PageId> = HashSet::with_capacity(pages.len());
        for page in &pages {
            if !seen_pages.insert(&page.id) {
                return Err(Error::malformed(&page.id, "duplicate page id"));
            }
            validate_page(page)?;
        }

        let version = fingerprint(&pages);
        Ok(Dataset { pages, version })
    }

    /// Parse a payload of either format, picked by content: Parquet files
    /// start and end with `PAR1`, anything else is read as JSON.
    pub fn from_bytes(location: &str, bytes: &[u8]) -> Result<Self> {
        if columnar::is_parquet(bytes) {
            #[cfg(feature = "parquet")]
            return Self::from_parquet(location, bytes);
            #[cfg(not(feature = "parquet"))]
            return Err(Error::parse(
                location,
                "Parquet input needs the `parquet` feature",
            ));
        }
        Self::from_json(location, bytes)
    }

    /// Parse a Parquet export (one row per page) and validate it.
    #[cfg(feature = "parquet")]
    pub fn from_parquet(location: &str, bytes: &[u8]) -> Result<Self> {
        let pages = columnar::read_pages(location, bytes)?;
        tracing::debug!(location, pages = pages.len(), "parsed parquet export");
        Self::from_pages(pages)
    }

    /// Parse a JSON payload (export object or page array) and validate it.
    pub fn from_json(location: &str, bytes: &[u8]) -> Result<Self> {
        let payload: Payload =
            serde_json::from_slice(bytes).map_err(|e| Error::parse(location, e))?;
        let pages = match payload {
            Payload::Export { name, pages } => {
                if let Some(name) = name {
                    tracing::debug!(project = %name, "parsed project export");
                }
                pages
            }
            Payload::Pages(pages) => pages,
        };
        Self::from_pages(pages)
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Content fingerprint; equal content gives an equal version.
    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn line_count(&self) -> usize {
        self.pages.iter().map(|p| p.lines.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

fn validate_page(page: &Page) -> Result<()> {
    let mut seen_lines = HashSet::with_capacity(page.lines.len());
    for line in &page.lines {
        if !seen_lines.insert(&line.id) {
            return Err(Error::malformed(
                &page.id,
                format!("duplicate line id '{}'", line.id),
            ));
        }
    }
    if u32::try_from(page.lines.len()).is_err() {
        return Err(Error::malformed(&page.id, "too many lines"));
    }
    Ok(())
}

/// CRC32 over every field the search reads, with length prefixes so that
/// field boundaries can't alias.
fn fingerprint(pages: &[Page]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    let mut field = |bytes: &[u8]| {
        hasher.update(&(bytes.len() as u64).to_le_bytes());
        hasher.update(bytes);
    };
    for page in pages {
        field(page.id.as_str().as_bytes());
        field(page.title.as_bytes());
        field(&page.created.to_le_bytes());
        field(&(page.lines.len() as u64).to_le_bytes());
        for line in &page.lines {
            field(line.id.as_str().as_bytes());
            field(line.text.as_bytes());
            field(&line.updated.to_le_bytes());
            field(line.user_id.as_bytes());
        }
    }
    hasher.finalize()
}
