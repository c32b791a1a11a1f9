// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where datasets come from.
//!
//! A source hands out a whole validated snapshot per `fetch`. There is no
//! streaming and no retry: a failed fetch is `SourceUnavailable` and the
//! caller decides what to do about it.
//!
//! | Source         | Location                     | Notes                      |
//! |----------------|------------------------------|----------------------------|
//! | `FileSource`   | local path to an export      | JSON or Parquet            |
//! | `HttpSource`   | `http://` / `https://` URL   | `http` feature, timeout    |
//! | `MemorySource` | in-process `Dataset`         | fixtures and tests         |

mod file;
#[cfg(feature = "http")]
mod http;

use std::time::Duration;

use crate::dataset::Dataset;
use crate::error::Result;

pub use file::FileSource;
#[cfg(feature = "http")]
pub use http::HttpSource;

/// Something that can produce a dataset snapshot.
pub trait DatasetSource: Send + Sync {
    /// Human-readable location, used in logs and errors.
    fn location(&self) -> &str;

    /// Read the whole snapshot.
    ///
    /// Repeated fetches of an unchanged snapshot keep line order.
    fn fetch(&self) -> Result<Dataset>;
}

/// A dataset already held in memory.
#[derive(Debug, Clone)]
pub struct MemorySource {
    dataset: Dataset,
}

impl MemorySource {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

impl DatasetSource for MemorySource {
    fn location(&self) -> &str {
        "memory"
    }

    fn fetch(&self) -> Result<Dataset> {
        Ok(self.dataset.clone())
    }
}

/// True for locations that should be fetched over HTTP.
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Pick a source for a location string.
///
/// URLs go to `HttpSource` (when the `http` feature is on), anything else is
/// treated as a file path.
pub fn source_for(location: &str, timeout: Duration) -> Result<Box<dyn DatasetSource>> {
    if is_remote(location) {
        #[cfg(feature = "http")]
        {
            return Ok(Box::new(HttpSource::new(location, timeout)?));
        }
        #[cfg(not(feature = "http"))]
        {
            let _ = timeout;
            return Err(crate::error::Error::source_unavailable(
                location,
                "built without the `http` feature",
            ));
        }
    }
    Ok(Box::new(FileSource::new(location)))
}
