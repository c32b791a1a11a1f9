// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::dataset::Dataset;
use crate::error::{Error, Result};

use super::DatasetSource;

/// JSON or Parquet export on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    location: String,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let location = path.display().to_string();
        Self { path, location }
    }
}

impl DatasetSource for FileSource {
    fn location(&self) -> &str {
        &self.location
    }

    fn fetch(&self) -> Result<Dataset> {
        let started = Instant::now();
        let bytes = fs::read(&self.path)
            .map_err(|e| Error::source_unavailable(&self.location, e))?;
        let dataset = Dataset::from_bytes(&self.location, &bytes)?;

        tracing::info!(
            location = %self.location,
            pages = dataset.page_count(),
            lines = dataset.line_count(),
            bytes = bytes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "loaded dataset"
        );
        Ok(dataset)
    }
}
