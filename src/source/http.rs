// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::time::{Duration, Instant};

use reqwest::blocking::Client;

use crate::dataset::Dataset;
use crate::error::{Error, Result};

use super::DatasetSource;

const USER_AGENT: &str = concat!("klein/", env!("CARGO_PKG_VERSION"));

/// JSON or Parquet export downloaded over HTTP(S) in one request.
///
/// The timeout covers the whole request, body included.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::source_unavailable(url, e))?;
        Ok(Self {
            url: url.to_string(),
            client,
        })
    }
}

impl DatasetSource for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<Dataset> {
        let started = Instant::now();
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| Error::source_unavailable(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::source_unavailable(
                &self.url,
                format!("HTTP {}", status),
            ));
        }

        let bytes = response
            .bytes()
            .map_err(|e| Error::source_unavailable(&self.url, e))?;
        let dataset = Dataset::from_bytes(&self.url, &bytes)?;

        tracing::info!(
            location = %self.url,
            pages = dataset.page_count(),
            lines = dataset.line_count(),
            bytes = bytes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "downloaded dataset"
        );
        Ok(dataset)
    }
}
