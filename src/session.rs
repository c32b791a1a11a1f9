// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A search session: one source, one cache, the last results.
//!
//! `search` is the only thing that touches the source. Each call fetches the
//! snapshot, runs the query through the cache and drops the snapshot again.
//! `narrowed` works purely on the stored results, so it can be called as often
//! as the user edits the filter word.
//!
//! The session also holds the current filter word. A new search keeps it, so
//! `current` shows the fresh results already narrowed.

use crate::cache::{QueryCache, SharedResults};
use crate::error::Result;
use crate::search::narrow;
use crate::source::DatasetSource;
use crate::types::AggregatedBlock;

/// Results of the most recent search.
#[derive(Debug, Clone)]
pub struct LastSearch {
    pub word: String,
    pub results: SharedResults,
}

pub struct Session {
    source: Box<dyn DatasetSource>,
    cache: QueryCache,
    last: Option<LastSearch>,
    filter: String,
}

impl Session {
    pub fn new(source: Box<dyn DatasetSource>, cache: QueryCache) -> Self {
        Self {
            source,
            cache,
            last: None,
            filter: String::new(),
        }
    }

    pub fn location(&self) -> &str {
        self.source.location()
    }

    /// Fetch the snapshot and search it.
    ///
    /// On failure the previous results are kept.
    pub fn search(&mut self, word: &str) -> Result<SharedResults> {
        let dataset = self.source.fetch()?;
        let results = self.cache.search(&dataset, word);
        self.last = Some(LastSearch {
            word: word.to_string(),
            results: SharedResults::clone(&results),
        });
        Ok(results)
    }

    /// The last results narrowed by `filter`, without fetching.
    ///
    /// Empty before the first successful search.
    pub fn narrowed(&self, filter: &str) -> Vec<&AggregatedBlock> {
        match &self.last {
            Some(last) => narrow(&last.results, filter),
            None => Vec::new(),
        }
    }

    /// The last results narrowed by the current filter word.
    pub fn current(&self) -> Vec<&AggregatedBlock> {
        self.narrowed(&self.filter)
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, word: impl Into<String>) {
        self.filter = word.into();
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }

    pub fn last(&self) -> Option<&LastSearch> {
        self.last.as_ref()
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }
}
