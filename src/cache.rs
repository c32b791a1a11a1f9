// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Memoized search results.
//!
//! Keyed by `(dataset version, search word)`. The version is a CRC32
//! content fingerprint, so a re-fetched but unchanged snapshot lands on the
//! same key. Two different snapshots can still share a CRC, so every entry
//! keeps the snapshot it was computed from and a hit also requires the
//! incoming dataset to compare equal to it. On a collision the entry is
//! replaced.
//!
//! The cache is optional: `search` is pure and gives the same answer with or
//! without it. Capacity is bounded; the oldest entry goes first.

use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::dataset::Dataset;
use crate::search::search;
use crate::types::AggregatedBlock;

/// Default number of cached queries.
pub const DEFAULT_CACHE_CAPACITY: usize = 32;

/// Cached results, shared by reference count.
pub type SharedResults = Arc<[AggregatedBlock]>;

type CacheKey = (u32, String);

/// Results together with the snapshot they belong to.
struct Entry {
    snapshot: Arc<Dataset>,
    results: SharedResults,
}

#[derive(Default)]
struct Entries {
    map: HashMap<CacheKey, Entry>,
    order: VecDeque<CacheKey>,
}

impl Entries {
    /// A stored snapshot equal to `dataset`, so equal snapshots share memory.
    fn snapshot_of(&self, dataset: &Dataset) -> Option<Arc<Dataset>> {
        self.map
            .values()
            .map(|entry| &entry.snapshot)
            .find(|snapshot| snapshot.version() == dataset.version() && ***snapshot == *dataset)
            .map(Arc::clone)
    }
}

/// Bounded memo of `(version, word) -> results`.
pub struct QueryCache {
    capacity: usize,
    entries: Mutex<Entries>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl QueryCache {
    /// A cache holding up to `capacity` queries. Zero disables caching.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(Entries::default()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Cached results for `needle` on `dataset`, computing them on a miss.
    ///
    /// The lock is not held while searching; two callers racing on the same
    /// miss both compute, and the second insert is dropped.
    pub fn search(&self, dataset: &Dataset, needle: &str) -> SharedResults {
        let key = (dataset.version(), needle.to_string());

        if let Some(entry) = self.entries.lock().map.get(&key) {
            if *entry.snapshot == *dataset {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(needle, version = dataset.version(), "query cache hit");
                return Arc::clone(&entry.results);
            }
            tracing::debug!(needle, version = dataset.version(), "query cache version collision");
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(needle, version = dataset.version(), "query cache miss");
        let results: SharedResults = search(dataset, needle).into();
        self.insert(key, dataset, Arc::clone(&results));
        results
    }

    fn insert(&self, key: CacheKey, dataset: &Dataset, results: SharedResults) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.entries.lock();
        let snapshot = entries
            .snapshot_of(dataset)
            .unwrap_or_else(|| Arc::new(dataset.clone()));

        if let Some(entry) = entries.map.get_mut(&key) {
            // Same key, different snapshot: the newer one wins.
            if *entry.snapshot != *dataset {
                *entry = Entry { snapshot, results };
            }
            return;
        }
        while entries.order.len() >= self.capacity {
            match entries.order.pop_front() {
                Some(oldest) => {
                    entries.map.remove(&oldest);
                }
                None => break,
            }
        }
        entries.order.push_back(key.clone());
        entries.map.insert(key, Entry { snapshot, results });
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        entries.map.clear();
        entries.order.clear();
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
