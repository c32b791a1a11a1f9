// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for dataset loading.
//!
//! Exports come from the network. Garbage must come back as an error, never
//! a panic, and anything that loads must be searchable. Inputs wrapped in
//! the Parquet magic take the columnar path.

#![no_main]

use libfuzzer_sys::fuzz_target;
use klein::{search, Dataset};

fuzz_target!(|data: &[u8]| {
    if let Ok(dataset) = Dataset::from_bytes("fuzz", data) {
        let results = search(&dataset, "");
        assert!(results.len() <= dataset.line_count());
    }
});
