// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for klein.
//!
//! An empty result set is not an error. Everything here is a real failure that
//! the caller has to see: the source could not be read, or what came back does
//! not describe a well-formed set of pages.

use thiserror::Error;

use crate::types::PageId;

/// Result type alias using klein's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for klein operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The dataset could not be fetched (I/O, transport, status, timeout).
    #[error("dataset source unavailable at {location}: {reason}")]
    SourceUnavailable { location: String, reason: String },

    /// The payload was read but is not a dataset.
    #[error("failed to parse dataset from {location}: {reason}")]
    Parse { location: String, reason: String },

    /// A page breaks a structural invariant (duplicate ids or ordinals).
    #[error("malformed page {page_id}: {reason}")]
    MalformedDataset { page_id: PageId, reason: String },
}

impl Error {
    pub(crate) fn source_unavailable(location: &str, reason: impl ToString) -> Self {
        Error::SourceUnavailable {
            location: location.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn parse(location: &str, reason: impl ToString) -> Self {
        Error::Parse {
            location: location.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn malformed(page_id: &PageId, reason: impl Into<String>) -> Self {
        Error::MalformedDataset {
            page_id: page_id.clone(),
            reason: reason.into(),
        }
    }
}
