//! Find the blocks of a wiki export that mention a word.
//!
//! A page is a list of lines. Runs of non-empty lines separated by empty
//! lines are blocks. Given a word, `search` returns every block, across every
//! page, with at least one line containing that word: the text of the block,
//! the page title, the id of its first line (for deep links) and the latest
//! update time, newest first.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────────────────┐
//! │  source/    │────▶│  dataset.rs  │────▶│  search/                     │
//! │ (file, http,│     │ (validated   │     │  expand → segment → matcher  │
//! │  memory)    │     │  snapshot)   │     │  → aggregate → order, narrow │
//! └─────────────┘     └──────────────┘     └──────────────────────────────┘
//!                            │                            │
//!                            ▼                            ▼
//!                     ┌──────────────┐            ┌──────────────┐
//!                     │  cache.rs    │◀───────────│  session.rs  │
//!                     └──────────────┘            └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use klein::{narrow, search, Dataset};
//! use klein::testing::mention_page;
//!
//! let dataset = Dataset::from_pages(vec![mention_page()]).unwrap();
//! let results = search(&dataset, "[meganii.icon]");
//! let narrowed = narrow(&results, "world");
//!
//! assert_eq!(narrowed.len(), 1);
//! assert_eq!(narrowed[0].anchor.as_str(), "p1-1");
//! ```

// Module declarations
pub mod cache;
mod columnar;
pub mod config;
pub mod contracts;
pub mod dataset;
pub mod error;
pub mod link;
pub mod search;
pub mod session;
pub mod source;
pub mod testing;
mod types;

// Re-exports for public API
pub use cache::{QueryCache, SharedResults};
pub use config::Config;
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use link::{block_link, deep_link};
pub use search::{narrow, search, search_lines};
pub use session::{LastSearch, Session};
pub use source::{source_for, DatasetSource, FileSource, MemorySource};
#[cfg(feature = "http")]
pub use source::HttpSource;
pub use types::{
    AggregatedBlock, BlockId, BlockKey, ExpandedLine, Line, LineId, Page, PageId, SegmentedLine,
    Timestamp,
};
