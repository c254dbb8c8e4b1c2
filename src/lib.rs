//! # medRxiv Harvest
//!
//! An incremental keyword harvester for medRxiv paper metadata. It walks a
//! list of paginated API URLs, keeps the papers whose titles match a set of
//! keywords, deduplicates them by DOI, and flushes the accumulated results
//! to a JSON file after every page so an interrupted run can resume where
//! it left off.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures ([`MatchedRecord`], [`ResultSet`])
//! - [`source`]: medRxiv page client and source error taxonomy
//! - [`collector`]: The fetch/filter/dedupe/persist loop
//! - [`store`]: Durable JSON result store with resume support
//! - [`config`]: Configuration management
//! - [`utils`]: HTTP client and page-source list parsing

pub mod collector;
pub mod config;
pub mod models;
pub mod source;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use collector::{Collector, HarvestError, RunSummary};
pub use config::HarvestConfig;
pub use models::{MatchedRecord, ResultSet};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
