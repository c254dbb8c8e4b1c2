//! medRxiv page client and source error taxonomy.

mod medrxiv;

pub use medrxiv::{Candidate, PageClient};

/// Errors that can occur when fetching a page from the API.
///
/// All variants are recovered at page granularity by the collector: a page
/// that fails contributes zero records and the run moves on.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success status from the API
    #[error("API returned status: {0}")]
    Api(reqwest::StatusCode),

    /// Response body could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(format!("JSON: {}", err))
    }
}
