//! medRxiv details API client.
//!
//! Each page-source URL addresses one page of the medRxiv details API. The
//! response carries the candidate papers in a `collection` field; every
//! field on a candidate is optional upstream.

use serde::Deserialize;
use serde_json::Value;

use crate::source::SourceError;
use crate::utils::HttpClient;

/// One page's worth of the API response
#[derive(Debug, Deserialize)]
struct ApiResponse {
    /// Missing field means an empty page, not an error
    #[serde(default)]
    collection: Vec<Candidate>,
}

/// A candidate paper as it appears on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub authors: Option<Value>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

/// Client for fetching pages of candidate records
#[derive(Debug, Clone)]
pub struct PageClient {
    client: HttpClient,
}

impl PageClient {
    pub fn new() -> Result<Self, SourceError> {
        Ok(Self {
            client: HttpClient::new()?,
        })
    }

    /// Fetch one page and extract its candidate list.
    ///
    /// Non-2xx statuses map to [`SourceError::Api`], transport failures to
    /// [`SourceError::Network`], and undecodable bodies to
    /// [`SourceError::Parse`].
    pub async fn fetch_page(&self, url: &str) -> Result<Vec<Candidate>, SourceError> {
        let response = self
            .client
            .client()
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to fetch {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(SourceError::Api(response.status()));
        }

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|e| SourceError::Parse(format!("Failed to parse JSON: {}", e)))?;

        Ok(body.collection)
    }
}
