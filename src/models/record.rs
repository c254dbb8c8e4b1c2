//! Matched record model: the shape persisted to the output file.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Base URL for medRxiv paper pages
const MEDRXIV_CONTENT_URL: &str = "https://www.medrxiv.org/content";

/// A paper whose title matched the keyword set.
///
/// This is the exact shape written to (and resumed from) the output file.
/// `authors` is carried opaquely from the API response and never
/// interpreted. `url` and `pdf` are derived addresses and are `null` when
/// either the DOI or the version is missing or empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedRecord {
    /// Paper title
    pub title: String,

    /// Digital Object Identifier (identity key; may be empty)
    pub doi: String,

    /// Authors, passed through verbatim from the API
    #[serde(default)]
    pub authors: Value,

    /// Publication date as reported by the API
    pub date: Option<String>,

    /// Preprint version as reported by the API
    pub version: Option<String>,

    /// Paper page URL, derived from DOI and version
    pub url: Option<String>,

    /// Direct PDF URL, derived from DOI and version
    pub pdf: Option<String>,
}

impl MatchedRecord {
    /// Create a record, deriving `url`/`pdf` when both the DOI and the
    /// version are present and non-empty.
    pub fn new(
        title: String,
        doi: String,
        authors: Value,
        date: Option<String>,
        version: Option<String>,
    ) -> Self {
        let (url, pdf) = match version.as_deref() {
            Some(v) if !doi.is_empty() && !v.is_empty() => (
                Some(format!("{}/{}v{}", MEDRXIV_CONTENT_URL, doi, v)),
                Some(format!("{}/{}v{}.full.pdf", MEDRXIV_CONTENT_URL, doi, v)),
            ),
            _ => (None, None),
        };

        Self {
            title,
            doi,
            authors,
            date,
            version,
            url,
            pdf,
        }
    }
}
