//! The incremental fetch/filter/dedupe/persist loop.
//!
//! One linear pipeline per page: fetch the page, keep title-matched
//! candidates with unseen DOIs, append them to the result set, rewrite the
//! output file, sleep, move on. State already flushed for prior pages is
//! never at risk; a crash mid-page loses at most that page.

use std::path::PathBuf;
use std::time::Duration;

use serde_json::Value;

use crate::config::HarvestConfig;
use crate::models::{MatchedRecord, ResultSet};
use crate::source::{Candidate, PageClient, SourceError};
use crate::store::{ResultStore, StoreError};
use crate::utils::read_url_list;

/// Errors that abort a harvest run.
///
/// Page-level failures (non-2xx, transport, undecodable body) never appear
/// here; they are logged and the page is skipped.
#[derive(Debug, thiserror::Error)]
pub enum HarvestError {
    #[error("Failed to read URL list {path}: {source}")]
    UrlList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to initialize HTTP client: {0}")]
    Init(SourceError),
}

/// Counts reported after a run, diagnostics only
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    /// Page sources in the list
    pub pages: usize,
    /// Pages skipped due to fetch or parse failures
    pub pages_skipped: usize,
    /// New records added by this run
    pub added: usize,
    /// Records in the result set after the run
    pub total: usize,
    /// Unique non-empty DOIs after the run
    pub unique_dois: usize,
}

/// Drives the fetch/filter/persist loop with resumable accumulation
#[derive(Debug)]
pub struct Collector {
    config: HarvestConfig,
    client: PageClient,
    store: ResultStore,
}

impl Collector {
    pub fn new(config: HarvestConfig) -> Result<Self, HarvestError> {
        let client = PageClient::new().map_err(HarvestError::Init)?;
        let store = ResultStore::new(&config.out_file);

        Ok(Self {
            config,
            client,
            store,
        })
    }

    /// Run the full loop over the configured page-source list.
    ///
    /// Resumes from the output file when it exists; rewrites it after every
    /// processed page.
    pub async fn run(&self) -> Result<RunSummary, HarvestError> {
        let mut results = self.store.load()?;
        if !results.is_empty() {
            tracing::info!(
                "Loaded {} matched records from {} (unique DOIs: {})",
                results.len(),
                self.store.path().display(),
                results.unique_dois()
            );
        }

        let urls = read_url_list(&self.config.url_file).map_err(|e| HarvestError::UrlList {
            path: self.config.url_file.clone(),
            source: e,
        })?;
        tracing::info!(
            "Found {} URLs in {}",
            urls.len(),
            self.config.url_file.display()
        );

        let keywords: Vec<String> = self
            .config
            .keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect();

        let mut summary = RunSummary {
            pages: urls.len(),
            ..RunSummary::default()
        };
        let delay = Duration::from_secs_f64(self.config.delay_secs);

        for (i, url) in urls.iter().enumerate() {
            tracing::info!("[{}/{}] Requesting: {}", i + 1, urls.len(), url);

            let candidates = match self.client.fetch_page(url).await {
                Ok(candidates) => candidates,
                Err(e) => {
                    // This page contributes nothing; prior pages are safe
                    tracing::warn!("Skipping {}: {}", url, e);
                    summary.pages_skipped += 1;
                    continue;
                }
            };
            tracing::info!("Retrieved {} records from this page", candidates.len());

            let added = accumulate(&mut results, candidates, &keywords);
            summary.added += added;
            tracing::info!(
                "Added {} new matched records this page, total matched so far = {}",
                added,
                results.len()
            );

            self.store.save(&results)?;
            tracing::debug!("Progress saved to {}", self.store.path().display());

            if i + 1 < urls.len() {
                tokio::time::sleep(delay).await;
            }
        }

        summary.total = results.len();
        summary.unique_dois = results.unique_dois();
        Ok(summary)
    }
}

/// Fold one page of candidates into the result set, returning how many
/// records were added.
fn accumulate(results: &mut ResultSet, candidates: Vec<Candidate>, keywords: &[String]) -> usize {
    let mut added = 0;

    for candidate in candidates {
        let title = match candidate.title {
            Some(ref t) if !t.is_empty() && title_matches(t, keywords) => t.clone(),
            _ => continue,
        };

        let doi = match candidate.doi {
            Some(ref d) if !d.is_empty() && !results.contains(d) => d.clone(),
            _ => continue,
        };

        let record = MatchedRecord::new(
            title,
            doi,
            candidate.authors.unwrap_or(Value::Null),
            candidate.date,
            candidate.version,
        );

        if results.insert(record) {
            added += 1;
        }
    }

    added
}

/// Case-insensitive substring match against a pre-lowercased keyword set
fn title_matches(title: &str, keywords_lower: &[String]) -> bool {
    let title = title.to_lowercase();
    keywords_lower.iter().any(|k| title.contains(k))
}
