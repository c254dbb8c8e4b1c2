//! Durable JSON result store with resume support.
//!
//! The output file is the single source of truth across runs: it is loaded
//! in full at startup to rebuild the accumulated result set, and rewritten
//! in full after every processed page. Rewrites go through a temp file in
//! the same directory followed by a rename, so a crash mid-write never
//! leaves a truncated file behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::models::{MatchedRecord, ResultSet};

/// Errors from loading or saving the result file
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Result file {path} is not valid JSON: {message}")]
    Parse { path: PathBuf, message: String },
}

/// File-backed store for the accumulated result set
#[derive(Debug, Clone)]
pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load prior results, rebuilding the seen set from non-empty DOIs.
    ///
    /// An absent or empty file yields an empty set. A file that exists but
    /// does not parse is a [`StoreError::Parse`]; the caller aborts rather
    /// than overwrite it on the next flush.
    pub fn load(&self) -> Result<ResultSet, StoreError> {
        if !self.path.exists() {
            return Ok(ResultSet::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        if content.trim().is_empty() {
            return Ok(ResultSet::new());
        }

        let records: Vec<MatchedRecord> =
            serde_json::from_str(&content).map_err(|e| StoreError::Parse {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        Ok(ResultSet::from_records(records))
    }

    /// Rewrite the full result set, atomically from the caller's
    /// perspective.
    pub fn save(&self, results: &ResultSet) -> Result<(), StoreError> {
        let io_err = |e: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source: e,
        };

        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut tmp = match dir {
            Some(dir) => NamedTempFile::new_in(dir),
            None => NamedTempFile::new_in("."),
        }
        .map_err(io_err)?;

        let json = serde_json::to_vec_pretty(results.records()).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        tmp.write_all(&json).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e.error,
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    fn record(doi: &str) -> MatchedRecord {
        MatchedRecord::new(
            "Title".to_string(),
            doi.to_string(),
            Value::Null,
            Some("2020-06-01".to_string()),
            Some("1".to_string()),
        )
    }

    #[test]
    fn test_load_absent_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("out.json"));

        let results = store.load().unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_load_empty_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "").unwrap();

        let results = ResultStore::new(path).load().unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_save_then_load_rebuilds_seen_set() {
        let dir = tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("out.json"));

        let mut results = ResultSet::new();
        results.insert(record("10.1/a"));
        results.insert(record("10.1/b"));
        store.save(&results).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.contains("10.1/a"));
        assert!(reloaded.contains("10.1/b"));
    }

    #[test]
    fn test_corrupt_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = ResultStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
        // The corrupt file must survive for inspection
        assert!(path.exists());
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let store = ResultStore::new(dir.path().join("out.json"));

        let mut results = ResultSet::new();
        results.insert(record("10.1/a"));
        store.save(&results).unwrap();
        store.save(&results).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
