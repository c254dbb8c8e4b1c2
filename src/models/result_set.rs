//! Insertion-ordered, DOI-deduplicated accumulator for matched records.

use std::collections::HashSet;

use crate::models::MatchedRecord;

/// Accumulated matched records with first-seen-wins DOI deduplication.
///
/// Insertion order is preserved. Non-empty DOIs are unique across the set;
/// the seen set is maintained in lockstep so the invariant cannot drift.
/// Records with an empty DOI are exempt from uniqueness enforcement.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    records: Vec<MatchedRecord>,
    seen: HashSet<String>,
}

impl ResultSet {
    /// Create an empty result set
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a result set from previously persisted records, recovering
    /// the seen set from all non-empty DOIs.
    pub fn from_records(records: Vec<MatchedRecord>) -> Self {
        let seen = records
            .iter()
            .filter(|r| !r.doi.is_empty())
            .map(|r| r.doi.clone())
            .collect();

        Self { records, seen }
    }

    /// Whether a DOI has already been accumulated
    pub fn contains(&self, doi: &str) -> bool {
        self.seen.contains(doi)
    }

    /// Append a record unless its DOI was already seen.
    ///
    /// Returns `true` if the record was added. Records with an empty DOI
    /// are always appended and never registered in the seen set.
    pub fn insert(&mut self, record: MatchedRecord) -> bool {
        if !record.doi.is_empty() {
            if self.seen.contains(&record.doi) {
                return false;
            }
            self.seen.insert(record.doi.clone());
        }
        self.records.push(record);
        true
    }

    /// Number of accumulated records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records have been accumulated
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of unique non-empty DOIs
    pub fn unique_dois(&self) -> usize {
        self.seen.len()
    }

    /// The accumulated records in insertion order
    pub fn records(&self) -> &[MatchedRecord] {
        &self.records
    }
}
