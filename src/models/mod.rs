//! Core data structures for harvested records.

mod record;
mod result_set;

pub use record::MatchedRecord;
pub use result_set::ResultSet;
