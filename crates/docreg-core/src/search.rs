// crates/docreg-core/src/search.rs

//! # Search
//!
//! Plain case-insensitive substring search over the register.
//!
//! A record matches when at least one of its [`SearchField`]s, lower-cased,
//! contains the lower-cased term as one contiguous substring. The term is not
//! trimmed or split into words. The empty term matches every record.
//! Results keep the register order.

use crate::model::{Dataset, Record, SearchField};
use std::sync::Arc;

/// `true` when `record` matches `term`.
///
/// ```rust
/// use docreg_core::{search::matches, Record};
///
/// let r = Record::new("Brazil", "Certificate", 150.0, "Registry X", "http://x");
/// assert!(matches(&r, "BRAZ"));
/// assert!(matches(&r, "15"));
/// assert!(!matches(&r, "brazil certificate"));
/// ```
pub fn matches(record: &Record, term: &str) -> bool {
    matches_folded(record, &term.to_lowercase())
}

fn matches_folded(record: &Record, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record
        .searchable_fields()
        .any(|(_, text)| text.to_lowercase().contains(needle))
}

/// Filter `records` down to those matching `term`, preserving order.
///
/// Pure: the same inputs always give the same output, and filtering a result
/// again with the same term returns it unchanged.
pub fn filter(records: &[Record], term: &str) -> Vec<Record> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| matches_folded(r, &needle))
        .cloned()
        .collect()
}

/// Search operations shared by the plain register and the prepared index.
pub trait RecordSearch {
    /// Records matching `term`, in register order.
    fn search(&self, term: &str) -> Vec<Record>;

    /// Number of records matching `term`.
    fn count_matches(&self, term: &str) -> usize {
        self.search(term).len()
    }
}

impl RecordSearch for [Record] {
    fn search(&self, term: &str) -> Vec<Record> {
        filter(self, term)
    }
}

impl RecordSearch for Dataset {
    fn search(&self, term: &str) -> Vec<Record> {
        filter(self.records(), term)
    }
}

/// Register with the lower-cased text of every searchable field computed up
/// front, so a keystroke only costs the substring scans.
///
/// Returns exactly what [`filter`] returns for the same records and term.
#[derive(Clone, Debug)]
pub struct SearchIndex {
    records: Arc<[Record]>,
    folded: Vec<[String; 5]>,
}

impl SearchIndex {
    pub fn new(records: Arc<[Record]>) -> Self {
        let folded = records
            .iter()
            .map(|r| SearchField::ALL.map(|field| r.field_text(field).to_lowercase()))
            .collect();
        SearchIndex { records, folded }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Positions of the matching records in the register.
    pub fn matching_indices(&self, term: &str) -> Vec<usize> {
        let needle = term.to_lowercase();
        self.folded
            .iter()
            .enumerate()
            .filter(|(_, fields)| fields.iter().any(|text| text.contains(needle.as_str())))
            .map(|(i, _)| i)
            .collect()
    }
}

impl From<&Dataset> for SearchIndex {
    fn from(dataset: &Dataset) -> Self {
        SearchIndex::new(dataset.shared())
    }
}

impl RecordSearch for SearchIndex {
    fn search(&self, term: &str) -> Vec<Record> {
        self.matching_indices(term)
            .into_iter()
            .map(|i| self.records[i].clone())
            .collect()
    }

    fn count_matches(&self, term: &str) -> usize {
        self.matching_indices(term).len()
    }
}
