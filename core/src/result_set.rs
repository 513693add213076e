//! Serial-number deduplicating accumulator.
//!
//! [`ResultSet`] collects finalized [`Record`]s across every processed
//! report. Submitting a record whose serial number is already present
//! replaces the earlier one, and the replacement moves to the end of the
//! materialized order.
//!
//! # Example
//!
//! ```
//! use disk_report_core::{Field, PartialRecord, ResultSet};
//!
//! let record = |serial: &str, date: &str| {
//!     let mut partial = PartialRecord::dated(date);
//!     partial.set(Field::SerialNumber, serial);
//!     partial.finish()
//! };
//!
//! let mut results = ResultSet::new();
//! results.submit(record("A", "2023"));
//! results.submit(record("B", "2023"));
//! let replaced = results.submit(record("A", "2024"));
//!
//! assert_eq!(replaced.and_then(|r| r.info_date).as_deref(), Some("2023"));
//! let order: Vec<_> = results.iter().map(|r| r.dedup_key()).collect();
//! assert_eq!(order, ["B", "A"]);
//! ```

use std::collections::HashMap;

use crate::Record;

/// Insertion-ordered records with at most one entry per serial number.
///
/// Replacement is O(1): the superseded entry is tombstoned in place and the
/// new record is appended, so the relative order of distinct disks follows
/// their *last* submission.
#[derive(Debug, Default)]
pub struct ResultSet {
    slots: Vec<Option<Record>>,
    index: HashMap<String, usize>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `record`, removing any earlier record with the same serial
    /// number first. Returns the removed record.
    pub fn submit(&mut self, record: Record) -> Option<Record> {
        let key = record.dedup_key().to_string();
        let position = self.slots.len();
        self.slots.push(Some(record));

        let replaced = self
            .index
            .insert(key, position)
            .and_then(|previous| self.slots[previous].take());

        if self.tombstones() > self.index.len() {
            self.compact();
        }
        replaced
    }

    /// Number of distinct serial numbers held.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterates the records in materialized order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.slots.iter().flatten()
    }

    /// Consumes the set, returning the records in materialized order.
    pub fn into_records(self) -> Vec<Record> {
        self.slots.into_iter().flatten().collect()
    }

    fn tombstones(&self) -> usize {
        self.slots.len() - self.index.len()
    }

    fn compact(&mut self) {
        self.slots.retain(Option::is_some);
        for (position, record) in self.slots.iter().flatten().enumerate() {
            if let Some(slot) = self.index.get_mut(record.dedup_key()) {
                *slot = position;
            }
        }
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Record;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Option<Record>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter().flatten()
    }
}
