//! # Record Store
//!
//! [`Store`] is the authoritative live mapping of roll to [`Record`]. It is a plain
//! value: cloning it yields a fully independent copy, which is what the
//! [`History`](crate::history::History) relies on for snapshots.
//!
//! Entries are kept in a `BTreeMap`, so iteration is always in ascending roll
//! order and `list_all` needs no extra sort.

use crate::error::{Result, StudentDbError};
use crate::model::{Marks, Record, Roll};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    records: BTreeMap<Roll, Record>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record. Fails if the roll is already taken.
    pub fn add(&mut self, roll: Roll, name: impl Into<String>, marks: Marks) -> Result<&Record> {
        if self.records.contains_key(&roll) {
            return Err(StudentDbError::DuplicateKey(roll));
        }
        let record = Record::new(roll, name, marks);
        Ok(self.records.entry(roll).or_insert(record))
    }

    /// Replace only the supplied fields of an existing record.
    pub fn update(
        &mut self,
        roll: Roll,
        name: Option<String>,
        marks: Option<Marks>,
    ) -> Result<&Record> {
        let record = self
            .records
            .get_mut(&roll)
            .ok_or(StudentDbError::NotFound(roll))?;
        if let Some(name) = name {
            record.name = name;
        }
        if let Some(marks) = marks {
            record.marks = marks;
        }
        Ok(record)
    }

    pub fn delete(&mut self, roll: Roll) -> Result<Record> {
        self.records
            .remove(&roll)
            .ok_or(StudentDbError::NotFound(roll))
    }

    pub fn get(&self, roll: Roll) -> Option<&Record> {
        self.records.get(&roll)
    }

    pub fn contains(&self, roll: Roll) -> bool {
        self.records.contains_key(&roll)
    }

    /// All records, ascending by roll.
    pub fn list_all(&self) -> Vec<&Record> {
        self.records.values().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Files a decoded record under `key`, re-keying the record if its own roll
    /// disagrees. Used by the backends when rebuilding a store from disk.
    pub(crate) fn insert_loaded(&mut self, key: Roll, mut record: Record) {
        if record.roll != key {
            tracing::debug!(key, roll = record.roll, "re-keying loaded record");
            record.roll = key;
        }
        self.records.insert(key, record);
    }
}

impl FromIterator<Record> for Store {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut store = Store::new();
        for record in iter {
            store.insert_loaded(record.roll, record);
        }
        store
    }
}
