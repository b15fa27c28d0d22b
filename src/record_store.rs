use log::debug;

use crate::record::Record;

/// The ordered in-memory table of records for the current session.
///
/// Insertion order is display order. IDs are not required to be unique, and
/// lookups are linear scans.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the table.
    pub fn add(&mut self, id: i64, title: impl Into<String>, artist: impl Into<String>) {
        let record = Record::new(id, title, artist);
        debug!("Adding record {id}");
        self.records.push(record);
    }

    /// Remove the first record with the given ID.
    ///
    /// Returns whether a record was removed. Later records sharing the same
    /// ID are left in place.
    pub fn delete_by_id(&mut self, id: i64) -> bool {
        match self.records.iter().position(|record| record.id == id) {
            Some(index) => {
                self.records.remove(index);
                debug!("Removed record {id} at position {index}");
                true
            }
            None => false,
        }
    }

    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Swap in a freshly loaded table, dropping the current contents.
    pub fn replace(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
