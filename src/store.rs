//! Record Store
//!
//! Holds student records in insertion order. Roll uniqueness is checked on
//! every write.

use crate::error::{RollError, RollResult};
use crate::record::Record;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// In-memory list of student records
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record, or overwrite the one with the same roll in place
    pub fn add_or_update(&mut self, record: Record) {
        if let Some(existing) = self.records.iter_mut().find(|r| r.roll == record.roll) {
            debug!("✏️ Updated {}", record.roll);
            *existing = record;
        } else {
            info!("➕ Added {} ({})", record.roll, record.name);
            self.records.push(record);
        }
    }

    /// Replace the record stored under `original_roll`, keeping its position
    ///
    /// The new record may carry a different roll, as long as no other
    /// record already uses it.
    pub fn replace(&mut self, original_roll: &str, record: Record) -> RollResult<()> {
        if record.roll != original_roll && self.contains(&record.roll) {
            return Err(RollError::DuplicateRoll(record.roll));
        }

        let slot = self
            .records
            .iter_mut()
            .find(|r| r.roll == original_roll)
            .ok_or_else(|| RollError::UnknownRecord(original_roll.to_string()))?;

        info!("✏️ Updated {} -> {}", original_roll, record.roll);
        *slot = record;
        Ok(())
    }

    /// Remove a record by roll, returning it if it existed
    pub fn remove(&mut self, roll: &str) -> Option<Record> {
        let idx = self.records.iter().position(|r| r.roll == roll)?;
        let removed = self.records.remove(idx);
        info!("🗑️ Removed {}", removed.roll);
        Some(removed)
    }

    pub fn get(&self, roll: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.roll == roll)
    }

    pub fn contains(&self, roll: &str) -> bool {
        self.get(roll).is_some()
    }

    /// All records in insertion order
    pub fn list_all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A store shared between threads; every mutation goes through one lock
#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<RecordStore>>,
}

impl SharedStore {
    pub fn new(store: RecordStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn add_or_update(&self, record: Record) -> RollResult<()> {
        self.inner.lock()?.add_or_update(record);
        Ok(())
    }

    pub fn replace(&self, original_roll: &str, record: Record) -> RollResult<()> {
        self.inner.lock()?.replace(original_roll, record)
    }

    pub fn remove(&self, roll: &str) -> RollResult<Option<Record>> {
        Ok(self.inner.lock()?.remove(roll))
    }

    /// Snapshot of all records in insertion order
    pub fn list_all(&self) -> RollResult<Vec<Record>> {
        Ok(self.inner.lock()?.list_all().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Department;

    fn sample() -> RecordStore {
        let mut store = RecordStore::new();
        store.add_or_update(Record::new("CSE2025-001", "Ravi", Department::Cse, 1, 8.1));
        store.add_or_update(Record::new("ECE2025-002", "Ana", Department::Ece, 2, 7.4));
        store
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let store = sample();
        let rolls: Vec<_> = store.list_all().iter().map(|r| r.roll.as_str()).collect();
        assert_eq!(rolls, ["CSE2025-001", "ECE2025-002"]);
    }

    #[test]
    fn test_add_or_update_overwrites_in_place() {
        let mut store = sample();
        store.add_or_update(Record::new("CSE2025-001", "Ravi K", Department::Cse, 2, 9.0));
        assert_eq!(store.len(), 2);
        assert_eq!(store.list_all()[0].name, "Ravi K");
    }

    #[test]
    fn test_replace_with_new_roll() {
        let mut store = sample();
        store
            .replace("CSE2025-001", Record::new("CSE2025-010", "Ravi", Department::Cse, 1, 8.1))
            .unwrap();
        assert!(store.get("CSE2025-001").is_none());
        assert_eq!(store.list_all()[0].roll, "CSE2025-010");
    }

    #[test]
    fn test_replace_rejects_taken_roll() {
        let mut store = sample();
        let err = store
            .replace("CSE2025-001", Record::new("ECE2025-002", "Ravi", Department::Cse, 1, 8.1))
            .unwrap_err();
        assert!(matches!(err, RollError::DuplicateRoll(_)));
        assert_eq!(store.list_all()[0].name, "Ravi");
    }

    #[test]
    fn test_replace_unknown() {
        let mut store = sample();
        let err = store
            .replace("XX", Record::new("XX", "Nobody", Department::Me, 1, 1.0))
            .unwrap_err();
        assert!(matches!(err, RollError::UnknownRecord(_)));
    }

    #[test]
    fn test_remove() {
        let mut store = sample();
        assert!(store.remove("CSE2025-001").is_some());
        assert!(store.remove("CSE2025-001").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_shared_store_across_threads() {
        let shared = SharedStore::default();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    let roll = format!("ME2025-00{}", i);
                    shared
                        .add_or_update(Record::new(&roll, "Student", Department::Me, 1, 5.0))
                        .unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(shared.list_all().unwrap().len(), 4);
    }
}
