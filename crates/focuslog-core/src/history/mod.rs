//! Session history persistence.
//!
//! The history is a newest-first sequence of [`SessionRecord`]s serialized
//! as a single JSON blob under one key of the backing [`KvStore`]. Every
//! mutation re-persists the whole sequence; there is no incremental form.
//!
//! Loading fails soft: a missing key, a read error, or a blob that does not
//! decode (including unparseable timestamps) all yield the empty history.

use chrono::{DateTime, Local};

use crate::error::StoreError;
use crate::session::SessionRecord;
use crate::storage::KvStore;

/// Key holding the serialized history blob.
pub const HISTORY_KEY: &str = "session_history";

/// Typed wrapper over the key-value store for the session history.
///
/// Single-writer: only the session controller mutates history.
#[derive(Debug)]
pub struct HistoryStore<S: KvStore> {
    store: S,
    /// Newest-first.
    records: Vec<SessionRecord>,
}

impl<S: KvStore> HistoryStore<S> {
    /// Load the history from the store, defaulting to empty when the key is
    /// absent, unreadable, or corrupt. Never fails.
    pub fn load(store: S) -> Self {
        let records = match store.get(HISTORY_KEY) {
            Ok(Some(blob)) => serde_json::from_str(&blob).unwrap_or_default(),
            _ => Vec::new(),
        };
        Self { store, records }
    }

    /// Newest-first view of the records.
    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Next unique record id: the finalization instant in epoch
    /// milliseconds, bumped past the newest existing id when two records
    /// land in the same millisecond.
    pub fn next_id(&self, at: DateTime<Local>) -> i64 {
        let newest = self.records.first().map(|r| r.id).unwrap_or(i64::MIN);
        at.timestamp_millis().max(newest.saturating_add(1))
    }

    /// Prepend a record and persist the whole sequence.
    ///
    /// The record stays in memory even when persisting fails; the caller
    /// decides whether to report the error.
    pub fn append(&mut self, record: SessionRecord) -> Result<(), StoreError> {
        self.records.insert(0, record);
        self.persist()
    }

    /// Drop all records and remove the persisted blob.
    ///
    /// Memory is cleared even when the removal fails.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.records.clear();
        self.store.remove(HISTORY_KEY)
    }

    fn persist(&self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.records).map_err(|e| StoreError::Corrupt {
            key: HISTORY_KEY.into(),
            message: e.to_string(),
        })?;
        self.store.set(HISTORY_KEY, &blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    fn record(id: i64, duration_min: u32, completed: bool) -> SessionRecord {
        let at = Local.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
        SessionRecord::finalize(id, duration_min, at, completed, duration_min / 2)
    }

    #[test]
    fn load_from_empty_store_is_empty() {
        let history = HistoryStore::load(MemoryStore::default());
        assert!(history.is_empty());
    }

    #[test]
    fn append_prepends_newest_first() {
        let mut history = HistoryStore::load(MemoryStore::default());
        for id in 1..=5 {
            history.append(record(id, 25, true)).unwrap();
        }
        assert_eq!(history.len(), 5);
        assert_eq!(history.records()[0].id, 5);
        assert_eq!(history.records()[4].id, 1);
    }

    #[test]
    fn append_then_reload_round_trips() {
        let store = MemoryStore::default();
        let r = record(7, 25, false);
        {
            let mut history = HistoryStore::load(&store);
            history.append(r.clone()).unwrap();
        }
        let history = HistoryStore::load(&store);
        assert_eq!(history.records(), &[r]);
    }

    #[test]
    fn corrupt_blob_defaults_to_empty() {
        let store = MemoryStore::default();
        store.set(HISTORY_KEY, "{not json").unwrap();
        assert!(HistoryStore::load(&store).is_empty());

        // Malformed timestamp inside an otherwise valid array.
        store
            .set(
                HISTORY_KEY,
                r#"[{"id":1,"duration_min":25,"finished_at":"not-a-date","completed":true}]"#,
            )
            .unwrap();
        assert!(HistoryStore::load(&store).is_empty());
    }

    #[test]
    fn clear_removes_the_persisted_blob() {
        let store = MemoryStore::default();
        let mut history = HistoryStore::load(&store);
        history.append(record(1, 25, true)).unwrap();
        history.clear().unwrap();
        assert!(history.is_empty());
        assert_eq!(store.get(HISTORY_KEY).unwrap(), None);
    }

    #[test]
    fn next_id_is_strictly_increasing() {
        let at = Local.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
        let mut history = HistoryStore::load(MemoryStore::default());
        let first = history.next_id(at);
        history
            .append(SessionRecord::finalize(first, 25, at, true, 25))
            .unwrap();
        // Same millisecond: the id still moves past the newest record.
        let second = history.next_id(at);
        assert!(second > first);
    }
}
