//! In-memory store implementation

use lifelens_api::{DailyEntry, MissionState, UserProfile};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::{Store, StoreResult, KEY_ENTRIES, KEY_MISSION, KEY_USER, KEY_VERSION};

/// Mapping-backed store. Records are held as the same JSON blobs the SQLite
/// implementation would write, so serialization behavior is identical.
/// Intended as the injectable fake for engine tests and for ephemeral
/// sessions that should not touch disk.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw blob under a record key, bypassing serialization.
    /// Lets tests stage malformed stored data.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.records
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn get_record<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let records = self.records.lock().unwrap();

        match records.get(key) {
            Some(s) => Ok(Some(serde_json::from_str(s)?)),
            None => Ok(None),
        }
    }

    fn put_record<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let json = serde_json::to_string(value)?;
        self.records.lock().unwrap().insert(key.to_string(), json);
        Ok(())
    }
}

impl Store for MemoryStore {
    fn get_version(&self) -> StoreResult<Option<u32>> {
        self.get_record(KEY_VERSION)
    }

    fn set_version(&self, version: u32) -> StoreResult<()> {
        self.put_record(KEY_VERSION, &version)
    }

    fn get_entries(&self) -> StoreResult<Option<Vec<DailyEntry>>> {
        self.get_record(KEY_ENTRIES)
    }

    fn set_entries(&self, entries: &[DailyEntry]) -> StoreResult<()> {
        self.put_record(KEY_ENTRIES, &entries)
    }

    fn get_mission(&self) -> StoreResult<Option<MissionState>> {
        self.get_record(KEY_MISSION)
    }

    fn set_mission(&self, state: &MissionState) -> StoreResult<()> {
        self.put_record(KEY_MISSION, state)
    }

    fn get_profile(&self) -> StoreResult<Option<UserProfile>> {
        self.get_record(KEY_USER)
    }

    fn set_profile(&self, profile: &UserProfile) -> StoreResult<()> {
        self.put_record(KEY_USER, profile)
    }

    fn clear(&self) -> StoreResult<()> {
        self.records.lock().unwrap().clear();
        Ok(())
    }

    fn is_healthy(&self) -> bool {
        self.records.lock().is_ok()
    }
}
