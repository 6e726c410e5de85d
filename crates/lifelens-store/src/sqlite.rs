//! SQLite-based store implementation

use lifelens_api::{DailyEntry, MissionState, UserProfile};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::{Store, StoreResult, KEY_ENTRIES, KEY_MISSION, KEY_USER, KEY_VERSION};

/// SQLite-based store. All records live in one flat key/value table of JSON
/// blobs, mirroring the flat namespace of the persisted format.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create a store at the given path, creating parent
    /// directories as needed
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory store (for testing)
    pub fn in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();

        conn.execute_batch(
            r#"
            -- Flat record namespace, one JSON blob per named record
            CREATE TABLE IF NOT EXISTS records (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )?;

        debug!("Store schema initialized");
        Ok(())
    }

    fn get_record<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let conn = self.conn.lock().unwrap();

        let json: Option<String> = conn
            .query_row("SELECT value FROM records WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional()?;

        match json {
            Some(s) => Ok(Some(serde_json::from_str(&s)?)),
            None => Ok(None),
        }
    }

    fn put_record<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        let json = serde_json::to_string(value)?;

        conn.execute(
            r#"
            INSERT INTO records (key, value)
            VALUES (?, ?)
            ON CONFLICT(key)
            DO UPDATE SET value = excluded.value
            "#,
            params![key, json],
        )?;

        debug!(key, "Record written");
        Ok(())
    }
}

impl Store for SqliteStore {
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
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM records", [])?;
        debug!("All records cleared");
        Ok(())
    }

    fn is_healthy(&self) -> bool {
        match self.conn.lock() {
            Ok(conn) => conn.query_row("SELECT 1", [], |_| Ok(())).is_ok(),
            Err(_) => {
                warn!("Store lock poisoned");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use lifelens_api::TransportMode;
    use lifelens_util::{CheckInId, MissionId};

    fn make_entry(date: NaiveDate, timestamp: i64) -> DailyEntry {
        DailyEntry {
            id: CheckInId::new(),
            date,
            timestamp,
            sleep: 7.0,
            energy: 6.0,
            mood: 7.0,
            transport: TransportMode::Public,
            wellness_score: 67,
            co2_emitted: 0.5,
        }
    }

    fn make_mission() -> MissionState {
        MissionState {
            id: MissionId::new("cycle-commute-1"),
            title: "Cycle to work 3x this week".into(),
            target_count: 3,
            current_count: 1,
            completed: false,
            week_start_timestamp: 1_772_000_000_000,
            total_energy_gained: 6,
            total_co2_saved: 2.5,
        }
    }

    #[test]
    fn test_in_memory_store() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(store.is_healthy());
    }

    #[test]
    fn absent_records_read_as_none() {
        let store = SqliteStore::in_memory().unwrap();

        assert!(store.get_version().unwrap().is_none());
        assert!(store.get_entries().unwrap().is_none());
        assert!(store.get_mission().unwrap().is_none());
        assert!(store.get_profile().unwrap().is_none());
    }

    #[test]
    fn version_round_trip() {
        let store = SqliteStore::in_memory().unwrap();

        store.set_version(3).unwrap();
        assert_eq!(store.get_version().unwrap(), Some(3));

        // Overwrite
        store.set_version(4).unwrap();
        assert_eq!(store.get_version().unwrap(), Some(4));
    }

    #[test]
    fn entries_round_trip() {
        let store = SqliteStore::in_memory().unwrap();

        let entries = vec![
            make_entry(NaiveDate::from_ymd_opt(2026, 3, 3).unwrap(), 1_000),
            make_entry(NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(), 2_000),
        ];
        store.set_entries(&entries).unwrap();

        let loaded = store.get_entries().unwrap().unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn mission_and_profile_round_trip() {
        let store = SqliteStore::in_memory().unwrap();

        let mission = make_mission();
        store.set_mission(&mission).unwrap();
        assert_eq!(store.get_mission().unwrap().unwrap(), mission);

        let profile = UserProfile {
            name: "Ada".into(),
            onboarding_completed: true,
        };
        store.set_profile(&profile).unwrap();
        assert_eq!(store.get_profile().unwrap().unwrap(), profile);
    }

    #[test]
    fn clear_removes_everything() {
        let store = SqliteStore::in_memory().unwrap();

        store.set_version(3).unwrap();
        store
            .set_entries(&[make_entry(
                NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
                1_000,
            )])
            .unwrap();
        store.set_profile(&UserProfile::default()).unwrap();

        store.clear().unwrap();

        assert!(store.get_version().unwrap().is_none());
        assert!(store.get_entries().unwrap().is_none());
        assert!(store.get_profile().unwrap().is_none());
    }

    #[test]
    fn records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lifelens.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store.set_version(3).unwrap();
            store.set_profile(&UserProfile::default()).unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.get_version().unwrap(), Some(3));
        assert_eq!(
            store.get_profile().unwrap().unwrap(),
            UserProfile::default()
        );
    }

    #[test]
    fn open_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("lifelens.db");

        let store = SqliteStore::open(&path).unwrap();
        assert!(store.is_healthy());
        assert!(path.exists());
    }
}
