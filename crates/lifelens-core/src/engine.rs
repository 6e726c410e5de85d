//! Core engine
//!
//! Composes the calculator, mission state machine, and coach over an
//! injectable store, and enforces the versioned reseed policy. Reads fall
//! back to documented defaults rather than failing; writes propagate.

use chrono::{DateTime, Local};
use lifelens_api::{
    CheckInReport, CoachInsight, DailyEntry, DashboardSnapshot, MissionState, MissionSummary,
    ProfileStats, UserProfile,
};
use lifelens_config::{AppConfig, MissionSpec};
use lifelens_store::{SqliteStore, Store, StoreError};
use lifelens_util::{date_key, epoch_millis, LifelensError, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{coach, dashboard, mission, seed, wellness};

/// Current schema version of the persisted records. Any stored mismatch
/// triggers a full destructive reseed; there is no migration path.
pub const SCHEMA_VERSION: u32 = 3;

/// Result of a completed check-in
#[derive(Debug, Clone)]
pub struct CheckInOutcome {
    pub entry: DailyEntry,
    pub mission: MissionState,
}

/// The storage-gated domain service
pub struct CoreEngine {
    store: Arc<dyn Store>,
    mission_spec: MissionSpec,
}

impl CoreEngine {
    /// Create an engine over an injected store
    pub fn new(store: Arc<dyn Store>, mission_spec: MissionSpec) -> Self {
        Self {
            store,
            mission_spec,
        }
    }

    /// Open the default on-disk store, reading the config file (or built-in
    /// defaults) for the data directory and mission definition, and
    /// initialize it. The usual composition root for an embedding
    /// application.
    pub fn open_default(now: DateTime<Local>) -> Result<Self> {
        let config = lifelens_config::load_or_default(lifelens_util::default_config_path())
            .map_err(|e| LifelensError::config(e.to_string()))?;
        Self::open_with_config(&config, now)
    }

    /// Open the on-disk store described by an explicit config
    pub fn open_with_config(config: &AppConfig, now: DateTime<Local>) -> Result<Self> {
        let store = SqliteStore::open(config.db_path()).map_err(store_err)?;
        let engine = Self::new(Arc::new(store), config.mission.clone());
        engine.init(now)?;
        Ok(engine)
    }

    /// Read the stored schema version; on absence or mismatch, wipe
    /// everything and write the demo dataset. Idempotent once the version
    /// is current.
    pub fn init(&self, now: DateTime<Local>) -> Result<()> {
        let version = self.store.get_version().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read schema version, treating as unversioned");
            None
        });

        if version != Some(SCHEMA_VERSION) {
            info!(
                found = ?version,
                current = SCHEMA_VERSION,
                "Schema version mismatch, reseeding"
            );
            self.reseed(now)?;
        }

        Ok(())
    }

    /// Wipe all records and restore the demo dataset. User-invocable.
    pub fn reset_data(&self, now: DateTime<Local>) -> Result<()> {
        info!("Resetting all data");
        self.reseed(now)
    }

    fn reseed(&self, now: DateTime<Local>) -> Result<()> {
        self.store.clear().map_err(store_err)?;
        self.store.set_version(SCHEMA_VERSION).map_err(store_err)?;
        self.store
            .set_profile(&UserProfile::default())
            .map_err(store_err)?;
        self.store
            .set_entries(&seed::demo_entries(&now))
            .map_err(store_err)?;
        self.store
            .set_mission(&mission::initial_state(
                &self.mission_spec,
                epoch_millis(&now),
            ))
            .map_err(store_err)?;
        Ok(())
    }

    /// Full ordered entry list; absent or malformed data reads as empty
    pub fn entries(&self) -> Vec<DailyEntry> {
        match self.store.get_entries() {
            Ok(Some(entries)) => entries,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read entries, falling back to empty list");
                Vec::new()
            }
        }
    }

    /// Upsert by calendar date: a later save for the same date wins.
    /// The stored list stays ascending by timestamp.
    pub fn save_entry(&self, entry: DailyEntry) -> Result<()> {
        let mut entries = self.entries();
        entries.retain(|e| e.date != entry.date);
        debug!(date = %entry.date, "Saving entry");
        entries.push(entry);
        entries.sort_by_key(|e| e.timestamp);
        self.store.set_entries(&entries).map_err(store_err)
    }

    /// Mission state with the lazy week check applied; a rolled-over week is
    /// persisted before returning. Falls back to the initial state when the
    /// record is absent or malformed.
    pub fn mission_state(&self, now: DateTime<Local>) -> MissionState {
        let now_ms = epoch_millis(&now);

        let stored = match self.store.get_mission() {
            Ok(Some(state)) => state,
            Ok(None) => mission::initial_state(&self.mission_spec, now_ms),
            Err(e) => {
                warn!(error = %e, "Failed to read mission state, falling back to initial");
                mission::initial_state(&self.mission_spec, now_ms)
            }
        };

        let checked = mission::check_week_rollover(&stored, now_ms);
        if checked != stored {
            if let Err(e) = self.store.set_mission(&checked) {
                warn!(error = %e, "Failed to persist week rollover");
            }
        }

        checked
    }

    pub fn save_mission_state(&self, state: &MissionState) -> Result<()> {
        self.store.set_mission(state).map_err(store_err)
    }

    /// Profile singleton; absent or malformed data reads as the default
    pub fn user_profile(&self) -> UserProfile {
        match self.store.get_profile() {
            Ok(Some(profile)) => profile,
            Ok(None) => UserProfile::default(),
            Err(e) => {
                warn!(error = %e, "Failed to read profile, falling back to default");
                UserProfile::default()
            }
        }
    }

    pub fn save_user_profile(&self, profile: &UserProfile) -> Result<()> {
        self.store.set_profile(profile).map_err(store_err)
    }

    /// The check-in submission flow: derive the day's figures, store the
    /// entry, then advance the mission. Two sequential writes, not one
    /// transaction.
    pub fn check_in(&self, report: CheckInReport, now: DateTime<Local>) -> Result<CheckInOutcome> {
        let entry = DailyEntry {
            id: lifelens_util::CheckInId::new(),
            date: date_key(&now),
            timestamp: epoch_millis(&now),
            sleep: report.sleep,
            energy: report.energy,
            mood: report.mood,
            transport: report.transport,
            wellness_score: wellness::wellness_score(report.sleep, report.energy, report.mood),
            co2_emitted: wellness::daily_co2(report.transport),
        };

        info!(
            date = %entry.date,
            transport = ?entry.transport,
            wellness = entry.wellness_score,
            "Check-in"
        );
        self.save_entry(entry.clone())?;

        let updated = mission::update_progress(
            &self.mission_state(now),
            report.transport,
            epoch_millis(&now),
        );
        self.save_mission_state(&updated)?;

        Ok(CheckInOutcome {
            entry,
            mission: updated,
        })
    }

    /// One insight from the rule chain over the stored history
    pub fn coach_insight(&self) -> CoachInsight {
        coach::generate_insight(&self.entries())
    }

    /// Dashboard read model
    pub fn dashboard(&self, now: DateTime<Local>) -> DashboardSnapshot {
        dashboard::dashboard_snapshot(&self.entries(), &now)
    }

    /// Profile-page read model
    pub fn profile_stats(&self, now: DateTime<Local>) -> ProfileStats {
        dashboard::profile_stats(&self.entries(), &self.mission_state(now))
    }

    /// Mission-page read model
    pub fn mission_summary(&self, now: DateTime<Local>) -> MissionSummary {
        dashboard::mission_summary(&self.mission_state(now))
    }
}

fn store_err(e: StoreError) -> LifelensError {
    LifelensError::store(e.to_string())
}
