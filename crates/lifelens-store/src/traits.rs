//! Store trait definition

use lifelens_api::{DailyEntry, MissionState, UserProfile};

use crate::StoreResult;

/// Record key for the schema version tag
pub const KEY_VERSION: &str = "version";
/// Record key for the user profile singleton
pub const KEY_USER: &str = "user";
/// Record key for the ordered entry list
pub const KEY_ENTRIES: &str = "entries";
/// Record key for the mission-state singleton
pub const KEY_MISSION: &str = "mission";

/// Main store trait.
///
/// Each getter returns `Ok(None)` when the record was never written.
/// Malformed stored data surfaces as a serialization error; callers decide
/// whether to fall back or propagate. No transactional guarantees span
/// records: each set is a single underlying write.
pub trait Store: Send + Sync {
    // Schema version tag

    /// Read the stored schema version
    fn get_version(&self) -> StoreResult<Option<u32>>;

    /// Write the schema version tag
    fn set_version(&self, version: u32) -> StoreResult<()>;

    // Daily entries

    /// Read the full entry list, in stored order
    fn get_entries(&self) -> StoreResult<Option<Vec<DailyEntry>>>;

    /// Replace the full entry list
    fn set_entries(&self, entries: &[DailyEntry]) -> StoreResult<()>;

    // Mission state

    /// Read the mission singleton
    fn get_mission(&self) -> StoreResult<Option<MissionState>>;

    /// Replace the mission singleton
    fn set_mission(&self, state: &MissionState) -> StoreResult<()>;

    // User profile

    /// Read the profile singleton
    fn get_profile(&self) -> StoreResult<Option<UserProfile>>;

    /// Replace the profile singleton
    fn set_profile(&self, profile: &UserProfile) -> StoreResult<()>;

    // Maintenance

    /// Remove every record. The reseed primitive.
    fn clear(&self) -> StoreResult<()>;

    /// Check if the store is healthy
    fn is_healthy(&self) -> bool;
}
