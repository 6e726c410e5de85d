//! Persisted records and core domain types

use chrono::NaiveDate;
use lifelens_util::{CheckInId, MissionId};
use serde::{Deserialize, Serialize};

/// Transport mode for the daily commute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Walk,
    Cycle,
    Public,
    Car,
    /// Catch-all for unrecognized stored values. CO2 accounting resolves
    /// these to the worst case (car) rather than failing.
    #[serde(other)]
    Unknown,
}

impl TransportMode {
    /// Walk and cycle count as active transport
    pub fn is_active(&self) -> bool {
        matches!(self, TransportMode::Walk | TransportMode::Cycle)
    }
}

/// One self-reported day: wellness inputs plus the commute choice and the
/// figures derived from them at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// Opaque id, generated at creation, immutable
    pub id: CheckInId,

    /// Calendar date; the upsert key. At most one entry per date.
    pub date: NaiveDate,

    /// Creation instant, epoch milliseconds. Orders the stored list.
    pub timestamp: i64,

    /// Self-reports in [0, 10]; range is UI-enforced, not validated here
    pub sleep: f64,
    pub energy: f64,
    pub mood: f64,

    pub transport: TransportMode,

    /// Derived 0-100 composite, stored and never recomputed on read
    pub wellness_score: u32,

    /// Kilograms of CO2 attributed to the day's transport
    pub co2_emitted: f64,
}

/// User input for one daily check-in, before derivation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckInReport {
    pub sleep: f64,
    pub energy: f64,
    pub mood: f64,
    pub transport: TransportMode,
}

/// Singleton weekly-mission state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionState {
    pub id: MissionId,
    pub title: String,

    /// Count of qualifying days needed to complete the week
    pub target_count: u32,

    /// Progress this week. Not clamped above `target_count` once the week
    /// is completed; only the `completed` flag is terminal.
    pub current_count: u32,
    pub completed: bool,

    /// Start of the current tracking week, epoch milliseconds
    pub week_start_timestamp: i64,

    /// Lifetime totals; week rollover never resets these
    pub total_energy_gained: u32,
    pub total_co2_saved: f64,
}

/// Singleton user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub onboarding_completed: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "User".to_string(),
            onboarding_completed: false,
        }
    }
}

/// Focus of a coach insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Balanced,
    Health,
    Planet,
}

/// Free-text rationale attached to an insight, one line per focus area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correlations {
    pub health: String,
    pub planet: String,
}

/// Output of the coach rule chain. Derived on read, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachInsight {
    pub text: String,
    pub kind: InsightKind,
    pub correlations: Correlations,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_mode_serialization() {
        let json = serde_json::to_string(&TransportMode::Public).unwrap();
        assert_eq!(json, "\"public\"");

        let parsed: TransportMode = serde_json::from_str("\"cycle\"").unwrap();
        assert_eq!(parsed, TransportMode::Cycle);
    }

    #[test]
    fn unrecognized_transport_becomes_unknown() {
        let parsed: TransportMode = serde_json::from_str("\"teleport\"").unwrap();
        assert_eq!(parsed, TransportMode::Unknown);
    }

    #[test]
    fn active_transport() {
        assert!(TransportMode::Walk.is_active());
        assert!(TransportMode::Cycle.is_active());
        assert!(!TransportMode::Public.is_active());
        assert!(!TransportMode::Car.is_active());
        assert!(!TransportMode::Unknown.is_active());
    }

    #[test]
    fn daily_entry_round_trip() {
        let entry = DailyEntry {
            id: CheckInId::new(),
            date: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
            timestamp: 1_772_000_000_000,
            sleep: 7.0,
            energy: 6.0,
            mood: 8.0,
            transport: TransportMode::Cycle,
            wellness_score: 70,
            co2_emitted: 0.0,
        };

        let json = serde_json::to_string(&entry).unwrap();
        let parsed: DailyEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, parsed);
    }

    #[test]
    fn default_profile() {
        let profile = UserProfile::default();
        assert_eq!(profile.name, "User");
        assert!(!profile.onboarding_completed);
    }
}
