//! Derived view types for the presentation layer
//!
//! All aggregation over the raw entry list happens in `lifelens-core`;
//! these are the shapes it hands back for display.

use serde::{Deserialize, Serialize};

use crate::CoachInsight;

/// When the user last checked in, pre-formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "when", rename_all = "snake_case")]
pub enum LastCheckIn {
    /// No entries recorded yet
    Never,
    /// Latest entry was created today; carries the local clock time
    Today { time: String },
    /// Latest entry is from an earlier date
    OnDate { date: String },
}

/// Confidence tier for the 7-day projection, by data volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Moderate,
    High,
}

/// Behavior-trend projection shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub positive: bool,
    pub text: String,
    pub confidence: Confidence,
}

/// One point of the dashboard timeline chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Weekday label, e.g. "Mon"
    pub day: String,
    pub wellness: u32,
    /// CO2 scaled onto the 0-100 wellness axis for co-plotting
    pub co2_scaled: f64,
    /// Unscaled kilograms, for tooltips
    pub co2: f64,
}

/// Everything the dashboard page renders, in one read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Wellness score of the latest entry; 0 when no data
    pub latest_wellness: u32,
    pub sustainability: u32,
    pub data_count: usize,
    /// Days since the first entry, minimum 1
    pub journey_day: i64,
    pub last_check_in: LastCheckIn,
    /// None until at least one entry exists
    pub projection: Option<Projection>,
    pub insight: CoachInsight,
    /// Last 7 entries, oldest first
    pub chart: Vec<ChartPoint>,
}

/// Aggregates for the profile page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub total_check_ins: usize,
    /// Rounded mean wellness over all entries
    pub avg_wellness: u32,
    /// Lifetime CO2 avoided, rounded to one decimal
    pub total_co2_saved: f64,
    /// Consecutive-day streak, capped at 3
    pub streak: usize,
}

/// Derived figures for the mission page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionSummary {
    /// current/target as a percentage, clamped to 100
    pub progress_percent: f64,
    /// total CO2 saved divided by 1.5 kg per tree-year
    pub trees_equivalent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_check_in_serialization() {
        let json = serde_json::to_string(&LastCheckIn::Today {
            time: "14:30".into(),
        })
        .unwrap();
        assert!(json.contains("today"));
        assert!(json.contains("14:30"));

        let json = serde_json::to_string(&LastCheckIn::Never).unwrap();
        assert!(json.contains("never"));
    }

    #[test]
    fn confidence_serialization() {
        let json = serde_json::to_string(&Confidence::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
    }
}
