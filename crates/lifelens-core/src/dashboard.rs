//! Read-model aggregation
//!
//! All the figures the presentation pages derive from the raw entry list,
//! computed here as pure functions so every page renders from one read.

use chrono::{DateTime, Local};
use lifelens_api::{
    ChartPoint, Confidence, DailyEntry, DashboardSnapshot, LastCheckIn, MissionState,
    MissionSummary, ProfileStats, Projection, TransportMode,
};
use lifelens_util::{
    epoch_millis, format_clock_time, format_short_date, is_same_calendar_day, millis_to_local,
    weekday_label, ONE_DAY_MS,
};

use crate::{coach, wellness};

/// CO2 is stretched onto the 0-100 wellness axis for the co-plot
const CHART_CO2_SCALE: f64 = 20.0;

/// Kilograms of CO2 one tree binds per year, for the "trees equivalent" stat
const TREE_KG_PER_YEAR: f64 = 1.5;

/// Everything the dashboard renders, from the raw entry list
pub fn dashboard_snapshot(entries: &[DailyEntry], now: &DateTime<Local>) -> DashboardSnapshot {
    let insight = coach::generate_insight(entries);

    let Some(latest) = entries.last() else {
        return DashboardSnapshot {
            latest_wellness: 0,
            sustainability: 0,
            data_count: 0,
            journey_day: 1,
            last_check_in: LastCheckIn::Never,
            projection: None,
            insight,
            chart: Vec::new(),
        };
    };

    let last_check_in = if is_same_calendar_day(latest.timestamp, now) {
        let time = millis_to_local(latest.timestamp)
            .map(|dt| format_clock_time(&dt))
            .unwrap_or_default();
        LastCheckIn::Today { time }
    } else {
        let date = millis_to_local(latest.timestamp)
            .map(|dt| format_short_date(&dt))
            .unwrap_or_else(|| latest.date.format("%b %-d").to_string());
        LastCheckIn::OnDate { date }
    };

    let elapsed_ms = (epoch_millis(now) - entries[0].timestamp).abs();
    let journey_day = ((elapsed_ms + ONE_DAY_MS - 1) / ONE_DAY_MS).max(1);

    let total_co2: f64 = entries.iter().map(|e| e.co2_emitted).sum();

    let chart = entries[entries.len().saturating_sub(7)..]
        .iter()
        .map(|e| ChartPoint {
            day: weekday_label(e.date),
            wellness: e.wellness_score,
            co2_scaled: e.co2_emitted * CHART_CO2_SCALE,
            co2: e.co2_emitted,
        })
        .collect();

    DashboardSnapshot {
        latest_wellness: latest.wellness_score,
        sustainability: wellness::sustainability_score(total_co2),
        data_count: entries.len(),
        journey_day,
        last_check_in,
        projection: Some(projection(entries)),
        insight,
        chart,
    }
}

/// 7-day behavior projection: positive when recent days lean active and the
/// week's transport mix scores well overall
fn projection(entries: &[DailyEntry]) -> Projection {
    let last3 = &entries[entries.len().saturating_sub(3)..];
    let recent_active = last3.iter().filter(|e| e.transport.is_active()).count();

    let weekly_score: f64 = entries
        .iter()
        .map(|e| match e.transport {
            m if m.is_active() => 1.0,
            TransportMode::Public => 0.5,
            _ => 0.0,
        })
        .sum();

    let positive = recent_active >= 1 && weekly_score >= 2.0;
    let text = if positive {
        "Continue this pattern: +12% avg energy, -9 kg CO2 this month"
    } else {
        "Without change: energy plateau, +15 kg CO2 this month"
    };

    let confidence = if entries.len() > 14 {
        Confidence::High
    } else if entries.len() > 5 {
        Confidence::Moderate
    } else {
        Confidence::Low
    };

    Projection {
        positive,
        text: text.to_string(),
        confidence,
    }
}

/// Aggregates for the profile page
pub fn profile_stats(entries: &[DailyEntry], mission: &MissionState) -> ProfileStats {
    let avg_wellness = if entries.is_empty() {
        0
    } else {
        let sum: f64 = entries.iter().map(|e| e.wellness_score as f64).sum();
        (sum / entries.len() as f64).round() as u32
    };

    ProfileStats {
        total_check_ins: entries.len(),
        avg_wellness,
        total_co2_saved: (mission.total_co2_saved * 10.0).round() / 10.0,
        streak: entries.len().min(3),
    }
}

/// Derived figures for the mission page
pub fn mission_summary(mission: &MissionState) -> MissionSummary {
    let progress =
        (mission.current_count as f64 / mission.target_count as f64 * 100.0).min(100.0);

    MissionSummary {
        progress_percent: progress,
        trees_equivalent: mission.total_co2_saved / TREE_KG_PER_YEAR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{mission, seed};
    use chrono::TimeZone;
    use lifelens_config::MissionSpec;
    use lifelens_util::CheckInId;

    fn test_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 10, 14, 30, 0).unwrap()
    }

    fn entry_at(now: &DateTime<Local>, days_ago: i64, transport: TransportMode) -> DailyEntry {
        let day = *now - chrono::Duration::days(days_ago);
        DailyEntry {
            id: CheckInId::new(),
            date: day.date_naive(),
            timestamp: epoch_millis(&day),
            sleep: 7.0,
            energy: 6.0,
            mood: 7.0,
            transport,
            wellness_score: 70,
            co2_emitted: wellness::daily_co2(transport),
        }
    }

    #[test]
    fn empty_history_snapshot() {
        let now = test_now();
        let snapshot = dashboard_snapshot(&[], &now);

        assert_eq!(snapshot.latest_wellness, 0);
        assert_eq!(snapshot.sustainability, 0);
        assert_eq!(snapshot.data_count, 0);
        assert_eq!(snapshot.journey_day, 1);
        assert_eq!(snapshot.last_check_in, LastCheckIn::Never);
        assert!(snapshot.projection.is_none());
        assert!(snapshot.chart.is_empty());
    }

    #[test]
    fn snapshot_over_seeded_history() {
        let now = test_now();
        let entries = seed::demo_entries(&now);
        let snapshot = dashboard_snapshot(&entries, &now);

        assert_eq!(snapshot.latest_wellness, 75);
        assert_eq!(snapshot.data_count, 6);
        assert_eq!(snapshot.journey_day, 6);
        // Seed CO2: 3 car days + 3 transit days = 9 kg total
        assert_eq!(snapshot.sustainability, wellness::sustainability_score(9.0));
        assert_eq!(snapshot.chart.len(), 6);
        assert!(matches!(snapshot.last_check_in, LastCheckIn::OnDate { .. }));
    }

    #[test]
    fn today_entry_shows_clock_time() {
        let now = test_now();
        let entries = vec![entry_at(&now, 0, TransportMode::Cycle)];
        let snapshot = dashboard_snapshot(&entries, &now);

        assert_eq!(
            snapshot.last_check_in,
            LastCheckIn::Today {
                time: "14:30".to_string()
            }
        );
    }

    #[test]
    fn chart_scales_co2_onto_the_wellness_axis() {
        let now = test_now();
        let entries = vec![entry_at(&now, 0, TransportMode::Car)];
        let snapshot = dashboard_snapshot(&entries, &now);

        assert_eq!(snapshot.chart[0].co2, 2.5);
        assert_eq!(snapshot.chart[0].co2_scaled, 50.0);
        assert_eq!(snapshot.chart[0].wellness, 70);
    }

    #[test]
    fn projection_positivity_needs_recent_and_weekly_activity() {
        let now = test_now();

        // Active yesterday but nothing else: weekly score 1.0, not positive
        let entries = vec![
            entry_at(&now, 2, TransportMode::Car),
            entry_at(&now, 1, TransportMode::Cycle),
        ];
        let p = projection(&entries);
        assert!(!p.positive);

        // Two active days plus transit clears both thresholds
        let entries = vec![
            entry_at(&now, 3, TransportMode::Walk),
            entry_at(&now, 2, TransportMode::Public),
            entry_at(&now, 1, TransportMode::Cycle),
        ];
        let p = projection(&entries);
        assert!(p.positive);
        assert!(p.text.contains("Continue this pattern"));
    }

    #[test]
    fn projection_confidence_tiers() {
        let now = test_now();
        let make = |n: i64| -> Vec<DailyEntry> {
            (0..n).map(|i| entry_at(&now, n - i, TransportMode::Car)).collect()
        };

        assert_eq!(projection(&make(3)).confidence, Confidence::Low);
        assert_eq!(projection(&make(6)).confidence, Confidence::Moderate);
        assert_eq!(projection(&make(15)).confidence, Confidence::High);
    }

    #[test]
    fn profile_stats_cap_the_streak() {
        let now = test_now();
        let entries = seed::demo_entries(&now);
        let mut state = mission::initial_state(&MissionSpec::built_in(), epoch_millis(&now));
        state.total_co2_saved = 7.4999;

        let stats = profile_stats(&entries, &state);
        assert_eq!(stats.total_check_ins, 6);
        assert_eq!(stats.avg_wellness, 70);
        assert_eq!(stats.total_co2_saved, 7.5);
        assert_eq!(stats.streak, 3);
    }

    #[test]
    fn mission_summary_clamps_progress() {
        let now = test_now();
        let mut state = mission::initial_state(&MissionSpec::built_in(), epoch_millis(&now));
        state.current_count = 2;
        state.total_co2_saved = 7.5;

        let summary = mission_summary(&state);
        assert!((summary.progress_percent - 66.666).abs() < 0.01);
        assert_eq!(summary.trees_equivalent, 5.0);

        state.current_count = 5;
        assert_eq!(mission_summary(&state).progress_percent, 100.0);
    }
}
