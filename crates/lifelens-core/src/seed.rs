//! Demo data seeding
//!
//! Six historical entries ending yesterday, alternating car and transit
//! days with gently rising wellness scores. Written by the destructive
//! reseed so a fresh (or wiped) install has something to show.

use chrono::{DateTime, Duration, Local};
use lifelens_api::{DailyEntry, TransportMode};
use lifelens_util::{epoch_millis, CheckInId};

pub const SEED_ENTRY_COUNT: usize = 6;

/// Fixed self-reports for the six seeded days: (sleep, energy, mood)
const SEED_REPORTS: [(f64, f64, f64); SEED_ENTRY_COUNT] = [
    (6.2, 5.4, 5.9),
    (6.8, 5.9, 6.3),
    (6.4, 6.5, 5.6),
    (6.9, 5.2, 6.8),
    (6.1, 6.8, 6.1),
    (6.7, 6.2, 6.6),
];

/// Build the demo entries: dates ascending, ending yesterday
pub fn demo_entries(now: &DateTime<Local>) -> Vec<DailyEntry> {
    SEED_REPORTS
        .iter()
        .enumerate()
        .map(|(i, &(sleep, energy, mood))| {
            let day = *now - Duration::days((SEED_ENTRY_COUNT - i) as i64);
            let drives = i % 2 == 0;

            DailyEntry {
                id: CheckInId::new(),
                date: day.date_naive(),
                timestamp: epoch_millis(&day),
                sleep,
                energy,
                mood,
                transport: if drives {
                    TransportMode::Car
                } else {
                    TransportMode::Public
                },
                wellness_score: (65 + 2 * i) as u32,
                co2_emitted: if drives { 2.5 } else { 0.5 },
            }
        })
        .collect()
}
