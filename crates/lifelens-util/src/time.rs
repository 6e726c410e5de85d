//! Time utilities for LifeLens
//!
//! The domain stores epoch-millisecond timestamps (entry creation, mission
//! week start) and calendar-date keys. Wall-clock "now" is always passed in
//! by the caller so time-sensitive logic stays testable.

use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Milliseconds in one day
pub const ONE_DAY_MS: i64 = 86_400_000;

/// Milliseconds in one tracking week
pub const ONE_WEEK_MS: i64 = 7 * ONE_DAY_MS;

/// Current local time. For call sites at the application edge; domain code
/// takes `now` as a parameter instead of reading the clock.
pub fn now() -> DateTime<Local> {
    Local::now()
}

/// Epoch milliseconds for a local datetime
pub fn epoch_millis(dt: &DateTime<Local>) -> i64 {
    dt.timestamp_millis()
}

/// Calendar-date key for a local datetime
pub fn date_key(dt: &DateTime<Local>) -> NaiveDate {
    dt.date_naive()
}

/// Convert stored epoch milliseconds back to local time.
/// Returns None for timestamps outside the representable range.
pub fn millis_to_local(ts: i64) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(ts).single()
}

/// Whether a stored timestamp falls on the same calendar day as `now`
pub fn is_same_calendar_day(ts: i64, now: &DateTime<Local>) -> bool {
    millis_to_local(ts).is_some_and(|dt| dt.date_naive() == now.date_naive())
}

/// Format a timestamp for "last check-in" display, e.g. "14:30"
pub fn format_clock_time(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M").to_string()
}

/// Short date for display, e.g. "Mar 4"
pub fn format_short_date(dt: &DateTime<Local>) -> String {
    dt.format("%b %-d").to_string()
}

/// Weekday label for chart axes, e.g. "Mon"
pub fn weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_is_seven_days() {
        assert_eq!(ONE_WEEK_MS, 7 * 24 * 60 * 60 * 1000);
        assert_eq!(ONE_WEEK_MS, 7 * ONE_DAY_MS);
    }

    #[test]
    fn epoch_millis_round_trip() {
        let dt = Local.with_ymd_and_hms(2026, 3, 4, 14, 30, 0).unwrap();
        let ts = epoch_millis(&dt);
        let back = millis_to_local(ts).unwrap();
        assert_eq!(back, dt);
    }

    #[test]
    fn same_calendar_day() {
        let now = Local.with_ymd_and_hms(2026, 3, 4, 22, 0, 0).unwrap();
        let morning = Local.with_ymd_and_hms(2026, 3, 4, 6, 0, 0).unwrap();
        let yesterday = Local.with_ymd_and_hms(2026, 3, 3, 23, 59, 0).unwrap();

        assert!(is_same_calendar_day(epoch_millis(&morning), &now));
        assert!(!is_same_calendar_day(epoch_millis(&yesterday), &now));
    }

    #[test]
    fn display_formats() {
        let dt = Local.with_ymd_and_hms(2026, 3, 4, 14, 30, 45).unwrap();
        assert_eq!(format_clock_time(&dt), "14:30");
        assert_eq!(format_short_date(&dt), "Mar 4");
        assert_eq!(weekday_label(dt.date_naive()), "Wed");
    }
}
