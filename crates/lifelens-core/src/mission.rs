//! Weekly mission state machine
//!
//! Pure transforms over `MissionState`; the caller persists the result.
//! The tracking week advances lazily on access, never by a timer.

use lifelens_api::{MissionState, TransportMode};
use lifelens_config::MissionSpec;
use lifelens_util::ONE_WEEK_MS;
use tracing::info;

use crate::wellness;

/// Flat energy credit per qualifying day. A fixed design constant, not
/// derived from the wellness calculator.
pub const ENERGY_PER_QUALIFYING_DAY: u32 = 6;

/// Fresh state for a configured mission, starting its week at `now_ms`
pub fn initial_state(spec: &MissionSpec, now_ms: i64) -> MissionState {
    MissionState {
        id: spec.id.clone(),
        title: spec.title.clone(),
        target_count: spec.target_count,
        current_count: 0,
        completed: false,
        week_start_timestamp: now_ms,
        total_energy_gained: 0,
        total_co2_saved: 0.0,
    }
}

/// Idempotent week check: once seven days have elapsed, the weekly counters
/// reset and the week epoch advances. Lifetime totals are untouched.
pub fn check_week_rollover(mission: &MissionState, now_ms: i64) -> MissionState {
    if now_ms - mission.week_start_timestamp >= ONE_WEEK_MS {
        info!(mission_id = %mission.id, "Mission week rolled over");
        return MissionState {
            week_start_timestamp: now_ms,
            current_count: 0,
            completed: false,
            ..mission.clone()
        };
    }

    mission.clone()
}

/// Apply one day's transport choice to the mission.
///
/// Only cycling advances anything: it always credits the lifetime totals,
/// and increments the weekly count until `completed` latches. Other modes
/// pass through the week check but change nothing else.
pub fn update_progress(
    mission: &MissionState,
    transport: TransportMode,
    now_ms: i64,
) -> MissionState {
    let mut next = check_week_rollover(mission, now_ms);

    if transport == TransportMode::Cycle {
        next.total_co2_saved += wellness::co2_savings(TransportMode::Cycle);
        next.total_energy_gained += ENERGY_PER_QUALIFYING_DAY;

        if !next.completed {
            next.current_count += 1;
            if next.current_count >= next.target_count {
                next.completed = true;
                info!(mission_id = %next.id, "Mission completed for the week");
            }
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifelens_util::ONE_DAY_MS;

    const NOW_MS: i64 = 1_772_000_000_000;

    fn fresh_mission() -> MissionState {
        initial_state(&MissionSpec::built_in(), NOW_MS)
    }

    #[test]
    fn initial_state_from_spec() {
        let state = fresh_mission();
        assert_eq!(state.id.as_str(), "cycle-commute-1");
        assert_eq!(state.target_count, 3);
        assert_eq!(state.current_count, 0);
        assert!(!state.completed);
        assert_eq!(state.week_start_timestamp, NOW_MS);
        assert_eq!(state.total_energy_gained, 0);
        assert_eq!(state.total_co2_saved, 0.0);
    }

    #[test]
    fn rollover_resets_week_but_not_totals() {
        let mut stale = fresh_mission();
        stale.week_start_timestamp = NOW_MS - 8 * ONE_DAY_MS;
        stale.current_count = 2;
        stale.completed = false;
        stale.total_energy_gained = 12;
        stale.total_co2_saved = 5.0;

        let checked = check_week_rollover(&stale, NOW_MS);
        assert_eq!(checked.current_count, 0);
        assert!(!checked.completed);
        assert_eq!(checked.week_start_timestamp, NOW_MS);
        assert_eq!(checked.total_energy_gained, 12);
        assert_eq!(checked.total_co2_saved, 5.0);
    }

    #[test]
    fn rollover_is_a_no_op_within_the_week() {
        let mut state = fresh_mission();
        state.current_count = 2;

        let checked = check_week_rollover(&state, NOW_MS + 6 * ONE_DAY_MS);
        assert_eq!(checked, state);
    }

    #[test]
    fn three_cycle_days_complete_the_mission() {
        let mut state = fresh_mission();
        for _ in 0..3 {
            state = update_progress(&state, TransportMode::Cycle, NOW_MS);
        }

        assert_eq!(state.current_count, 3);
        assert!(state.completed);
        assert_eq!(state.total_energy_gained, 18);
        assert_eq!(state.total_co2_saved, 7.5);
    }

    #[test]
    fn totals_keep_accumulating_after_completion() {
        let mut state = fresh_mission();
        for _ in 0..4 {
            state = update_progress(&state, TransportMode::Cycle, NOW_MS);
        }

        assert!(state.completed);
        assert_eq!(state.current_count, 3);
        assert_eq!(state.total_energy_gained, 24);
        assert_eq!(state.total_co2_saved, 10.0);
    }

    #[test]
    fn non_cycle_modes_leave_progress_untouched() {
        let state = fresh_mission();

        for transport in [
            TransportMode::Walk,
            TransportMode::Public,
            TransportMode::Car,
            TransportMode::Unknown,
        ] {
            let next = update_progress(&state, transport, NOW_MS);
            assert_eq!(next, state);
        }
    }

    #[test]
    fn update_applies_the_week_check_first() {
        let mut stale = fresh_mission();
        stale.week_start_timestamp = NOW_MS - 8 * ONE_DAY_MS;
        stale.current_count = 2;
        stale.completed = false;

        // The stale week resets before the new cycle day lands
        let next = update_progress(&stale, TransportMode::Cycle, NOW_MS);
        assert_eq!(next.current_count, 1);
        assert!(!next.completed);
        assert_eq!(next.week_start_timestamp, NOW_MS);

        // A non-qualifying day still triggers the reset on its way through
        let next = update_progress(&stale, TransportMode::Car, NOW_MS);
        assert_eq!(next.current_count, 0);
        assert_eq!(next.week_start_timestamp, NOW_MS);
    }
}
