//! Wellness and CO2 accounting
//!
//! Pure, stateless functions mapping a day's raw inputs to the derived
//! figures that get stored on the entry. Inputs are expected pre-validated
//! by the caller; nothing here rejects out-of-range values.

use lifelens_api::TransportMode;

/// Weight of sleep in the wellness composite; sleep carries the largest share
const SLEEP_WEIGHT: f64 = 0.4;
const ENERGY_WEIGHT: f64 = 0.3;
const MOOD_WEIGHT: f64 = 0.3;

/// Kilograms of CO2 for one day of driving. Doubles as the worst-case
/// figure charged to unrecognized modes.
pub const CAR_CO2_KG: f64 = 2.5;

/// Weekly CO2 sum, in kilograms, at which the sustainability score reaches zero
const SUSTAINABILITY_CEILING_KG: f64 = 20.0;

/// Composite 0-100 wellness score from the three self-reports
pub fn wellness_score(sleep: f64, energy: f64, mood: f64) -> u32 {
    let raw = sleep * SLEEP_WEIGHT + energy * ENERGY_WEIGHT + mood * MOOD_WEIGHT;
    (raw * 10.0).round().clamp(0.0, 100.0) as u32
}

/// Known emission factor for a transport mode; None for unrecognized modes
fn co2_factor(transport: TransportMode) -> Option<f64> {
    match transport {
        TransportMode::Walk => Some(0.0),
        TransportMode::Cycle => Some(0.0),
        TransportMode::Public => Some(0.5),
        TransportMode::Car => Some(CAR_CO2_KG),
        TransportMode::Unknown => None,
    }
}

/// Kilograms of CO2 attributed to one day of the given transport.
/// Unrecognized modes are charged the worst case (car), never zero.
pub fn daily_co2(transport: TransportMode) -> f64 {
    co2_factor(transport).unwrap_or(CAR_CO2_KG)
}

/// Kilograms avoided relative to driving. An unrecognized mode counts as
/// zero-emission on this side, so its savings equal the full car figure.
pub fn co2_savings(transport: TransportMode) -> f64 {
    (CAR_CO2_KG - co2_factor(transport).unwrap_or(0.0)).max(0.0)
}

/// 0-100 score inversely derived from a week's summed emissions;
/// 20 kg/week and above scores zero.
pub fn sustainability_score(weekly_co2_sum: f64) -> u32 {
    let score = 100.0 - (weekly_co2_sum / SUSTAINABILITY_CEILING_KG) * 100.0;
    score.round().clamp(0.0, 100.0) as u32
}
