// core/src/calories.rs
use chrono::TimeDelta;

use crate::duration::{hours, minutes};
use crate::error::{Result, TrackerError};
use crate::models::ActivityKind;

pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45; // steglengde = høyde * koeff.
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;
pub const DAY_STEP_LENGTH_M: f64 = 0.65; // fast steglengde for dagsrapporten
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

/// Distanse (km) med steglengde avledet fra høyde (m).
#[inline]
pub fn distance(steps: u64, height_m: f64) -> f64 {
    let step_len = height_m * STEP_LENGTH_COEFFICIENT;
    steps as f64 * step_len / M_IN_KM
}

/// Snittfart (km/t). 0 hvis varigheten ikke er positiv.
pub fn mean_speed(steps: u64, height_m: f64, duration: TimeDelta) -> f64 {
    let h = hours(duration);
    if h <= 0.0 {
        return 0.0;
    }
    distance(steps, height_m) / h
}

fn check_params(steps: u64, weight_kg: f64, height_m: f64, duration: TimeDelta) -> Result<()> {
    if steps == 0 || weight_kg <= 0.0 || height_m <= 0.0 || duration <= TimeDelta::zero() {
        return Err(TrackerError::InvalidParameters);
    }
    Ok(())
}

pub fn running_spent_calories(
    steps: u64,
    weight_kg: f64,
    height_m: f64,
    duration: TimeDelta,
) -> Result<f64> {
    check_params(steps, weight_kg, height_m, duration)?;
    let speed = mean_speed(steps, height_m, duration);
    Ok(weight_kg * speed * minutes(duration) / MIN_IN_H)
}

/// Samme modell som løping, skalert med gangkoeffisienten.
pub fn walking_spent_calories(
    steps: u64,
    weight_kg: f64,
    height_m: f64,
    duration: TimeDelta,
) -> Result<f64> {
    let base = running_spent_calories(steps, weight_kg, height_m, duration)?;
    Ok(base * WALKING_CALORIES_COEFFICIENT)
}

pub fn spent_calories(
    kind: ActivityKind,
    steps: u64,
    weight_kg: f64,
    height_m: f64,
    duration: TimeDelta,
) -> Result<f64> {
    match kind {
        ActivityKind::Walking => walking_spent_calories(steps, weight_kg, height_m, duration),
        ActivityKind::Running => running_spent_calories(steps, weight_kg, height_m, duration),
    }
}
