// core/src/training.rs
use log::{debug, warn};

use crate::calories::{distance, mean_speed, spent_calories};
use crate::duration::hours;
use crate::error::Result;
use crate::models::{ActivityKind, TrainingReport};
use crate::parser::parse_training_record;

pub fn training_summary(record: &str, weight_kg: f64, height_m: f64) -> Result<TrainingReport> {
    let training = parse_training_record(record)?;
    let kind: ActivityKind = training.label.parse()?;

    let distance_km = distance(training.steps, height_m);
    let speed_kmh = mean_speed(training.steps, height_m, training.duration);
    let calories = spent_calories(kind, training.steps, weight_kg, height_m, training.duration)?;

    debug!(
        "training: kind={kind} distance_km={distance_km:.3} speed_kmh={speed_kmh:.3} calories={calories:.3}"
    );

    Ok(TrainingReport {
        kind,
        duration_hours: hours(training.duration),
        distance_km,
        speed_kmh,
        calories,
    })
}

/// Tekstrapport for en treningsøkt. Feil logges og returneres uendret.
pub fn training_info(record: &str, weight_kg: f64, height_m: f64) -> Result<String> {
    training_summary(record, weight_kg, height_m)
        .map(|report| report.to_string())
        .map_err(|err| {
            warn!("training_info: {err}");
            err
        })
}
