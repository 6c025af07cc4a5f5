// core/src/daysteps.rs
use log::{debug, warn};

use crate::calories::{walking_spent_calories, DAY_STEP_LENGTH_M, M_IN_KM};
use crate::error::Result;
use crate::models::DayReport;
use crate::parser::parse_day_record;

/// Dagsrapport fra `"<steps>,<duration>"`. Returnerer feilen uendret.
pub fn day_action_summary(record: &str, weight_kg: f64, height_m: f64) -> Result<DayReport> {
    let day = parse_day_record(record)?;

    // NB: distansen bruker fast steglengde (0.65 m), mens kaloriene bruker
    // høydeavledet fart. Avviket er arvet og beholdes; avklares med eier før endring.
    let distance_km = day.steps as f64 * DAY_STEP_LENGTH_M / M_IN_KM;
    let calories = walking_spent_calories(day.steps, weight_kg, height_m, day.duration)?;

    debug!(
        "day: steps={} distance_km={:.3} calories={:.3}",
        day.steps, distance_km, calories
    );

    Ok(DayReport {
        steps: day.steps,
        distance_km,
        calories,
    })
}

/// Bakoverkompatibel variant: tom streng ved feil, feilen logges som warning.
/// Kalleren kan ikke skille "ingen data" fra "ugyldige data" via returverdien.
pub fn day_action_info(record: &str, weight_kg: f64, height_m: f64) -> String {
    match day_action_summary(record, weight_kg, height_m) {
        Ok(report) => report.to_string(),
        Err(err) => {
            warn!("day_action_info: {err}");
            String::new()
        }
    }
}
