use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Walking,
    Running,
}

impl ActivityKind {
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Walking => "Walking",
            ActivityKind::Running => "Running",
        }
    }
}

impl FromStr for ActivityKind {
    type Err = TrackerError;

    /// Etiketten sammenlignes ordrett (ingen trimming, skiller store/små bokstaver).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Walking" => Ok(ActivityKind::Walking),
            "Running" => Ok(ActivityKind::Running),
            other => Err(TrackerError::UnknownActivity(other.to_string())),
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kroppsmål som brukes i hver beregning. Lagres ikke mellom kall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    pub weight_kg: f64,
    pub height_m: f64,
}

impl BodyProfile {
    pub fn new(weight_kg: f64, height_m: f64) -> Self {
        Self { weight_kg, height_m }
    }

    /// Avviser ikke-positive eller ikke-endelige mål.
    pub fn validate(&self) -> Result<(), TrackerError> {
        let ok = |x: f64| x.is_finite() && x > 0.0;
        if ok(self.weight_kg) && ok(self.height_m) {
            Ok(())
        } else {
            Err(TrackerError::InvalidParameters)
        }
    }
}

/// `"<steps>,<duration>"` etter parsing og validering.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    pub steps: u64,
    pub duration: TimeDelta,
}

/// `"<steps>,<activity>,<duration>"`. Etiketten beholdes rå; den tolkes i kalkulatoren.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingRecord {
    pub steps: u64,
    pub label: String,
    pub duration: TimeDelta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayReport {
    pub steps: u64,
    pub distance_km: f64,
    pub calories: f64,
}

impl fmt::Display for DayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Steps: {}.", self.steps)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "Calories burned: {:.2} kcal.", self.calories)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
    pub kind: ActivityKind,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories: f64,
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Activity: {}", self.kind)?;
        writeln!(f, "Duration: {:.2} h.", self.duration_hours)?;
        writeln!(f, "Distance: {:.2} km.", self.distance_km)?;
        writeln!(f, "Speed: {:.2} km/h", self.speed_kmh)?;
        writeln!(f, "Calories burned: {:.2}", self.calories)
    }
}
