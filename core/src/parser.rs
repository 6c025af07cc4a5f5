// core/src/parser.rs
use chrono::TimeDelta;

use crate::duration::parse_duration;
use crate::error::{ParseError, Result, TrackerError, ValidationError};
use crate::models::{DayRecord, TrainingRecord};

const DELIMITER: char = ',';

/// Deler posten og sjekker antall felt før noe annet tolkes.
fn split_fields(record: &str, expected: usize) -> Result<Vec<&str>> {
    let parts: Vec<&str> = record.split(DELIMITER).collect();
    if parts.len() != expected {
        return Err(TrackerError::Format {
            record: record.to_string(),
            expected,
            found: parts.len(),
        });
    }
    Ok(parts)
}

fn parse_steps(field: &str) -> Result<u64> {
    let steps: i64 = field.parse().map_err(|source| ParseError::Steps {
        input: field.to_string(),
        source,
    })?;
    if steps <= 0 {
        return Err(ValidationError::NonPositiveSteps(steps).into());
    }
    Ok(steps.unsigned_abs())
}

fn parse_positive_duration(field: &str) -> Result<TimeDelta> {
    let duration = parse_duration(field)?;
    if duration <= TimeDelta::zero() {
        return Err(ValidationError::NonPositiveDuration(duration).into());
    }
    Ok(duration)
}

/// `"<steps>,<duration>"`, f.eks. `"6000,4h00m00s"`.
pub fn parse_day_record(record: &str) -> Result<DayRecord> {
    let parts = split_fields(record, 2)?;
    let steps = parse_steps(parts[0])?;
    let duration = parse_positive_duration(parts[1])?;
    Ok(DayRecord { steps, duration })
}

/// `"<steps>,<activity>,<duration>"`, f.eks. `"3456,Running,45m00s"`.
pub fn parse_training_record(record: &str) -> Result<TrainingRecord> {
    let parts = split_fields(record, 3)?;
    let steps = parse_steps(parts[0])?;
    let label = parts[1].to_string();
    let duration = parse_positive_duration(parts[2])?;
    Ok(TrainingRecord {
        steps,
        label,
        duration,
    })
}
