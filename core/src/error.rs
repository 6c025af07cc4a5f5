// core/src/error.rs
use std::num::ParseIntError;

use chrono::TimeDelta;
use thiserror::Error;

use crate::duration::DurationError;

/// Alle feil som kan oppstå fra parsing til ferdig rapport.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("invalid record format: expected {expected} fields, got {found} in {record:?}")]
    Format {
        record: String,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("unknown activity kind: {0}")]
    UnknownActivity(String),

    #[error("invalid parameters for calorie calculation")]
    InvalidParameters,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid step count {input:?}: {source}")]
    Steps {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    Duration(#[from] DurationError),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("step count must be positive, got {0}")]
    NonPositiveSteps(i64),

    #[error("duration must be positive, got {0}")]
    NonPositiveDuration(TimeDelta),
}

/// Flat diskriminant for `TrackerError`, uten detaljer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Parse,
    Validation,
    UnknownActivity,
    InvalidParameters,
}

impl TrackerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrackerError::Format { .. } => ErrorKind::Format,
            TrackerError::Parse(_) => ErrorKind::Parse,
            TrackerError::Validation(_) => ErrorKind::Validation,
            TrackerError::UnknownActivity(_) => ErrorKind::UnknownActivity,
            TrackerError::InvalidParameters => ErrorKind::InvalidParameters,
        }
    }
}

impl From<DurationError> for TrackerError {
    fn from(err: DurationError) -> Self {
        TrackerError::Parse(ParseError::Duration(err))
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
