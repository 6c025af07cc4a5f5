pub mod calories;
pub mod cli;
pub mod config;
pub mod daysteps;
pub mod duration;
pub mod error;
pub mod models;
pub mod parser;
pub mod training;

// Re-eksport av det offentlige API-et (brukes av binæren og testene)
pub use calories::{
    distance, mean_speed, running_spent_calories, spent_calories, walking_spent_calories,
};
pub use config::{load_profile, ConfigError};
pub use daysteps::{day_action_info, day_action_summary};
pub use duration::{parse_duration, DurationError};
pub use error::{ErrorKind, ParseError, Result, TrackerError, ValidationError};
pub use models::{ActivityKind, BodyProfile, DayRecord, DayReport, TrainingRecord, TrainingReport};
pub use parser::{parse_day_record, parse_training_record};
pub use training::{training_info, training_summary};
