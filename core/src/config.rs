use std::path::Path;

use thiserror::Error;

use crate::error::TrackerError;
use crate::models::BodyProfile;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read profile {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid profile {path} at {field}: {message}")]
    Json {
        path: String,
        field: String,
        message: String,
    },

    #[error("invalid profile {path}: {source}")]
    Invalid {
        path: String,
        #[source]
        source: TrackerError,
    },
}

/// Leser kroppsprofil fra JSON, f.eks. `{"weight_kg": 75.0, "height_m": 1.75}`.
/// Mangler filen er det en feil; en tom default-profil ville bare feile senere.
pub fn load_profile(path: impl AsRef<Path>) -> Result<BodyProfile, ConfigError> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: shown.clone(),
        source,
    })?;

    let profile = parse_profile(&contents).map_err(|err| ConfigError::Json {
        path: shown.clone(),
        field: err.path().to_string(),
        message: err.inner().to_string(),
    })?;

    profile.validate().map_err(|source| ConfigError::Invalid {
        path: shown.clone(),
        source,
    })?;

    log::debug!(
        "profile loaded from {} (weight_kg={}, height_m={})",
        shown,
        profile.weight_kg,
        profile.height_m
    );
    Ok(profile)
}

fn parse_profile(
    contents: &str,
) -> Result<BodyProfile, serde_path_to_error::Error<serde_json::Error>> {
    let de = &mut serde_json::Deserializer::from_str(contents);
    serde_path_to_error::deserialize(de)
}
