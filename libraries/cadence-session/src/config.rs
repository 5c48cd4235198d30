//! Player configuration loading

use crate::error::{Result, SessionError};
use cadence_playback::PlayerConfig;
use std::path::Path;

/// Environment variable prefix (`CADENCE_VOLUME`, `CADENCE_LOOPING`, ...)
pub const ENV_PREFIX: &str = "CADENCE";

/// Load configuration from an optional file and the environment
///
/// Sources, later ones overriding earlier ones:
/// 1. Built-in defaults (volume 0.5, two seeded tracks)
/// 2. `path`, if given (format from its extension, e.g. TOML)
/// 3. `CADENCE_*` environment variables
///
/// The result is validated before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<PlayerConfig> {
    let mut settings = config::Config::builder();

    if let Some(path) = path {
        settings = settings.add_source(config::File::from(path).required(true));
    }

    settings = settings.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("_")
            .try_parsing(true),
    );

    let config: PlayerConfig = settings
        .build()
        .map_err(|e| SessionError::Config(e.to_string()))?
        .try_deserialize()
        .map_err(|e| SessionError::Config(e.to_string()))?;

    config.validate()?;
    tracing::debug!(
        tracks = config.tracks.len(),
        volume = config.volume,
        "Loaded player configuration"
    );

    Ok(config)
}
