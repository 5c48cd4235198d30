//! Error types for the player session

use cadence_playback::PlaybackError;
use thiserror::Error;

/// Errors surfaced by the session layer
#[derive(Error, Debug)]
pub enum SessionError {
    /// Controller refused an intent or configuration
    #[error(transparent)]
    Playback(#[from] PlaybackError),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
