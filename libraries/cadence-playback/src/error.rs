//! Error types for playback management

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Playback errors
///
/// Returned synchronously to the caller of a controller operation.
/// Failures reported by the media resource are never returned this way;
/// they are recorded as a [`Failure`] in the playback state instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Add-track input is not an absolute URL (the parser's reason is kept
    /// for logs, the message is for display)
    #[error("Invalid URL format. Please enter a valid audio URL.")]
    InvalidUrl(String),

    /// A playlist needs at least one track
    #[error("Playlist is empty")]
    EmptyPlaylist,

    /// Index out of bounds
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// Operation requires a loaded source (paused or playing)
    #[error("No track ready for this operation")]
    NotReady,

    /// Rejected configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

/// Failure recorded in `PlaybackState::last_error`
///
/// The display text is what a view shows to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Failure {
    /// The resource could not load the current source
    #[error("Failed to load audio file.")]
    LoadFailure,

    /// `play()` rejected after the user pressed play
    #[error("Playback failed. Please try again.")]
    PlaybackRejected,

    /// `play()` rejected while resuming after a track switch
    #[error("Failed to play audio.")]
    ResumeRejected,

    /// `play()` rejected while restarting a looping track
    #[error("Failed to replay track.")]
    ReplayFailure,
}

/// Error reported by a media resource
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct MediaError(pub String);

impl MediaError {
    /// Create a media error from any message
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_messages() {
        assert_eq!(Failure::LoadFailure.to_string(), "Failed to load audio file.");
        assert_eq!(
            Failure::PlaybackRejected.to_string(),
            "Playback failed. Please try again."
        );
        assert_eq!(Failure::ResumeRejected.to_string(), "Failed to play audio.");
        assert_eq!(Failure::ReplayFailure.to_string(), "Failed to replay track.");
    }

    #[test]
    fn media_error_display() {
        let err = MediaError::new("autoplay blocked");
        assert_eq!(err.to_string(), "autoplay blocked");
    }
}
