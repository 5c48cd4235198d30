//! Media resource capability
//!
//! Abstracts the host platform's audio element. The session is the only
//! caller, always from one thread, so methods take `&self` and handles are
//! expected to use interior mutability (as browser element handles do).

use async_trait::async_trait;
use cadence_playback::MediaError;

/// Host media playback capability
///
/// Implementors report `timeUpdate`, `ended` and `error` through the
/// session's media event sender.
#[async_trait(?Send)]
pub trait MediaResource {
    /// Replace the current source and begin fetching/decoding it
    ///
    /// Stops playback of the previous source. Resolves once the new source
    /// is ready to play.
    async fn load(&self, source_url: &str) -> Result<(), MediaError>;

    /// Start playback
    ///
    /// # Returns
    /// * `Ok(())` - Playback started
    /// * `Err(_)` - Not ready, autoplay blocked, or interrupted
    async fn play(&self) -> Result<(), MediaError>;

    /// Pause playback
    fn pause(&self);

    /// Set position in seconds
    fn seek(&self, position: f64);

    /// Set volume (0.0-1.0)
    fn set_volume(&self, volume: f64);

    /// Set mute flag
    fn set_muted(&self, muted: bool);

    /// Set loop attribute
    fn set_loop(&self, looping: bool);
}
