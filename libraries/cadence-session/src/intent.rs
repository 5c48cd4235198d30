//! User intents emitted by views

use serde::{Deserialize, Serialize};

/// A request from the view layer
///
/// One variant per view callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    /// Play/pause button
    PlayPause,

    /// Previous button
    Previous,

    /// Next button
    Next,

    /// Progress bar scrubbed to a position in seconds
    Seek(f64),

    /// Volume slider moved (0.0-1.0)
    VolumeChange(f64),

    /// Mute button
    MuteToggle,

    /// Loop button
    LoopToggle,

    /// URL entry form submitted
    AddTrack(String),

    /// Playlist entry clicked
    SelectTrack(usize),

    /// Playlist entry deleted
    DeleteTrack(usize),
}
