//! Player Events
//!
//! Event-based communication for view synchronization.
//! Events are emitted at key points:
//! - Status changes (loading/paused/playing/errored)
//! - Track switches
//! - Position updates from the media resource
//! - Volume, mute and loop changes
//! - Playlist mutations

use crate::types::{PlaybackStatus, Track};
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Playback status changed
    StateChanged {
        /// The new status
        status: PlaybackStatus,
    },

    /// Current track switched
    TrackChanged {
        /// Index of the new current track
        index: usize,
        /// The new current track
        track: Track,
    },

    /// Position update reported by the media resource
    PositionUpdate {
        /// Current position in seconds
        current_time: f64,
        /// Track duration in seconds (0 if unknown)
        duration: f64,
    },

    /// Volume or mute changed
    VolumeChanged {
        /// New volume level (0.0-1.0)
        volume: f64,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Loop toggled
    LoopChanged {
        /// Whether loop is enabled
        is_looping: bool,
    },

    /// Tracks added or removed
    PlaylistChanged {
        /// New playlist length
        length: usize,
    },

    /// A load or play request failed
    Error {
        /// Message for display
        message: String,
    },

    /// An intent was refused without changing state
    IntentRejected {
        /// Why the intent was refused
        message: String,
    },
}
