//! Core types for playback management

use crate::error::{Failure, PlaybackError, Result};
use crate::volume::Volume;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One playable audio item
///
/// Tracks have no stable identifier; a track is identified by its
/// position in the playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Absolute URL handed to the media resource
    pub source_url: String,
}

impl Track {
    /// Create a track
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            source_url: source_url.into(),
        }
    }

    /// Track added by URL, numbered by its 1-based playlist position
    pub fn custom(number: usize, source_url: impl Into<String>) -> Self {
        Self::new(format!("Custom Track {}", number), "Custom URL", source_url)
    }
}

/// Playback status
///
/// `Paused` and `Playing` mean the current source is loaded. A rejected
/// `play()` of a loaded source returns to `Paused` with `last_error` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStatus {
    /// Current source is being loaded
    Loading,

    /// Loaded, not playing
    Paused,

    /// Loaded and playing
    Playing,

    /// Source failed to load, or playback failed to resume after a switch
    /// (see `last_error`)
    Errored,
}

/// Playback state owned by the controller
///
/// Views receive clones of this value and never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Current status
    pub status: PlaybackStatus,

    /// Position in seconds
    pub current_time: f64,

    /// Duration in seconds (0 until known)
    pub duration: f64,

    /// Volume and mute
    pub volume: Volume,

    /// Whether the current track restarts when it ends
    pub is_looping: bool,

    /// Last recorded failure
    pub last_error: Option<Failure>,
}

impl PlaybackState {
    /// Fresh state in `Loading` with the given volume and loop setting
    pub fn new(volume: Volume, is_looping: bool) -> Self {
        Self {
            status: PlaybackStatus::Loading,
            current_time: 0.0,
            duration: 0.0,
            volume,
            is_looping,
            last_error: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    pub fn is_loading(&self) -> bool {
        self.status == PlaybackStatus::Loading
    }

    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Message of the last failure, for display
    pub fn error_message(&self) -> Option<String> {
        self.last_error.map(|failure| failure.to_string())
    }
}

/// Format seconds as `m:ss` for progress labels
///
/// Partial seconds are dropped; unknown or negative times show `0:00`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Tag carried by every asynchronous media request
///
/// Bumped on each track switch; completions carrying an older
/// generation are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Generation(pub u64);

impl Generation {
    pub(crate) fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen#{}", self.0)
    }
}

/// Why a `play()` request was issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayReason {
    /// User pressed play
    Toggle,

    /// Resuming after a track switch
    Resume,

    /// Restarting a looping track that ended
    Replay,
}

impl PlayReason {
    /// Failure recorded when the request is rejected
    pub fn failure(self) -> Failure {
        match self {
            Self::Toggle => Failure::PlaybackRejected,
            Self::Resume => Failure::ResumeRejected,
            Self::Replay => Failure::ReplayFailure,
        }
    }
}

/// Instruction for the media resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaCommand {
    /// Begin loading a new source (asynchronous)
    Load {
        generation: Generation,
        source_url: String,
    },

    /// Start playback (asynchronous, may be rejected)
    Play {
        generation: Generation,
        reason: PlayReason,
    },

    /// Pause playback
    Pause,

    /// Set position in seconds
    Seek { position: f64 },

    /// Set volume in [0, 1]
    SetVolume { volume: f64 },

    /// Set mute flag
    SetMuted { muted: bool },

    /// Set loop attribute
    SetLoop { looping: bool },
}

/// Event raised by the media resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaEvent {
    /// Playback position advanced
    TimeUpdate { current_time: f64, duration: f64 },

    /// Source reached its end
    Ended,

    /// Source failed to load or decode
    Error { reason: String },
}

/// Read-only view model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub state: PlaybackState,
    pub current_index: usize,
    pub current_track: Track,
    pub tracks: Vec<Track>,
}

/// Configuration for the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial volume (0.0-1.0, default: 0.5)
    #[serde(default = "default_volume")]
    pub volume: f64,

    /// Start muted (default: false)
    #[serde(default)]
    pub muted: bool,

    /// Start with loop enabled (default: false)
    #[serde(default)]
    pub looping: bool,

    /// Seed playlist (default: two sample tracks)
    #[serde(default = "default_tracks")]
    pub tracks: Vec<Track>,
}

fn default_volume() -> f64 {
    0.5
}

/// Playlist seeded at startup
pub fn default_tracks() -> Vec<Track> {
    vec![
        Track::new(
            "Forest Lullaby",
            "Lesfm",
            "https://cdn.pixabay.com/download/audio/2022/01/18/audio_d0a13f69d2.mp3?filename=forest-lullaby-110624.mp3",
        ),
        Track::new(
            "Sweet Dreams",
            "Ashot-Danielyan",
            "https://cdn.pixabay.com/download/audio/2022/01/20/audio_c8c8a73467.mp3?filename=sweet-dreams-116581.mp3",
        ),
    ]
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            muted: false,
            looping: false,
            tracks: default_tracks(),
        }
    }
}

impl PlayerConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(PlaybackError::InvalidConfig(format!(
                "volume must be within 0.0-1.0, got {}",
                self.volume
            )));
        }

        if self.tracks.is_empty() {
            return Err(PlaybackError::EmptyPlaylist);
        }

        for track in &self.tracks {
            crate::playlist::parse_source_url(&track.source_url).map_err(|_| {
                PlaybackError::InvalidConfig(format!(
                    "track '{}' has an invalid URL: {}",
                    track.title, track.source_url
                ))
            })?;
        }

        Ok(())
    }
}
