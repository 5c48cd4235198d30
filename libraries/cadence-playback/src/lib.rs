//! Cadence Player - Playback Management
//!
//! Platform-agnostic playlist and playback state machine for Cadence Player.
//!
//! This crate provides:
//! - Playlist of URL tracks with a current-track pointer (add, remove, select, wraparound navigation)
//! - Playback state machine (loading, paused, playing, errored)
//! - Volume control (linear 0.0-1.0, mute/unmute)
//! - Loop toggle, seek
//! - Generation-tagged asynchronous requests so stale results are dropped
//!
//! # Architecture
//!
//! `cadence-playback` performs no I/O and owns no runtime:
//! - Operations queue [`MediaCommand`]s for the host's media resource
//! - The host reports results back with the generation they were issued under
//! - Views read [`PlayerSnapshot`]s and [`PlayerEvent`]s
//!
//! # Example: Driving the controller by hand
//!
//! ```rust
//! use cadence_playback::{MediaCommand, PlaybackController, PlaybackStatus, PlayerConfig};
//!
//! let mut controller = PlaybackController::new(PlayerConfig::default()).unwrap();
//!
//! // The host executes the queued commands against its media resource
//! for command in controller.drain_commands() {
//!     if let MediaCommand::Load { generation, .. } = command {
//!         controller.load_finished(generation, Ok(()));
//!     }
//! }
//! assert_eq!(controller.state().status, PlaybackStatus::Paused);
//!
//! controller.toggle_play_pause();
//! for command in controller.drain_commands() {
//!     if let MediaCommand::Play { generation, reason } = command {
//!         controller.play_finished(generation, reason, Ok(()));
//!     }
//! }
//! assert!(controller.state().is_playing());
//! ```

mod controller;
mod error;
mod events;
mod playlist;
pub mod types;
mod volume;

// Public exports
pub use controller::PlaybackController;
pub use error::{Failure, MediaError, PlaybackError, Result};
pub use events::PlayerEvent;
pub use playlist::{Playlist, Removal};
pub use types::{
    default_tracks, format_time, Generation, MediaCommand, MediaEvent, PlayReason, PlaybackState,
    PlaybackStatus, PlayerConfig, PlayerSnapshot, Track,
};
pub use volume::Volume;
