//! Cadence Player - Session
//!
//! Runs a [`cadence_playback::PlaybackController`] against a host media
//! resource on a single-threaded event loop.
//!
//! This crate provides:
//! - [`MediaResource`] trait for the host's audio element
//! - [`PlayerSession`] event loop applying [`Intent`]s and media events
//! - [`SessionHandle`] for views (intents in, snapshots and events out)
//! - Configuration loading from file and `CADENCE_*` environment variables
//!
//! # Example
//!
//! ```rust,no_run
//! use cadence_session::{load_config, Intent, MediaResource, PlayerSession};
//!
//! async fn start<M: MediaResource + 'static>(media: M) -> cadence_session::Result<()> {
//!     let config = load_config(None)?;
//!     let (session, handle) = PlayerSession::new(config, media)?;
//!
//!     handle.send(Intent::PlayPause);
//!     drop(handle);
//!
//!     // Runs until the handle is dropped
//!     session.run().await;
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod intent;
mod media;
mod session;

// Public exports
pub use config::{load_config, ENV_PREFIX};
pub use error::{Result, SessionError};
pub use intent::Intent;
pub use media::MediaResource;
pub use session::{MediaEventSender, PlayerSession, SessionHandle};
