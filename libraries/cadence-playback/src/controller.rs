//! Playback controller - core state machine
//!
//! Keeps the playlist and playback state consistent with an asynchronous
//! media resource. The controller never talks to the resource directly:
//! every operation queues [`MediaCommand`]s for the host to execute and
//! [`PlayerEvent`]s for views. Results of asynchronous commands come back
//! through [`PlaybackController::load_finished`] and
//! [`PlaybackController::play_finished`], tagged with the [`Generation`]
//! they were issued under.

use crate::{
    error::{Failure, MediaError, PlaybackError, Result},
    events::PlayerEvent,
    playlist::Playlist,
    types::{
        Generation, MediaCommand, MediaEvent, PlayReason, PlaybackState, PlaybackStatus,
        PlayerConfig, PlayerSnapshot, Track,
    },
    volume::Volume,
};
use tracing::{debug, info, warn};

/// Central playback state machine
///
/// States: `Loading`, `Paused`, `Playing`, `Errored`.
/// - A track switch always enters `Loading` with a fresh generation.
/// - `play()` results only apply to the generation and request they answer.
/// - Volume, mute and loop are mirrored onto the resource in any state.
#[derive(Debug)]
pub struct PlaybackController {
    // State
    playlist: Playlist,
    state: PlaybackState,

    // Async bookkeeping
    generation: Generation,
    source_loaded: bool,
    resume_after_load: bool,
    play_in_flight: Option<PlayReason>,

    // Outputs
    pending_commands: Vec<MediaCommand>,
    pending_events: Vec<PlayerEvent>,
}

impl PlaybackController {
    /// Create controller and start loading the first track
    ///
    /// The initial volume, mute and loop settings are queued for the
    /// resource ahead of the first `Load`.
    pub fn new(config: PlayerConfig) -> Result<Self> {
        config.validate()?;

        let mut volume = Volume::new(config.volume);
        if config.muted {
            volume.mute();
        }

        let mut controller = Self {
            playlist: Playlist::new(config.tracks)?,
            state: PlaybackState::new(volume, config.looping),
            generation: Generation::default(),
            source_loaded: false,
            resume_after_load: false,
            play_in_flight: None,
            pending_commands: Vec::new(),
            pending_events: Vec::new(),
        };

        controller.push_command(MediaCommand::SetVolume {
            volume: volume.level(),
        });
        controller.push_command(MediaCommand::SetMuted {
            muted: volume.is_muted(),
        });
        controller.push_command(MediaCommand::SetLoop {
            looping: config.looping,
        });
        controller.switch_track(false);

        Ok(controller)
    }

    // ===== Playback Control =====

    /// Play when paused, pause when playing
    ///
    /// - `Paused` / `Errored`: issue `play()`; the status changes when it resolves
    /// - `Playing`: pause immediately
    /// - `Loading`: flip whether playback starts once the load completes
    pub fn toggle_play_pause(&mut self) {
        match self.state.status {
            PlaybackStatus::Loading => {
                self.resume_after_load = !self.resume_after_load;
                debug!(
                    resume = self.resume_after_load,
                    "Play/pause while loading, updated resume intent"
                );
            }
            PlaybackStatus::Playing => {
                self.play_in_flight = None;
                self.push_command(MediaCommand::Pause);
                self.set_status(PlaybackStatus::Paused);
            }
            PlaybackStatus::Paused | PlaybackStatus::Errored => {
                if let Some(reason) = self.play_in_flight {
                    debug!(?reason, "Play already requested, ignoring toggle");
                    return;
                }
                self.request_play(PlayReason::Toggle);
            }
        }
    }

    /// Skip to next track (wraps to the first)
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> usize {
        let resume = self.resume_intent();
        let index = self.playlist.next();
        self.switch_track(resume);
        index
    }

    /// Go to previous track (wraps to the last)
    pub fn previous(&mut self) -> usize {
        let resume = self.resume_intent();
        let index = self.playlist.previous();
        self.switch_track(resume);
        index
    }

    /// Switch to the track at `index`
    ///
    /// Re-selecting the current track reloads it, which is how a user
    /// retries after a load failure.
    pub fn select_track(&mut self, index: usize) -> Result<()> {
        let resume = self.resume_intent();
        self.playlist.select(index)?;
        self.switch_track(resume);
        Ok(())
    }

    // ===== Playlist Management =====

    /// Append a track by URL and switch to it
    ///
    /// Returns the new track's index. Malformed input leaves playlist,
    /// index and playback untouched.
    pub fn add_track(&mut self, url: &str) -> Result<usize> {
        let resume = self.resume_intent();
        let index = self.playlist.add_track(url)?;

        info!(
            index,
            url = %self.playlist.current_track().source_url,
            "Added track"
        );
        self.emit_playlist_changed();
        self.switch_track(resume);
        Ok(index)
    }

    /// Remove the track at `index`
    ///
    /// No-op when it would empty the playlist or `index` is out of bounds.
    /// Removing the current track switches to the track that takes its place.
    pub fn remove_track(&mut self, index: usize) -> Option<Track> {
        let resume = self.resume_intent();
        let Some(removal) = self.playlist.remove_track(index) else {
            debug!(index, len = self.playlist.len(), "Ignoring track removal");
            return None;
        };

        info!(index, title = %removal.track.title, "Removed track");
        self.emit_playlist_changed();
        if removal.was_current {
            self.switch_track(resume);
        }

        Some(removal.track)
    }

    // ===== Seek =====

    /// Seek to `position` seconds in the current track
    ///
    /// Only allowed once the source is loaded, including after a rejected
    /// `play()`. The position is clamped to the known duration.
    pub fn seek(&mut self, position: f64) -> Result<()> {
        if !self.source_loaded {
            return Err(PlaybackError::NotReady);
        }

        let mut position = position.max(0.0);
        if self.state.duration > 0.0 {
            position = position.min(self.state.duration);
        }

        self.state.current_time = position;
        self.push_command(MediaCommand::Seek { position });
        self.emit_position();
        Ok(())
    }

    // ===== Volume & Loop =====

    /// Set volume (0.0-1.0); NaN and infinities are ignored
    pub fn set_volume(&mut self, level: f64) {
        if !self.state.volume.set_level(level) {
            debug!(level, "Ignoring non-finite volume");
            return;
        }

        self.push_command(MediaCommand::SetVolume {
            volume: self.state.volume.level(),
        });
        self.emit_volume_changed();
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.state.volume.toggle_mute();
        self.push_command(MediaCommand::SetMuted {
            muted: self.state.volume.is_muted(),
        });
        self.emit_volume_changed();
    }

    /// Toggle loop of the current track
    pub fn toggle_loop(&mut self) {
        self.state.is_looping = !self.state.is_looping;
        self.push_command(MediaCommand::SetLoop {
            looping: self.state.is_looping,
        });
        self.pending_events.push(PlayerEvent::LoopChanged {
            is_looping: self.state.is_looping,
        });
    }

    // ===== Media Resource Feedback =====

    /// Result of a `Load` command
    pub fn load_finished(
        &mut self,
        generation: Generation,
        result: std::result::Result<(), MediaError>,
    ) {
        if generation != self.generation || !self.state.is_loading() {
            debug!(%generation, current = %self.generation, "Ignoring stale load result");
            return;
        }

        match result {
            Ok(()) => {
                self.source_loaded = true;
                self.set_status(PlaybackStatus::Paused);
                if std::mem::take(&mut self.resume_after_load) {
                    self.request_play(PlayReason::Resume);
                }
            }
            Err(e) => {
                warn!(
                    url = %self.playlist.current_track().source_url,
                    error = %e,
                    "Failed to load track"
                );
                self.resume_after_load = false;
                self.fail(Failure::LoadFailure);
            }
        }
    }

    /// Result of a `Play` command
    pub fn play_finished(
        &mut self,
        generation: Generation,
        reason: PlayReason,
        result: std::result::Result<(), MediaError>,
    ) {
        if generation != self.generation || self.play_in_flight != Some(reason) {
            debug!(%generation, ?reason, "Ignoring superseded play result");
            // Same source started playing after we paused it, and no newer
            // play() is pending to take over
            if generation == self.generation
                && result.is_ok()
                && self.play_in_flight.is_none()
                && !self.state.is_playing()
            {
                self.push_command(MediaCommand::Pause);
            }
            return;
        }

        self.play_in_flight = None;
        match result {
            Ok(()) => {
                self.state.last_error = None;
                self.set_status(PlaybackStatus::Playing);
            }
            Err(e) => {
                warn!(?reason, error = %e, "Playback rejected");
                match reason {
                    // Loaded source stays usable, back to paused
                    PlayReason::Toggle | PlayReason::Replay => {
                        self.record_failure(reason.failure());
                        self.set_status(PlaybackStatus::Paused);
                    }
                    PlayReason::Resume => self.fail(reason.failure()),
                }
            }
        }
    }

    /// Event raised by the media resource
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::TimeUpdate {
                current_time,
                duration,
            } => {
                self.state.current_time = finite_or_zero(current_time).max(0.0);
                self.state.duration = finite_or_zero(duration).max(0.0);
                self.emit_position();
            }
            MediaEvent::Ended => self.handle_ended(),
            MediaEvent::Error { reason } => {
                warn!(
                    url = %self.playlist.current_track().source_url,
                    %reason,
                    "Media resource error"
                );
                // Abandon whatever was in flight for this source
                self.generation = self.generation.next();
                self.source_loaded = false;
                self.resume_after_load = false;
                self.play_in_flight = None;
                self.fail(Failure::LoadFailure);
            }
        }
    }

    fn handle_ended(&mut self) {
        if self.state.is_loading() {
            debug!("Ignoring end of previous source");
            return;
        }

        if self.state.is_looping {
            debug!("Track ended, looping");
            self.state.current_time = 0.0;
            self.push_command(MediaCommand::Seek { position: 0.0 });
            self.emit_position();
            self.request_play(PlayReason::Replay);
        } else {
            self.playlist.next();
            self.switch_track(true);
        }
    }

    // ===== State Queries =====

    /// Current playback state
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn current_track(&self) -> &Track {
        self.playlist.current_track()
    }

    /// Generation of the current source
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether playback starts once the current load completes
    pub fn resumes_after_load(&self) -> bool {
        self.resume_after_load
    }

    /// Read-only copy for views
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            state: self.state.clone(),
            current_index: self.playlist.current_index(),
            current_track: self.playlist.current_track().clone(),
            tracks: self.playlist.tracks().to_vec(),
        }
    }

    // ===== Outputs =====

    /// Take commands queued for the media resource
    pub fn drain_commands(&mut self) -> Vec<MediaCommand> {
        std::mem::take(&mut self.pending_commands)
    }

    /// Take events queued for views
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending commands
    pub fn has_pending_commands(&self) -> bool {
        !self.pending_commands.is_empty()
    }

    // ===== Internal =====

    /// Resume intent of a manual switch: carry over while loading,
    /// otherwise whether we are playing right now
    fn resume_intent(&self) -> bool {
        match self.state.status {
            PlaybackStatus::Playing => true,
            PlaybackStatus::Loading => self.resume_after_load,
            PlaybackStatus::Paused | PlaybackStatus::Errored => false,
        }
    }

    /// Enter `Loading` for the current track under a new generation
    fn switch_track(&mut self, resume: bool) {
        self.generation = self.generation.next();
        self.source_loaded = false;
        self.resume_after_load = resume;
        self.play_in_flight = None;
        self.state.last_error = None;
        self.state.current_time = 0.0;
        self.state.duration = 0.0;
        self.set_status(PlaybackStatus::Loading);

        let index = self.playlist.current_index();
        let track = self.playlist.current_track().clone();
        info!(
            index,
            title = %track.title,
            generation = %self.generation,
            resume,
            "Switching track"
        );

        self.push_command(MediaCommand::Load {
            generation: self.generation,
            source_url: track.source_url.clone(),
        });
        self.pending_events
            .push(PlayerEvent::TrackChanged { index, track });
    }

    fn request_play(&mut self, reason: PlayReason) {
        self.play_in_flight = Some(reason);
        self.push_command(MediaCommand::Play {
            generation: self.generation,
            reason,
        });
    }

    fn fail(&mut self, failure: Failure) {
        self.record_failure(failure);
        self.set_status(PlaybackStatus::Errored);
    }

    fn record_failure(&mut self, failure: Failure) {
        self.state.last_error = Some(failure);
        self.pending_events.push(PlayerEvent::Error {
            message: failure.to_string(),
        });
    }

    fn set_status(&mut self, status: PlaybackStatus) {
        if self.state.status != status {
            debug!(from = ?self.state.status, to = ?status, "Status changed");
            self.state.status = status;
            self.pending_events.push(PlayerEvent::StateChanged { status });
        }
    }

    fn push_command(&mut self, command: MediaCommand) {
        self.pending_commands.push(command);
    }

    fn emit_position(&mut self) {
        self.pending_events.push(PlayerEvent::PositionUpdate {
            current_time: self.state.current_time,
            duration: self.state.duration,
        });
    }

    fn emit_volume_changed(&mut self) {
        self.pending_events.push(PlayerEvent::VolumeChanged {
            volume: self.state.volume.level(),
            is_muted: self.state.volume.is_muted(),
        });
    }

    fn emit_playlist_changed(&mut self) {
        self.pending_events.push(PlayerEvent::PlaylistChanged {
            length: self.playlist.len(),
        });
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_controller() -> PlaybackController {
        let mut controller = PlaybackController::new(PlayerConfig::default()).unwrap();
        let generation = controller.generation();
        controller.load_finished(generation, Ok(()));
        controller.drain_commands();
        controller.drain_events();
        controller
    }

    #[test]
    fn new_controller_starts_loading_first_track() {
        let mut controller = PlaybackController::new(PlayerConfig::default()).unwrap();

        assert!(controller.state().is_loading());
        assert!(!controller.state().is_playing());
        assert_eq!(controller.playlist().current_index(), 0);

        let commands = controller.drain_commands();
        assert_eq!(
            commands,
            vec![
                MediaCommand::SetVolume { volume: 0.5 },
                MediaCommand::SetMuted { muted: false },
                MediaCommand::SetLoop { looping: false },
                MediaCommand::Load {
                    generation: controller.generation(),
                    source_url: controller.current_track().source_url.clone(),
                },
            ]
        );
    }

    #[test]
    fn load_completion_pauses_without_resume() {
        let controller = loaded_controller();
        assert_eq!(controller.state().status, PlaybackStatus::Paused);
        assert!(controller.state().last_error.is_none());
    }

    #[test]
    fn toggle_waits_for_play_result() {
        let mut controller = loaded_controller();
        controller.toggle_play_pause();

        // Still paused until the resource confirms
        assert_eq!(controller.state().status, PlaybackStatus::Paused);
        let generation = controller.generation();
        assert_eq!(
            controller.drain_commands(),
            vec![MediaCommand::Play {
                generation,
                reason: PlayReason::Toggle
            }]
        );

        controller.play_finished(generation, PlayReason::Toggle, Ok(()));
        assert!(controller.state().is_playing());
    }

    #[test]
    fn double_toggle_while_play_pending_is_ignored() {
        let mut controller = loaded_controller();
        controller.toggle_play_pause();
        controller.toggle_play_pause();
        assert_eq!(controller.drain_commands().len(), 1);
    }

    #[test]
    fn toggle_while_playing_pauses_synchronously() {
        let mut controller = loaded_controller();
        controller.toggle_play_pause();
        controller.play_finished(controller.generation(), PlayReason::Toggle, Ok(()));
        controller.drain_commands();

        controller.toggle_play_pause();
        assert_eq!(controller.state().status, PlaybackStatus::Paused);
        assert_eq!(controller.drain_commands(), vec![MediaCommand::Pause]);
    }

    #[test]
    fn play_rejection_records_failure() {
        let mut controller = loaded_controller();
        controller.toggle_play_pause();
        controller.play_finished(
            controller.generation(),
            PlayReason::Toggle,
            Err(MediaError::new("NotAllowedError")),
        );

        assert!(!controller.state().is_playing());
        assert_eq!(controller.state().status, PlaybackStatus::Paused);
        assert_eq!(
            controller.state().error_message().as_deref(),
            Some("Playback failed. Please try again.")
        );
    }

    #[test]
    fn seek_still_allowed_after_play_rejection() {
        let mut controller = loaded_controller();
        controller.toggle_play_pause();
        controller.play_finished(
            controller.generation(),
            PlayReason::Toggle,
            Err(MediaError::new("NotAllowedError")),
        );
        controller.drain_commands();

        controller.seek(10.0).unwrap();
        assert_eq!(controller.state().current_time, 10.0);
        assert_eq!(
            controller.drain_commands(),
            vec![MediaCommand::Seek { position: 10.0 }]
        );
    }

    #[test]
    fn toggle_after_rejection_retries_and_clears_error() {
        let mut controller = loaded_controller();
        controller.toggle_play_pause();
        controller.play_finished(
            controller.generation(),
            PlayReason::Toggle,
            Err(MediaError::new("blocked")),
        );
        controller.drain_commands();

        controller.toggle_play_pause();
        assert_eq!(controller.drain_commands().len(), 1);
        controller.play_finished(controller.generation(), PlayReason::Toggle, Ok(()));

        assert!(controller.state().is_playing());
        assert!(controller.state().last_error.is_none());
    }

    #[test]
    fn switch_while_playing_resumes_after_load() {
        let mut controller = loaded_controller();
        controller.toggle_play_pause();
        controller.play_finished(controller.generation(), PlayReason::Toggle, Ok(()));
        controller.drain_commands();

        controller.next();
        // Optimistic pause during the switch
        assert!(!controller.state().is_playing());
        assert!(controller.state().is_loading());
        assert!(controller.resumes_after_load());

        let generation = controller.generation();
        controller.drain_commands();
        controller.load_finished(generation, Ok(()));
        assert_eq!(
            controller.drain_commands(),
            vec![MediaCommand::Play {
                generation,
                reason: PlayReason::Resume
            }]
        );

        controller.play_finished(generation, PlayReason::Resume, Err(MediaError::new("x")));
        assert_eq!(controller.state().status, PlaybackStatus::Errored);
        assert_eq!(
            controller.state().error_message().as_deref(),
            Some("Failed to play audio.")
        );

        // The new source did load
        controller.seek(5.0).unwrap();
        assert_eq!(controller.state().current_time, 5.0);
    }

    #[test]
    fn toggle_while_loading_flips_resume_intent() {
        let mut controller = PlaybackController::new(PlayerConfig::default()).unwrap();
        assert!(!controller.resumes_after_load());

        controller.toggle_play_pause();
        assert!(controller.resumes_after_load());
        assert!(controller.state().is_loading());

        controller.toggle_play_pause();
        assert!(!controller.resumes_after_load());
    }

    #[test]
    fn stale_load_result_is_ignored() {
        let mut controller = PlaybackController::new(PlayerConfig::default()).unwrap();
        let first = controller.generation();

        controller.next();
        let second = controller.generation();
        assert!(second > first);

        controller.load_finished(first, Ok(()));
        assert!(controller.state().is_loading());

        controller.load_finished(second, Ok(()));
        assert_eq!(controller.state().status, PlaybackStatus::Paused);
    }

    #[test]
    fn stale_play_result_is_ignored() {
        let mut controller = loaded_controller();
        controller.toggle_play_pause();
        let first = controller.generation();

        controller.next();
        controller.play_finished(first, PlayReason::Toggle, Ok(()));
        assert!(controller.state().is_loading());
        assert!(!controller.resumes_after_load());
    }

    #[test]
    fn load_failure_records_error() {
        let mut controller = PlaybackController::new(PlayerConfig::default()).unwrap();
        controller.load_finished(controller.generation(), Err(MediaError::new("404")));

        assert_eq!(controller.state().status, PlaybackStatus::Errored);
        assert_eq!(controller.state().last_error, Some(Failure::LoadFailure));
        assert!(controller
            .drain_events()
            .contains(&PlayerEvent::Error {
                message: "Failed to load audio file.".to_string()
            }));
    }

    #[test]
    fn reselect_after_load_failure_clears_error() {
        let mut controller = PlaybackController::new(PlayerConfig::default()).unwrap();
        controller.load_finished(controller.generation(), Err(MediaError::new("404")));

        controller.select_track(0).unwrap();
        assert!(controller.state().is_loading());
        assert!(controller.state().last_error.is_none());
    }

    #[test]
    fn media_error_abandons_in_flight_requests() {
        let mut controller = PlaybackController::new(PlayerConfig::default()).unwrap();
        let generation = controller.generation();

        controller.handle_media_event(MediaEvent::Error {
            reason: "MEDIA_ERR_SRC_NOT_SUPPORTED".to_string(),
        });
        assert_eq!(controller.state().last_error, Some(Failure::LoadFailure));

        controller.load_finished(generation, Ok(()));
        assert_eq!(controller.state().status, PlaybackStatus::Errored);
    }

    #[test]
    fn seek_requires_loaded_source() {
        let mut controller = PlaybackController::new(PlayerConfig::default()).unwrap();
        assert_eq!(controller.seek(10.0), Err(PlaybackError::NotReady));

        let mut controller = loaded_controller();
        controller.handle_media_event(MediaEvent::TimeUpdate {
            current_time: 1.0,
            duration: 120.0,
        });
        controller.seek(30.0).unwrap();
        assert_eq!(controller.state().current_time, 30.0);
        assert_eq!(
            controller.drain_commands(),
            vec![MediaCommand::Seek { position: 30.0 }]
        );

        controller.seek(500.0).unwrap();
        assert_eq!(controller.state().current_time, 120.0);
        controller.seek(-3.0).unwrap();
        assert_eq!(controller.state().current_time, 0.0);
    }

    #[test]
    fn time_update_sanitizes_unknown_duration() {
        let mut controller = loaded_controller();
        controller.handle_media_event(MediaEvent::TimeUpdate {
            current_time: 0.5,
            duration: f64::NAN,
        });
        assert_eq!(controller.state().current_time, 0.5);
        assert_eq!(controller.state().duration, 0.0);
        assert_eq!(controller.state().status, PlaybackStatus::Paused);
    }

    #[test]
    fn volume_mute_and_loop_are_mirrored() {
        let mut controller = PlaybackController::new(PlayerConfig::default()).unwrap();
        controller.drain_commands();

        controller.set_volume(0.8);
        controller.toggle_mute();
        controller.toggle_loop();
        controller.set_volume(f64::NAN);

        assert_eq!(
            controller.drain_commands(),
            vec![
                MediaCommand::SetVolume { volume: 0.8 },
                MediaCommand::SetMuted { muted: true },
                MediaCommand::SetLoop { looping: true },
            ]
        );
        assert!(controller.state().is_muted());
        assert!(controller.state().is_looping);
        assert!(controller.state().is_loading());
    }

    #[test]
    fn late_play_success_after_pause_pauses_resource() {
        let mut controller = loaded_controller();
        controller.toggle_play_pause();
        controller.play_finished(controller.generation(), PlayReason::Toggle, Ok(()));
        controller.toggle_loop();

        // Replay requested, then paused before it resolves
        controller.handle_media_event(MediaEvent::Ended);
        controller.toggle_play_pause();
        controller.drain_commands();

        controller.play_finished(controller.generation(), PlayReason::Replay, Ok(()));
        assert_eq!(controller.drain_commands(), vec![MediaCommand::Pause]);
        assert_eq!(controller.state().status, PlaybackStatus::Paused);
    }

    #[test]
    fn late_play_success_defers_to_newer_play_request() {
        let mut controller = loaded_controller();
        controller.toggle_play_pause();
        controller.play_finished(controller.generation(), PlayReason::Toggle, Ok(()));
        controller.toggle_loop();

        // Replay pending, user pauses and presses play again
        controller.handle_media_event(MediaEvent::Ended);
        controller.toggle_play_pause();
        controller.toggle_play_pause();
        controller.drain_commands();

        let generation = controller.generation();
        controller.play_finished(generation, PlayReason::Replay, Ok(()));
        assert!(controller.drain_commands().is_empty());

        controller.play_finished(generation, PlayReason::Toggle, Ok(()));
        assert!(controller.state().is_playing());
        assert!(!controller.has_pending_commands());
    }

    #[test]
    fn ended_while_loading_is_ignored() {
        let mut controller = PlaybackController::new(PlayerConfig::default()).unwrap();
        let generation = controller.generation();
        controller.handle_media_event(MediaEvent::Ended);
        assert_eq!(controller.generation(), generation);
        assert_eq!(controller.playlist().current_index(), 0);
    }
}
