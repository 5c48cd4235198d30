//! Player session - single-threaded event loop
//!
//! Drives a [`PlaybackController`] against a [`MediaResource`].
//! Intents from views and events from the resource are applied one at a
//! time; asynchronous `load()`/`play()` requests run concurrently inside the
//! loop (no task spawning) and report back tagged with their generation.

use crate::error::Result;
use crate::intent::Intent;
use crate::media::MediaResource;
use cadence_playback::{
    Generation, MediaCommand, MediaError, MediaEvent, PlayReason, PlaybackController,
    PlayerConfig, PlayerEvent, PlayerSnapshot,
};
use futures_util::future::LocalBoxFuture;
use futures_util::stream::{FuturesUnordered, StreamExt};
use futures_util::FutureExt;
use std::rc::Rc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// Sender the host uses to report media resource events
pub type MediaEventSender = mpsc::UnboundedSender<MediaEvent>;

/// Resolved asynchronous media request
#[derive(Debug)]
enum Completion {
    Load {
        generation: Generation,
        result: std::result::Result<(), MediaError>,
    },
    Play {
        generation: Generation,
        reason: PlayReason,
        result: std::result::Result<(), MediaError>,
    },
}

/// Player session
///
/// Sole owner and mutator of the controller and the media resource.
pub struct PlayerSession<M: MediaResource + 'static> {
    controller: PlaybackController,
    media: Rc<M>,

    // In-flight load/play requests
    in_flight: FuturesUnordered<LocalBoxFuture<'static, Completion>>,

    // Inputs
    intent_rx: mpsc::UnboundedReceiver<Intent>,
    media_rx: mpsc::UnboundedReceiver<MediaEvent>,

    // Outputs
    snapshot_tx: watch::Sender<PlayerSnapshot>,
    event_tx: mpsc::UnboundedSender<PlayerEvent>,
}

/// View-side handle to a running session
///
/// Send intents, observe snapshots, receive events.
pub struct SessionHandle {
    intent_tx: mpsc::UnboundedSender<Intent>,
    media_tx: MediaEventSender,
    snapshot_rx: watch::Receiver<PlayerSnapshot>,
    event_rx: mpsc::UnboundedReceiver<PlayerEvent>,
}

impl<M: MediaResource + 'static> PlayerSession<M> {
    /// Create a session and start loading the first track
    ///
    /// The initial commands (volume, mute, loop, first `load()`) are
    /// executed immediately.
    pub fn new(config: PlayerConfig, media: M) -> Result<(Self, SessionHandle)> {
        let controller = PlaybackController::new(config)?;

        let (intent_tx, intent_rx) = mpsc::unbounded_channel();
        let (media_tx, media_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(controller.snapshot());

        let mut session = Self {
            controller,
            media: Rc::new(media),
            in_flight: FuturesUnordered::new(),
            intent_rx,
            media_rx,
            snapshot_tx,
            event_tx,
        };
        session.flush();

        let handle = SessionHandle {
            intent_tx,
            media_tx,
            snapshot_rx,
            event_rx,
        };

        Ok((session, handle))
    }

    /// Apply one intent
    ///
    /// Rejected intents leave state untouched, are reported to views as
    /// [`PlayerEvent::IntentRejected`] and returned to the caller.
    pub fn dispatch(&mut self, intent: Intent) -> Result<()> {
        debug!(?intent, "Dispatching intent");

        let result = match intent {
            Intent::PlayPause => {
                self.controller.toggle_play_pause();
                Ok(())
            }
            Intent::Previous => {
                self.controller.previous();
                Ok(())
            }
            Intent::Next => {
                self.controller.next();
                Ok(())
            }
            Intent::Seek(position) => self.controller.seek(position),
            Intent::VolumeChange(volume) => {
                self.controller.set_volume(volume);
                Ok(())
            }
            Intent::MuteToggle => {
                self.controller.toggle_mute();
                Ok(())
            }
            Intent::LoopToggle => {
                self.controller.toggle_loop();
                Ok(())
            }
            Intent::AddTrack(url) if url.trim().is_empty() => {
                debug!("Ignoring empty track URL");
                Ok(())
            }
            Intent::AddTrack(url) => self.controller.add_track(&url).map(|_| ()),
            Intent::SelectTrack(index) => self.controller.select_track(index),
            Intent::DeleteTrack(index) => {
                self.controller.remove_track(index);
                Ok(())
            }
        };

        if let Err(ref e) = result {
            warn!(error = ?e, "Intent rejected");
            self.event_tx
                .send(PlayerEvent::IntentRejected {
                    message: e.to_string(),
                })
                .ok();
        }

        self.flush();
        result.map_err(Into::into)
    }

    /// Apply one media resource event
    pub fn handle_media_event(&mut self, event: MediaEvent) {
        self.controller.handle_media_event(event);
        self.flush();
    }

    /// Drive in-flight requests until none are left
    pub async fn settle(&mut self) {
        while let Some(completion) = self.in_flight.next().await {
            self.complete(completion);
        }
    }

    /// Run the event loop
    ///
    /// Returns when every intent sender (including the handle) is dropped.
    pub async fn run(mut self) {
        info!(
            tracks = self.controller.playlist().len(),
            "Player session started"
        );

        loop {
            tokio::select! {
                intent = self.intent_rx.recv() => match intent {
                    // Rejections are already reported inside dispatch
                    Some(intent) => { self.dispatch(intent).ok(); }
                    None => break,
                },
                Some(event) = self.media_rx.recv() => self.handle_media_event(event),
                Some(completion) = self.in_flight.next(), if !self.in_flight.is_empty() => {
                    self.complete(completion);
                }
            }
        }

        info!(
            abandoned = self.in_flight.len(),
            "Player session stopped"
        );
    }

    /// Current controller (read-only)
    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    /// Current snapshot
    pub fn snapshot(&self) -> PlayerSnapshot {
        self.controller.snapshot()
    }

    /// Number of unresolved load/play requests
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    fn complete(&mut self, completion: Completion) {
        debug!(?completion, "Media request resolved");
        match completion {
            Completion::Load { generation, result } => {
                self.controller.load_finished(generation, result);
            }
            Completion::Play {
                generation,
                reason,
                result,
            } => {
                self.controller.play_finished(generation, reason, result);
            }
        }
        self.flush();
    }

    /// Execute queued commands and publish events and the new snapshot
    fn flush(&mut self) {
        for command in self.controller.drain_commands() {
            self.execute(command);
        }

        for event in self.controller.drain_events() {
            // Views may have gone away
            self.event_tx.send(event).ok();
        }
        self.snapshot_tx.send_replace(self.controller.snapshot());
    }

    fn execute(&mut self, command: MediaCommand) {
        match command {
            MediaCommand::Load {
                generation,
                source_url,
            } => {
                let media = Rc::clone(&self.media);
                self.in_flight.push(
                    async move {
                        let result = media.load(&source_url).await;
                        Completion::Load { generation, result }
                    }
                    .boxed_local(),
                );
            }
            MediaCommand::Play { generation, reason } => {
                let media = Rc::clone(&self.media);
                self.in_flight.push(
                    async move {
                        let result = media.play().await;
                        Completion::Play {
                            generation,
                            reason,
                            result,
                        }
                    }
                    .boxed_local(),
                );
            }
            MediaCommand::Pause => self.media.pause(),
            MediaCommand::Seek { position } => self.media.seek(position),
            MediaCommand::SetVolume { volume } => self.media.set_volume(volume),
            MediaCommand::SetMuted { muted } => self.media.set_muted(muted),
            MediaCommand::SetLoop { looping } => self.media.set_loop(looping),
        }
    }
}

impl SessionHandle {
    /// Send an intent to the session
    ///
    /// Returns false if the session has stopped.
    pub fn send(&self, intent: Intent) -> bool {
        self.intent_tx.send(intent).is_ok()
    }

    /// Sender for the host's media resource events
    pub fn media_event_sender(&self) -> MediaEventSender {
        self.media_tx.clone()
    }

    /// Latest snapshot
    pub fn snapshot(&self) -> PlayerSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Receiver that observes every snapshot change
    pub fn subscribe(&self) -> watch::Receiver<PlayerSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Try to receive an event (non-blocking)
    pub fn try_recv_event(&mut self) -> Option<PlayerEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Receive the next event
    ///
    /// Returns `None` once the session has stopped and all events are read.
    pub async fn recv_event(&mut self) -> Option<PlayerEvent> {
        self.event_rx.recv().await
    }
}
