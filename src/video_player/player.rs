// SPDX-License-Identifier: MPL-2.0
//! Player session: one media element, at most one engine session, and the
//! UI state derived from them.
//!
//! The player is driven from a single event loop. Control methods (`play`,
//! `seek_to`, ...) are called by the host in response to user input; media,
//! engine and download completions arrive as [`PlayerEvent`]s and are applied
//! with [`Player::handle_event`] (or drained with [`Player::pump`]).
//!
//! Failures never propagate out of the player: each one is logged and kept
//! as [`Player::last_error`].

use super::download::DownloadRequest;
use super::engine::{EngineSession, SharedEngine};
use super::events::{
    EngineEvent, EngineEventSender, EventReceiver, EventSender, LoadId, MediaEvent,
    MediaEventSender, PlayerEvent, SessionId,
};
use super::media::{SharedMedia, TimeRange};
use super::time_format::{is_seek_input_complete, parse_time_to_seconds};
use crate::config::{PlayerSettings, HLS_MIME_TYPE};
use crate::domain::video::{seek_target_for_click, BufferedMarks, PlaybackSpeed, SessionState};
use crate::error::PlaybackError;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, trace, warn};

static NEXT_PLAYER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u64);

impl PlayerId {
    fn next() -> Self {
        Self(NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

struct ActiveSession {
    id: SessionId,
    session: Box<dyn EngineSession>,
}

/// One playback context.
pub struct Player {
    id: PlayerId,
    media: SharedMedia,
    engine: SharedEngine,
    settings: PlayerSettings,

    state: SessionState,
    source_url: String,
    session: Option<ActiveSession>,
    sessions_created: u64,
    /// Bumped on every source commit; media events from older loads are stale.
    load: LoadId,

    total_duration: f64,
    buffered_marks: BufferedMarks,
    speed: PlaybackSpeed,
    /// Set only once the media element accepted a play request.
    is_playing: bool,
    seek_input: String,
    last_error: Option<PlaybackError>,

    events_tx: EventSender,
    events_rx: EventReceiver,
}

impl Player {
    /// Creates an unloaded player bound to `media`.
    pub fn new(media: SharedMedia, engine: SharedEngine, settings: PlayerSettings) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let load = LoadId(0);
        media.subscribe(MediaEventSender::new(load, events_tx.clone()));

        let speed = settings.default_speed;
        media.set_playback_rate(speed.value());

        let player = Self {
            id: PlayerId::next(),
            media,
            engine,
            settings,
            state: SessionState::Unloaded,
            source_url: String::new(),
            session: None,
            sessions_created: 0,
            load,
            total_duration: 0.0,
            buffered_marks: BufferedMarks::default(),
            speed,
            is_playing: false,
            seek_input: String::new(),
            last_error: None,
            events_tx,
            events_rx,
        };
        debug!(player = %player.id, "player created");
        player
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Playback cursor, read from the media element.
    pub fn current_time(&self) -> f64 {
        self.media.current_time()
    }

    /// Media duration in seconds, 0 until known.
    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    pub fn buffered_marks(&self) -> &BufferedMarks {
        &self.buffered_marks
    }

    /// Buffered ranges as reported by the media element.
    pub fn buffered_ranges(&self) -> Vec<TimeRange> {
        self.media.buffered()
    }

    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn seek_input(&self) -> &str {
        &self.seek_input
    }

    /// Most recent failure, cleared when a new source is committed.
    pub fn last_error(&self) -> Option<&PlaybackError> {
        self.last_error.as_ref()
    }

    /// Identifier of the active engine session, if the engine path is in use.
    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|active| active.id)
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    // =========================================================================
    // Source lifecycle
    // =========================================================================

    /// Commits the URL input.
    ///
    /// The previous session is released before anything new is attached.
    /// Re-committing the current URL does nothing.
    pub fn set_source_url(&mut self, url: &str) {
        let url = url.trim();
        if url == self.source_url {
            return;
        }

        self.release_session();
        self.load = LoadId(self.load.0 + 1);
        self.media
            .subscribe(MediaEventSender::new(self.load, self.events_tx.clone()));
        self.source_url = url.to_string();
        self.is_playing = false;
        self.total_duration = 0.0;
        self.buffered_marks = BufferedMarks::default();
        self.last_error = None;
        self.transition(self.state.on_source_committed(url.is_empty()));

        if url.is_empty() {
            info!(player = %self.id, "source cleared");
            return;
        }

        self.attach(url.to_string());
    }

    fn attach(&mut self, url: String) {
        if self.engine.is_supported() {
            self.sessions_created += 1;
            let id = SessionId(self.sessions_created);
            let events = EngineEventSender::new(id, self.events_tx.clone());

            let mut session = self.engine.create_session(events);
            session.load_source(&url);
            session.attach_media(Arc::clone(&self.media));
            self.session = Some(ActiveSession { id, session });

            info!(player = %self.id, session = %id, url = %url, "streaming session attached");
        } else if self.media.can_play_type(HLS_MIME_TYPE) {
            self.media.set_src(Some(&url));
            info!(player = %self.id, url = %url, "using native playback");
        } else {
            warn!(player = %self.id, url = %url, "source cannot be played in this environment");
            self.last_error = Some(PlaybackError::UnsupportedFormat);
        }

        // Loading a source resets the element's rate.
        self.media.set_playback_rate(self.speed.value());
    }

    /// Destroys the engine session and detaches the media element.
    fn release_session(&mut self) {
        if let Some(mut active) = self.session.take() {
            active.session.destroy();
            debug!(player = %self.id, session = %active.id, "streaming session released");
        }
        if self.state.has_source() {
            self.media.detach();
        }
    }

    fn transition(&mut self, next: SessionState) {
        if next != self.state {
            debug!(player = %self.id, from = %self.state, to = %next, "state transition");
            self.state = next;
        }
    }

    // =========================================================================
    // Event loop
    // =========================================================================

    /// Applies every queued event. Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Waits for the next queued event.
    pub async fn next_event(&mut self) -> Option<PlayerEvent> {
        self.events_rx.recv().await
    }

    pub fn handle_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::Media { load, event } => {
                if load == self.load {
                    self.on_media_event(event);
                } else {
                    trace!(player = %self.id, load = %load, "dropping media event from replaced source");
                }
            }
            PlayerEvent::Engine { session, event } => {
                if self.session_id() == Some(session) {
                    self.on_engine_event(event);
                } else {
                    trace!(player = %self.id, session = %session, "dropping event from released session");
                }
            }
            PlayerEvent::DownloadFinished(Ok(path)) => {
                info!(player = %self.id, path = %path.display(), "download saved");
            }
            PlayerEvent::DownloadFinished(Err(err)) => {
                warn!(player = %self.id, error = %err, "download failed");
                self.last_error = Some(err);
            }
        }
    }

    fn on_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::LoadedMetadata => {
                self.transition(self.state.on_media_ready());
                self.recompute_buffer();
            }
            MediaEvent::Progress => self.recompute_buffer(),
            MediaEvent::TimeUpdate => {}
            MediaEvent::Error(message) => {
                warn!(player = %self.id, error = %message, "media error");
                self.last_error = Some(PlaybackError::Media(message));
            }
        }
    }

    fn on_engine_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::ManifestParsed { levels } => {
                debug!(player = %self.id, levels, "manifest parsed");
                self.transition(self.state.on_media_ready());
            }
            EngineEvent::SegmentBuffered { range } => {
                trace!(player = %self.id, start = range.start, end = range.end, "segment buffered");
                self.recompute_buffer();
            }
            EngineEvent::Error {
                code,
                detail,
                fatal,
            } => {
                if fatal {
                    error!(player = %self.id, code = %code, detail = %detail, "streaming engine error");
                } else {
                    warn!(player = %self.id, code = %code, detail = %detail, "streaming engine error");
                }
                self.last_error = Some(PlaybackError::Engine {
                    code,
                    detail,
                    fatal,
                });
            }
        }
    }

    /// Rebuilds duration and buffered marks from the media element.
    fn recompute_buffer(&mut self) {
        let duration = self.media.duration();
        self.total_duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            0.0
        };
        self.buffered_marks = BufferedMarks::compute(self.total_duration);
    }

    // =========================================================================
    // Transport controls
    // =========================================================================

    /// Asks the media element to play.
    ///
    /// `is_playing` only changes once the element accepts; a rejection is
    /// logged and leaves the state as it was.
    pub fn play(&mut self) {
        if !self.state.has_source() {
            warn!(player = %self.id, "play requested without a source");
            self.last_error = Some(PlaybackError::NoSource);
            return;
        }

        match self.media.play() {
            Ok(()) => {
                self.is_playing = true;
                self.transition(self.state.on_play_confirmed());
            }
            Err(err) => {
                warn!(player = %self.id, error = %err, "play request failed");
                self.last_error = Some(err);
            }
        }
    }

    pub fn pause(&mut self) {
        self.media.pause();
        self.is_playing = false;
        self.transition(self.state.on_pause());
    }

    /// The play/pause toggle button.
    pub fn toggle_play_pause(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Pauses and rewinds to 0.
    pub fn stop(&mut self) {
        self.media.pause();
        self.media.set_current_time(0.0);
        self.is_playing = false;
        self.transition(self.state.on_stop());
    }

    /// Moves the playback cursor. Negative targets seek to 0; once the
    /// duration is known, targets past the end seek to the end.
    pub fn seek_to(&mut self, secs: f64) {
        if !secs.is_finite() {
            warn!(player = %self.id, target = secs, "ignoring non-finite seek target");
            return;
        }

        let mut target = secs.max(0.0);
        if self.total_duration > 0.0 {
            target = target.min(self.total_duration);
        }
        debug!(player = %self.id, target, "seek");
        self.media.set_current_time(target);
    }

    /// Seeks to an `H:MM:SS` or `MM:SS` string; malformed text seeks to 0.
    pub fn seek_to_formatted(&mut self, text: &str) {
        self.seek_to(parse_time_to_seconds(text));
    }

    /// Updates the time-entry field. Returns true if the text was long
    /// enough to commit a seek.
    pub fn set_seek_input(&mut self, text: &str) -> bool {
        self.seek_input = text.to_string();
        if !is_seek_input_complete(text) {
            return false;
        }
        self.seek_to_formatted(text);
        true
    }

    /// Sets the playback rate, clamped to the slider range.
    pub fn set_speed(&mut self, value: f64) {
        let Some(speed) = PlaybackSpeed::try_new(value) else {
            warn!(player = %self.id, value, "ignoring non-finite playback speed");
            return;
        };
        if (speed.value() - value).abs() > f64::EPSILON {
            debug!(player = %self.id, requested = value, applied = speed.value(), "playback speed adjusted");
        }
        self.speed = speed;
        self.media.set_playback_rate(speed.value());
    }

    /// Seeks to the time under a click on the progress bar.
    ///
    /// Returns the target, or `None` when the duration is still unknown.
    pub fn click_progress(&mut self, offset_x: f64, bar_width: f64) -> Option<f64> {
        let target = seek_target_for_click(offset_x, bar_width, self.total_duration);
        match target {
            Some(secs) => self.seek_to(secs),
            None => debug!(player = %self.id, offset_x, bar_width, "progress click ignored"),
        }
        target
    }

    /// Starts saving the current source in the background.
    ///
    /// The outcome comes back as [`PlayerEvent::DownloadFinished`]. Returns
    /// false if nothing was started.
    pub fn download(&mut self) -> bool {
        if self.source_url.is_empty() {
            warn!(player = %self.id, "download requested without a source");
            self.last_error = Some(PlaybackError::NoSource);
            return false;
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            error!(player = %self.id, "download requires a Tokio runtime");
            self.last_error = Some(PlaybackError::Download(
                "no async runtime available".to_string(),
            ));
            return false;
        };

        let request = DownloadRequest::new(&self.source_url, &self.settings);
        info!(player = %self.id, url = %request.url, path = %request.dest_path().display(), "download started");

        let events = self.events_tx.clone();
        runtime.spawn(async move {
            let result = request.run().await;
            let _ = events.send(PlayerEvent::DownloadFinished(result));
        });
        true
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.release_session();
        debug!(player = %self.id, "player dropped");
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("source_url", &self.source_url)
            .field("session", &self.session_id())
            .field("is_playing", &self.is_playing)
            .finish()
    }
}
