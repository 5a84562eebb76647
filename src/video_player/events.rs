// SPDX-License-Identifier: MPL-2.0
//! Events delivered to a player's event loop.
//!
//! The media element, the active engine session and background downloads all
//! post into one unbounded channel owned by the player. Engine events are
//! tagged with the [`SessionId`] that produced them and media events with
//! the [`LoadId`] of the source they belong to, so the player can drop
//! anything queued for a source it has since replaced.

use super::media::TimeRange;
use crate::error::PlaybackError;
use std::fmt;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Identifier of one streaming-engine session within a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub(crate) u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Identifier of one source load on a player's media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadId(pub(crate) u64);

impl fmt::Display for LoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "load-{}", self.0)
    }
}

/// Lifecycle events raised by the media element.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Duration and dimensions are known.
    LoadedMetadata,
    /// More media was buffered.
    Progress,
    /// The playback cursor moved.
    TimeUpdate,
    /// Playback failed.
    Error(String),
}

/// Events raised by a streaming-engine session.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The manifest was fetched and parsed; `levels` quality variants exist.
    ManifestParsed { levels: usize },
    /// A segment was appended to the media element's buffer.
    SegmentBuffered { range: TimeRange },
    /// Runtime error. Non-fatal errors leave the session running.
    Error {
        code: String,
        detail: String,
        fatal: bool,
    },
}

/// Everything a player's event loop consumes.
#[derive(Debug, Clone)]
pub enum PlayerEvent {
    Media {
        load: LoadId,
        event: MediaEvent,
    },
    Engine {
        session: SessionId,
        event: EngineEvent,
    },
    /// A background download completed.
    DownloadFinished(Result<PathBuf, PlaybackError>),
}

pub(crate) type EventSender = mpsc::UnboundedSender<PlayerEvent>;
pub(crate) type EventReceiver = mpsc::UnboundedReceiver<PlayerEvent>;

/// Handle a media element uses to post [`MediaEvent`]s.
#[derive(Debug, Clone)]
pub struct MediaEventSender {
    load: LoadId,
    tx: mpsc::UnboundedSender<PlayerEvent>,
}

impl MediaEventSender {
    pub fn new(load: LoadId, tx: mpsc::UnboundedSender<PlayerEvent>) -> Self {
        Self { load, tx }
    }

    pub fn load(&self) -> LoadId {
        self.load
    }

    /// Posts an event tagged with this load. Returns false if the player is gone.
    pub fn emit(&self, event: MediaEvent) -> bool {
        self.tx
            .send(PlayerEvent::Media {
                load: self.load,
                event,
            })
            .is_ok()
    }
}

/// Handle an engine session uses to post [`EngineEvent`]s.
#[derive(Debug, Clone)]
pub struct EngineEventSender {
    session: SessionId,
    tx: mpsc::UnboundedSender<PlayerEvent>,
}

impl EngineEventSender {
    pub fn new(session: SessionId, tx: mpsc::UnboundedSender<PlayerEvent>) -> Self {
        Self { session, tx }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Posts an event tagged with this session. Returns false if the player is gone.
    pub fn emit(&self, event: EngineEvent) -> bool {
        self.tx
            .send(PlayerEvent::Engine {
                session: self.session,
                event,
            })
            .is_ok()
    }
}
