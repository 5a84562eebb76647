// SPDX-License-Identifier: MPL-2.0
//! Player session state machine.
//!
//! ```text
//! Unloaded ──source──▶ Attaching ──metadata / manifest──▶ Ready
//!                                                           │ play
//!                          ┌────────── pause ───────────┐   ▼
//!                       Paused ◀──────────────────── Playing
//!                          │            play ─────────▶   │
//!                          └──── stop ──▶ Stopped ◀─ stop ┘
//! ```
//!
//! `Stopped` is not terminal: a later play resumes from time 0. Stopping
//! before metadata arrives keeps the session in `Attaching`. Committing a
//! new source from any state re-enters `Attaching`; clearing it returns to
//! `Unloaded`.

/// Lifecycle state of one player session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No source URL.
    #[default]
    Unloaded,
    /// A source was committed; waiting for metadata or a parsed manifest.
    Attaching,
    /// Metadata is known; playback has not started.
    Ready,
    /// The media primitive confirmed a play request.
    Playing,
    /// Paused at the current position.
    Paused,
    /// Paused and rewound to 0.
    Stopped,
}

impl SessionState {
    /// Returns true if a source URL is committed.
    #[must_use]
    pub fn has_source(self) -> bool {
        !matches!(self, Self::Unloaded)
    }

    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true once metadata has been reported for the current source.
    #[must_use]
    pub fn is_ready(self) -> bool {
        matches!(
            self,
            Self::Ready | Self::Playing | Self::Paused | Self::Stopped
        )
    }

    /// State after the source URL input commits.
    #[must_use]
    pub fn on_source_committed(self, url_is_empty: bool) -> Self {
        if url_is_empty {
            Self::Unloaded
        } else {
            Self::Attaching
        }
    }

    /// State after the media primitive or engine reports the source ready.
    #[must_use]
    pub fn on_media_ready(self) -> Self {
        match self {
            Self::Attaching => Self::Ready,
            other => other,
        }
    }

    /// State after the media primitive accepted a play request.
    #[must_use]
    pub fn on_play_confirmed(self) -> Self {
        match self {
            Self::Unloaded => Self::Unloaded,
            _ => Self::Playing,
        }
    }

    #[must_use]
    pub fn on_pause(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            other => other,
        }
    }

    /// State after a stop. Only a ready session can be stopped.
    #[must_use]
    pub fn on_stop(self) -> Self {
        match self {
            Self::Unloaded | Self::Attaching => self,
            _ => Self::Stopped,
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Unloaded => "unloaded",
            Self::Attaching => "attaching",
            Self::Ready => "ready",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Stopped => "stopped",
        };
        f.write_str(name)
    }
}
