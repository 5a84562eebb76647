// SPDX-License-Identifier: MPL-2.0
//! Media primitive abstraction.
//!
//! A [`MediaElement`] is the platform's native playback object: it owns the
//! playback cursor, the playback rate and the buffered ranges. The player
//! drives the transport side; an attached streaming engine drives the
//! source-buffer side (`set_src`, `set_duration`, `append_buffered`).
//!
//! Methods take `&self` so one element can be shared between the player and
//! an engine session running on its own tasks.

use super::events::MediaEventSender;
use crate::error::PlaybackError;
use std::sync::Arc;

/// A buffered time interval in seconds, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    /// Creates a range, swapping the bounds if given in reverse order.
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn contains(&self, secs: f64) -> bool {
        (self.start..=self.end).contains(&secs)
    }

    /// Returns true if the ranges overlap or touch.
    #[must_use]
    pub fn touches(&self, other: &TimeRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Native audio/video playback object.
pub trait MediaElement: Send + Sync {
    /// Registers the channel lifecycle events are delivered on.
    ///
    /// Replaces any previous subscriber.
    fn subscribe(&self, events: MediaEventSender);

    /// Returns true if the element can play `mime_type` without a streaming
    /// engine.
    fn can_play_type(&self, mime_type: &str) -> bool;

    /// Assigns (`Some`) or clears (`None`) the element's source.
    ///
    /// Assigning a source resets duration, buffered ranges and the playback
    /// cursor, like the platform load algorithm does.
    fn set_src(&self, src: Option<&str>);

    /// Starts playback. The element may refuse (blocked autoplay, no source).
    fn play(&self) -> Result<(), PlaybackError>;

    fn pause(&self);

    /// Current playback cursor in seconds.
    fn current_time(&self) -> f64;

    fn set_current_time(&self, secs: f64);

    fn playback_rate(&self) -> f64;

    fn set_playback_rate(&self, rate: f64);

    /// Total duration in seconds; NaN while unknown, infinite for live sources.
    fn duration(&self) -> f64;

    /// Buffered ranges, sorted and non-overlapping.
    fn buffered(&self) -> Vec<TimeRange>;

    /// Source-buffer side: the attached engine reports the media duration.
    fn set_duration(&self, secs: f64);

    /// Source-buffer side: the attached engine appended a decoded range.
    fn append_buffered(&self, range: TimeRange);

    /// Drops the current source and everything buffered for it.
    fn detach(&self) {
        self.set_src(None);
    }
}

/// Media element shared between a player and its engine session.
pub type SharedMedia = Arc<dyn MediaElement>;
