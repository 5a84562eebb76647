// SPDX-License-Identifier: MPL-2.0
//! Headless media element driven by the wall clock.
//!
//! `ClockMedia` renders nothing. It keeps the state a platform video element
//! would keep (source, duration, buffered ranges, playback cursor and rate)
//! and advances the cursor from wall-clock time while playing:
//!
//! ```text
//! current_time = anchor_position + elapsed_since_anchor * playback_rate
//! ```
//!
//! capped at the duration once it is known. Every transport change folds the
//! running clock into `anchor_position` and re-anchors, so rate changes and
//! seeks never make the cursor jump.

use super::events::{MediaEvent, MediaEventSender};
use super::media::{MediaElement, TimeRange};
use crate::error::PlaybackError;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

#[derive(Debug)]
struct ClockState {
    src: Option<String>,
    duration: f64,
    buffered: Vec<TimeRange>,
    rate: f64,
    /// Cursor position at `anchor`.
    position: f64,
    /// Set while playing.
    anchor: Option<Instant>,
    play_rejection: Option<String>,
    events: Option<MediaEventSender>,
}

impl ClockState {
    fn new() -> Self {
        Self {
            src: None,
            duration: f64::NAN,
            buffered: Vec::new(),
            rate: 1.0,
            position: 0.0,
            anchor: None,
            play_rejection: None,
            events: None,
        }
    }

    fn cap(&self, secs: f64) -> f64 {
        let secs = secs.max(0.0);
        if self.duration.is_finite() && self.duration > 0.0 {
            secs.min(self.duration)
        } else {
            secs
        }
    }

    fn now(&self) -> f64 {
        match self.anchor {
            Some(anchor) => self.cap(self.position + anchor.elapsed().as_secs_f64() * self.rate),
            None => self.position,
        }
    }

    /// Folds elapsed play time into `position` and restarts the anchor.
    fn reanchor(&mut self) {
        self.position = self.now();
        if self.anchor.is_some() {
            self.anchor = Some(Instant::now());
        }
    }

    fn reset_source(&mut self) {
        self.duration = f64::NAN;
        self.buffered.clear();
        self.position = 0.0;
        self.anchor = None;
    }
}

/// Wall-clock media element for headless hosts and tests.
#[derive(Debug)]
pub struct ClockMedia {
    state: Mutex<ClockState>,
    native_types: Vec<String>,
}

impl Default for ClockMedia {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockMedia {
    /// Creates an element with no native format support.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ClockState::new()),
            native_types: Vec::new(),
        }
    }

    /// Creates an element that natively plays the given MIME types.
    #[must_use]
    pub fn with_native_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            state: Mutex::new(ClockState::new()),
            native_types: types.into_iter().map(Into::into).collect(),
        }
    }

    /// Makes subsequent play requests fail with `reason` (e.g. blocked
    /// autoplay). `None` lifts the block.
    pub fn set_play_rejection(&self, reason: Option<&str>) {
        self.lock().play_rejection = reason.map(str::to_string);
    }

    /// Returns the assigned source, if any.
    pub fn src(&self) -> Option<String> {
        self.lock().src.clone()
    }

    /// Returns true while the clock is running.
    pub fn is_running(&self) -> bool {
        self.lock().anchor.is_some()
    }

    /// Raises a playback error, as a decoder failure would.
    pub fn report_error(&self, message: &str) {
        let events = self.lock().events.clone();
        emit(events, MediaEvent::Error(message.to_string()));
    }

    fn lock(&self) -> MutexGuard<'_, ClockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn emit(events: Option<MediaEventSender>, event: MediaEvent) {
    if let Some(events) = events {
        events.emit(event);
    }
}

impl MediaElement for ClockMedia {
    fn subscribe(&self, events: MediaEventSender) {
        self.lock().events = Some(events);
    }

    fn can_play_type(&self, mime_type: &str) -> bool {
        self.native_types
            .iter()
            .any(|native| native.eq_ignore_ascii_case(mime_type))
    }

    fn set_src(&self, src: Option<&str>) {
        let mut state = self.lock();
        state.src = src.map(str::to_string);
        state.reset_source();
    }

    fn play(&self) -> Result<(), PlaybackError> {
        let mut state = self.lock();
        if state.src.is_none() {
            return Err(PlaybackError::PlayRejected(
                "no supported source".to_string(),
            ));
        }
        if let Some(reason) = &state.play_rejection {
            return Err(PlaybackError::PlayRejected(reason.clone()));
        }
        if state.anchor.is_none() {
            state.anchor = Some(Instant::now());
        }
        Ok(())
    }

    fn pause(&self) {
        let mut state = self.lock();
        state.position = state.now();
        state.anchor = None;
    }

    fn current_time(&self) -> f64 {
        self.lock().now()
    }

    fn set_current_time(&self, secs: f64) {
        let events = {
            let mut state = self.lock();
            state.reanchor();
            state.position = state.cap(secs);
            state.events.clone()
        };
        emit(events, MediaEvent::TimeUpdate);
    }

    fn playback_rate(&self) -> f64 {
        self.lock().rate
    }

    fn set_playback_rate(&self, rate: f64) {
        let mut state = self.lock();
        state.reanchor();
        state.rate = rate;
    }

    fn duration(&self) -> f64 {
        self.lock().duration
    }

    fn buffered(&self) -> Vec<TimeRange> {
        self.lock().buffered.clone()
    }

    fn set_duration(&self, secs: f64) {
        let (first_known, events) = {
            let mut state = self.lock();
            let was_known = state.duration.is_finite() && state.duration > 0.0;
            state.reanchor();
            state.duration = secs;
            state.position = state.cap(state.position);
            let is_known = secs.is_finite() && secs > 0.0;
            (!was_known && is_known, state.events.clone())
        };
        if first_known {
            emit(events, MediaEvent::LoadedMetadata);
        }
    }

    fn append_buffered(&self, range: TimeRange) {
        let events = {
            let mut state = self.lock();
            merge_range(&mut state.buffered, range);
            state.events.clone()
        };
        emit(events, MediaEvent::Progress);
    }
}

/// Inserts `range` keeping `ranges` sorted and non-overlapping.
fn merge_range(ranges: &mut Vec<TimeRange>, range: TimeRange) {
    let mut merged = range;
    ranges.retain(|existing| {
        if existing.touches(&merged) {
            merged = TimeRange::new(
                existing.start.min(merged.start),
                existing.end.max(merged.end),
            );
            false
        } else {
            true
        }
    });
    let index = ranges
        .iter()
        .position(|existing| existing.start > merged.start)
        .unwrap_or(ranges.len());
    ranges.insert(index, merged);
}
