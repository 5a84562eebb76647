// SPDX-License-Identifier: MPL-2.0
//! Shared fixtures for integration tests.

#![allow(dead_code)]

use hls_grid::config::PlayerSettings;
use hls_grid::video_player::{
    ClockMedia, EngineEvent, EngineEventSender, EngineSession, Player, SharedMedia,
    StreamingEngine, TimeRange,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const STREAM_URL: &str = "https://example.com/stream.m3u8";

/// Engine whose sessions "load" instantly: attaching a media element
/// reports the manifest, the duration and one buffered segment.
pub struct InstantEngine {
    duration: f64,
    created: AtomicUsize,
    live: Arc<AtomicUsize>,
}

impl InstantEngine {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            created: AtomicUsize::new(0),
            live: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn sessions_created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn live_sessions(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

impl StreamingEngine for InstantEngine {
    fn is_supported(&self) -> bool {
        true
    }

    fn create_session(&self, events: EngineEventSender) -> Box<dyn EngineSession> {
        self.created.fetch_add(1, Ordering::SeqCst);
        self.live.fetch_add(1, Ordering::SeqCst);
        Box::new(InstantSession {
            events,
            duration: self.duration,
            live: Arc::clone(&self.live),
            url: None,
        })
    }
}

struct InstantSession {
    events: EngineEventSender,
    duration: f64,
    live: Arc<AtomicUsize>,
    url: Option<String>,
}

impl EngineSession for InstantSession {
    fn load_source(&mut self, url: &str) {
        self.url = Some(url.to_string());
    }

    fn attach_media(&mut self, media: SharedMedia) {
        media.set_src(Some(&format!("blob:{}", self.events.session())));
        self.events.emit(EngineEvent::ManifestParsed { levels: 3 });

        let segment = TimeRange::new(0.0, self.duration.min(6.0));
        media.set_duration(self.duration);
        media.append_buffered(segment);
        self.events
            .emit(EngineEvent::SegmentBuffered { range: segment });
    }

    fn destroy(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

/// A player on a fresh [`ClockMedia`], returning both.
pub fn player_with(engine: Arc<InstantEngine>) -> (Player, Arc<ClockMedia>) {
    let media = Arc::new(ClockMedia::new());
    let player = Player::new(media.clone(), engine, PlayerSettings::default());
    (player, media)
}
