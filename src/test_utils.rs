// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and a scripted streaming engine.
//!
//! Float assertions come from the `approx` crate. [`ScriptedEngine`] records
//! every call the player makes and lets a test push engine events by hand.

pub use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne};

/// Default epsilon for f64 comparisons.
pub const F64_EPSILON: f64 = 1e-10;

use crate::video_player::{
    EngineEvent, EngineEventSender, EngineSession, SessionId, SharedMedia, StreamingEngine,
    TimeRange,
};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Script {
    calls: Vec<String>,
    senders: Vec<EngineEventSender>,
    media: Option<SharedMedia>,
    live: usize,
}

/// Engine fake driven entirely by the test.
#[derive(Clone)]
pub struct ScriptedEngine {
    supported: bool,
    script: Arc<Mutex<Script>>,
}

impl ScriptedEngine {
    pub fn supported() -> Self {
        Self {
            supported: true,
            script: Arc::default(),
        }
    }

    pub fn unsupported() -> Self {
        Self {
            supported: false,
            script: Arc::default(),
        }
    }

    /// Calls received so far, e.g. `"create session-1"`, `"load <url>"`.
    pub fn calls(&self) -> Vec<String> {
        self.script.lock().unwrap().calls.clone()
    }

    pub fn sessions_created(&self) -> usize {
        self.script.lock().unwrap().senders.len()
    }

    /// Sessions created and not yet destroyed.
    pub fn live_sessions(&self) -> usize {
        self.script.lock().unwrap().live
    }

    /// Event sender of the `index`-th session ever created.
    pub fn sender(&self, index: usize) -> Option<EngineEventSender> {
        self.script.lock().unwrap().senders.get(index).cloned()
    }

    /// Emits `event` from the most recent session.
    pub fn emit(&self, event: EngineEvent) {
        let sender = self.script.lock().unwrap().senders.last().cloned();
        if let Some(sender) = sender {
            sender.emit(event);
        }
    }

    /// Simulates a segment landing in the attached media element.
    pub fn buffer_segment(&self, range: TimeRange, duration: f64) {
        let media = self.script.lock().unwrap().media.clone();
        if let Some(media) = media {
            media.set_duration(duration);
            media.append_buffered(range);
        }
        self.emit(EngineEvent::SegmentBuffered { range });
    }
}

impl StreamingEngine for ScriptedEngine {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn create_session(&self, events: EngineEventSender) -> Box<dyn EngineSession> {
        let id = events.session();
        let mut script = self.script.lock().unwrap();
        script.calls.push(format!("create {id}"));
        script.senders.push(events);
        script.live += 1;
        Box::new(ScriptedSession {
            id,
            script: Arc::clone(&self.script),
        })
    }
}

struct ScriptedSession {
    id: SessionId,
    script: Arc<Mutex<Script>>,
}

impl EngineSession for ScriptedSession {
    fn load_source(&mut self, url: &str) {
        self.script.lock().unwrap().calls.push(format!("load {url}"));
    }

    fn attach_media(&mut self, media: SharedMedia) {
        media.set_src(Some(&format!("blob:{}", self.id)));
        let mut script = self.script.lock().unwrap();
        script.calls.push("attach".to_string());
        script.media = Some(media);
    }

    fn destroy(&mut self) {
        let mut script = self.script.lock().unwrap();
        script.calls.push(format!("destroy {}", self.id));
        script.live -= 1;
    }
}
