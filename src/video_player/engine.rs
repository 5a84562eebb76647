// SPDX-License-Identifier: MPL-2.0
//! Streaming engine abstraction.
//!
//! The adaptive-streaming engine (manifest parsing, segment fetching, bitrate
//! selection) is an external collaborator. The player only needs to create a
//! session per source, point it at a URL and a media element, and tear it
//! down again.

use super::events::EngineEventSender;
use super::media::SharedMedia;
use std::sync::Arc;

/// Factory for streaming sessions.
pub trait StreamingEngine: Send + Sync {
    /// Returns false when the engine cannot run in this environment; the
    /// player then falls back to native playback.
    fn is_supported(&self) -> bool;

    /// Creates a session that reports through `events`.
    fn create_session(&self, events: EngineEventSender) -> Box<dyn EngineSession>;
}

/// One engine session, bound to a single source.
pub trait EngineSession: Send {
    /// Starts loading the manifest at `url`.
    fn load_source(&mut self, url: &str);

    /// Binds the session to `media`.
    ///
    /// The session assigns its own source object through
    /// [`MediaElement::set_src`](super::media::MediaElement::set_src) and
    /// feeds duration and buffered ranges as segments arrive.
    fn attach_media(&mut self, media: SharedMedia);

    /// Cancels in-flight loads and detaches from the media element.
    ///
    /// Called exactly once, before the session is dropped.
    fn destroy(&mut self);
}

/// Engine shared by every player in a grid.
pub type SharedEngine = Arc<dyn StreamingEngine>;

/// Engine for environments without adaptive streaming support.
///
/// Always reports itself unsupported, so players use the media element's
/// native playback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeOnlyEngine;

impl StreamingEngine for NativeOnlyEngine {
    fn is_supported(&self) -> bool {
        false
    }

    fn create_session(&self, _events: EngineEventSender) -> Box<dyn EngineSession> {
        Box::new(InertSession)
    }
}

/// Session that does nothing; returned if a caller ignores `is_supported`.
struct InertSession;

impl EngineSession for InertSession {
    fn load_source(&mut self, _url: &str) {}

    fn attach_media(&mut self, _media: SharedMedia) {}

    fn destroy(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_only_engine_is_unsupported() {
        assert!(!NativeOnlyEngine.is_supported());
    }
}
