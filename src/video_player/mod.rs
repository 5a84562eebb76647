// SPDX-License-Identifier: MPL-2.0
//! HLS player sessions.
//!
//! This module provides the per-player state machine, the traits for the
//! media element and streaming engine it drives, and a headless media
//! element for hosts without a renderer.

pub mod clock_media;
pub mod download;
pub mod engine;
pub mod events;
pub mod media;
mod player;
pub mod time_format;

pub use clock_media::ClockMedia;
pub use download::DownloadRequest;
pub use engine::{EngineSession, NativeOnlyEngine, SharedEngine, StreamingEngine};
pub use events::{
    EngineEvent, EngineEventSender, LoadId, MediaEvent, MediaEventSender, PlayerEvent, SessionId,
};
pub use media::{MediaElement, SharedMedia, TimeRange};
pub use player::{Player, PlayerId};
pub use time_format::{format_time, is_seek_input_complete, parse_time_to_seconds};

use crate::config::PlayerSettings;
use std::sync::Arc;

/// Creates a player backed by a fresh [`ClockMedia`] element.
pub fn create_player(engine: SharedEngine, settings: PlayerSettings) -> Player {
    Player::new(Arc::new(ClockMedia::new()), engine, settings)
}
