// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains playback value objects and rules that are
//! independent of any media primitive or streaming engine.

pub mod buffer;
pub mod newtypes;
pub mod playback;
pub mod progress;

// Re-export commonly used types
pub use buffer::BufferedMarks;
pub use newtypes::{PlaybackSpeed, PlayerCount};
pub use playback::SessionState;
pub use progress::seek_target_for_click;
