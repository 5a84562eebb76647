// SPDX-License-Identifier: MPL-2.0
//! Domain layer - playback rules without I/O.
//!
//! This module contains value objects and state transitions that do not
//! touch a media primitive, a streaming engine or the network, so they can
//! be tested headlessly.
//!
//! # Modules
//!
//! - [`video`]: Playback types ([`SessionState`](video::SessionState),
//!   [`PlaybackSpeed`](video::PlaybackSpeed), [`PlayerCount`](video::PlayerCount),
//!   [`BufferedMarks`](video::BufferedMarks))

pub mod video;
