// SPDX-License-Identifier: MPL-2.0
//! `hls_grid` drives a grid of independent HLS player sessions without a GUI.
//!
//! Each [`video_player::Player`] wraps a media element and an adaptive
//! streaming engine, exposes the playback controls (play/pause, stop, seek,
//! speed, download) and tracks buffered-progress marks. The
//! [`grid::GridController`] holds one to four of them.

#![doc(html_root_url = "https://docs.rs/hls_grid/0.1.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod grid;
pub mod paths;
pub mod video_player;

#[cfg(test)]
pub(crate) mod test_utils;
