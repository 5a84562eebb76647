// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Grid**: Number of player instances
//! - **Playback Speed**: Speed slider bounds and step
//! - **Buffer Indicator**: Buffered-mark count
//! - **Seek Input**: Formatted time-entry gating
//! - **Download**: Saved file name and HTTP client identity

use crate::domain::video::newtypes::{player_count_bounds, speed_bounds};

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default number of players shown in the grid.
pub const DEFAULT_PLAYER_COUNT: u8 = player_count_bounds::DEFAULT;

/// Minimum selectable number of players.
pub const MIN_PLAYER_COUNT: u8 = player_count_bounds::MIN;

/// Maximum selectable number of players.
pub const MAX_PLAYER_COUNT: u8 = player_count_bounds::MAX;

// ==========================================================================
// Playback Speed Defaults
// ==========================================================================

/// Default playback speed (1.0 = normal speed).
pub const DEFAULT_PLAYBACK_SPEED: f64 = speed_bounds::DEFAULT;

/// Minimum playback speed accepted by the speed slider.
pub const MIN_PLAYBACK_SPEED: f64 = speed_bounds::MIN;

/// Maximum playback speed accepted by the speed slider.
pub const MAX_PLAYBACK_SPEED: f64 = speed_bounds::MAX;

/// Speed slider step.
pub const PLAYBACK_SPEED_STEP: f64 = speed_bounds::STEP;

// ==========================================================================
// Buffer Indicator Defaults
// ==========================================================================

/// Number of evenly spaced marks drawn on the buffer bar.
pub const BUFFER_MARK_COUNT: usize = 4;

// ==========================================================================
// Seek Input Defaults
// ==========================================================================

/// Minimum length of a formatted time entry before it commits a seek (`MM:SS`).
pub const MIN_SEEK_INPUT_LEN: usize = 5;

// ==========================================================================
// Download Defaults
// ==========================================================================

/// File name the downloaded source is saved under.
pub const DEFAULT_DOWNLOAD_FILENAME: &str = "video.mp4";

/// User agent sent with download requests.
pub const DEFAULT_USER_AGENT: &str = concat!("hls_grid/", env!("CARGO_PKG_VERSION"));

/// Maximum number of redirects followed by download requests.
pub const DOWNLOAD_MAX_REDIRECTS: usize = 10;

// ==========================================================================
// Media Types
// ==========================================================================

/// MIME type probed on the media primitive for native HLS support.
pub const HLS_MIME_TYPE: &str = "application/vnd.apple.mpegurl";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_count_bounds_are_valid() {
        assert!(MIN_PLAYER_COUNT <= DEFAULT_PLAYER_COUNT);
        assert!(DEFAULT_PLAYER_COUNT <= MAX_PLAYER_COUNT);
    }

    #[test]
    fn speed_bounds_are_valid() {
        assert!(MIN_PLAYBACK_SPEED < MAX_PLAYBACK_SPEED);
        assert!((MIN_PLAYBACK_SPEED..=MAX_PLAYBACK_SPEED).contains(&DEFAULT_PLAYBACK_SPEED));
        assert!(PLAYBACK_SPEED_STEP > 0.0);
    }

    #[test]
    fn seek_input_minimum_matches_minute_second_form() {
        assert_eq!(MIN_SEEK_INPUT_LEN, "00:00".len());
    }
}
