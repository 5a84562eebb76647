// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for playback values,
//! ensuring they are always within valid ranges.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// PlaybackSpeed
// =============================================================================

/// Playback speed bounds (0.5x to 2.0x, 0.1 step).
pub mod speed_bounds {
    /// Minimum playback speed (0.5x = half speed).
    pub const MIN: f64 = 0.5;
    /// Maximum playback speed (2x = double speed).
    pub const MAX: f64 = 2.0;
    /// Default playback speed (1.0 = normal speed).
    pub const DEFAULT: f64 = 1.0;
    /// Slider step.
    pub const STEP: f64 = 0.1;
}

/// Playback speed value, guaranteed to be within valid range (0.5x - 2.0x)
/// and aligned to the slider step.
///
/// # Example
///
/// ```
/// use hls_grid::domain::video::PlaybackSpeed;
///
/// let speed = PlaybackSpeed::new(1.5);
/// assert_eq!(speed.value(), 1.5);
///
/// // Values outside range are clamped
/// let too_fast = PlaybackSpeed::new(100.0);
/// assert_eq!(too_fast.value(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSpeed(f64);

impl PlaybackSpeed {
    /// Creates a new playback speed, clamping to the valid range and snapping
    /// to the nearest step. Non-finite input yields the default speed.
    #[must_use]
    pub fn new(speed: f64) -> Self {
        Self::try_new(speed).unwrap_or_default()
    }

    /// Creates a new playback speed, or `None` if `speed` is NaN or infinite.
    #[must_use]
    pub fn try_new(speed: f64) -> Option<Self> {
        if !speed.is_finite() {
            return None;
        }
        let steps_per_unit = (1.0 / speed_bounds::STEP).round();
        let snapped = (speed * steps_per_unit).round() / steps_per_unit;
        Some(Self(snapped.clamp(speed_bounds::MIN, speed_bounds::MAX)))
    }

    /// Returns the speed value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the speed one slider step faster, or self if at maximum.
    #[must_use]
    pub fn increase(self) -> Self {
        Self::new(self.0 + speed_bounds::STEP)
    }

    /// Returns the speed one slider step slower, or self if at minimum.
    #[must_use]
    pub fn decrease(self) -> Self {
        Self::new(self.0 - speed_bounds::STEP)
    }

    /// Returns true if this is the minimum speed.
    #[must_use]
    pub fn is_min(self) -> bool {
        (self.0 - speed_bounds::MIN).abs() < 0.001
    }

    /// Returns true if this is the maximum speed.
    #[must_use]
    pub fn is_max(self) -> bool {
        (self.0 - speed_bounds::MAX).abs() < 0.001
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        Self(speed_bounds::DEFAULT)
    }
}

impl fmt::Display for PlaybackSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}x", self.0)
    }
}

// =============================================================================
// PlayerCount
// =============================================================================

/// Player count bounds for the grid selector.
pub mod player_count_bounds {
    /// Minimum number of players.
    pub const MIN: u8 = 1;
    /// Maximum number of players.
    pub const MAX: u8 = 4;
    /// Default number of players.
    pub const DEFAULT: u8 = 1;
}

/// Number of players in the grid, one of the selector values `1..=4`.
///
/// Unlike the playback newtypes this one rejects out-of-range input instead
/// of clamping: the selector only offers the enumerated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerCount(u8);

impl PlayerCount {
    /// Every value offered by the selector, in display order.
    pub const ALL: [PlayerCount; 4] = [
        PlayerCount(1),
        PlayerCount(2),
        PlayerCount(3),
        PlayerCount(4),
    ];

    /// Creates a player count, rejecting values outside `1..=4`.
    pub fn new(count: u8) -> Result<Self, Error> {
        if (player_count_bounds::MIN..=player_count_bounds::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(Error::InvalidPlayerCount(count.to_string()))
        }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn as_usize(self) -> usize {
        usize::from(self.0)
    }
}

impl Default for PlayerCount {
    fn default() -> Self {
        Self(player_count_bounds::DEFAULT)
    }
}

impl FromStr for PlayerCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .map_err(|_| Error::InvalidPlayerCount(trimmed.to_string()))
            .and_then(Self::new)
    }
}

impl fmt::Display for PlayerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
