// SPDX-License-Identifier: MPL-2.0
//! Click-to-seek mapping for the progress bar.

/// Maps a horizontal click offset within the progress bar to a target time.
///
/// Returns `None` when the duration is unknown or the bar has no width, so a
/// click never produces a NaN seek. Offsets outside the bar are clamped to
/// its edges.
///
/// # Example
///
/// ```
/// use hls_grid::domain::video::seek_target_for_click;
///
/// assert_eq!(seek_target_for_click(50.0, 200.0, 120.0), Some(30.0));
/// assert_eq!(seek_target_for_click(50.0, 200.0, 0.0), None);
/// ```
#[must_use]
pub fn seek_target_for_click(offset_x: f64, bar_width: f64, duration_secs: f64) -> Option<f64> {
    if !duration_secs.is_finite() || duration_secs <= 0.0 {
        return None;
    }
    if !bar_width.is_finite() || bar_width <= 0.0 || !offset_x.is_finite() {
        return None;
    }

    let fraction = (offset_x / bar_width).clamp(0.0, 1.0);
    Some(fraction * duration_secs)
}
