// SPDX-License-Identifier: MPL-2.0
//! Coarse buffering indicator.
//!
//! The indicator is a fixed set of evenly spaced marks across `[0, duration]`,
//! rebuilt from scratch on every buffering event.

use crate::config::BUFFER_MARK_COUNT;

/// Evenly spaced timestamps drawn on the buffer bar.
///
/// Empty while the duration is unknown (zero, negative, NaN or infinite);
/// otherwise exactly [`BUFFER_MARK_COUNT`] non-decreasing entries starting
/// at 0.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BufferedMarks {
    duration_secs: f64,
    marks: Vec<f64>,
}

impl BufferedMarks {
    /// Computes the marks for a media of `total_duration` seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use hls_grid::domain::video::BufferedMarks;
    ///
    /// let marks = BufferedMarks::compute(90.0);
    /// assert_eq!(marks.as_slice(), &[0.0, 30.0, 60.0, 90.0]);
    ///
    /// assert!(BufferedMarks::compute(0.0).is_empty());
    /// ```
    #[must_use]
    pub fn compute(total_duration: f64) -> Self {
        if !total_duration.is_finite() || total_duration <= 0.0 {
            return Self::default();
        }

        let interval = total_duration / (BUFFER_MARK_COUNT - 1) as f64;
        let marks = (0..BUFFER_MARK_COUNT)
            .map(|i| i as f64 * interval)
            .collect();

        Self {
            duration_secs: total_duration,
            marks,
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.marks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Duration the marks were computed for (0 when empty).
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Each mark as a fraction of the duration, for positioning on the bar.
    #[must_use]
    pub fn fractions(&self) -> Vec<f64> {
        self.marks
            .iter()
            .map(|mark| mark / self.duration_secs)
            .collect()
    }
}
