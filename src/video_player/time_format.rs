// SPDX-License-Identifier: MPL-2.0
//! Clock-style time formatting and parsing for the seek controls.
//!
//! - `format_time` renders seconds as `MM:SS`, or `H:MM:SS` once the hour
//!   field is non-zero.
//! - `parse_time_to_seconds` is the inverse used by the time-entry field. It
//!   never fails: malformed input degrades to 0.
//!
//! Round-tripping is exact (to whole seconds) within one field-count regime:
//! a sub-hour value formats without the hour field and a two-field string
//! parses as minutes and seconds.

use crate::config::MIN_SEEK_INPUT_LEN;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3600;

/// Formats a position in seconds as `MM:SS` or `H:MM:SS`.
///
/// Fractional seconds are truncated. Negative or non-finite input formats as
/// `00:00`.
///
/// # Examples
///
/// ```
/// use hls_grid::video_player::time_format::format_time;
///
/// assert_eq!(format_time(123.9), "02:03");
/// assert_eq!(format_time(3723.0), "1:02:03");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_time(secs: f64) -> String {
    if !secs.is_finite() || secs <= 0.0 {
        return "00:00".to_string();
    }

    let total = secs.floor() as u64;
    let hours = total / SECS_PER_HOUR;
    let minutes = (total % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = total % SECS_PER_MINUTE;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Parses `H:MM:SS` or `MM:SS` into seconds.
///
/// Three fields are read as hours, minutes, seconds; two as minutes, seconds.
/// Empty fields count as 0. Any other shape (a single token, more than three
/// fields, a non-numeric or negative field) yields 0.
///
/// # Examples
///
/// ```
/// use hls_grid::video_player::time_format::parse_time_to_seconds;
///
/// assert_eq!(parse_time_to_seconds("1:02:03"), 3723.0);
/// assert_eq!(parse_time_to_seconds("02:03"), 123.0);
/// assert_eq!(parse_time_to_seconds("12"), 0.0);
/// assert_eq!(parse_time_to_seconds("ab:cd"), 0.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn parse_time_to_seconds(text: &str) -> f64 {
    let fields: Vec<&str> = text.trim().split(':').collect();

    let (hours, minutes, seconds) = match fields.as_slice() {
        [h, m, s] => (*h, *m, *s),
        [m, s] => ("", *m, *s),
        _ => return 0.0,
    };

    let total = parse_field(hours).and_then(|h| {
        let m = parse_field(minutes)?;
        let s = parse_field(seconds)?;
        h.checked_mul(SECS_PER_HOUR)?
            .checked_add(m.checked_mul(SECS_PER_MINUTE)?)?
            .checked_add(s)
    });

    total.map_or(0.0, |t| t as f64)
}

/// Returns true once the time-entry text is long enough to commit a seek.
#[must_use]
pub fn is_seek_input_complete(text: &str) -> bool {
    text.chars().count() >= MIN_SEEK_INPUT_LEN
}

fn parse_field(field: &str) -> Option<u64> {
    let field = field.trim();
    if field.is_empty() {
        return Some(0);
    }
    field.parse().ok()
}
