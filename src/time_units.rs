// SPDX-License-Identifier: MPL-2.0
//! Time formatting for snapshot consumers.
//!
//! Snapshots carry raw milliseconds and seconds; renderers format them
//! with these helpers so every surface shows the same text.

/// Milliseconds per second.
pub const MILLIS_PER_SECOND: u64 = 1000;

/// Formats a duration in milliseconds as `m:ss`, or `h:mm:ss` from one hour.
///
/// # Examples
///
/// ```
/// use new_player::time_units::format_time_ms;
///
/// assert_eq!(format_time_ms(65_000), "1:05");
/// assert_eq!(format_time_ms(3_725_000), "1:02:05");
/// ```
#[must_use]
pub fn format_time_ms(millis: u64) -> String {
    format_time_s(millis / MILLIS_PER_SECOND)
}

/// Formats whole seconds the same way as [`format_time_ms`].
#[must_use]
pub fn format_time_s(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_handles_zero() {
        assert_eq!(format_time_ms(0), "0:00");
    }

    #[test]
    fn format_time_truncates_milliseconds() {
        assert_eq!(format_time_ms(59_999), "0:59");
    }

    #[test]
    fn format_time_handles_minutes() {
        assert_eq!(format_time_ms(56_000), "0:56");
        assert_eq!(format_time_ms(600_000), "10:00");
    }

    #[test]
    fn format_time_handles_hours() {
        assert_eq!(format_time_s(3600), "1:00:00");
        assert_eq!(format_time_s(36_000 + 61), "10:01:01");
    }
}
