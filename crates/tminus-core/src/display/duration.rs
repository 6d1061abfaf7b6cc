//! Countdown formatting for signed millisecond durations.
//!
//! This module renders a mission-elapsed duration as a fixed-width countdown
//! string of the form `T<sign>DDDd:HHh:MMm:SSs`. An unknown duration (no
//! mission time received yet, or no T-zero set) renders as a neutral
//! placeholder of the same width, so a live display never jumps.

use std::fmt;

/// Placeholder rendered when the elapsed duration is unknown.
pub const UNKNOWN_ELAPSED: &str = "T±000d:00h:00m:00s";

const MS_PER_DAY: u64 = 86_400_000;
const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

/// A wrapper around an optional signed millisecond count that formats as a
/// fixed-width countdown string via the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern: `T<sign>DDDd:HHh:MMm:SSs`
/// - Sign is `+` for non-negative durations (including zero), `-` otherwise
/// - Days are zero-padded to 3 digits; hours, minutes and seconds to 2
/// - Sub-second remainders are truncated, never rounded
/// - `None` renders the fixed placeholder `T±000d:00h:00m:00s`
pub struct MissionElapsed(pub Option<i64>);

impl fmt::Display for MissionElapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(elapsed_ms) = self.0 else {
            return f.write_str(UNKNOWN_ELAPSED);
        };

        let sign = if elapsed_ms < 0 { '-' } else { '+' };
        let abs = elapsed_ms.unsigned_abs();

        let days = abs / MS_PER_DAY;
        let hours = abs % MS_PER_DAY / MS_PER_HOUR;
        let minutes = abs % MS_PER_HOUR / MS_PER_MINUTE;
        let seconds = abs % MS_PER_MINUTE / MS_PER_SECOND;

        write!(f, "T{sign}{days:03}d:{hours:02}h:{minutes:02}m:{seconds:02}s")
    }
}

/// Formats an optional signed millisecond duration as a countdown string.
pub fn format_elapsed(elapsed_ms: Option<i64>) -> String {
    MissionElapsed(elapsed_ms).to_string()
}
