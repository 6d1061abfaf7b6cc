//! Timezone-aware wall-clock formatting.
//!
//! This module provides a wrapper type for rendering an absolute timestamp as
//! a local `HH:MM:SS` string in a named IANA timezone. Every failure mode
//! (absent input, unparseable timestamp, unknown timezone) degrades to a
//! fixed placeholder rather than an error; a wrong or missing display is
//! preferable to crashing a view.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Placeholder rendered when the timestamp or timezone is unusable.
pub const UNKNOWN_TIME: &str = "--:--:--";

/// A wrapper around an optional timestamp string and an IANA timezone name
/// that formats as a zone-local `HH:MM:SS` string via the `Display` trait.
pub struct ZonedTime<'a> {
    time: Option<&'a str>,
    zone: &'a str,
}

impl<'a> ZonedTime<'a> {
    /// Creates a formatter for the given timestamp string and timezone name.
    pub fn new(time: Option<&'a str>, zone: &'a str) -> Self {
        Self { time, zone }
    }
}

impl fmt::Display for ZonedTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(raw) = self.time else {
            return f.write_str(UNKNOWN_TIME);
        };
        let Ok(timestamp) = raw.parse::<Timestamp>() else {
            return f.write_str(UNKNOWN_TIME);
        };
        let Ok(tz) = TimeZone::get(self.zone) else {
            return f.write_str(UNKNOWN_TIME);
        };
        write!(f, "{}", timestamp.to_zoned(tz).strftime("%H:%M:%S"))
    }
}
