//! Timer snapshot model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A point-in-time view of the mission clock.
///
/// All fields are derived from the latest mission-time push and the current
/// T-zero; a snapshot is never stored and never updated in place.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimerSnapshot {
    /// Latest mission time received from the feed, if any
    pub mission_time: Option<Timestamp>,

    /// Current T-zero reference instant, if one is set
    pub t_zero: Option<Timestamp>,

    /// Signed elapsed duration in milliseconds (`mission_time - t_zero`),
    /// absent while either operand is missing
    pub elapsed_ms: Option<i64>,
}
