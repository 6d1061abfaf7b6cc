//! Display implementations for domain models.

use std::fmt;

use super::duration::MissionElapsed;
use crate::models::TimerSnapshot;

impl fmt::Display for TimerSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mission_time {
            Some(time) => writeln!(f, "Mission time: {time}")?,
            None => writeln!(f, "Mission time: (no feed)")?,
        }
        match self.t_zero {
            Some(t_zero) => writeln!(f, "T-zero:       {t_zero}")?,
            None => writeln!(f, "T-zero:       (not set)")?,
        }
        write!(f, "Elapsed:      {}", MissionElapsed(self.elapsed_ms))
    }
}
