//! Interface-agnostic parameter types for clock operations.
//!
//! Front ends (the CLI today) define their own argument structures and
//! convert them into these types, keeping the core free of any argument
//! parsing framework.

use serde::{Deserialize, Serialize};

/// Parameters for setting the T-zero reference instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetTZero {
    /// Absolute time in canonical (RFC 3339) string form
    pub time: String,
}
