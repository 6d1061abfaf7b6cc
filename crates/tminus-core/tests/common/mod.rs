use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tminus_core::{MissionClock, MissionClockBuilder};

/// Helper function to create a test clock backed by a temp database
pub fn create_test_clock() -> (TempDir, PathBuf, MissionClock) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let clock = open_clock(&db_path);
    (temp_dir, db_path, clock)
}

/// Opens a clock over an existing database path, simulating a restart
pub fn open_clock(db_path: &Path) -> MissionClock {
    MissionClockBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .expect("Failed to create mission clock")
}
