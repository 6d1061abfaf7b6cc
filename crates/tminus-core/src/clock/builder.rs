//! Builder for creating and configuring MissionClock instances.

use std::path::{Path, PathBuf};

use super::MissionClock;
use crate::{
    db::Database,
    error::{ClockError, Result},
};

/// Builder for creating and configuring MissionClock instances.
#[derive(Debug, Clone)]
pub struct MissionClockBuilder {
    database_path: Option<PathBuf>,
}

impl MissionClockBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/tminus/tminus.db` or `~/.local/share/tminus/tminus.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured mission clock instance.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::FileSystem` if the database path is invalid
    /// Returns `ClockError::Database` if database initialization fails
    pub fn build(self) -> Result<MissionClock> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ClockError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db = Database::new(&db_path)?;
        MissionClock::new(db)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("tminus")
            .place_data_file("tminus.db")
            .map_err(|e| ClockError::XdgDirectory(e.to_string()))
    }
}

impl Default for MissionClockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
