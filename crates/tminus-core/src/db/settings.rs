//! Key-value queries against the settings table.

use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_SETTING_SQL: &str = "SELECT value FROM settings WHERE key = ?1";
const UPSERT_SETTING_SQL: &str =
    "INSERT INTO settings (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = excluded.value";
const DELETE_SETTING_SQL: &str = "DELETE FROM settings WHERE key = ?1";

impl super::Database {
    /// Retrieves the stored value for a key, or `None` if the key is unset.
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_SETTING_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to query setting")
    }

    /// Stores a value under a key, replacing any previous value.
    pub fn put_setting(&self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(UPSERT_SETTING_SQL, params![key, value])
            .db_context("Failed to store setting")?;
        Ok(())
    }

    /// Removes the entry for a key. Removing an unset key is not an error.
    pub fn remove_setting(&self, key: &str) -> Result<()> {
        self.connection
            .execute(DELETE_SETTING_SQL, params![key])
            .db_context("Failed to remove setting")?;
        Ok(())
    }
}
