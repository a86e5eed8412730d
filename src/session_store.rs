use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::api::UserProfile;

/// Failure to read the persisted session
///
/// Callers treat any of these as "no session" and show the sign-in flow.
#[derive(Debug, thiserror::Error)]
pub enum SessionReadError {
    #[error("session store unavailable: {0}")]
    Store(#[from] rusqlite::Error),
    #[error("stored user record is corrupted: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("session store lock poisoned")]
    Poisoned,
}

/// A persisted bearer token and the user it was issued for
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub access_token: String,
    pub user: UserProfile,
    pub saved_at: String,
}

pub const PREF_DARK_MODE: &str = "dark_mode";

pub type SharedSessionStore = Arc<Mutex<SessionStore>>;

pub struct SessionStore {
    conn: Connection,
}

impl SessionStore {
    /// Open (or create) the store at `path`, creating parent directories
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open session store {}", path.display()))?;

        let mut store = SessionStore { conn };
        store.init_schema()?;

        Ok(store)
    }

    /// Volatile store used when the on-disk one cannot be opened
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut store = SessionStore { conn };
        store.init_schema()?;
        Ok(store)
    }

    pub fn into_shared(self) -> SharedSessionStore {
        Arc::new(Mutex::new(self))
    }

    fn init_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS session (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                access_token TEXT NOT NULL,
                user_json TEXT NOT NULL,
                saved_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            ) WITHOUT ROWID;
            ",
        )?;

        Ok(())
    }

    /// Replace the stored session (only one is ever kept)
    pub fn save_session(&self, access_token: &str, user: &UserProfile) -> Result<()> {
        let user_json = serde_json::to_string(user)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO session (id, access_token, user_json, saved_at)
             VALUES (1, ?1, ?2, ?3)",
            params![access_token, user_json, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    pub fn load_session(&self) -> std::result::Result<Option<StoredSession>, SessionReadError> {
        let mut stmt = self
            .conn
            .prepare("SELECT access_token, user_json, saved_at FROM session WHERE id = 1")?;

        let result = stmt.query_row([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        });

        match result {
            Ok((access_token, user_json, saved_at)) => {
                let user: UserProfile = serde_json::from_str(&user_json)?;
                Ok(Some(StoredSession {
                    access_token,
                    user,
                    saved_at,
                }))
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn clear_session(&self) -> Result<()> {
        self.conn.execute("DELETE FROM session", [])?;
        Ok(())
    }

    pub fn set_preference(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO preferences (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn get_preference(&self, key: &str) -> Result<Option<String>> {
        let result = self.conn.query_row(
            "SELECT value FROM preferences WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn get_dark_mode(&self) -> Result<Option<bool>> {
        Ok(self
            .get_preference(PREF_DARK_MODE)?
            .map(|value| value == "true"))
    }

    pub fn set_dark_mode(&self, dark_mode: bool) -> Result<()> {
        self.set_preference(PREF_DARK_MODE, if dark_mode { "true" } else { "false" })
    }

    /// Overwrite the stored user JSON with raw text (test hook for corruption)
    #[cfg(test)]
    fn write_raw_user_json(&self, user_json: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO session (id, access_token, user_json, saved_at)
             VALUES (1, 'token', ?1, 'now')",
            params![user_json],
        )?;
        Ok(())
    }
}
