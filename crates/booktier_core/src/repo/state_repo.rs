//! Store-state repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the whole store state as one named record of structured text.
//! - Keep SQL and serialization details inside the persistence boundary.
//!
//! # Invariants
//! - `save_state` replaces the record in a single statement; readers never
//!   observe a partial write.
//! - `load_state` surfaces corrupt persisted text as `InvalidData` instead
//!   of masking it; falling back to a seeded state is the store's decision.

use crate::db::DbError;
use crate::model::state::StoreState;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Record name under which the whole store state is persisted.
pub const STORE_RECORD_NAME: &str = "tier-list-storage";

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from state persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted store state: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for loading and saving the whole store state.
pub trait StateRepository {
    /// Loads the persisted state. `Ok(None)` means no record has been
    /// written yet.
    fn load_state(&self) -> RepoResult<Option<StoreState>>;
    /// Durably replaces the persisted state with `state`.
    fn save_state(&self, state: &StoreState) -> RepoResult<()>;
}

/// SQLite-backed state repository storing one JSON record per store.
pub struct SqliteStateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StateRepository for SqliteStateRepository<'_> {
    fn load_state(&self) -> RepoResult<Option<StoreState>> {
        let text: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM store_records WHERE name = ?1;",
                [STORE_RECORD_NAME],
                |row| row.get(0),
            )
            .optional()?;

        match text {
            Some(text) => {
                let state = serde_json::from_str(&text).map_err(|err| {
                    RepoError::InvalidData(format!("record `{STORE_RECORD_NAME}`: {err}"))
                })?;
                Ok(Some(state))
            }
            None => Ok(None),
        }
    }

    fn save_state(&self, state: &StoreState) -> RepoResult<()> {
        let text = serde_json::to_string(state).map_err(|err| {
            RepoError::InvalidData(format!("record `{STORE_RECORD_NAME}`: {err}"))
        })?;

        self.conn.execute(
            "INSERT INTO store_records (name, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(name) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![STORE_RECORD_NAME, text],
        )?;

        Ok(())
    }
}
