//! SQLite storage bootstrap, shared-connection provisioning and schema
//! migration entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for regbook core.
//! - Apply schema migrations in deterministic order.
//! - Provision the process-wide shared connection exactly once.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Core code must not read/write application data before migrations
//!   succeed.
//! - A failed shared-connection open is terminal for the process.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;
pub mod shared;

pub use open::{open_db, open_db_in_memory, open_dsn};
pub use shared::{get_connection, SharedDb};

pub type DbResult<T> = Result<T, DbError>;

/// Storage-layer error taxonomy.
#[derive(Debug)]
pub enum DbError {
    /// Underlying driver error, propagated unmodified.
    Sqlite(rusqlite::Error),
    /// The process-wide config was not installed before first use.
    /// Precondition failure: no connection attempt was made.
    ConfigNotInitialized,
    /// The one-time open of the shared connection failed. Terminal:
    /// every subsequent call observes this same outcome.
    OpenFailed { message: String },
    /// The database schema is newer than this binary supports.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl DbError {
    /// Returns whether this error is the persistent fatal-open sentinel.
    pub fn is_fatal_open(&self) -> bool {
        matches!(self, Self::OpenFailed { .. })
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::ConfigNotInitialized => write!(f, "config is not initialized"),
            Self::OpenFailed { message } => {
                write!(f, "shared database connection failed to open: {message}")
            }
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::ConfigNotInitialized
            | Self::OpenFailed { .. }
            | Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
