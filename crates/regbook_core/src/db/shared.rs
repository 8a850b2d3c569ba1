//! Process-wide shared database connection.
//!
//! # Responsibility
//! - Lazily open the shared SQLite connection exactly once per process.
//! - Hand every caller the same long-lived connection handle.
//!
//! # Invariants
//! - The open routine runs at most once, even under concurrent first
//!   access; callers arriving during initialization wait for it.
//! - A failed open is terminal: the failure is cached and every later
//!   call returns [`DbError::OpenFailed`]. There is no retry path and
//!   no way back to the uninitialized state.
//! - Config must be installed before the first call; otherwise the
//!   provider fails with [`DbError::ConfigNotInitialized`] without
//!   touching the database.

use crate::config;
use crate::db::open::open_dsn;
use crate::db::{DbError, DbResult};
use log::{error, info};
use once_cell::sync::OnceCell;
use rusqlite::Connection;
use std::sync::{Mutex, MutexGuard, PoisonError};

// Ready | FailedFatal, fixed at first initialization.
static SHARED_DB: OnceCell<Result<SharedDb, OpenFailure>> = OnceCell::new();

#[derive(Debug, Clone)]
struct OpenFailure {
    message: String,
}

/// Handle to the process-wide connection.
///
/// rusqlite connections are `Send` but not `Sync`, so the shared handle
/// serializes statement execution behind a mutex. No caller may close or
/// replace the underlying connection; it lives for the process lifetime.
#[derive(Debug)]
pub struct SharedDb {
    conn: Mutex<Connection>,
}

impl SharedDb {
    /// Locks the shared connection for one repository operation.
    pub fn lock(&self) -> MutexGuard<'_, Connection> {
        // A poisoned lock only means another caller panicked mid-query;
        // the connection itself is still valid.
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Returns the shared connection handle, opening it on first call.
///
/// # Errors
/// - [`DbError::ConfigNotInitialized`] when called before `config::init_config`.
/// - [`DbError::OpenFailed`] when the one-time open failed, now or on any
///   earlier call.
pub fn get_connection() -> DbResult<&'static SharedDb> {
    let Some(config) = config::app() else {
        return Err(DbError::ConfigNotInitialized);
    };

    let slot = SHARED_DB.get_or_init(|| match open_dsn(&config.dsn) {
        Ok(conn) => {
            info!(
                "event=shared_db_init module=db status=ok dsn={}",
                config.dsn
            );
            Ok(SharedDb {
                conn: Mutex::new(conn),
            })
        }
        Err(err) => {
            error!(
                "event=shared_db_init module=db status=error error_code=db_open_failed dsn={} error={}",
                config.dsn, err
            );
            Err(OpenFailure {
                message: err.to_string(),
            })
        }
    });

    match slot {
        Ok(db) => Ok(db),
        Err(failure) => Err(DbError::OpenFailed {
            message: failure.message.clone(),
        }),
    }
}

/// Returns whether the shared connection has finished initializing,
/// successfully or fatally. `false` before the first `get_connection`.
pub fn is_initialized() -> bool {
    SHARED_DB.get().is_some()
}
