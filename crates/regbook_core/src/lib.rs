//! Persistence core for the regbook person registration ledger.
//! This crate is the single source of truth for storage invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use config::{init_config, init_config_from_file, Config};
pub use db::{get_connection, DbError, DbResult, SharedDb};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::person::{Person, PersonId, UNSAVED_PERSON_ID};
pub use repo::person_repo::{PersonRepository, RepoError, RepoResult, SqlitePersonRepository};
pub use repo::store;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
