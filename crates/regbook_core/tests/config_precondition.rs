//! Verifies the precondition contract: repository calls before config
//! initialization fail with `ConfigNotInitialized` and make no
//! connection attempt. This binary must never install a config.

use regbook_core::db::shared;
use regbook_core::{store, DbError, Person, RepoError};

#[test]
fn operations_before_config_init_fail_without_connection_attempt() {
    let err = shared::get_connection().unwrap_err();
    assert!(matches!(err, DbError::ConfigNotInitialized));

    let save_err = store::save(&Person::new("Too Early", "0", "USD", 1.0)).unwrap_err();
    assert!(matches!(
        save_err,
        RepoError::Db(DbError::ConfigNotInitialized)
    ));

    let load_err = store::load(1).unwrap_err();
    assert!(matches!(
        load_err,
        RepoError::Db(DbError::ConfigNotInitialized)
    ));

    let load_all_err = store::load_all().unwrap_err();
    assert!(matches!(
        load_all_err,
        RepoError::Db(DbError::ConfigNotInitialized)
    ));

    // Precondition failures must not start initialization.
    assert!(!shared::is_initialized());
}
