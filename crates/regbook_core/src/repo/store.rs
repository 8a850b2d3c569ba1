//! Person operations over the process-wide shared connection.
//!
//! # Responsibility
//! - Acquire the shared connection and delegate to the SQLite repository.
//! - Surface connection-acquisition failures with operation context.
//!
//! # Invariants
//! - No operation runs against a connection that has not finished
//!   initializing; acquisition blocks on the one-time open.
//! - The shared connection is locked per operation and never closed here.

use crate::db::shared;
use crate::model::person::{Person, PersonId};
use crate::repo::person_repo::{PersonRepository, RepoResult, SqlitePersonRepository};
use log::error;

/// Saves a person through the shared connection.
pub fn save(person: &Person) -> RepoResult<PersonId> {
    let db = acquire("person_save")?;
    let conn = db.lock();
    SqlitePersonRepository::new(&conn).save(person)
}

/// Loads one person by ID through the shared connection.
pub fn load(id: PersonId) -> RepoResult<Person> {
    let db = acquire("person_load")?;
    let conn = db.lock();
    SqlitePersonRepository::new(&conn).load(id)
}

/// Loads all people through the shared connection.
pub fn load_all() -> RepoResult<Vec<Person>> {
    let db = acquire("person_load_all")?;
    let conn = db.lock();
    SqlitePersonRepository::new(&conn).load_all()
}

fn acquire(operation: &str) -> RepoResult<&'static shared::SharedDb> {
    shared::get_connection().map_err(|err| {
        error!("event={operation} module=store status=error error_code=db_unavailable error={err}");
        err.into()
    })
}
