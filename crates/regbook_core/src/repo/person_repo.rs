//! Person repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide save/load/load-all over the `person` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - A missing record surfaces as [`RepoError::NotFound`], never as a
//!   driver error or an empty success.
//! - An empty table surfaces from `load_all` as [`RepoError::NotFound`]
//!   as well; "nothing exists" and "this id is absent" share one
//!   sentinel. Contract, not accident.
//! - Driver errors propagate unmodified (wrapped for type, logged for
//!   context); no error is swallowed and no partial result is returned
//!   as success.

use crate::db::DbError;
use crate::model::person::{Person, PersonId};
use log::{error, warn};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PERSON_SELECT_SQL: &str = "SELECT id, fullname, phone, currency, price FROM person";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for person persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Storage-layer failure, carried unmodified.
    Db(DbError),
    /// Sentinel for "no matching record" and "empty table". Callers
    /// branch on this variant to separate absence from infrastructure
    /// failure.
    NotFound,
}

impl RepoError {
    /// Returns whether this is the not-found sentinel.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound => write!(f, "not found"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound => None,
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

/// Repository interface for person records.
pub trait PersonRepository {
    /// Persists a new record and returns its storage-assigned ID.
    fn save(&self, person: &Person) -> RepoResult<PersonId>;
    /// Loads one record by ID; absent IDs yield [`RepoError::NotFound`].
    fn load(&self, id: PersonId) -> RepoResult<Person>;
    /// Loads every record in storage return order; an empty table yields
    /// [`RepoError::NotFound`].
    fn load_all(&self) -> RepoResult<Vec<Person>>;
}

/// SQLite-backed person repository over a borrowed connection.
pub struct SqlitePersonRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePersonRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PersonRepository for SqlitePersonRepository<'_> {
    fn save(&self, person: &Person) -> RepoResult<PersonId> {
        let inserted = self.conn.execute(
            "INSERT INTO person (fullname, phone, currency, price) VALUES (?1, ?2, ?3, ?4);",
            params![
                person.full_name.as_str(),
                person.phone.as_str(),
                person.currency.as_str(),
                person.price,
            ],
        );

        if let Err(err) = inserted {
            error!("event=person_save module=repo status=error error={err}");
            return Err(err.into());
        }

        Ok(self.conn.last_insert_rowid())
    }

    fn load(&self, id: PersonId) -> RepoResult<Person> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSON_SELECT_SQL} WHERE id = ?1 LIMIT 1;"))?;
        let mut rows = stmt.query([id])?;

        match rows.next() {
            Ok(Some(row)) => match populate_person(row) {
                Ok(person) => Ok(person),
                Err(err) => {
                    error!("event=person_load module=repo status=error id={id} error={err}");
                    Err(err)
                }
            },
            Ok(None) => {
                warn!("event=person_load module=repo status=not_found id={id}");
                Err(RepoError::NotFound)
            }
            Err(err) => {
                error!("event=person_load module=repo status=error id={id} error={err}");
                Err(err.into())
            }
        }
    }

    fn load_all(&self) -> RepoResult<Vec<Person>> {
        let mut stmt = self.conn.prepare(&format!("{PERSON_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut people = Vec::new();

        // The cursor is dropped on every exit path, error paths included.
        loop {
            match rows.next() {
                Ok(Some(row)) => match populate_person(row) {
                    Ok(person) => people.push(person),
                    Err(err) => {
                        error!("event=person_load_all module=repo status=error error={err}");
                        return Err(err);
                    }
                },
                Ok(None) => break,
                Err(err) => {
                    error!("event=person_load_all module=repo status=error error={err}");
                    return Err(err.into());
                }
            }
        }

        if people.is_empty() {
            warn!("event=person_load_all module=repo status=not_found");
            return Err(RepoError::NotFound);
        }

        Ok(people)
    }
}

// One row mapper for both the single-row and cursor paths; column order
// is fixed by PERSON_SELECT_SQL.
fn populate_person(row: &Row<'_>) -> RepoResult<Person> {
    Ok(Person {
        id: row.get(0)?,
        full_name: row.get(1)?,
        phone: row.get(2)?,
        currency: row.get(3)?,
        price: row.get(4)?,
    })
}
