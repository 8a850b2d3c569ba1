//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define data access contracts for person records.
//! - Isolate SQLite query details from calling code.
//!
//! # Invariants
//! - Repository APIs return the semantic [`person_repo::RepoError::NotFound`]
//!   sentinel in addition to DB transport errors; callers branch on the
//!   variant, never on message text.
//! - `store` operates on the process-wide shared connection;
//!   `person_repo` works over any injected connection.

pub mod person_repo;
pub mod store;
