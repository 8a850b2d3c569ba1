//! Domain data transfer objects.
//!
//! # Responsibility
//! - Define the canonical records crossing the persistence boundary.
//!
//! # Invariants
//! - Models carry data only; persistence and orchestration live in `repo`.

pub mod person;
