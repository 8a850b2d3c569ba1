//! Person domain model.
//!
//! # Responsibility
//! - Define the DTO for person registration records.
//!
//! # Invariants
//! - `id` is assigned by storage; a person has no identity before a
//!   successful save.
//! - Loaded records are treated as immutable snapshots; callers persist
//!   changes through a fresh repository call.

use serde::{Deserialize, Serialize};

/// Storage-assigned row identifier for a person record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PersonId = i64;

/// Identifier carried by a person that has not been saved yet.
pub const UNSAVED_PERSON_ID: PersonId = 0;

/// Data transfer object for a single registration record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Unique ID, assigned by storage on save.
    pub id: PersonId,
    /// Serialized as `fullname` to match the storage column name.
    #[serde(rename = "fullname")]
    pub full_name: String,
    /// Contact phone number.
    pub phone: String,
    /// ISO currency code the registration was paid in.
    pub currency: String,
    /// Amount paid, in `currency`.
    pub price: f64,
}

impl Person {
    /// Creates an unsaved person record.
    ///
    /// # Invariants
    /// - `id` starts as [`UNSAVED_PERSON_ID`] and is only meaningful after
    ///   the record has been saved.
    pub fn new(
        full_name: impl Into<String>,
        phone: impl Into<String>,
        currency: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: UNSAVED_PERSON_ID,
            full_name: full_name.into(),
            phone: phone.into(),
            currency: currency.into(),
            price,
        }
    }

    /// Returns whether this record has been assigned a storage identity.
    pub fn is_saved(&self) -> bool {
        self.id != UNSAVED_PERSON_ID
    }
}
