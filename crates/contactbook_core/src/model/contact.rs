//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical record owned by the contact store.
//! - Enforce the field invariants shared by every write path.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another contact.
//! - `name` and `email` are non-empty whenever a contact is persisted.
//! - `created_at` is assigned once at creation and never changes.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a contact record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ContactId = Uuid;

/// Validation failure for contact field invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    /// `name` is empty at a persistence boundary.
    EmptyName,
    /// `email` is empty at a persistence boundary.
    EmptyEmail,
    /// `uuid` is the nil UUID and cannot identify a record.
    NilUuid,
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "contact name cannot be empty"),
            Self::EmptyEmail => write!(f, "contact email cannot be empty"),
            Self::NilUuid => write!(f, "contact uuid cannot be nil"),
        }
    }
}

impl Error for ContactValidationError {}

/// Canonical contact record.
///
/// The collection is an unordered set in storage; callers observe it as an
/// insertion-ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Stable global ID used as the storage primary key.
    pub uuid: ContactId,
    pub name: String,
    /// Free-form address text; no format validation is applied.
    pub email: String,
    /// Unix epoch milliseconds, set at creation.
    pub created_at: i64,
}

impl Contact {
    /// Creates a new contact with a generated stable ID and the current
    /// wall-clock creation time.
    ///
    /// Field emptiness is not checked here; write paths call
    /// [`Contact::validate`] before persisting.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            created_at: now_epoch_ms(),
        }
    }

    /// Creates a contact with caller-provided identity and creation time.
    ///
    /// Used by import/test paths where identity already exists externally.
    pub fn with_id(
        uuid: ContactId,
        name: impl Into<String>,
        email: impl Into<String>,
        created_at: i64,
    ) -> Result<Self, ContactValidationError> {
        let contact = Self {
            uuid,
            name: name.into(),
            email: email.into(),
            created_at,
        };
        contact.validate()?;
        Ok(contact)
    }

    /// Checks the record-level invariants enforced at persistence time.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.uuid.is_nil() {
            return Err(ContactValidationError::NilUuid);
        }
        validate_fields(&self.name, &self.email)
    }
}

/// Checks the mutable-field invariants shared by create and update paths.
pub(crate) fn validate_fields(name: &str, email: &str) -> Result<(), ContactValidationError> {
    if name.is_empty() {
        return Err(ContactValidationError::EmptyName);
    }
    if email.is_empty() {
        return Err(ContactValidationError::EmptyEmail);
    }
    Ok(())
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
