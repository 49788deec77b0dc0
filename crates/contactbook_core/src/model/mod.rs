//! Domain model for the contact book.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every record is identified by a stable `ContactId`.
//! - Deletion is a hard removal; no tombstone state exists.

pub mod contact;
