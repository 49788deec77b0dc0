//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define data access contracts for the contact collection.
//! - Isolate SQLite query details from store orchestration.
//!
//! # Invariants
//! - Repository writes enforce field validation before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod contact_repo;
