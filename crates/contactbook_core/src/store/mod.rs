//! Durable contact store with cache and change notification.
//!
//! # Responsibility
//! - Own the record collection and its persistent storage.
//! - Publish snapshot-changed notifications to registered observers.
//!
//! # Invariants
//! - Callers receive snapshots (copies), never live references.
//! - The cache is replaced before observers are notified.

pub mod contact_store;
