//! View-model layer for the contact list screen.
//!
//! # Responsibility
//! - Capture user intent and translate it into store operations.
//! - Hold only transient presentation state (form fields, search text,
//!   modal visibility); durable state lives in the store.

pub mod contact_list;
