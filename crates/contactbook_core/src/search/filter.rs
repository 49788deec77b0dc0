//! In-memory substring filter for contact snapshots.
//!
//! # Responsibility
//! - Provide the case-insensitive name/email filter behind the search box.
//!
//! # Invariants
//! - Filtering never triggers a store load.
//! - A blank query matches every record.

use crate::model::contact::Contact;

/// Returns whether `contact` matches the search `query`.
///
/// Matching is a case-insensitive substring test against name OR email.
/// Blank queries (empty or whitespace-only) match everything.
pub fn matches_query(contact: &Contact, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    contact.name.to_lowercase().contains(&needle)
        || contact.email.to_lowercase().contains(&needle)
}

/// Filters a snapshot down to the records matching `query`, preserving
/// the snapshot's order.
pub fn filter_contacts<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    contacts
        .iter()
        .filter(|contact| matches_query(contact, query))
        .collect()
}
