//! Contact list screen view-model.
//!
//! # Responsibility
//! - Drive the list/search/modal flows of the single contact screen.
//! - Delegate every durable mutation to the store.
//!
//! # Invariants
//! - Changing the search text never triggers a store load.
//! - A failed save leaves the modal open and the form intact.
//! - A successful save clears the form and closes the modal.

use crate::model::contact::{Contact, ContactId};
use crate::search::filter::filter_contacts;
use crate::store::contact_store::{ContactStore, StoreError, StoreResult};

/// View-model for the contact list screen.
///
/// Holds the transient form and search state; the record collection itself
/// is owned by the store and observed through snapshots.
pub struct ContactListScreen {
    store: ContactStore,
    name: String,
    email: String,
    editing: Option<ContactId>,
    search_text: String,
    modal_visible: bool,
}

impl ContactListScreen {
    /// Wraps an already-opened store. The store's initial load has run by
    /// construction, so the screen renders real data immediately.
    pub fn new(store: ContactStore) -> Self {
        Self {
            store,
            name: String::new(),
            email: String::new(),
            editing: None,
            search_text: String::new(),
            modal_visible: false,
        }
    }

    /// Rows currently visible: the store snapshot narrowed by the search
    /// filter, in insertion order.
    pub fn rows(&self) -> Vec<Contact> {
        let snapshot = self.store.snapshot();
        filter_contacts(&snapshot, &self.search_text)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Whether the filtered view has no rows and the placeholder should be
    /// shown instead of a list.
    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    /// Updates the search text. Filtering is purely client-side.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Starts the add flow: empty form, no editing target, modal open.
    pub fn begin_add(&mut self) {
        self.name.clear();
        self.email.clear();
        self.editing = None;
        self.modal_visible = true;
    }

    /// Starts the edit flow for the row at `id`: copies its fields into
    /// the form and opens the modal.
    pub fn begin_edit(&mut self, id: ContactId) -> StoreResult<()> {
        let contact = self.store.get(id).ok_or(StoreError::NotFound(id))?;
        self.name = contact.name;
        self.email = contact.email;
        self.editing = Some(id);
        self.modal_visible = true;
        Ok(())
    }

    /// Deletes the row at `id` immediately. No confirmation, no undo.
    pub fn delete_row(&mut self, id: ContactId) -> StoreResult<()> {
        self.store.delete(id)
    }

    /// Saves the form: update when editing, add otherwise.
    ///
    /// On success the form is cleared and the modal closed; on failure
    /// (empty field, vanished target) both are left untouched so the user
    /// can correct the input.
    pub fn save(&mut self) -> StoreResult<ContactId> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();

        let saved = match self.editing {
            Some(id) => {
                self.store.update(id, &name, &email)?;
                id
            }
            None => self.store.add(name, email)?,
        };

        self.name.clear();
        self.email.clear();
        self.editing = None;
        self.modal_visible = false;
        Ok(saved)
    }

    /// Closes the modal, discarding form edits without touching the store.
    pub fn cancel(&mut self) {
        self.modal_visible = false;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn editing(&self) -> Option<ContactId> {
        self.editing
    }

    pub fn is_modal_visible(&self) -> bool {
        self.modal_visible
    }
}
