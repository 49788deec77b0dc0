//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Keep error semantics simple for the mobile shell: envelopes with an
//!   `ok`/`message` pair, never exceptions.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Return values are UTF-8 strings with stable meaning.

use contactbook_core::{
    core_version as core_version_inner, filter_contacts, init_logging as init_logging_inner,
    ping as ping_inner, Contact, ContactId, ContactStore,
};
use log::error;
use std::path::PathBuf;
use std::sync::OnceLock;
use uuid::Uuid;

const STORE_DB_FILE_NAME: &str = "contactbook.sqlite3";
static STORE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same configuration (idempotent).
/// - Never panics; returns empty string on success, error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One row of the contact list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem {
    /// Stable contact ID in string form.
    pub contact_id: String,
    pub name: String,
    pub email: String,
    /// Creation time in epoch milliseconds, for row display.
    pub created_at_epoch_ms: i64,
}

/// List response envelope for the contact list and search flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactListResponse {
    /// Visible rows in insertion order (empty on failure or no match).
    pub items: Vec<ContactItem>,
    /// Human-readable message; doubles as the empty-state placeholder.
    pub message: String,
}

/// Generic action response envelope for add/update/delete flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Affected contact ID on success.
    pub contact_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ContactActionResponse {
    fn success(message: impl Into<String>, contact_id: String) -> Self {
        Self {
            ok: true,
            contact_id: Some(contact_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            contact_id: None,
            message: message.into(),
        }
    }
}

/// Loads and returns the full contact collection.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn contacts_list() -> ContactListResponse {
    let store = match open_store() {
        Ok(store) => store,
        Err(message) => {
            return ContactListResponse {
                items: Vec::new(),
                message,
            }
        }
    };

    let items: Vec<ContactItem> = store.snapshot().into_iter().map(to_contact_item).collect();
    let message = if items.is_empty() {
        "No contacts yet.".to_string()
    } else {
        format!("Loaded {} contact(s).", items.len())
    };
    ContactListResponse { items, message }
}

/// Filters the contact collection by a case-insensitive substring of name
/// or email. Blank queries return everything.
///
/// # FFI contract
/// - Sync call; the filter itself runs over the loaded snapshot.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn contacts_search(text: String) -> ContactListResponse {
    let store = match open_store() {
        Ok(store) => store,
        Err(message) => {
            return ContactListResponse {
                items: Vec::new(),
                message,
            }
        }
    };

    let snapshot = store.snapshot();
    let items: Vec<ContactItem> = filter_contacts(&snapshot, text.as_str())
        .into_iter()
        .cloned()
        .map(to_contact_item)
        .collect();
    let message = if items.is_empty() {
        "No results.".to_string()
    } else {
        format!("Found {} result(s).", items.len())
    };
    ContactListResponse { items, message }
}

/// Adds a contact. Empty name or email is rejected by the store.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Returns the created contact ID on success.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_add(name: String, email: String) -> ContactActionResponse {
    let mut store = match open_store() {
        Ok(store) => store,
        Err(message) => return ContactActionResponse::failure(message),
    };

    match store.add(name.trim(), email.trim()) {
        Ok(id) => ContactActionResponse::success("Contact added.", id.to_string()),
        Err(err) => ContactActionResponse::failure(format!("contact_add failed: {err}")),
    }
}

/// Updates a contact's name and email by stable ID.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_update(contact_id: String, name: String, email: String) -> ContactActionResponse {
    let id = match parse_contact_id(&contact_id) {
        Ok(id) => id,
        Err(message) => return ContactActionResponse::failure(message),
    };
    let mut store = match open_store() {
        Ok(store) => store,
        Err(message) => return ContactActionResponse::failure(message),
    };

    match store.update(id, name.trim(), email.trim()) {
        Ok(()) => ContactActionResponse::success("Contact updated.", id.to_string()),
        Err(err) => ContactActionResponse::failure(format!("contact_update failed: {err}")),
    }
}

/// Deletes a contact by stable ID. No confirmation, no undo.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn contact_delete(contact_id: String) -> ContactActionResponse {
    let id = match parse_contact_id(&contact_id) {
        Ok(id) => id,
        Err(message) => return ContactActionResponse::failure(message),
    };
    let mut store = match open_store() {
        Ok(store) => store,
        Err(message) => return ContactActionResponse::failure(message),
    };

    match store.delete(id) {
        Ok(()) => ContactActionResponse::success("Contact deleted.", id.to_string()),
        Err(err) => ContactActionResponse::failure(format!("contact_delete failed: {err}")),
    }
}

fn open_store() -> Result<ContactStore, String> {
    ContactStore::open(resolve_store_db_path()).map_err(|err| {
        error!("event=store_open module=ffi status=error error={err}");
        format!("contact store open failed: {err}")
    })
}

fn resolve_store_db_path() -> PathBuf {
    STORE_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("CONTACTBOOK_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(STORE_DB_FILE_NAME)
        })
        .clone()
}

fn parse_contact_id(raw: &str) -> Result<ContactId, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| format!("invalid contact id `{raw}`"))
}

fn to_contact_item(contact: Contact) -> ContactItem {
    ContactItem {
        contact_id: contact.uuid.to_string(),
        name: contact.name,
        email: contact.email,
        created_at_epoch_ms: contact.created_at,
    }
}
