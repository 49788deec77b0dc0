//! Contact store: durable CRUD plus an in-memory cache of the last load.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the in-memory cache in step with persistent storage.
//! - Notify subscribers after every cache replacement.
//!
//! # Invariants
//! - The store exclusively owns the connection and the cache.
//! - A failed write leaves the cache at its last successful state.
//! - Every mutation is a single atomic SQL statement followed by a reload.

use crate::db::{open_db, open_db_in_memory, DbError};
use crate::model::contact::{Contact, ContactId, ContactValidationError};
use crate::repo::contact_repo::{ContactRepository, RepoError, SqliteContactRepository};
use log::info;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for contact use-cases.
#[derive(Debug)]
pub enum StoreError {
    /// Input failed field validation; the store is the final authority.
    Validation(ContactValidationError),
    /// Target record does not exist.
    NotFound(ContactId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Repo(RepoError::Db(value))
    }
}

/// Handle identifying one registered snapshot observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&[Contact])>;

/// Durable CRUD over contacts with an in-memory cache of the last load.
///
/// All operations are synchronous; the caller is blocked until the write
/// commits and the cache is refreshed.
pub struct ContactStore {
    conn: Connection,
    cache: Vec<Contact>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl ContactStore {
    /// Opens the store over a database file and performs the initial load.
    ///
    /// Storage initialization failure is surfaced to the caller; the store
    /// never starts with a silently empty cache.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::from_connection(open_db(path)?)
    }

    /// Opens the store over an in-memory database. Test and demo use.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_connection(open_db_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StoreResult<Self> {
        let mut store = Self {
            conn,
            cache: Vec::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        };
        store.load()?;
        Ok(store)
    }

    /// Reads all records from storage, replacing the cache wholesale.
    ///
    /// On failure the cache keeps its previous state and no notification
    /// is published.
    pub fn load(&mut self) -> StoreResult<()> {
        let contacts = {
            let repo = SqliteContactRepository::try_new(&self.conn)?;
            repo.list_contacts()?
        };
        self.cache = contacts;
        info!(
            "event=contacts_load module=store status=ok count={}",
            self.cache.len()
        );
        self.notify();
        Ok(())
    }

    /// Creates a new record with a fresh id and current timestamp.
    ///
    /// Empty `name` or `email` is rejected with [`StoreError::Validation`]
    /// and leaves the collection unchanged.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> StoreResult<ContactId> {
        let contact = Contact::new(name, email);
        {
            let repo = SqliteContactRepository::try_new(&self.conn)?;
            repo.create_contact(&contact)?;
        }
        self.load()?;
        info!(
            "event=contact_add module=store status=ok contact_id={}",
            contact.uuid
        );
        Ok(contact.uuid)
    }

    /// Mutates `name` and `email` of the record at `id`.
    ///
    /// `uuid` and `created_at` never change. Unknown ids are rejected with
    /// [`StoreError::NotFound`]; the collection is left unchanged.
    pub fn update(&mut self, id: ContactId, name: &str, email: &str) -> StoreResult<()> {
        {
            let repo = SqliteContactRepository::try_new(&self.conn)?;
            repo.update_contact(id, name, email)?;
        }
        self.load()?;
        info!(
            "event=contact_update module=store status=ok contact_id={id}"
        );
        Ok(())
    }

    /// Removes the record at `id`.
    ///
    /// Unknown ids are rejected with [`StoreError::NotFound`]; the
    /// collection is left unchanged either way.
    pub fn delete(&mut self, id: ContactId) -> StoreResult<()> {
        {
            let repo = SqliteContactRepository::try_new(&self.conn)?;
            repo.delete_contact(id)?;
        }
        self.load()?;
        info!(
            "event=contact_delete module=store status=ok contact_id={id}"
        );
        Ok(())
    }

    /// Returns an immutable copy of the current record collection, in
    /// insertion order.
    pub fn snapshot(&self) -> Vec<Contact> {
        self.cache.clone()
    }

    /// Returns a copy of the cached record at `id`, if present.
    pub fn get(&self, id: ContactId) -> Option<Contact> {
        self.cache.iter().find(|contact| contact.uuid == id).cloned()
    }

    /// Registers an observer invoked with the new snapshot after every
    /// cache replacement.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&[Contact]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a registered observer. Returns whether it existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.cache);
        }
    }
}
