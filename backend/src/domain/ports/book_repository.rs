//! Driven port for book storage.
//!
//! The in-memory adapter is the only implementation today, but the port is
//! asynchronous so a database-backed adapter can replace it without touching
//! the services that call it.

use async_trait::async_trait;

use crate::domain::{Book, BookChanges, BookId, NewBook};

use super::define_port_error;

define_port_error! {
    /// Errors raised by book repository adapters.
    pub enum BookPersistenceError {
        /// The store's lock was poisoned by a panicking writer.
        Lock { message: String } => "book store lock failed: {message}",
    }
}

/// Book storage keyed by [`BookId`].
///
/// Lookups and mutations act on the first record with a matching id in
/// insertion order; duplicate ids are stored as given.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Every stored book in insertion order.
    async fn list(&self) -> Result<Vec<Book>, BookPersistenceError>;

    /// First book with `id`, if any.
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, BookPersistenceError>;

    /// Append a book, assigning the next free id when the draft has none.
    async fn insert(&self, book: NewBook) -> Result<Book, BookPersistenceError>;

    /// Replace title and author of the first book with `id`.
    ///
    /// Returns `false` when no book matched.
    async fn update(&self, id: BookId, changes: BookChanges)
    -> Result<bool, BookPersistenceError>;

    /// Remove the first book with `id`. Returns `false` when none matched.
    async fn delete(&self, id: BookId) -> Result<bool, BookPersistenceError>;
}
