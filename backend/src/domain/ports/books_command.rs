//! Driving port for book mutations.

use async_trait::async_trait;

use crate::domain::{Book, BookChanges, BookId, Error, NewBook};

/// Domain use-case port for creating, updating and deleting books.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BooksCommand: Send + Sync {
    /// Store a new book and return it with its final id.
    async fn create_book(&self, book: NewBook) -> Result<Book, Error>;

    /// Replace title and author of an existing book.
    async fn update_book(&self, id: BookId, changes: BookChanges) -> Result<(), Error>;

    /// Remove an existing book.
    async fn delete_book(&self, id: BookId) -> Result<(), Error>;
}
