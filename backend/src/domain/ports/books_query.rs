//! Driving port for book reads.

use async_trait::async_trait;

use crate::domain::{Book, BookId, Error};

/// Domain use-case port for reading books.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BooksQuery: Send + Sync {
    /// Every book in insertion order. An empty store yields an empty list.
    async fn list_books(&self) -> Result<Vec<Book>, Error>;

    /// The book with `id`, or a not-found error.
    async fn get_book(&self, id: BookId) -> Result<Book, Error>;
}
