//! Book catalogue service implementing the book driving ports.
//!
//! Inputs arrive already validated ([`NewBook`], [`BookChanges`], [`BookId`]),
//! so this layer only turns repository outcomes into domain results: a
//! missing record becomes [`ErrorCode::NotFound`](crate::domain::ErrorCode)
//! and storage failures become internal errors.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{BookPersistenceError, BookRepository, BooksCommand, BooksQuery};
use crate::domain::{Book, BookChanges, BookId, Error, NewBook};

/// Message used for every missing-book outcome.
pub const BOOK_NOT_FOUND: &str = "Book not found";

/// Book service backed by a [`BookRepository`].
#[derive(Clone)]
pub struct BookService<R> {
    repository: Arc<R>,
}

impl<R> BookService<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: BookPersistenceError) -> Error {
    match error {
        BookPersistenceError::Lock { message } => {
            Error::internal(format!("book repository unavailable: {message}"))
        }
    }
}

#[async_trait]
impl<R> BooksQuery for BookService<R>
where
    R: BookRepository,
{
    async fn list_books(&self) -> Result<Vec<Book>, Error> {
        self.repository.list().await.map_err(map_persistence_error)
    }

    async fn get_book(&self, id: BookId) -> Result<Book, Error> {
        let found = self
            .repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?;
        match found {
            Some(book) => Ok(book),
            None => Err(Error::not_found(BOOK_NOT_FOUND)),
        }
    }
}

#[async_trait]
impl<R> BooksCommand for BookService<R>
where
    R: BookRepository,
{
    async fn create_book(&self, book: NewBook) -> Result<Book, Error> {
        let stored = self
            .repository
            .insert(book)
            .await
            .map_err(map_persistence_error)?;
        debug!(book_id = %stored.id, "book added");
        Ok(stored)
    }

    async fn update_book(&self, id: BookId, changes: BookChanges) -> Result<(), Error> {
        let updated = self
            .repository
            .update(id, changes)
            .await
            .map_err(map_persistence_error)?;
        if !updated {
            return Err(Error::not_found(BOOK_NOT_FOUND));
        }
        debug!(book_id = %id, "book updated");
        Ok(())
    }

    async fn delete_book(&self, id: BookId) -> Result<(), Error> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(map_persistence_error)?;
        if !deleted {
            return Err(Error::not_found(BOOK_NOT_FOUND));
        }
        debug!(book_id = %id, "book deleted");
        Ok(())
    }
}
