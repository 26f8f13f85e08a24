//! `BookRepository` adapter over an in-memory [`Collection`].

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{BookPersistenceError, BookRepository};
use crate::domain::{Book, BookChanges, BookId, NewBook};

use super::collection::{Collection, CollectionError};

fn map_collection_error(error: CollectionError) -> BookPersistenceError {
    BookPersistenceError::lock(error.to_string())
}

/// Next id for a draft without one: one past the largest stored id.
fn next_id(existing: &[Book]) -> BookId {
    existing
        .iter()
        .map(|book| book.id)
        .max()
        .map_or(BookId::new(1), BookId::next)
}

/// In-memory book store.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: Collection<Book>,
}

impl InMemoryBookRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `books` in order.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: Collection::from_records(books),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list(&self) -> Result<Vec<Book>, BookPersistenceError> {
        self.books.find().map_err(map_collection_error)
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>, BookPersistenceError> {
        self.books
            .find_one(|book| book.id == id)
            .map_err(map_collection_error)
    }

    async fn insert(&self, book: NewBook) -> Result<Book, BookPersistenceError> {
        let NewBook { id, title, author } = book;
        let stored = self
            .books
            .insert_with(move |existing| {
                let id = id.unwrap_or_else(|| next_id(existing));
                Book::new(id, title, author)
            })
            .map_err(map_collection_error)?;
        debug!(book_id = %stored.id, "book stored");
        Ok(stored)
    }

    async fn update(
        &self,
        id: BookId,
        changes: BookChanges,
    ) -> Result<bool, BookPersistenceError> {
        self.books
            .update_one(|book| book.id == id, move |book| book.apply(changes))
            .map_err(map_collection_error)
    }

    async fn delete(&self, id: BookId) -> Result<bool, BookPersistenceError> {
        self.books
            .delete_one(|book| book.id == id)
            .map_err(map_collection_error)
    }
}
