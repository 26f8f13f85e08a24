//! In-memory persistence adapters.
//!
//! Each entity type lives in a [`Collection`], an insertion-ordered sequence
//! guarded by a single `RwLock`. The repositories translate lock failures
//! into the domain's persistence errors and never expose the lock itself.
//!
//! # Example
//!
//! ```
//! use in_n_out_books::outbound::persistence::{InMemoryBookRepository, seed_books};
//!
//! let repository = InMemoryBookRepository::with_books(seed_books().expect("seed books"));
//! # drop(repository);
//! ```

mod collection;
mod memory_book_repository;
mod memory_user_repository;
mod seed;

pub use collection::{Collection, CollectionError};
pub use memory_book_repository::InMemoryBookRepository;
pub use memory_user_repository::InMemoryUserRepository;
pub use seed::{SeedError, seed_books, seed_users};
