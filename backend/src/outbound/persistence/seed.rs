//! Records loaded into the in-memory store at startup.

use crate::domain::{
    Book, BookId, BookTitle, BookValidationError, Email, EmailValidationError, SecurityQuestion,
    User,
};
use crate::outbound::password::BcryptPasswords;

const BOOKS: [(i64, &str, &str); 5] = [
    (1, "The Fellowship of the Ring", "J.R.R. Tolkien"),
    (2, "Harry Potter and the Philosopher's Stone", "J.K. Rowling"),
    (3, "The Two Towers", "J.R.R. Tolkien"),
    (4, "Harry Potter and the Chamber of Secrets", "J.K. Rowling"),
    (5, "The Return of the King", "J.R.R. Tolkien"),
];

struct SeedUser {
    email: &'static str,
    password: &'static str,
    answers: &'static [&'static str],
}

const USERS: [SeedUser; 4] = [
    SeedUser {
        email: "harry@hogwarts.edu",
        password: "potter",
        answers: &["Hedwig", "Quidditch Through the Ages", "Buckbeak"],
    },
    SeedUser {
        email: "hermione@hogwarts.edu",
        password: "granger",
        answers: &["Crookshanks", "Hogwarts, A History", "Leaky Cauldron"],
    },
    SeedUser {
        email: "test@example.com",
        password: "password",
        answers: &["correct-answer-1", "correct-answer-2"],
    },
    SeedUser {
        email: "noquestions@example.com",
        password: "password",
        answers: &[],
    },
];

/// Errors raised while building seed records.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// A seed book failed validation.
    #[error("invalid seed book {id}: {source}")]
    Book {
        id: i64,
        #[source]
        source: BookValidationError,
    },
    /// A seed email failed validation.
    #[error("invalid seed user email {email:?}: {source}")]
    Email {
        email: &'static str,
        #[source]
        source: EmailValidationError,
    },
    /// Hashing a seed password failed.
    #[error("failed to hash password for {email}: {source}")]
    Hash {
        email: &'static str,
        #[source]
        source: bcrypt::BcryptError,
    },
}

/// The starting catalogue, ids 1 to 5.
pub fn seed_books() -> Result<Vec<Book>, SeedError> {
    BOOKS
        .iter()
        .map(|&(id, title, author)| {
            let title = BookTitle::new(title).map_err(|source| SeedError::Book { id, source })?;
            Ok(Book::new(BookId::new(id), title, Some(author.to_owned())))
        })
        .collect()
}

/// The starting users with passwords hashed by `passwords`.
pub fn seed_users(passwords: &BcryptPasswords) -> Result<Vec<User>, SeedError> {
    USERS
        .iter()
        .map(|seed| {
            let email = Email::new(seed.email).map_err(|source| SeedError::Email {
                email: seed.email,
                source,
            })?;
            let hash = passwords.hash(seed.password).map_err(|source| SeedError::Hash {
                email: seed.email,
                source,
            })?;
            let questions = seed
                .answers
                .iter()
                .copied()
                .map(SecurityQuestion::new)
                .collect();
            Ok(User::new(email, hash, questions))
        })
        .collect()
}
