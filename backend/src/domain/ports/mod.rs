//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`BooksQuery`, `BooksCommand`, `LoginService`,
//! `SecurityQuestionVerifier`) are called by inbound adapters. Driven ports
//! (`BookRepository`, `UserRepository`, `PasswordVerifier`) are implemented by
//! outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod book_repository;
mod books_command;
mod books_query;
mod login_service;
mod password_verifier;
mod security_question_verifier;
mod user_repository;

#[cfg(test)]
pub use book_repository::MockBookRepository;
pub use book_repository::{BookPersistenceError, BookRepository};
#[cfg(test)]
pub use books_command::MockBooksCommand;
pub use books_command::BooksCommand;
#[cfg(test)]
pub use books_query::MockBooksQuery;
pub use books_query::BooksQuery;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use password_verifier::MockPasswordVerifier;
pub use password_verifier::{PasswordVerifier, PasswordVerifierError};
#[cfg(test)]
pub use security_question_verifier::MockSecurityQuestionVerifier;
pub use security_question_verifier::SecurityQuestionVerifier;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
