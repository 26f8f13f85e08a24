//! Domain primitives, services and ports.
//!
//! Purpose: define strongly typed book and user values, the use-case services
//! that operate on them, and the ports adapters plug into. Nothing here knows
//! about HTTP or about how records are stored.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Book, BookId, BookTitle, NewBook, BookChanges: book records and inputs.
//! - User, Email, SecurityQuestion: stored users.
//! - LoginCredentials, SecurityAnswers: validated authentication inputs.
//! - BookService, CredentialLoginService, SecurityQuestionService: driving
//!   port implementations.

pub mod auth;
pub mod book;
pub mod book_service;
pub mod error;
pub mod login_service;
pub mod ports;
pub mod security_answers;
pub mod security_question_service;
pub mod trace_id;
pub mod user;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::book::{Book, BookChanges, BookId, BookTitle, BookValidationError, NewBook};
pub use self::book_service::{BOOK_NOT_FOUND, BookService};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::login_service::{CredentialLoginService, UNAUTHORIZED};
pub use self::security_answers::{SecurityAnswers, ShapeKeyword, ShapeViolation};
pub use self::security_question_service::{BAD_REQUEST, SecurityQuestionService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Email, EmailValidationError, SecurityQuestion, User};
