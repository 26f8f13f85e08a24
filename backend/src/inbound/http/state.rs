//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{BooksCommand, BooksQuery, LoginService, SecurityQuestionVerifier};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub books: Arc<dyn BooksQuery>,
    pub books_command: Arc<dyn BooksCommand>,
    pub login: Arc<dyn LoginService>,
    pub security_questions: Arc<dyn SecurityQuestionVerifier>,
    /// Expose internal error text in 500 bodies.
    pub development: bool,
}

/// Parameter object bundling the port implementations.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub books: Arc<dyn BooksQuery>,
    pub books_command: Arc<dyn BooksCommand>,
    pub login: Arc<dyn LoginService>,
    pub security_questions: Arc<dyn SecurityQuestionVerifier>,
}

impl HttpState {
    /// Construct production-mode state from a ports bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            books,
            books_command,
            login,
            security_questions,
        } = ports;
        Self {
            books,
            books_command,
            login,
            security_questions,
            development: false,
        }
    }

    /// Toggle development mode.
    #[must_use]
    pub fn with_development(mut self, development: bool) -> Self {
        self.development = development;
        self
    }
}
