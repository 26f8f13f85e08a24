//! Driven port for checking a password against a stored hash.

use super::define_port_error;

define_port_error! {
    /// Errors raised while verifying a password.
    pub enum PasswordVerifierError {
        /// The stored hash could not be decoded.
        MalformedHash { message: String } => "stored password hash is malformed: {message}",
    }
}

/// Password hash comparison.
///
/// Synchronous and CPU-bound; async callers run it on the blocking pool.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordVerifier: Send + Sync {
    /// Whether `password` produces `hash`.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordVerifierError>;
}
