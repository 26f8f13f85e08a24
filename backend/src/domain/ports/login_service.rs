//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters call this port to authenticate credentials without
//! knowing how users are stored or how passwords are hashed, so handler
//! tests can substitute a double.

use async_trait::async_trait;

use crate::domain::{Email, Error, LoginCredentials};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user's email.
    ///
    /// Unknown users and wrong passwords fail with the same
    /// [`crate::domain::ErrorCode::Unauthorized`] error.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Email, Error>;
}
