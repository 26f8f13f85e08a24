//! Driving port for security-question verification.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{Email, Error};

/// Domain use-case port for checking a user's security answers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SecurityQuestionVerifier: Send + Sync {
    /// Check the raw submitted `answers` for `email`.
    ///
    /// The user is resolved before the payload shape is checked, so an
    /// unknown email is reported as unauthorized even for a malformed body.
    async fn verify(&self, email: &Email, answers: &Value) -> Result<(), Error>;
}
