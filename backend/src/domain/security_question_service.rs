//! Security-question verification.
//!
//! Check order matters for the responses clients see:
//!
//! 1. unknown user → unauthorized
//! 2. malformed payload → invalid request with the shape violations
//! 3. user without questions, wrong number of answers or any mismatch →
//!    unauthorized
//!
//! Unknown users and wrong answers share one outcome so the endpoint cannot
//! be used to discover registered emails.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::domain::login_service::{UNAUTHORIZED, map_user_persistence_error};
use crate::domain::ports::{SecurityQuestionVerifier, UserRepository};
use crate::domain::{Email, Error, SecurityAnswers};

/// Message used when the payload fails the shape check.
pub const BAD_REQUEST: &str = "Bad Request";

/// Security-question verifier backed by a [`UserRepository`].
#[derive(Clone)]
pub struct SecurityQuestionService<U> {
    users: Arc<U>,
}

impl<U> SecurityQuestionService<U> {
    /// Create a verifier over the given user repository.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

fn shape_error(violations: &[crate::domain::ShapeViolation]) -> Error {
    let details = serde_json::to_value(violations).unwrap_or_else(|_| Value::Array(Vec::new()));
    Error::invalid_request(BAD_REQUEST).with_details(details)
}

#[async_trait]
impl<U> SecurityQuestionVerifier for SecurityQuestionService<U>
where
    U: UserRepository,
{
    async fn verify(&self, email: &Email, answers: &Value) -> Result<(), Error> {
        let user = self
            .users
            .find_by_email(email)
            .await
            .map_err(map_user_persistence_error)?;
        let Some(user) = user else {
            debug!("security answers submitted for unknown user");
            return Err(Error::unauthorized(UNAUTHORIZED));
        };

        let answers = SecurityAnswers::from_json(answers).map_err(|violations| {
            debug!(violations = violations.len(), "security answers failed shape check");
            shape_error(&violations)
        })?;

        let stored = user.security_questions();
        if stored.is_empty() {
            debug!("no stored security questions for requested user");
            return Err(Error::unauthorized(UNAUTHORIZED));
        }
        if answers.len() != stored.len() {
            debug!(
                submitted = answers.len(),
                stored = stored.len(),
                "security answer count mismatch"
            );
            return Err(Error::unauthorized(UNAUTHORIZED));
        }
        if !answers.matches(stored) {
            debug!("security answers rejected");
            return Err(Error::unauthorized(UNAUTHORIZED));
        }

        debug!(email = %user.email(), "security answers accepted");
        Ok(())
    }
}
