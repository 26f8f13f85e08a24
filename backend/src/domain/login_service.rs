//! Credential-checking implementation of the [`LoginService`] port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::domain::ports::{LoginService, PasswordVerifier, UserPersistenceError, UserRepository};
use crate::domain::{Email, Error, LoginCredentials};

/// Message used for every failed authentication, whatever the cause.
pub const UNAUTHORIZED: &str = "Unauthorized";

pub(crate) fn map_user_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Lock { message } => {
            Error::internal(format!("user repository unavailable: {message}"))
        }
    }
}

/// Login service that looks users up by email and checks password hashes.
///
/// Hash comparison runs on the blocking thread pool so a slow work factor
/// never stalls the async worker serving the request.
#[derive(Clone)]
pub struct CredentialLoginService<U, P> {
    users: Arc<U>,
    passwords: Arc<P>,
}

impl<U, P> CredentialLoginService<U, P> {
    /// Create a service from a user repository and a password verifier.
    pub fn new(users: Arc<U>, passwords: Arc<P>) -> Self {
        Self { users, passwords }
    }
}

impl<U, P> CredentialLoginService<U, P>
where
    P: PasswordVerifier + 'static,
{
    async fn password_matches(&self, password: &str, hash: &str) -> Result<bool, Error> {
        let passwords = Arc::clone(&self.passwords);
        let password = Zeroizing::new(password.to_owned());
        let hash = hash.to_owned();
        let outcome = tokio::task::spawn_blocking(move || passwords.verify(&password, &hash))
            .await
            .map_err(|err| Error::internal(format!("password check did not complete: {err}")))?;
        Ok(outcome.unwrap_or_else(|err| {
            warn!(error = %err, "stored password hash could not be checked");
            false
        }))
    }
}

#[async_trait]
impl<U, P> LoginService for CredentialLoginService<U, P>
where
    U: UserRepository,
    P: PasswordVerifier + 'static,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Email, Error> {
        let user = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_user_persistence_error)?;

        let Some(user) = user else {
            debug!("login rejected");
            return Err(Error::unauthorized(UNAUTHORIZED));
        };

        let verified = self
            .password_matches(credentials.password(), user.password_hash())
            .await?;
        if !verified {
            debug!("login rejected");
            return Err(Error::unauthorized(UNAUTHORIZED));
        }

        debug!(email = %user.email(), "login accepted");
        Ok(user.email().clone())
    }
}
