//! `UserRepository` adapter over an in-memory [`Collection`].

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Email, User};

use super::collection::Collection;

/// In-memory, read-only user store.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Collection<User>,
}

impl InMemoryUserRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding `users` in order.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Collection::from_records(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError> {
        self.users
            .find_one(|user| user.email() == email)
            .map_err(|err| UserPersistenceError::lock(err.to_string()))
    }
}
