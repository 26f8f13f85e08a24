//! Builders wiring the in-memory repositories into HTTP state.

use std::sync::Arc;

use crate::domain::{
    Book, BookService, CredentialLoginService, SecurityQuestionService, User,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::password::BcryptPasswords;
use crate::outbound::persistence::{
    InMemoryBookRepository, InMemoryUserRepository, SeedError, seed_books, seed_users,
};

use super::ServerConfig;

/// Build handler state over stores holding `books` and `users`.
///
/// The returned state owns the only handles to both stores; every actix
/// worker shares them through `web::Data`.
///
/// # Examples
/// ```
/// use in_n_out_books::outbound::password::BcryptPasswords;
/// use in_n_out_books::server::http_state_from_records;
///
/// let state = http_state_from_records(Vec::new(), Vec::new(), BcryptPasswords::new(4));
/// assert!(!state.development);
/// ```
pub fn http_state_from_records(
    books: Vec<Book>,
    users: Vec<User>,
    passwords: BcryptPasswords,
) -> HttpState {
    let book_service = Arc::new(BookService::new(Arc::new(
        InMemoryBookRepository::with_books(books),
    )));
    let users = Arc::new(InMemoryUserRepository::with_users(users));

    HttpState::new(HttpStatePorts {
        books: book_service.clone(),
        books_command: book_service,
        login: Arc::new(CredentialLoginService::new(
            users.clone(),
            Arc::new(passwords),
        )),
        security_questions: Arc::new(SecurityQuestionService::new(users)),
    })
}

/// Build handler state from configuration, loading seed records when enabled.
pub fn build_http_state(config: &ServerConfig) -> Result<HttpState, SeedError> {
    let passwords = BcryptPasswords::new(config.password_cost);
    let (books, users) = if config.seed_data {
        (seed_books()?, seed_users(&passwords)?)
    } else {
        (Vec::new(), Vec::new())
    };
    Ok(http_state_from_records(books, users, passwords).with_development(config.development))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookId, Email, LoginCredentials};
    use rstest::rstest;
    use std::net::SocketAddr;

    fn config(seed_data: bool) -> ServerConfig {
        ServerConfig::new(SocketAddr::from(([127, 0, 0, 1], 0)))
            .with_seed_data(seed_data)
            .with_password_cost(4)
    }

    #[rstest]
    #[tokio::test]
    async fn seeded_state_serves_books_and_users() {
        let state = build_http_state(&config(true)).expect("state");
        let books = state.books.list_books().await.expect("list");
        assert_eq!(books.len(), 5);

        let credentials =
            LoginCredentials::try_from_parts(Some("harry@hogwarts.edu"), Some("potter"))
                .expect("credentials");
        let email = state.login.authenticate(&credentials).await.expect("login");
        assert_eq!(email, Email::new("harry@hogwarts.edu").expect("email"));
    }

    #[rstest]
    #[tokio::test]
    async fn unseeded_state_starts_empty() {
        let state = build_http_state(&config(false)).expect("state");
        assert!(state.books.list_books().await.expect("list").is_empty());
        assert!(state.books.get_book(BookId::new(1)).await.is_err());
    }

    #[rstest]
    fn development_flag_is_carried() {
        let state = build_http_state(&config(false).with_development(true)).expect("state");
        assert!(state.development);
    }
}
