//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error, web};

use crate::domain::ports::{
    MockBooksCommand, MockBooksQuery, MockLoginService, MockSecurityQuestionVerifier,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Mocked driving ports. Tests set expectations on the fields they exercise;
/// any unexpected call fails the test.
#[derive(Default)]
pub struct MockPorts {
    pub books: MockBooksQuery,
    pub books_command: MockBooksCommand,
    pub login: MockLoginService,
    pub security_questions: MockSecurityQuestionVerifier,
}

impl MockPorts {
    /// Move the mocks into handler state.
    pub fn into_state(self) -> HttpState {
        HttpState::new(HttpStatePorts {
            books: Arc::new(self.books),
            books_command: Arc::new(self.books_command),
            login: Arc::new(self.login),
            security_questions: Arc::new(self.security_questions),
        })
    }
}

/// App serving the `/api` routes over `state`.
pub fn api_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(super::configure)
}
