//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod body;
pub mod books;
pub mod error;
pub mod fallback;
pub mod health;
pub mod home;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::{ApiError, ApiResult};

use error::Envelope;

/// Mount the `/api` routes. User routes render errors in the `message`
/// envelope; the book scope overrides it with the `error` envelope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use in_n_out_books::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(Envelope::Message)
            .configure(books::configure)
            .service(users::login)
            .service(users::verify_security_question),
    );
}
