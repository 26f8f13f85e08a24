//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers from [`crate::inbound::http::schemas`], so domain
//! types stay free of utoipa derives.
//!
//! The generated document backs Swagger UI at `/docs` (debug builds) and is
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::books::{CreateBookRequest, UpdateBookRequest};
use crate::inbound::http::schemas::{
    BookSchema, ErrorFieldSchema, InternalErrorSchema, MessageSchema, ShapeViolationSchema,
};
use crate::inbound::http::users::{LoginRequest, SecurityAnswerRequest};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "In-N-Out-Books API",
        description = "Book catalogue management and user authentication."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::books::list_books,
        crate::inbound::http::books::get_book,
        crate::inbound::http::books::create_book,
        crate::inbound::http::books::update_book,
        crate::inbound::http::books::delete_book,
        crate::inbound::http::users::login,
        crate::inbound::http::users::verify_security_question,
        crate::inbound::http::home::landing_page,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        BookSchema,
        ErrorFieldSchema,
        MessageSchema,
        ShapeViolationSchema,
        InternalErrorSchema,
        CreateBookRequest,
        UpdateBookRequest,
        LoginRequest,
        SecurityAnswerRequest,
    )),
    tags(
        (name = "books", description = "Book catalogue operations"),
        (name = "users", description = "Login and security question checks"),
        (name = "home", description = "Landing page"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
