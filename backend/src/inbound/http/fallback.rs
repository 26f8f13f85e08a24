//! Responses for unmatched routes and development-mode 500 bodies.

use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{HttpResponse, Result};

use crate::inbound::http::error::{ApiError, internal_error_body};

/// Body of every 404 for an unknown route.
pub const NOT_FOUND_PAGE: &str = "404 - Page Not Found";

/// Default service for requests no route matched.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(ContentType::plaintext())
        .body(NOT_FOUND_PAGE)
}

/// Middleware rewriting 500 bodies to carry the internal error text.
///
/// Only mounted in development mode; production bodies stay redacted.
pub fn expose_internal_errors<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, with_internal_detail)
}

fn with_internal_detail<B>(res: ServiceResponse<B>) -> Result<ErrorHandlerResponse<B>> {
    let detail = res
        .response()
        .error()
        .and_then(|err| err.as_error::<ApiError>())
        .map(|err| err.error().message().to_owned());
    let Some(detail) = detail else {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    };

    let (req, _) = res.into_parts();
    let response =
        HttpResponse::InternalServerError().json(internal_error_body(Some(detail.as_str())));
    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, response).map_into_right_body(),
    ))
}
