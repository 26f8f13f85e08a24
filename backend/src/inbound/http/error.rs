//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers render failures in the JSON shape each route family uses. Book
//! routes answer `{"error": ...}`; user routes answer `{"message": ...}` with
//! an optional `errors` array.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::{Value, json};
use tracing::error;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Message shown for every internal failure.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// JSON envelope a route family renders errors in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// `{"error": "<message>"}`
    Error,
    /// `{"message": "<message>", "errors": [...]}`, `errors` only when present.
    Message,
}

/// Domain error paired with the envelope it renders in.
///
/// # Examples
/// ```
/// use actix_web::ResponseError;
/// use actix_web::http::StatusCode;
/// use in_n_out_books::domain::Error;
/// use in_n_out_books::inbound::http::error::ApiError;
///
/// let err = ApiError::books(Error::not_found("Book not found"));
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Clone)]
pub struct ApiError {
    error: Error,
    envelope: Envelope,
}

impl ApiError {
    /// Wrap an error for the given envelope.
    pub fn new(error: Error, envelope: Envelope) -> Self {
        Self { error, envelope }
    }

    /// Wrap an error for a book route.
    pub fn books(error: Error) -> Self {
        Self {
            error,
            envelope: Envelope::Error,
        }
    }

    /// Wrap an error for a user route.
    pub fn users(error: Error) -> Self {
        Self {
            error,
            envelope: Envelope::Message,
        }
    }

    /// The wrapped domain error.
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// The envelope the error renders in.
    pub fn envelope(&self) -> Envelope {
        self.envelope
    }

    fn body(&self) -> Value {
        match self.envelope {
            Envelope::Error => json!({ "error": self.error.message() }),
            Envelope::Message => {
                let mut body = json!({ "message": self.error.message() });
                if let (Some(details), Some(map)) = (self.error.details(), body.as_object_mut()) {
                    map.insert("errors".to_owned(), details.clone());
                }
                body
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message for request bodies that are not the expected JSON.
pub const BAD_REQUEST: &str = "Bad Request";

/// Uniform 500 body. `detail` is only passed in development mode.
pub(crate) fn internal_error_body(detail: Option<&str>) -> Value {
    json!({
        "message": INTERNAL_SERVER_ERROR,
        "error": detail.map_or_else(|| json!({}), |detail| json!(detail)),
    })
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self.error.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.error.code(), ErrorCode::InternalError) {
            error!(
                error = %self.error,
                trace_id = self.error.trace_id().unwrap_or_default(),
                "request failed with internal error"
            );
            return HttpResponse::InternalServerError().json(internal_error_body(None));
        }
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

#[cfg(test)]
mod tests;
