//! User authentication API handlers.
//!
//! ```text
//! POST /api/login {"email":"harry@hogwarts.edu","password":"potter"}
//! POST /api/users/harry@hogwarts.edu/verify-security-question [{"answer":"Hedwig"}, ...]
//! ```
//!
//! Errors render as `{"message": "<message>"}`. A request without a JSON body
//! is treated as an empty object. Emails are matched exactly as sent.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Email, Error, LoginCredentials, UNAUTHORIZED};
use crate::inbound::http::body::JsonBody;
use crate::inbound::http::error::{ApiError, ApiResult};
use crate::inbound::http::schemas::{InternalErrorSchema, MessageSchema};
use crate::inbound::http::state::HttpState;

/// Message for a login body missing either field.
pub const MISSING_CREDENTIALS: &str = "Bad Request: Email and password are required.";

/// Login request body for `POST /api/login`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(example = "harry@hogwarts.edu")]
    pub email: Option<String>,
    #[serde(default)]
    #[schema(example = "potter")]
    pub password: Option<String>,
}

/// One submitted security answer.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SecurityAnswerRequest {
    #[schema(example = "Hedwig")]
    pub answer: String,
}

/// Check an email and password against the stored hash.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authentication successful", body = MessageSchema),
        (status = 400, description = "Email or password missing", body = MessageSchema),
        (status = 401, description = "Unauthorized", body = MessageSchema),
        (status = 500, description = "Internal server error", body = InternalErrorSchema)
    ),
    tags = ["users"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: JsonBody<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let LoginRequest { email, password } = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(email.as_deref(), password.as_deref())
        .map_err(|err| {
            debug!(error = %err, "login payload rejected");
            ApiError::users(Error::invalid_request(MISSING_CREDENTIALS))
        })?;
    state
        .login
        .authenticate(&credentials)
        .await
        .map_err(ApiError::users)?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Authentication successful" })))
}

/// Check submitted security answers for a user, in order.
#[utoipa::path(
    post,
    path = "/api/users/{email}/verify-security-question",
    params(("email" = String, Path, description = "Registered email")),
    request_body = [SecurityAnswerRequest],
    responses(
        (status = 200, description = "Security questions successfully answered", body = MessageSchema),
        (status = 400, description = "Malformed answers", body = MessageSchema),
        (status = 401, description = "Unauthorized", body = MessageSchema),
        (status = 500, description = "Internal server error", body = InternalErrorSchema)
    ),
    tags = ["users"],
    operation_id = "verifySecurityQuestion"
)]
#[post("/users/{email}/verify-security-question")]
pub async fn verify_security_question(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: JsonBody<Value>,
) -> ApiResult<HttpResponse> {
    let email =
        Email::new(path.as_str()).map_err(|_| ApiError::users(Error::unauthorized(UNAUTHORIZED)))?;
    state
        .security_questions
        .verify(&email, &payload)
        .await
        .map_err(ApiError::users)?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Security questions successfully answered" })))
}
