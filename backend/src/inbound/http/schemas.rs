//! OpenAPI schema definitions for domain types and response envelopes.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror the JSON those types serialise to and live in the
//! inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Book`].
#[derive(ToSchema)]
#[schema(as = Book)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BookSchema {
    /// Integer identifier. Not guaranteed unique.
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "The Fellowship of the Ring")]
    title: String,
    #[schema(example = "J.R.R. Tolkien")]
    author: Option<String>,
}

/// Book route error body.
#[derive(ToSchema)]
#[schema(as = BookError)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorFieldSchema {
    #[schema(example = "Book not found")]
    error: String,
}

/// Message body used by successful writes and by user route errors.
#[derive(ToSchema)]
#[schema(as = Message)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct MessageSchema {
    #[schema(example = "Authentication successful")]
    message: String,
    /// Shape violations, present only on rejected security answers.
    errors: Option<Vec<ShapeViolationSchema>>,
}

/// OpenAPI schema for [`crate::domain::ShapeViolation`].
#[derive(ToSchema)]
#[schema(as = ShapeViolation)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ShapeViolationSchema {
    /// JSON pointer to the offending value.
    #[schema(rename = "instancePath", example = "/0")]
    instance_path: String,
    #[schema(rename = "schemaPath", example = "#/items/required")]
    schema_path: String,
    /// One of `type`, `required` or `additionalProperties`.
    #[schema(example = "required")]
    keyword: String,
    #[schema(value_type = Object)]
    params: serde_json::Value,
    #[schema(example = "must have required property 'answer'")]
    message: String,
}

/// Uniform 500 body.
#[derive(ToSchema)]
#[schema(as = InternalError)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct InternalErrorSchema {
    #[schema(example = "Internal Server Error")]
    message: String,
    /// `{}` unless the server runs in development mode.
    #[schema(value_type = Object)]
    error: serde_json::Value,
}
