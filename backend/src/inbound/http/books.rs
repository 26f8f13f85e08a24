//! Book catalogue API handlers.
//!
//! ```text
//! GET    /api/books
//! GET    /api/books/{id}
//! POST   /api/books {"id":6,"title":"Dune","author":"Frank Herbert"}
//! PUT    /api/books/{id} {"title":"Dune","author":"Frank Herbert"}
//! DELETE /api/books/{id}
//! ```
//!
//! Errors render as `{"error": "<message>"}`. A request without a JSON body
//! is treated as an empty object, so the title check answers it.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Book, BookChanges, BookValidationError, Error, NewBook};
use crate::inbound::http::body::JsonBody;
use crate::inbound::http::error::{ApiError, ApiResult, Envelope};
use crate::inbound::http::schemas::{
    BookSchema, ErrorFieldSchema, InternalErrorSchema, MessageSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{BookIdRoute, parse_book_id};

/// Create request body for `POST /api/books`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateBookRequest {
    /// Explicit id; the next free id is assigned when omitted.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// Replacement body for `PUT /api/books/{id}`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateBookRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// Register the book routes with their JSON error envelope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/books")
            .app_data(Envelope::Error)
            .service(list_books)
            .service(get_book)
            .service(create_book)
            .service(update_book)
            .service(delete_book),
    );
}

/// List every book in insertion order.
#[utoipa::path(
    get,
    path = "/api/books",
    responses(
        (status = 200, description = "All books", body = [BookSchema]),
        (status = 500, description = "Internal server error", body = InternalErrorSchema)
    ),
    tags = ["books"],
    operation_id = "listBooks"
)]
#[get("")]
pub async fn list_books(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Book>>> {
    let books = state.books.list_books().await.map_err(ApiError::books)?;
    Ok(web::Json(books))
}

/// Fetch one book by id.
#[utoipa::path(
    get,
    path = "/api/books/{id}",
    params(("id" = String, Path, description = "Numeric book id")),
    responses(
        (status = 200, description = "Book", body = BookSchema),
        (status = 400, description = "ID must be a number", body = ErrorFieldSchema),
        (status = 404, description = "Book not found", body = ErrorFieldSchema),
        (status = 500, description = "Internal server error", body = InternalErrorSchema)
    ),
    tags = ["books"],
    operation_id = "getBook"
)]
#[get("/{id}")]
pub async fn get_book(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Book>> {
    let id = parse_book_id(&path, BookIdRoute::Get).map_err(ApiError::books)?;
    let book = state.books.get_book(id).await.map_err(ApiError::books)?;
    Ok(web::Json(book))
}

/// Add a book.
#[utoipa::path(
    post,
    path = "/api/books",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book added successfully", body = MessageSchema),
        (status = 400, description = "Book title is required", body = ErrorFieldSchema),
        (status = 500, description = "Internal server error", body = InternalErrorSchema)
    ),
    tags = ["books"],
    operation_id = "createBook"
)]
#[post("")]
pub async fn create_book(
    state: web::Data<HttpState>,
    payload: JsonBody<CreateBookRequest>,
) -> ApiResult<HttpResponse> {
    let CreateBookRequest { id, title, author } = payload.into_inner();
    let draft = NewBook::try_from_parts(id, title, author)
        .map_err(|err| ApiError::books(map_create_validation_error(err)))?;
    state
        .books_command
        .create_book(draft)
        .await
        .map_err(ApiError::books)?;
    Ok(HttpResponse::Created().json(json!({ "message": "Book added successfully" })))
}

fn map_create_validation_error(err: BookValidationError) -> Error {
    match err {
        BookValidationError::MissingTitle => Error::invalid_request("Book title is required"),
        BookValidationError::InvalidId => Error::invalid_request("ID must be a number"),
    }
}

/// Replace a book's title and author.
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    params(("id" = String, Path, description = "Numeric book id")),
    request_body = UpdateBookRequest,
    responses(
        (status = 204, description = "Book updated"),
        (status = 400, description = "Invalid id or missing title", body = ErrorFieldSchema),
        (status = 404, description = "Book not found", body = ErrorFieldSchema),
        (status = 500, description = "Internal server error", body = InternalErrorSchema)
    ),
    tags = ["books"],
    operation_id = "updateBook"
)]
#[put("/{id}")]
pub async fn update_book(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: JsonBody<UpdateBookRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_book_id(&path, BookIdRoute::Update).map_err(ApiError::books)?;
    let UpdateBookRequest { title, author } = payload.into_inner();
    let changes = BookChanges::try_from_parts(title, author)
        .map_err(|_| ApiError::books(Error::invalid_request("Bad Request")))?;
    state
        .books_command
        .update_book(id, changes)
        .await
        .map_err(ApiError::books)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Remove a book.
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    params(("id" = String, Path, description = "Numeric book id")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 400, description = "Invalid book ID", body = ErrorFieldSchema),
        (status = 404, description = "Book not found", body = ErrorFieldSchema),
        (status = 500, description = "Internal server error", body = InternalErrorSchema)
    ),
    tags = ["books"],
    operation_id = "deleteBook"
)]
#[delete("/{id}")]
pub async fn delete_book(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_book_id(&path, BookIdRoute::Delete).map_err(ApiError::books)?;
    state
        .books_command
        .delete_book(id)
        .await
        .map_err(ApiError::books)?;
    Ok(HttpResponse::NoContent().finish())
}
