//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;

async fn render(error: ApiError) -> (StatusCode, Value) {
    let response = ResponseError::error_response(&error);
    let status = response.status();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error JSON deserialisation succeeds");
    (status, body)
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("Unauthorized"), StatusCode::UNAUTHORIZED)]
#[case(Error::not_found("Book not found"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ApiError::books(error.clone()).status_code(), expected);
    assert_eq!(ApiError::users(error).status_code(), expected);
}

#[rstest]
#[actix_web::test]
async fn book_errors_use_error_field() {
    let (status, body) = render(ApiError::books(Error::not_found("Book not found"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Book not found" }));
}

#[rstest]
#[actix_web::test]
async fn user_errors_use_message_field() {
    let (status, body) = render(ApiError::users(Error::unauthorized("Unauthorized"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": "Unauthorized" }));
}

#[rstest]
#[actix_web::test]
async fn user_error_details_render_as_errors_array() {
    let details = json!([{ "instancePath": "/0", "keyword": "required" }]);
    let error = Error::invalid_request("Bad Request").with_details(details.clone());
    let (_, body) = render(ApiError::users(error)).await;
    assert_eq!(body, json!({ "message": "Bad Request", "errors": details }));
}

#[rstest]
#[actix_web::test]
async fn book_error_details_are_not_rendered() {
    let error = Error::invalid_request("Bad Request").with_details(json!({ "field": "title" }));
    let (_, body) = render(ApiError::books(error)).await;
    assert_eq!(body, json!({ "error": "Bad Request" }));
}

#[rstest]
#[case(ApiError::books(Error::internal("book store lock failed: poisoned")))]
#[case(ApiError::users(Error::internal("user store lock failed: poisoned")))]
#[actix_web::test]
async fn internal_errors_are_redacted(#[case] error: ApiError) {
    let (status, body) = render(error).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Internal Server Error", "error": {} }));
}

#[rstest]
fn development_body_carries_detail() {
    assert_eq!(
        internal_error_body(Some("boom")),
        json!({ "message": "Internal Server Error", "error": "boom" })
    );
}
