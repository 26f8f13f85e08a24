//! Behaviour tests for the book catalogue routes.
//!
//! Scenarios run against the real in-memory store, seeded or empty, through
//! the fully wired application.

#[path = "support/http_world.rs"]
mod http_world;

use actix_web::http::Method;
use http_world::{HttpWorld, unquote, world};
use rstest_bdd_macros::{scenario, then, when};
use serde_json::{Value, json};

const BOOKS_PATH: &str = "/api/books";

fn book_path(id: &str) -> String {
    format!("{BOOKS_PATH}/{}", unquote(id))
}

fn stored_books(world: &HttpWorld) -> Vec<Value> {
    world.request(Method::GET, BOOKS_PATH, None);
    assert_eq!(world.status(), 200);
    world.json().as_array().cloned().expect("book list is an array")
}

// -----------------------------------------------------------------------------
// When Steps
// -----------------------------------------------------------------------------

#[when("the client lists the books")]
fn the_client_lists_the_books(world: &HttpWorld) {
    world.request(Method::GET, BOOKS_PATH, None);
}

#[when("the client requests book {id}")]
fn the_client_requests_book(world: &HttpWorld, id: String) {
    world.request(Method::GET, &book_path(&id), None);
}

#[when("the client adds book {id} titled {title} by {author}")]
fn the_client_adds_book(world: &HttpWorld, id: i64, title: String, author: String) {
    let body = json!({ "id": id, "title": unquote(&title), "author": unquote(&author) });
    world.request(Method::POST, BOOKS_PATH, Some(body.to_string()));
}

#[when("the client adds a book without a title")]
fn the_client_adds_a_book_without_a_title(world: &HttpWorld) {
    let body = json!({ "id": 6, "author": "Anonymous" });
    world.request(Method::POST, BOOKS_PATH, Some(body.to_string()));
}

#[when("the client adds a book without a body")]
fn the_client_adds_a_book_without_a_body(world: &HttpWorld) {
    world.request(Method::POST, BOOKS_PATH, None);
}

#[when("the client posts a malformed book body")]
fn the_client_posts_a_malformed_book_body(world: &HttpWorld) {
    world.request(Method::POST, BOOKS_PATH, Some("{\"title\":".to_owned()));
}

#[when("the client retitles book {id} to {title}")]
fn the_client_retitles_book(world: &HttpWorld, id: String, title: String) {
    let body = json!({ "title": unquote(&title), "author": "Someone Else" });
    world.request(Method::PUT, &book_path(&id), Some(body.to_string()));
}

#[when("the client updates book {id} without a title")]
fn the_client_updates_book_without_a_title(world: &HttpWorld, id: String) {
    let body = json!({ "author": "Someone Else" });
    world.request(Method::PUT, &book_path(&id), Some(body.to_string()));
}

#[when("the client updates book {id} without a body")]
fn the_client_updates_book_without_a_body(world: &HttpWorld, id: String) {
    world.request(Method::PUT, &book_path(&id), None);
}

#[when("the client deletes book {id}")]
fn the_client_deletes_book(world: &HttpWorld, id: String) {
    world.request(Method::DELETE, &book_path(&id), None);
}

#[when("the client visits {path}")]
fn the_client_visits(world: &HttpWorld, path: String) {
    world.request(Method::GET, unquote(&path), None);
}

// -----------------------------------------------------------------------------
// Then Steps
// -----------------------------------------------------------------------------

#[then("the response lists {count} books")]
fn the_response_lists_books(world: &HttpWorld, count: usize) {
    let books = world.json();
    let books = books.as_array().expect("book list is an array");
    assert_eq!(books.len(), count);
}

#[then("the book title is {title}")]
fn the_book_title_is(world: &HttpWorld, title: String) {
    let book = world.json();
    assert_eq!(book.get("title").and_then(Value::as_str), Some(unquote(&title)));
}

#[then("the error is {message}")]
fn the_error_is(world: &HttpWorld, message: String) {
    assert_eq!(world.json(), json!({ "error": unquote(&message) }));
}

#[then("the store holds {count} books")]
fn the_store_holds_books(world: &HttpWorld, count: usize) {
    assert_eq!(stored_books(world).len(), count);
}

#[then("book {id} is titled {title}")]
fn book_is_titled(world: &HttpWorld, id: String, title: String) {
    world.request(Method::GET, &book_path(&id), None);
    assert_eq!(world.status(), 200);
    the_book_title_is(world, title);
}

#[then("book {id} is not found")]
fn book_is_not_found(world: &HttpWorld, id: String) {
    world.request(Method::GET, &book_path(&id), None);
    assert_eq!(world.status(), 404);
    assert_eq!(world.json(), json!({ "error": "Book not found" }));
}

#[then("the response is the not found page")]
fn the_response_is_the_not_found_page(world: &HttpWorld) {
    assert_eq!(world.body(), "404 - Page Not Found");
}

// -----------------------------------------------------------------------------
// Scenario Bindings
// -----------------------------------------------------------------------------

#[scenario(path = "tests/features/books.feature", name = "Listing the seeded catalogue")]
fn listing_the_seeded_catalogue(world: HttpWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/books.feature", name = "Listing an empty store")]
fn listing_an_empty_store(world: HttpWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/books.feature", name = "Reading a book by id")]
fn reading_a_book_by_id(world: HttpWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/books.feature", name = "Reading a missing book")]
fn reading_a_missing_book(world: HttpWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/books.feature", name = "Reading with a non-numeric id")]
fn reading_with_a_non_numeric_id(world: HttpWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/books.feature", name = "Updating with a non-numeric id")]
fn updating_with_a_non_numeric_id(world: HttpWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/books.feature", name = "Deleting with a non-numeric id")]
fn deleting_with_a_non_numeric_id(world: HttpWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/books.feature", name = "Adding a book")]
fn adding_a_book(world: HttpWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/books.feature", name = "Adding a book without a title")]
fn adding_a_book_without_a_title(world: HttpWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/books.feature", name = "Adding a book with a malformed body")]
fn adding_a_book_with_a_malformed_body(world: HttpWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/books.feature", name = "Updating a book")]
fn updating_a_book(world: HttpWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/books.feature", name = "Updating a book without a title")]
fn updating_a_book_without_a_title(world: HttpWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/books.feature", name = "Updating a missing book")]
fn updating_a_missing_book(world: HttpWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/books.feature", name = "Deleting a book end to end")]
fn deleting_a_book_end_to_end(world: HttpWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/books.feature", name = "Deleting a book twice")]
fn deleting_a_book_twice(world: HttpWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/books.feature", name = "Requesting an unknown route")]
fn requesting_an_unknown_route(world: HttpWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/books.feature", name = "Adding a book without a body")]
fn adding_a_book_without_a_body(world: HttpWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/books.feature", name = "Updating with a non-numeric id and no body")]
fn updating_with_a_non_numeric_id_and_no_body(world: HttpWorld) {
    let _ = world;
}
