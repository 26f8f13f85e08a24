//! Shared validation helpers for inbound HTTP adapters.
//!
//! Each book route reports a malformed id with its own message, so the
//! parsing helper takes the route as an argument.

use crate::domain::{BookId, Error};

/// Route whose path carries a book id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BookIdRoute {
    Get,
    Update,
    Delete,
}

impl BookIdRoute {
    fn invalid_id_message(self) -> &'static str {
        match self {
            Self::Get => "ID must be a number",
            Self::Update => "Input must be a number",
            Self::Delete => "Invalid book ID",
        }
    }
}

/// Parse a raw path segment into a [`BookId`].
pub(crate) fn parse_book_id(raw: &str, route: BookIdRoute) -> Result<BookId, Error> {
    raw.parse::<BookId>()
        .map_err(|_| Error::invalid_request(route.invalid_id_message()))
}
