//! Book records and the value types that validate them.
//!
//! Inbound adapters turn raw path segments and JSON fields into these types
//! before talking to a port, so services never see an unparsed identifier or
//! a blank title.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors raised while building book values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    /// The identifier is not a base-10 integer.
    InvalidId,
    /// The title was missing or blank once trimmed.
    MissingTitle,
}

impl fmt::Display for BookValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "book id must be an integer"),
            Self::MissingTitle => write!(f, "book title is required"),
        }
    }
}

impl std::error::Error for BookValidationError {}

/// Book identifier.
///
/// Parsing accepts an optionally signed base-10 integer with surrounding
/// whitespace ignored.
///
/// # Examples
/// ```
/// use in_n_out_books::domain::BookId;
///
/// let id: BookId = " 42 ".parse().expect("numeric id");
/// assert_eq!(id.get(), 42);
/// assert!("forty-two".parse::<BookId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    /// Wrap a raw integer identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// The identifier after this one.
    pub(crate) fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl FromStr for BookId {
    type Err = BookValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| BookValidationError::InvalidId)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-blank book title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookTitle(String);

impl BookTitle {
    /// Validate and construct a title. Keeps the caller's spelling intact.
    pub fn new(title: impl Into<String>) -> Result<Self, BookValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(BookValidationError::MissingTitle);
        }
        Ok(Self(title))
    }

    /// Build a title from an optional payload field.
    pub fn from_optional(title: Option<String>) -> Result<Self, BookValidationError> {
        title.map_or(Err(BookValidationError::MissingTitle), Self::new)
    }
}

impl AsRef<str> for BookTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<BookTitle> for String {
    fn from(value: BookTitle) -> Self {
        value.0
    }
}

impl TryFrom<String> for BookTitle {
    type Error = BookValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Stored book record.
///
/// Serialises as `{"id":1,"title":"...","author":"..."}`; `author` is omitted
/// when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: BookTitle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Book {
    /// Assemble a record from validated parts.
    pub fn new(id: BookId, title: BookTitle, author: Option<String>) -> Self {
        Self { id, title, author }
    }

    /// Replace title and author in place.
    pub fn apply(&mut self, changes: BookChanges) {
        let BookChanges { title, author } = changes;
        self.title = title;
        self.author = author;
    }
}

/// Validated create request. `id` is assigned by the service when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub id: Option<BookId>,
    pub title: BookTitle,
    pub author: Option<String>,
}

impl NewBook {
    /// Validate raw create fields.
    ///
    /// # Examples
    /// ```
    /// use in_n_out_books::domain::{BookValidationError, NewBook};
    ///
    /// let err = NewBook::try_from_parts(Some(2), None, Some("Jane Doe".into()))
    ///     .expect_err("title is required");
    /// assert_eq!(err, BookValidationError::MissingTitle);
    /// ```
    pub fn try_from_parts(
        id: Option<i64>,
        title: Option<String>,
        author: Option<String>,
    ) -> Result<Self, BookValidationError> {
        Ok(Self {
            id: id.map(BookId::new),
            title: BookTitle::from_optional(title)?,
            author,
        })
    }
}

/// Validated replacement for the mutable fields of a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookChanges {
    pub title: BookTitle,
    pub author: Option<String>,
}

impl BookChanges {
    /// Validate raw update fields.
    pub fn try_from_parts(
        title: Option<String>,
        author: Option<String>,
    ) -> Result<Self, BookValidationError> {
        Ok(Self {
            title: BookTitle::from_optional(title)?,
            author,
        })
    }
}
