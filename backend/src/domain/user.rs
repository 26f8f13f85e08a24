//! User records used for login and security-question verification.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Validation errors returned by [`Email::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailValidationError {
    /// Email was the empty string.
    EmptyEmail,
}

impl fmt::Display for EmailValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
        }
    }
}

impl std::error::Error for EmailValidationError {}

/// User identity. Kept verbatim and matched by exact string equality, so
/// surrounding whitespace is part of the value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an email.
    ///
    /// # Examples
    /// ```
    /// use in_n_out_books::domain::Email;
    ///
    /// let email = Email::new("harry@hogwarts.edu").expect("valid email");
    /// assert_eq!(email.as_ref(), "harry@hogwarts.edu");
    /// assert_ne!(Email::new(" harry@hogwarts.edu ").expect("valid email"), email);
    /// ```
    pub fn new(email: impl AsRef<str>) -> Result<Self, EmailValidationError> {
        let raw = email.as_ref();
        if raw.is_empty() {
            return Err(EmailValidationError::EmptyEmail);
        }
        Ok(Self(raw.to_owned()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = EmailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Stored answer to one security question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityQuestion {
    answer: Zeroizing<String>,
}

impl SecurityQuestion {
    /// Store an answer verbatim; comparison is case-sensitive.
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: Zeroizing::new(answer.into()),
        }
    }

    /// The stored answer.
    pub fn answer(&self) -> &str {
        self.answer.as_str()
    }
}

/// Registered user.
///
/// ## Invariants
/// - `password_hash` is an encoded hash, never the plain password.
/// - `security_questions` keeps the order answers must be given in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    email: Email,
    password_hash: String,
    security_questions: Vec<SecurityQuestion>,
}

impl User {
    /// Assemble a user from an email, a password hash and ordered questions.
    pub fn new(
        email: Email,
        password_hash: impl Into<String>,
        security_questions: Vec<SecurityQuestion>,
    ) -> Self {
        Self {
            email,
            password_hash: password_hash.into(),
            security_questions,
        }
    }

    /// Identity used for lookups.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Encoded password hash.
    pub fn password_hash(&self) -> &str {
        self.password_hash.as_str()
    }

    /// Stored security questions in answer order.
    pub fn security_questions(&self) -> &[SecurityQuestion] {
        &self.security_questions
    }
}
