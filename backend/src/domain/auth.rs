//! Authentication primitives such as login credentials.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate raw inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::Email;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email was missing or empty.
    EmptyEmail,
    /// Password was missing or empty.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `email` is kept verbatim and must not be empty.
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use in_n_out_books::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(Some("harry@hogwarts.edu"), Some("potter"))
///     .expect("valid credentials");
/// assert_eq!(creds.email().as_ref(), "harry@hogwarts.edu");
/// assert_eq!(creds.password(), "potter");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: Email,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from optional raw inputs.
    pub fn try_from_parts(
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, LoginValidationError> {
        let email = email
            .and_then(|raw| Email::new(raw).ok())
            .ok_or(LoginValidationError::EmptyEmail)?;
        let password = password
            .filter(|raw| !raw.is_empty())
            .ok_or(LoginValidationError::EmptyPassword)?;

        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email used for the user lookup.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, Some("pw"), LoginValidationError::EmptyEmail)]
    #[case(Some(""), Some("pw"), LoginValidationError::EmptyEmail)]
    #[case(Some("harry@hogwarts.edu"), None, LoginValidationError::EmptyPassword)]
    #[case(Some("harry@hogwarts.edu"), Some(""), LoginValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] email: Option<&str>,
        #[case] password: Option<&str>,
        #[case] expected: LoginValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(email, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("  harry@hogwarts.edu  ", "potter")]
    #[case("test@example.com", " spaced password ")]
    fn valid_credentials_are_kept_verbatim(#[case] email: &str, #[case] password: &str) {
        let creds = LoginCredentials::try_from_parts(Some(email), Some(password))
            .expect("valid inputs should succeed");
        assert_eq!(creds.email().as_ref(), email);
        assert_eq!(creds.password(), password);
    }
}
