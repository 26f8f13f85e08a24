//! bcrypt password hashing.

use crate::domain::ports::{PasswordVerifier, PasswordVerifierError};

/// Default bcrypt work factor for newly hashed passwords.
pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

/// bcrypt-backed hasher and [`PasswordVerifier`].
///
/// # Examples
/// ```
/// use in_n_out_books::domain::ports::PasswordVerifier;
/// use in_n_out_books::outbound::password::BcryptPasswords;
///
/// let passwords = BcryptPasswords::new(4);
/// let hash = passwords.hash("potter").expect("hash");
/// assert!(passwords.verify("potter", &hash).expect("well-formed hash"));
/// assert!(!passwords.verify("wrongpassword", &hash).expect("well-formed hash"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswords {
    cost: u32,
}

impl BcryptPasswords {
    /// Hasher using the given work factor.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Work factor applied by [`Self::hash`].
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash `password` with a fresh salt.
    pub fn hash(&self, password: &str) -> Result<String, bcrypt::BcryptError> {
        bcrypt::hash(password, self.cost)
    }
}

impl Default for BcryptPasswords {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordVerifier for BcryptPasswords {
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordVerifierError> {
        bcrypt::verify(password, hash)
            .map_err(|err| PasswordVerifierError::malformed_hash(err.to_string()))
    }
}
