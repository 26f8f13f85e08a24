//! Outbound adapters implementing the driven domain ports.
//!
//! - **persistence**: in-memory collections backing the book and user
//!   repositories, plus the seed records loaded at startup.
//! - **password**: bcrypt hashing and verification.
//!
//! Adapters translate between storage details and domain types; they hold no
//! business rules.

pub mod password;
pub mod persistence;
