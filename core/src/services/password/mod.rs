//! Password hashing service module
//!
//! Turns plaintext passwords into non-reversible bcrypt credentials and
//! verifies later guesses against them without leaking timing information.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::{PasswordHasherConfig, MAX_HASH_COST, MIN_HASH_COST};
pub use service::PasswordHasher;
