//! Unit tests for the password hasher

use crate::errors::DomainError;
use crate::services::password::{PasswordHasher, PasswordHasherConfig, MIN_HASH_COST};

use ff_shared::config::ConfigError;

fn hasher() -> PasswordHasher {
    PasswordHasher::new(PasswordHasherConfig::default()).expect("default config is valid")
}

#[test]
fn test_hash_and_verify_round_trip() {
    let hasher = hasher();
    let credential = hasher.hash("Secret123!").unwrap();

    assert!(hasher.verify("Secret123!", &credential));
}

#[test]
fn test_wrong_password_rejected() {
    let hasher = hasher();
    let credential = hasher.hash("Secret123!").unwrap();

    assert!(!hasher.verify("hunter2", &credential));
}

#[test]
fn test_verification_is_case_sensitive() {
    let hasher = hasher();
    let credential = hasher.hash("Secret123!").unwrap();

    assert!(!hasher.verify("secret123!", &credential));
}

#[test]
fn test_salt_randomization() {
    let hasher = hasher();
    let first = hasher.hash("Secret123!").unwrap();
    let second = hasher.hash("Secret123!").unwrap();

    assert_ne!(first, second);
    assert!(hasher.verify("Secret123!", &first));
    assert!(hasher.verify("Secret123!", &second));
}

#[test]
fn test_credential_is_self_describing() {
    let hasher = hasher();
    let credential = hasher.hash("Secret123!").unwrap();

    // Modular crypt format: algorithm id, cost, then salt+digest
    assert!(credential.starts_with("$2"));
    assert!(credential.contains(&format!("${:02}$", hasher.cost())));
}

#[test]
fn test_malformed_credential_fails_closed() {
    let hasher = hasher();

    assert!(!hasher.verify("Secret123!", "not-a-credential"));
    assert!(!hasher.verify("Secret123!", ""));
    assert!(!hasher.verify("Secret123!", "$9z$12$unknown-algorithm"));
}

#[test]
fn test_empty_password_rejected() {
    let hasher = hasher();
    let result = hasher.hash("");

    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[test]
fn test_cost_below_minimum_rejected() {
    let result = PasswordHasher::new(PasswordHasherConfig::with_cost(MIN_HASH_COST - 1));

    assert!(matches!(result, Err(ConfigError::InvalidHashCost { .. })));
}

#[test]
fn test_cost_above_maximum_rejected() {
    let result = PasswordHasher::new(PasswordHasherConfig::with_cost(40));

    assert!(matches!(result, Err(ConfigError::InvalidHashCost { .. })));
}
