//! # FitForge Core
//!
//! Core business logic and domain layer for the FitForge backend.
//! This crate contains the credential and session-token subsystem: password
//! hashing/verification, signed-token issuance/validation, the authentication
//! service that ties them together, repository interfaces, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, User, DEFAULT_TOKEN_TTL_MINUTES};
pub use domain::value_objects::AuthResponse;
pub use errors::{AuthError, ConfigError, DomainError, DomainResult, TokenError};
pub use repositories::{MockUserRepository, UserRepository};
pub use services::{
    AuthService, AuthServiceConfig, PasswordHasher, PasswordHasherConfig, TokenService,
    TokenServiceConfig,
};
