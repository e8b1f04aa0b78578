//! Domain-specific error types for authentication and token operations
//!
//! Per-request failures are plain enum values, never panics. The actual
//! user-facing messages are produced at the boundary (`IntoErrorResponse`),
//! which deliberately collapses all authentication failures into one
//! indistinguishable response.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email, wrong password, or missing account. One variant on
    /// purpose: callers must not be able to tell these cases apart.
    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Registration disabled")]
    RegistrationDisabled,
}

/// Token-related errors
///
/// A token is either structurally unreadable (`Malformed`), carries a
/// signature that does not match the signing secret (`InvalidSignature`),
/// or is past its encoded expiry (`Expired`). Signature verification always
/// happens before any claim is trusted, so `Expired` is only ever reported
/// for authentically signed tokens.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    #[error("Token generation failed")]
    GenerationFailed,
}
