//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, TokenError};

use ff_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

// Re-exported so downstream crates reach the startup-fatal kind through core
pub use ff_shared::config::ConfigError;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl IntoErrorResponse for DomainError {
    /// Map a domain error to the boundary response.
    ///
    /// Every authentication and token failure collapses into one identical
    /// `UNAUTHORIZED` response; whether a login failed on an unknown email,
    /// a wrong password, a forged signature, or an expired token is never
    /// observable from the outside.
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            DomainError::Auth(_) | DomainError::Token(_) => {
                ErrorResponse::new(error_codes::UNAUTHORIZED, "Invalid authentication credentials")
            }
            DomainError::Validation { message } => {
                ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone())
            }
            DomainError::NotFound { resource } => ErrorResponse::new(
                error_codes::NOT_FOUND,
                format!("Resource not found: {}", resource),
            ),
            // Internal details stay server-side
            DomainError::Internal { .. } => {
                ErrorResponse::new(error_codes::INTERNAL_ERROR, "Internal server error")
            }
        }
    }
}
