//! Authentication response value object for API responses.

use serde::{Deserialize, Serialize};

/// Authentication response returned after successful registration or login
///
/// Carries the signed session token, the scheme clients should present it
/// with, and the token lifetime. The stored credential never appears here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Signed JWT session token
    pub access_token: String,

    /// Token scheme for the Authorization header
    pub token_type: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,
}

impl AuthResponse {
    /// Creates a new bearer-token authentication response
    pub fn bearer(access_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            token_type: String::from("bearer"),
            expires_in,
        }
    }
}
