//! Authentication and token-signing configuration

use serde::{Deserialize, Serialize};

/// Placeholder secret shipped in development configurations.
pub const DEFAULT_DEV_SECRET: &str = "development-secret-please-change-in-production";

/// Minimum signing secret length in bytes accepted in production (256 bits).
pub const MIN_SECRET_BYTES: usize = 32;

/// JWT authentication configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_DEV_SECRET),
            access_token_expiry: 1800, // 30 minutes
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Create from environment variables (`SECRET_KEY`,
    /// `ACCESS_TOKEN_EXPIRE_MINUTES`, `JWT_ALGORITHM`)
    pub fn from_env() -> Self {
        let secret = std::env::var("SECRET_KEY").unwrap_or_else(|_| DEFAULT_DEV_SECRET.to_string());
        let expiry_minutes = std::env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);
        let algorithm = std::env::var("JWT_ALGORITHM").unwrap_or_else(|_| default_algorithm());

        Self {
            secret,
            access_token_expiry: expiry_minutes * 60,
            algorithm,
        }
    }

    /// Check if using the development placeholder secret
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_DEV_SECRET
    }

    /// Check if the secret carries too little entropy for production use
    pub fn has_weak_secret(&self) -> bool {
        self.secret.len() < MIN_SECRET_BYTES
    }

    /// Get access token expiry in whole minutes
    pub fn access_token_expiry_minutes(&self) -> i64 {
        self.access_token_expiry / 60
    }
}

// The signing secret must never reach logs, so Debug is written by hand.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}
