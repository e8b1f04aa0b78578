//! Configuration for the token service

use ff_shared::config::{ConfigError, JwtConfig};
use jsonwebtoken::Algorithm;

use crate::domain::entities::token::DEFAULT_TOKEN_TTL_MINUTES;

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// Signing secret (HMAC key material)
    pub secret: String,
    /// JWT signing algorithm; only symmetric HMAC variants are supported
    pub algorithm: Algorithm,
    /// Session token time-to-live in minutes
    pub ttl_minutes: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: ff_shared::config::DEFAULT_DEV_SECRET.to_string(),
            algorithm: Algorithm::HS256,
            ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
        }
    }
}

// Manual Debug so the secret never reaches logs
impl std::fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl TryFrom<&JwtConfig> for TokenServiceConfig {
    type Error = ConfigError;

    fn try_from(config: &JwtConfig) -> Result<Self, Self::Error> {
        let algorithm = match config.algorithm.as_str() {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            other => {
                return Err(ConfigError::UnsupportedAlgorithm {
                    name: other.to_string(),
                })
            }
        };

        Ok(Self {
            secret: config.secret.clone(),
            algorithm,
            ttl_minutes: config.access_token_expiry_minutes(),
        })
    }
}
