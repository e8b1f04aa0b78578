//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token-signing configuration
//! - `environment` - Environment detection

pub mod auth;
pub mod environment;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::{JwtConfig, DEFAULT_DEV_SECRET, MIN_SECRET_BYTES};
pub use environment::Environment;

/// Startup-fatal configuration errors
///
/// These are the only errors allowed to abort process startup. They never
/// appear on a per-request path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("signing secret is missing or empty")]
    MissingSecret,

    #[error("signing secret is the development placeholder and cannot be used in production")]
    DefaultSecret,

    #[error("signing secret is shorter than {min_bytes} bytes")]
    WeakSecret { min_bytes: usize },

    #[error("unsupported token signing algorithm: {name}")]
    UnsupportedAlgorithm { name: String },

    #[error("token time-to-live must be positive, got {minutes} minutes")]
    InvalidTokenTtl { minutes: i64 },

    #[error("password hash cost {cost} outside supported range {min}..={max}")]
    InvalidHashCost { cost: u32, min: u32, max: u32 },
}

/// Complete application configuration for the security core
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Token signing configuration
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            jwt: JwtConfig::from_env(),
        }
    }

    /// Validate the configuration at startup
    ///
    /// An empty secret is always fatal. In production the development
    /// placeholder secret, or any secret shorter than [`MIN_SECRET_BYTES`],
    /// is fatal as well.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }

        if self.environment.is_production() {
            if self.jwt.is_using_default_secret() {
                return Err(ConfigError::DefaultSecret);
            }
            if self.jwt.has_weak_secret() {
                return Err(ConfigError::WeakSecret {
                    min_bytes: MIN_SECRET_BYTES,
                });
            }
        }

        if self.jwt.access_token_expiry <= 0 {
            return Err(ConfigError::InvalidTokenTtl {
                minutes: self.jwt.access_token_expiry_minutes(),
            });
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            jwt: JwtConfig::default(),
        }
    }
}
