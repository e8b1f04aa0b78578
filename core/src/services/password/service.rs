//! Password hashing and verification

use ff_shared::config::ConfigError;

use crate::errors::{DomainError, DomainResult};

use super::config::{PasswordHasherConfig, MAX_HASH_COST, MIN_HASH_COST};

/// One-way, salted, adaptive-cost password hasher
///
/// Produces self-describing bcrypt credential strings (algorithm, cost, salt
/// and digest all encoded), so the work factor can be raised later without
/// breaking verification of existing credentials. Stateless apart from the
/// configured cost; safe to share across concurrent requests.
///
/// Hashing is deliberately expensive (hundreds of milliseconds at the
/// default cost). Async callers must dispatch it through a blocking pool
/// rather than hash on the runtime threads; see
/// [`AuthService`](crate::services::auth::AuthService).
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Creates a new password hasher
    ///
    /// Fails at startup with a [`ConfigError`] if the configured work factor
    /// is outside `MIN_HASH_COST..=MAX_HASH_COST`.
    pub fn new(config: PasswordHasherConfig) -> Result<Self, ConfigError> {
        if config.cost < MIN_HASH_COST || config.cost > MAX_HASH_COST {
            return Err(ConfigError::InvalidHashCost {
                cost: config.cost,
                min: MIN_HASH_COST,
                max: MAX_HASH_COST,
            });
        }
        Ok(Self { cost: config.cost })
    }

    /// The configured work factor
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hashes a plaintext password into a stored credential
    ///
    /// A fresh random salt is generated per call, so hashing the same
    /// password twice yields different credential strings. Empty plaintext
    /// is rejected; primitive failures are internal errors, never an
    /// ordinary mismatch.
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        if plaintext.is_empty() {
            return Err(DomainError::Validation {
                message: "password must not be empty".to_string(),
            });
        }

        bcrypt::hash(plaintext, self.cost).map_err(|e| {
            tracing::error!(error = %e, "password hashing primitive failed");
            DomainError::Internal {
                message: "password hashing failed".to_string(),
            }
        })
    }

    /// Verifies a plaintext guess against a stored credential
    ///
    /// Recomputes the digest with the cost and salt encoded in the
    /// credential and compares constant-time against the stored digest.
    /// Fails closed: a malformed or unrecognized credential yields `false`,
    /// indistinguishable from a wrong password.
    pub fn verify(&self, plaintext: &str, credential: &str) -> bool {
        bcrypt::verify(plaintext, credential).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: PasswordHasherConfig::default().cost,
        }
    }
}
