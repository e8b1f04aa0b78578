//! Configuration for the password hasher

/// Minimum accepted bcrypt work factor
///
/// Anything below 12 is too cheap to brute-force-resist on current hardware.
pub const MIN_HASH_COST: u32 = 12;

/// Maximum work factor bcrypt supports
pub const MAX_HASH_COST: u32 = 31;

/// Configuration for the password hasher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasherConfig {
    /// bcrypt work factor; each increment doubles the hashing cost
    pub cost: u32,
}

impl Default for PasswordHasherConfig {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasherConfig {
    /// Create a configuration with an explicit work factor
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}
