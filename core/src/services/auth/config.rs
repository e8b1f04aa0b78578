//! Configuration for the authentication service

/// Configuration for the authentication service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthServiceConfig {
    /// Whether to allow registration of new users
    pub allow_registration: bool,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            allow_registration: true,
        }
    }
}
