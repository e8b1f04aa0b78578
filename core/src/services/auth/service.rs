//! Main authentication service implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Authentication service orchestrating registration, login and request
/// authentication
///
/// Persistence stays behind the [`UserRepository`] seam; this service only
/// combines the password hasher and the token service around it. Password
/// hashing and verification are dispatched to `spawn_blocking` so the
/// deliberately expensive bcrypt work never stalls the async runtime, while
/// token operations run inline (they cost microseconds).
pub struct AuthService<U: UserRepository> {
    /// User repository for persistence operations
    user_repository: Arc<U>,
    /// Password hasher for credential handling
    password_hasher: Arc<PasswordHasher>,
    /// Token service for session token management
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U: UserRepository> AuthService<U> {
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        password_hasher: Arc<PasswordHasher>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_service,
            config,
        }
    }

    /// Register a new user account
    ///
    /// Checks for a duplicate email, hashes the password on the blocking
    /// pool, persists the new user, and issues a session token bound to the
    /// new account identifier.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Bearer token for the new account
    /// * `Err(DomainError)` - Registration disabled, duplicate email, or
    ///   persistence failure
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<AuthResponse> {
        if !self.config.allow_registration {
            return Err(AuthError::RegistrationDisabled.into());
        }

        if self.user_repository.exists_by_email(email).await? {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.hash_password(password.to_string()).await?;
        let user = self
            .user_repository
            .create(User::new(name, email, password_hash))
            .await?;

        tracing::info!(user_id = %user.id, "user registered");
        self.issue_response(&user)
    }

    /// Authenticate an email/password pair and issue a session token
    ///
    /// An unknown email and a wrong password produce the same
    /// [`AuthError::AuthenticationFailed`]; callers surface one generic
    /// "incorrect email or password" message for both.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let mut user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => {
                tracing::warn!("login failed: unknown account");
                return Err(AuthError::AuthenticationFailed.into());
            }
        };

        if !self
            .verify_password(password.to_string(), user.password_hash.clone())
            .await?
        {
            tracing::warn!(user_id = %user.id, "login failed: credential mismatch");
            return Err(AuthError::AuthenticationFailed.into());
        }

        user.update_last_login();
        let user = self.user_repository.update(user).await?;

        tracing::debug!(user_id = %user.id, "login succeeded");
        self.issue_response(&user)
    }

    /// Resolve a presented session token to the acting user
    ///
    /// Validates the token, parses its subject as a user id, and loads the
    /// user through the repository. A valid token whose account no longer
    /// exists fails exactly like any other authentication failure.
    pub async fn authenticate(&self, token: &str) -> DomainResult<User> {
        let subject = self.token_service.validate(token)?;
        let user_id = Uuid::parse_str(&subject).map_err(|_| TokenError::Malformed)?;

        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::AuthenticationFailed))
    }

    /// Issue a bearer response for an authenticated user
    fn issue_response(&self, user: &User) -> DomainResult<AuthResponse> {
        let token = self.token_service.issue(&user.id.to_string())?;
        Ok(AuthResponse::bearer(
            token,
            self.token_service.expires_in_seconds(),
        ))
    }

    /// Hash a password on the blocking pool
    async fn hash_password(&self, password: String) -> DomainResult<String> {
        let hasher = Arc::clone(&self.password_hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|_| DomainError::Internal {
                message: "password hashing task failed".to_string(),
            })?
    }

    /// Verify a password against a stored credential on the blocking pool
    async fn verify_password(&self, password: String, credential: String) -> DomainResult<bool> {
        let hasher = Arc::clone(&self.password_hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&password, &credential))
            .await
            .map_err(|_| DomainError::Internal {
                message: "password verification task failed".to_string(),
            })
    }
}
