//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};

use ff_shared::config::ConfigError;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and validating stateless session tokens
///
/// All operations are pure functions of (input, signing secret, current
/// time). The secret is loaded once at construction and held immutably for
/// the process lifetime; the service is `Send + Sync` and safe to share
/// across concurrent requests without locking.
pub struct TokenService {
    ttl_minutes: i64,
    algorithm: jsonwebtoken::Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// Fails at startup with a [`ConfigError`] on an empty secret or a
    /// non-positive time-to-live. No grace window is granted at expiry
    /// (`leeway = 0`); issue and validation read the same wall clock within
    /// one process, which is a documented limitation rather than something
    /// patched over with leeway.
    pub fn new(config: TokenServiceConfig) -> Result<Self, ConfigError> {
        if config.secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        if config.ttl_minutes <= 0 {
            return Err(ConfigError::InvalidTokenTtl {
                minutes: config.ttl_minutes,
            });
        }

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            ttl_minutes: config.ttl_minutes,
            algorithm: config.algorithm,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues a signed session token for a subject
    ///
    /// Claims are `{ sub, iat: now, exp: now + ttl }`, HMAC-signed into a
    /// compact URL/header-safe JWS string. Two calls at different instants
    /// produce different tokens for the same subject.
    pub fn issue(&self, subject: &str) -> DomainResult<String> {
        if subject.is_empty() {
            return Err(DomainError::Validation {
                message: "token subject must not be empty".to_string(),
            });
        }

        let claims = Claims::new(subject, self.ttl_minutes);
        self.encode(&claims)
    }

    /// Encodes claims into a signed JWT
    pub(crate) fn encode(&self, claims: &Claims) -> DomainResult<String> {
        jsonwebtoken::encode(&Header::new(self.algorithm), claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Validates a presented token and returns its subject
    ///
    /// The signature is verified before any claim value is trusted, so an
    /// attacker cannot smuggle in an arbitrary expiry: a tampered token
    /// fails [`TokenError::InvalidSignature`] even if its claims section
    /// claims to be fresh. Authentically signed but stale tokens fail
    /// [`TokenError::Expired`] — the token is live strictly before its
    /// `exp` instant and already expired at it; anything structurally
    /// unreadable (bad
    /// base64/JSON, missing `sub`, extra claim fields, wrong algorithm
    /// header) fails [`TokenError::Malformed`].
    ///
    /// The returned subject is an opaque identifier; no user-store lookup
    /// happens here.
    pub fn validate(&self, token: &str) -> Result<String, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                let kind = match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::Malformed,
                };
                tracing::debug!(error = %kind, "token rejected");
                kind
            })?;

        // jsonwebtoken still accepts a token at the exact expiry second;
        // the validity window is [iat, exp), so re-check after decode.
        if data.claims.is_expired() {
            tracing::debug!(error = %TokenError::Expired, "token rejected");
            return Err(TokenError::Expired);
        }

        Ok(data.claims.sub)
    }

    /// Token lifetime in seconds, as reported to clients
    pub fn expires_in_seconds(&self) -> i64 {
        self.ttl_minutes * 60
    }

    /// Token lifetime in minutes
    pub fn ttl_minutes(&self) -> i64 {
        self.ttl_minutes
    }
}
