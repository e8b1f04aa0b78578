//! Token claims for JWT-based session authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default session token time-to-live (30 minutes)
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

/// Claims structure for the JWT payload
///
/// The claim set is fixed and strongly typed: a subject, an issue instant and
/// an expiry instant, nothing else. Tokens carrying additional fields are
/// rejected at decode time (`deny_unknown_fields`) rather than silently
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Claims {
    /// Subject (user ID, stringified)
    pub sub: String,

    /// Issued at timestamp (unix seconds)
    pub iat: i64,

    /// Expiration timestamp (unix seconds)
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a session token
    ///
    /// The expiry is `now + ttl_minutes`; `ttl_minutes` must be positive so
    /// that the `exp > iat` invariant holds.
    pub fn new(subject: impl Into<String>, ttl_minutes: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(ttl_minutes);

        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Checks if the claims are currently valid
    ///
    /// A token is valid while the current time lies in `[iat, exp)`.
    pub fn is_valid(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.iat && now < self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id.to_string(), DEFAULT_TOKEN_TTL_MINUTES);

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.exp - claims.iat, DEFAULT_TOKEN_TTL_MINUTES * 60);
        assert!(claims.exp > claims.iat);
        assert!(claims.is_valid());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_user_id_parsing() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id.to_string(), 30);

        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn test_claims_expiration() {
        let mut claims = Claims::new("42", 30);
        claims.exp = Utc::now().timestamp() - 1;

        assert!(claims.is_expired());
        assert!(!claims.is_valid());
    }

    #[test]
    fn test_claims_expiry_boundary() {
        let mut claims = Claims::new("42", 30);

        // Exactly at the expiry instant the token is no longer valid
        let now = Utc::now().timestamp();
        claims.exp = now;
        assert!(claims.is_expired());

        claims.exp = now + 60;
        assert!(claims.is_valid());
    }

    #[test]
    fn test_claims_not_yet_issued() {
        let mut claims = Claims::new("42", 30);
        claims.iat = Utc::now().timestamp() + 3600;

        assert!(!claims.is_valid());
    }

    #[test]
    fn test_claims_serialization_round_trip() {
        let claims = Claims::new("42", 30);
        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }

    #[test]
    fn test_claims_reject_unknown_fields() {
        let json = r#"{"sub":"42","iat":0,"exp":9999999999,"role":"admin"}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }
}
