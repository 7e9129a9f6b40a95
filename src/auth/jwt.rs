use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AuthConfig;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated username
    #[serde(default)]
    pub sub: String,
    /// Issued at (unix seconds)
    #[serde(default)]
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// Why a presented token was refused.
///
/// Callers report all of these as a plain 401; the distinction only
/// reaches logs and tests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("token signature mismatch")]
    BadSignature,

    #[error("malformed token: {0}")]
    Malformed(String),

    #[error("token has no subject")]
    MissingSubject,

    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// HS256 keys and lifetime shared by every request.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
    validation: Validation,
}

impl std::fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenKeys")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenKeys {
    #[must_use]
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
            validation,
        }
    }

    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            config.secret_key.as_bytes(),
            Duration::minutes(config.token_ttl_minutes),
        )
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Signs a token for `username` valid for the configured lifetime.
    pub fn issue(&self, username: &str) -> Result<String, TokenError> {
        self.issue_at(username, Utc::now())
    }

    pub fn issue_at(&self, username: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Checks signature and expiry and returns the username the token was issued to.
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                ErrorKind::MissingRequiredClaim(claim) if claim == "sub" => {
                    TokenError::MissingSubject
                }
                _ => TokenError::Malformed(e.to_string()),
            }
        })?;

        let username = data.claims.sub;
        if username.trim().is_empty() {
            return Err(TokenError::MissingSubject);
        }

        Ok(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> TokenKeys {
        TokenKeys::new(b"test-secret", Duration::minutes(60))
    }

    #[test]
    fn test_issue_then_verify_returns_username() {
        let keys = keys();
        let token = keys.issue("alice").unwrap();
        assert_eq!(keys.verify(&token).unwrap(), "alice");
    }

    #[test]
    fn test_expiry_is_sixty_minutes_after_issue() {
        let keys = TokenKeys::from_config(&AuthConfig {
            secret_key: "s".to_string(),
            token_ttl_minutes: 60,
        });
        assert_eq!(keys.ttl(), Duration::minutes(60));

        let now = Utc::now();
        let token = keys.issue_at("alice", now).unwrap();
        let data = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"s"),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();
        assert_eq!(data.claims.exp - data.claims.iat, 3600);
        assert_eq!(data.claims.iat, now.timestamp());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let keys = keys();
        let issued = Utc::now() - Duration::minutes(61);
        let token = keys.issue_at("alice", issued).unwrap();
        assert_eq!(keys.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let other = TokenKeys::new(b"another-secret", Duration::minutes(60));
        let token = other.issue("alice").unwrap();
        assert_eq!(keys().verify(&token), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let keys = keys();
        let token = keys.issue("alice").unwrap();
        let forged_payload = {
            let other = keys.issue("mallory").unwrap();
            other.split('.').nth(1).unwrap().to_string()
        };

        let mut parts: Vec<&str> = token.split('.').collect();
        parts[1] = &forged_payload;
        let tampered = parts.join(".");

        assert_eq!(keys.verify(&tampered), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert!(matches!(
            keys().verify("not-a-token"),
            Err(TokenError::Malformed(_))
        ));
        assert!(matches!(keys().verify(""), Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_token_without_subject_is_rejected() {
        #[derive(Serialize)]
        struct NoSubject {
            exp: i64,
        }

        let claims = NoSubject {
            exp: (Utc::now() + Duration::minutes(5)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_eq!(keys().verify(&token), Err(TokenError::MissingSubject));
    }

    #[test]
    fn test_empty_subject_is_rejected() {
        let token = keys().issue("   ").unwrap();
        assert_eq!(keys().verify(&token), Err(TokenError::MissingSubject));
    }
}
