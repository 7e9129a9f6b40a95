//! Domain service for authentication.
//!
//! Handles password login, username-only login and bearer token checks.

use serde::Serialize;
use thiserror::Error;

use crate::auth::TokenError;

/// Errors specific to authentication operations.
///
/// Everything except `Validation` and `Database` is reported to clients as
/// the same 401.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("User is inactive")]
    UserInactive,

    #[error("Invalid token: {0}")]
    Token(#[from] TokenError),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Successful login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: &'static str,
}

impl AccessToken {
    #[must_use]
    pub const fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer",
        }
    }
}

/// Domain service trait for authentication.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Verifies username and password and issues an access token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] if a field is empty and one of the
    /// unauthorized variants if the credentials do not match an active user.
    async fn login(&self, username: &str, password: &str) -> Result<AccessToken, AuthError>;

    /// Issues an access token for any active user, without a password.
    async fn login_username(&self, username: &str) -> Result<AccessToken, AuthError>;

    /// Returns the username a bearer token was issued to.
    fn verify_token(&self, token: &str) -> Result<String, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_shape() {
        let json = serde_json::to_value(AccessToken::bearer("abc".to_string())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"access_token": "abc", "token_type": "bearer"})
        );
    }
}
