//! `SeaORM` implementation of the `AuthService` trait.

use async_trait::async_trait;
use tracing::debug;

use crate::auth::{TokenKeys, normalize_username, password};
use crate::db::{CredentialLookup, Store};
use crate::services::auth_service::{AccessToken, AuthError, AuthService};

pub struct SeaOrmAuthService {
    store: Store,
    keys: TokenKeys,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(store: Store, keys: TokenKeys) -> Self {
        Self { store, keys }
    }

    /// Resolves an active user's stored digest, or the reason there is none.
    async fn active_user(&self, username: &str) -> Result<(String, String), AuthError> {
        match self.store.find_credentials(username).await? {
            CredentialLookup::Active {
                username,
                password_hash,
            } => Ok((username, password_hash)),
            CredentialLookup::Inactive => {
                debug!(%username, "Login refused: user inactive");
                Err(AuthError::UserInactive)
            }
            CredentialLookup::Missing => {
                debug!(%username, "Login refused: user not found");
                Err(AuthError::UserNotFound)
            }
        }
    }

    fn issue(&self, username: &str) -> Result<AccessToken, AuthError> {
        let token = self.keys.issue(username)?;
        Ok(AccessToken::bearer(token))
    }
}

fn require_username(username: &str) -> Result<String, AuthError> {
    let username = normalize_username(username);
    if username.is_empty() {
        return Err(AuthError::Validation("Username is required".to_string()));
    }
    Ok(username)
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn login(&self, username: &str, password: &str) -> Result<AccessToken, AuthError> {
        let username = require_username(username)?;
        if password.is_empty() {
            return Err(AuthError::Validation("Password is required".to_string()));
        }

        let (username, stored_digest) = self.active_user(&username).await?;

        if !password::verify(password, &stored_digest) {
            debug!(%username, "Login refused: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!(%username, "User logged in");
        self.issue(&username)
    }

    async fn login_username(&self, username: &str) -> Result<AccessToken, AuthError> {
        let username = require_username(username)?;
        let (username, _) = self.active_user(&username).await?;

        tracing::info!(%username, "User logged in by username");
        self.issue(&username)
    }

    fn verify_token(&self, token: &str) -> Result<String, AuthError> {
        self.keys.verify(token).map_err(|e| {
            debug!(error = %e, "Bearer token rejected");
            AuthError::Token(e)
        })
    }
}
