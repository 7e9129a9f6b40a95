//! Credential digests and bearer tokens.

/// Legacy unsalted password digests
pub mod password;

/// Access token issuing and verification (jsonwebtoken)
pub mod jwt;

pub use jwt::{Claims, TokenError, TokenKeys};

/// Usernames are compared trimmed and lowercased.
#[must_use]
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}
