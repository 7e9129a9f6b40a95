use anyhow::{Context, Result};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::auth::normalize_username;
use crate::entities::{prelude::*, users};

/// Outcome of a credential lookup.
///
/// `Inactive` and `Missing` must look the same to clients; they are kept
/// apart here so logs can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialLookup {
    Active {
        username: String,
        password_hash: String,
    },
    Inactive,
    Missing,
}

pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Looks up the stored digest for a username (trimmed, lowercased).
    pub async fn find_credentials(&self, username: &str) -> Result<CredentialLookup> {
        let username = normalize_username(username);
        if username.is_empty() {
            return Ok(CredentialLookup::Missing);
        }

        let user = Users::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.conn)
            .await
            .context("Failed to query user by username")?;

        Ok(match user {
            Some(user) if user.active => CredentialLookup::Active {
                username: user.username,
                password_hash: user.password_hash,
            },
            Some(_) => CredentialLookup::Inactive,
            None => CredentialLookup::Missing,
        })
    }
}
