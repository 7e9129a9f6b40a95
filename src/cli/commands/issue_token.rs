//! Token issuing helper for operators

use crate::auth::{TokenKeys, normalize_username};
use crate::config::{Config, ConfigError};

pub fn cmd_issue_token(config: &Config, username: &str) -> anyhow::Result<()> {
    if config.auth.secret_key.is_empty() {
        anyhow::bail!(ConfigError::Missing("SECRET_KEY"));
    }

    let username = normalize_username(username);
    if username.is_empty() {
        anyhow::bail!("Username cannot be empty");
    }

    let keys = TokenKeys::from_config(&config.auth);
    let token = keys.issue(&username)?;

    println!("{}", token);
    Ok(())
}
