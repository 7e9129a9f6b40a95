//! Database connectivity check

use crate::config::{Config, ConfigError};
use crate::db::Store;

pub async fn cmd_check_db(config: &Config) -> anyhow::Result<()> {
    if config.database.url.trim().is_empty() {
        anyhow::bail!(ConfigError::Missing("DATABASE_URL"));
    }

    let store = Store::connect(&config.database).await?;
    let result = store.ping().await?;

    println!("✓ Database connection ok (SELECT 1 returned {})", result);
    Ok(())
}
