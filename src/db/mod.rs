use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::future::Future;
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::entities::prices;
use crate::models::{MonthlyEarnings, Month};

pub mod filter;
pub mod repositories;

pub use filter::{FilterSpec, HierarchyFilter, Level, PriceOrder};
pub use repositories::user::CredentialLookup;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
    query_timeout: Duration,
}

impl Store {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let mut opt = ConnectOptions::new(config.url.clone());
        opt.max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .acquire_timeout(Duration::from_secs(config.query_timeout_seconds))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt)
            .await
            .context("Failed to connect to database")?;

        info!(
            "Database connected (pool: {}-{})",
            config.min_connections, config.max_connections
        );

        Ok(Self::from_connection(
            conn,
            Duration::from_secs(config.query_timeout_seconds),
        ))
    }

    #[must_use]
    pub const fn from_connection(conn: DatabaseConnection, query_timeout: Duration) -> Self {
        Self {
            conn,
            query_timeout,
        }
    }

    /// Fails when `operation` does not finish within the query timeout.
    async fn timed<T>(&self, what: &str, operation: impl Future<Output = Result<T>>) -> Result<T> {
        tokio::time::timeout(self.query_timeout, operation)
            .await
            .map_err(|_| {
                anyhow::anyhow!("{what} timed out after {}s", self.query_timeout.as_secs())
            })?
    }

    /// Runs `SELECT 1` and returns its value.
    pub async fn ping(&self) -> Result<i32> {
        self.timed("Database ping", async {
            let backend = self.conn.get_database_backend();
            let row = self
                .conn
                .query_one(Statement::from_string(
                    backend,
                    "SELECT 1 AS result".to_string(),
                ))
                .await?
                .context("Database ping returned no rows")?;

            Ok::<i32, anyhow::Error>(row.try_get("", "result")?)
        })
        .await
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn catalog_repo(&self) -> repositories::catalog::CatalogRepository {
        repositories::catalog::CatalogRepository::new(self.conn.clone())
    }

    fn sales_repo(&self) -> repositories::sales::SalesRepository {
        repositories::sales::SalesRepository::new(self.conn.clone())
    }

    pub async fn find_credentials(&self, username: &str) -> Result<CredentialLookup> {
        self.timed("User lookup", self.user_repo().find_credentials(username))
            .await
    }

    pub async fn list_prices(
        &self,
        spec: &FilterSpec,
        order: PriceOrder,
    ) -> Result<Vec<prices::Model>> {
        self.timed("Price listing", self.catalog_repo().list(spec, order))
            .await
    }

    pub async fn distinct_level_values(
        &self,
        target: Level,
        spec: &FilterSpec,
    ) -> Result<Vec<String>> {
        self.timed(
            "Level listing",
            self.catalog_repo().distinct_values(target, spec),
        )
        .await
    }

    pub async fn monthly_earnings(
        &self,
        month: Month,
        categories: &[String],
    ) -> Result<Vec<MonthlyEarnings>> {
        self.timed(
            "Earnings aggregation",
            self.sales_repo().monthly_earnings(month, categories),
        )
        .await
    }
}
