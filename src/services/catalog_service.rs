//! Domain service for the price catalog.
//!
//! Lists catalog rows and the distinct values at each hierarchy level.

use thiserror::Error;

use crate::db::{HierarchyFilter, Level, PriceOrder};
use crate::entities::prices;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for CatalogError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

#[async_trait::async_trait]
pub trait CatalogService: Send + Sync {
    /// Catalog rows of one family, narrowed by any supplied deeper levels.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] if `family` is missing.
    async fn list_prices(
        &self,
        filter: &HierarchyFilter,
        order: PriceOrder,
    ) -> Result<Vec<prices::Model>, CatalogError>;

    /// Distinct values at `target`, filtered by the supplied values of the
    /// levels above it. Only [`Level::Family`] may be listed without a family.
    async fn list_level(
        &self,
        target: Level,
        filter: &HierarchyFilter,
    ) -> Result<Vec<String>, CatalogError>;
}
