//! `SeaORM` implementation of the `CatalogService` trait.

use async_trait::async_trait;

use crate::db::{HierarchyFilter, Level, PriceOrder, Store};
use crate::entities::prices;
use crate::services::catalog_service::{CatalogError, CatalogService};

pub struct SeaOrmCatalogService {
    store: Store,
}

impl SeaOrmCatalogService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

fn require_family(filter: &HierarchyFilter) -> Result<(), CatalogError> {
    if filter.has_family() {
        Ok(())
    } else {
        Err(CatalogError::Validation("family is required".to_string()))
    }
}

#[async_trait]
impl CatalogService for SeaOrmCatalogService {
    async fn list_prices(
        &self,
        filter: &HierarchyFilter,
        order: PriceOrder,
    ) -> Result<Vec<prices::Model>, CatalogError> {
        require_family(filter)?;

        let rows = self.store.list_prices(&filter.spec(), order).await?;
        Ok(rows)
    }

    async fn list_level(
        &self,
        target: Level,
        filter: &HierarchyFilter,
    ) -> Result<Vec<String>, CatalogError> {
        if target != Level::Family {
            require_family(filter)?;
        }

        let spec = filter.spec_for(target.parents());
        let values = self.store.distinct_level_values(target, &spec).await?;
        Ok(values)
    }
}
