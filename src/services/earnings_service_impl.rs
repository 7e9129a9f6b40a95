//! `SeaORM` implementation of the `EarningsService` trait.

use async_trait::async_trait;
use std::sync::Arc;

use crate::db::Store;
use crate::models::{Month, MonthlyEarnings};
use crate::services::earnings_service::{EarningsError, EarningsService};

pub struct SeaOrmEarningsService {
    store: Store,
    categories: Arc<[String]>,
}

impl SeaOrmEarningsService {
    #[must_use]
    pub fn new(store: Store, categories: &[String]) -> Self {
        Self {
            store,
            categories: categories.into(),
        }
    }
}

#[async_trait]
impl EarningsService for SeaOrmEarningsService {
    async fn monthly_earnings(&self, month: &str) -> Result<Vec<MonthlyEarnings>, EarningsError> {
        let month = Month::parse(month)?;
        let rows = self.store.monthly_earnings(month, &self.categories).await?;
        Ok(rows)
    }
}
