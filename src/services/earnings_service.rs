//! Domain service for monthly earnings reports.

use thiserror::Error;

use crate::models::{InvalidMonth, MonthlyEarnings};

#[derive(Debug, Error)]
pub enum EarningsError {
    #[error(transparent)]
    InvalidMonth(#[from] InvalidMonth),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for EarningsError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

#[async_trait::async_trait]
pub trait EarningsService: Send + Sync {
    /// Per-category earnings, net of tax, for `month` (`"01"`..`"12"`) of every year.
    ///
    /// # Errors
    ///
    /// Returns [`EarningsError::InvalidMonth`] unless `month` is two digits in 01..=12.
    async fn monthly_earnings(&self, month: &str) -> Result<Vec<MonthlyEarnings>, EarningsError>;
}
