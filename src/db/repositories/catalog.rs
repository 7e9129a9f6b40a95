use anyhow::{Context, Result};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::db::filter::{FilterSpec, Level, PriceOrder};
use crate::entities::{prelude::*, prices};

pub struct CatalogRepository {
    conn: DatabaseConnection,
}

impl CatalogRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Full catalog rows matching `spec`.
    pub async fn list(&self, spec: &FilterSpec, order: PriceOrder) -> Result<Vec<prices::Model>> {
        let query = order
            .columns()
            .into_iter()
            .fold(spec.apply(Prices::find()), |query, column| {
                query.order_by_asc(column)
            });

        query
            .all(&self.conn)
            .await
            .context("Failed to list prices")
    }

    /// Distinct non-empty values of `target` among rows matching `spec`.
    pub async fn distinct_values(&self, target: Level, spec: &FilterSpec) -> Result<Vec<String>> {
        let column = target.column();

        spec.apply(Prices::find())
            .select_only()
            .column(column)
            .filter(column.is_not_null())
            .filter(column.ne(""))
            .group_by(column)
            .order_by_asc(column)
            .into_tuple::<String>()
            .all(&self.conn)
            .await
            .with_context(|| format!("Failed to list distinct {} values", target.name()))
    }
}
