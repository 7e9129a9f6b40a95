//! Price catalog API endpoints.
//!
//! `/precios` returns full rows; `/familias` and `/niveles{2,3,4}` return the
//! distinct values at one hierarchy level. All of them go through
//! [`CatalogService`](crate::services::CatalogService).

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use std::sync::Arc;

use super::validation::{query_params, validate_price_order};
use super::{ApiError, AppState, HierarchyQuery};
use crate::db::{HierarchyFilter, Level};
use crate::entities::prices;

impl From<&HierarchyQuery> for HierarchyFilter {
    fn from(query: &HierarchyQuery) -> Self {
        Self {
            family: query.family.clone(),
            level2: query.level2.clone(),
            level3: query.level3.clone(),
            level4: query.level4.clone(),
        }
    }
}

/// `GET /precios?family=&level2=&level3=&level4=&order=`
pub async fn list_prices(
    State(state): State<Arc<AppState>>,
    query: Result<Query<HierarchyQuery>, QueryRejection>,
) -> Result<Json<Vec<prices::Model>>, ApiError> {
    let query = query_params(query)?;
    let order = validate_price_order(query.order.as_deref())?;
    let rows = state
        .catalog_service
        .list_prices(&HierarchyFilter::from(&query), order)
        .await?;
    Ok(Json(rows))
}

async fn list_level(
    state: &AppState,
    target: Level,
    query: &HierarchyQuery,
) -> Result<Json<Vec<String>>, ApiError> {
    let values = state
        .catalog_service
        .list_level(target, &HierarchyFilter::from(query))
        .await?;
    Ok(Json(values))
}

/// `GET /familias`
pub async fn list_families(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    list_level(&state, Level::Family, &HierarchyQuery::default()).await
}

/// `GET /niveles2?family=`
pub async fn list_level2(
    State(state): State<Arc<AppState>>,
    query: Result<Query<HierarchyQuery>, QueryRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    list_level(&state, Level::Level2, &query_params(query)?).await
}

/// `GET /niveles3?family=&level2=`
pub async fn list_level3(
    State(state): State<Arc<AppState>>,
    query: Result<Query<HierarchyQuery>, QueryRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    list_level(&state, Level::Level3, &query_params(query)?).await
}

/// `GET /niveles4?family=&level2=&level3=`
pub async fn list_level4(
    State(state): State<Arc<AppState>>,
    query: Result<Query<HierarchyQuery>, QueryRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    list_level(&state, Level::Level4, &query_params(query)?).await
}
