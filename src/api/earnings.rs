use axum::{
    Extension, Json,
    extract::{Query, State, rejection::QueryRejection},
};
use std::sync::Arc;

use super::validation::{query_params, require_param};
use super::{ApiError, AppState, CurrentUser, MonthQuery};
use crate::models::MonthlyEarnings;

/// `GET /ganancias-por-mes?mes=MM`
///
/// One row per year-month for the requested month of the year, with each
/// category's net-of-tax total.
pub async fn monthly_earnings(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(username)): Extension<CurrentUser>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> Result<Json<Vec<MonthlyEarnings>>, ApiError> {
    let query = query_params(query)?;
    let month = require_param("mes", query.mes.as_deref())?;
    let rows = state.earnings_service.monthly_earnings(month).await?;

    tracing::debug!(%username, month, rows = rows.len(), "Earnings report served");
    Ok(Json(rows))
}
