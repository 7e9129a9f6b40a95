use serde::{Deserialize, Serialize};

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub healthy: bool,
}

#[derive(Debug, Serialize)]
pub struct DbCheckResponse {
    pub db_connection: &'static str,
    pub result: i32,
}

/// Login bodies; fields are optional so a missing one is a 400, not a 422.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UsernameLoginRequest {
    #[serde(default)]
    pub username: Option<String>,
}

/// Hierarchy query parameters shared by the catalog listings.
#[derive(Debug, Default, Deserialize)]
pub struct HierarchyQuery {
    pub family: Option<String>,
    pub level2: Option<String>,
    pub level3: Option<String>,
    pub level4: Option<String>,
    pub order: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MonthQuery {
    pub mes: Option<String>,
}
