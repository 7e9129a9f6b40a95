use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ErrorBody;
use crate::services::{AuthError, CatalogError, EarningsError};

#[derive(Debug)]
pub enum ApiError {
    ValidationError(String),

    Unauthorized(String),

    NotFound(String),

    /// Database unreachable or query failed; the text is passed through.
    UpstreamError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::UpstreamError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::UpstreamError(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let mut response = (status, Json(ErrorBody { detail })).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(msg) => Self::validation(msg),
            AuthError::Database(msg) => Self::upstream(msg),
            AuthError::Token(_) => Self::unauthorized("Could not validate credentials"),
            AuthError::InvalidCredentials | AuthError::UserNotFound | AuthError::UserInactive => {
                Self::unauthorized("Invalid credentials")
            }
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(msg) => Self::validation(msg),
            CatalogError::Database(msg) => Self::upstream(msg),
        }
    }
}

impl From<EarningsError> for ApiError {
    fn from(err: EarningsError) -> Self {
        match err {
            EarningsError::InvalidMonth(e) => Self::validation(e.to_string()),
            EarningsError::Database(msg) => Self::upstream(msg),
        }
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::ValidationError(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        ApiError::Unauthorized(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        ApiError::UpstreamError(msg.into())
    }

    pub fn not_found(what: impl fmt::Display) -> Self {
        ApiError::NotFound(format!("{} not found", what))
    }
}
