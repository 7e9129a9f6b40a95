use axum::{
    Json,
    extract::{Request, State, rejection::JsonRejection},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::{ApiError, AppState, LoginRequest, UsernameLoginRequest};
use crate::services::AccessToken;

/// Username of the bearer, inserted into request extensions by [`auth_middleware`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub String);

// ============================================================================
// Middleware
// ============================================================================

/// Rejects the request with 401 unless it carries `Authorization: Bearer <token>`
/// with a valid, unexpired token.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(token) = extract_bearer_token(request.headers()) else {
        return Err(ApiError::unauthorized("Not authenticated"));
    };

    let username = state.auth_service.verify_token(token)?;

    tracing::Span::current().record("user_id", username.as_str());
    request.extensions_mut().insert(CurrentUser(username));

    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer` header
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /login
/// Authenticate with username and password, returns a bearer token on success
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AccessToken>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::validation(e.body_text()))?;

    let username = payload.username.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let token = state.auth_service.login(&username, &password).await?;
    Ok(Json(token))
}

/// POST /login-username
/// Issue a bearer token for an existing, active username
pub async fn login_username(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UsernameLoginRequest>, JsonRejection>,
) -> Result<Json<AccessToken>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::validation(e.body_text()))?;

    let username = payload.username.unwrap_or_default();

    let token = state.auth_service.login_username(&username).await?;
    Ok(Json(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token(&headers("Bearer abc.def")), Some("abc.def"));
        assert_eq!(extract_bearer_token(&headers("bearer abc")), Some("abc"));
        assert_eq!(extract_bearer_token(&headers("Bearer   abc  ")), Some("abc"));
    }

    #[test]
    fn test_extract_bearer_token_rejects_other_schemes() {
        assert_eq!(extract_bearer_token(&headers("Basic dXNlcjpwYXNz")), None);
        assert_eq!(extract_bearer_token(&headers("Bearer")), None);
        assert_eq!(extract_bearer_token(&headers("Bearer ")), None);
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
    }
}
