use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::TokenKeys;
use crate::config::Config;
use crate::db::Store;
use crate::services::{
    AuthService, CatalogService, EarningsService, SeaOrmAuthService, SeaOrmCatalogService,
    SeaOrmEarningsService,
};

pub mod auth;
mod catalog;
mod earnings;
mod error;
mod observability;
mod system;
mod types;
mod validation;

pub use auth::CurrentUser;
pub use error::ApiError;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    pub store: Store,

    pub auth_service: Arc<dyn AuthService>,

    pub catalog_service: Arc<dyn CatalogService>,

    pub earnings_service: Arc<dyn EarningsService>,
}

impl AppState {
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }
}

/// Wires the services around an already connected store.
#[must_use]
pub fn create_app_state(config: Config, store: Store) -> Arc<AppState> {
    let keys = TokenKeys::from_config(&config.auth);

    let auth_service = Arc::new(SeaOrmAuthService::new(store.clone(), keys));
    let catalog_service = Arc::new(SeaOrmCatalogService::new(store.clone()));
    let earnings_service = Arc::new(SeaOrmEarningsService::new(
        store.clone(),
        &config.earnings.categories,
    ));

    Arc::new(AppState {
        config: Arc::new(config),
        store,
        auth_service,
        catalog_service,
        earnings_service,
    })
}

pub async fn create_app_state_from_config(config: Config) -> anyhow::Result<Arc<AppState>> {
    config.validate()?;
    let store = Store::connect(&config.database).await?;
    Ok(create_app_state(config, store))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = &state.config.server.cors_allowed_origins;

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    let protected_routes = create_protected_router(state.clone());

    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/test-db", get(system::test_db))
        .route("/login", post(auth::login))
        .route("/login-username", post(auth::login_username))
        .merge(protected_routes)
        .fallback(system::not_found)
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}

fn create_protected_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/ganancias-por-mes", get(earnings::monthly_earnings))
        .route("/precios", get(catalog::list_prices))
        .route("/familias", get(catalog::list_families))
        .route("/niveles2", get(catalog::list_level2))
        .route("/niveles3", get(catalog::list_level3))
        .route("/niveles4", get(catalog::list_level4))
        .route_layer(middleware::from_fn_with_state(state, auth::auth_middleware))
}
