pub mod auth_service;
pub mod auth_service_impl;
pub use auth_service::{AccessToken, AuthError, AuthService};
pub use auth_service_impl::SeaOrmAuthService;

pub mod catalog_service;
pub mod catalog_service_impl;
pub use catalog_service::{CatalogError, CatalogService};
pub use catalog_service_impl::SeaOrmCatalogService;

pub mod earnings_service;
pub mod earnings_service_impl;
pub use earnings_service::{EarningsError, EarningsService};
pub use earnings_service_impl::SeaOrmEarningsService;
