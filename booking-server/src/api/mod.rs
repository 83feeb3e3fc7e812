//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`auth`] - back-office login
//! - [`categories`] - category catalog
//! - [`products`] - product catalog
//! - [`zones`] - delivery zones
//! - [`availability`] - published (date, hour) slots
//! - [`reservations`] - storefront checkout + admin management
//! - [`accounts`] - back-office accounts
//! - [`settings`] - store settings singleton
//! - [`upload`] - image upload and serving

pub mod auth;
pub mod health;
pub mod upload;

// Catalog and booking API
pub mod accounts;
pub mod availability;
pub mod categories;
pub mod products;
pub mod reservations;
pub mod settings;
pub mod zones;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Build the bare router (without middleware or state)
pub fn build_router() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(upload::router())
        .merge(categories::router())
        .merge(products::router())
        .merge(zones::router())
        .merge(availability::router())
        .merge(reservations::router())
        .merge(accounts::router())
        .merge(settings::router())
}

/// Full application: routes, auth middleware and the tower-http stack
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // require_auth skips the public storefront routes internally
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
