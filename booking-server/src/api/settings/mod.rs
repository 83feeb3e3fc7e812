//! Store settings routes (singleton)
//!
//! `GET /api/settings` is public so the storefront can show the store
//! name, currency and included rental hours; writing is back-office.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/settings", get(handler::get).put(handler::update))
}
