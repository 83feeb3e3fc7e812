//! Availability slot routes
//!
//! The storefront reads `/dates` and `/hours/{date}`; administrators
//! publish and retract slots.

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/availability", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/dates", get(handler::dates))
        .route("/hours/{date}", get(handler::hours))
        // Replace a whole day's published hours in one call
        .route("/publish", put(handler::publish))
        .route("/{id}", axum::routing::delete(handler::delete))
}
