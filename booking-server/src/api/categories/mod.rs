//! Category routes
//!
//! `GET /api/categories` is the public storefront listing (active
//! only); everything else is back-office.

mod handler;

use axum::{
    Router,
    routing::get,
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/categories", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        // Admin listing including inactive rows (must be before /{id})
        .route("/all", get(handler::list_all))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
