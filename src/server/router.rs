//! API router.

use axum::Router;
use axum::routing::{get, post};

use crate::server::handlers;
use crate::server::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/synsets/:word", get(handlers::synsets))
        .route("/stemmer/:word", get(handlers::stemmer))
        .route("/align", post(handlers::align))
        .with_state(state)
}
