//! Story server library: configuration, state, routes, and error mapping.

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

/// Builds the full application router around `state`.
pub fn build_router(state: state::AppState) -> Router {
    Router::new()
        .merge(routes::story::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
