//! HTTP route definitions and handlers.
//!
//! This module organizes all HTTP endpoints into logical groups:
//! search proxying, favorites, and health checks.

mod favorite_routes;
mod health_routes;
mod search_routes;

use axum::middleware;
use axum::Router;

use crate::state::AppState;
use crate::utils::http_helpers::with_cors;

/// Creates the application router with all configured routes.
///
/// Combines all route modules into a single router, attaches the application
/// state, and decorates every response with permissive CORS headers for the
/// browser client.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(search_routes::routes())
        .merge(favorite_routes::routes())
        .merge(health_routes::routes())
        .layer(middleware::from_fn(with_cors))
        .with_state(state)
}
