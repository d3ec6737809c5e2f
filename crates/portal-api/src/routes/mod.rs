//! API routes

mod auth;
mod health;
mod interns;
pub mod types;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

// Re-export the auth extractors for external use
#[allow(unused_imports)]
pub use auth::{RequireAuth, RequireInternViewer};

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(interns::routes())
        .with_state(state)
        // The portal frontend is served from a different origin
        .layer(CorsLayer::permissive())
}
