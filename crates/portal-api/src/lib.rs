//! Intern Portal REST API
//!
//! This crate provides the Axum-based HTTP API for the intern portal:
//! admin signup/login, public intern submission, and the role-gated
//! intern listing.

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
