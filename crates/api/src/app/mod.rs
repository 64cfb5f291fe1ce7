//! HTTP API application wiring (Axum router + shared inventory).
//!
//! Layout:
//! - `services.rs`: builds the shared, mutex-guarded inventory store
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: form parsing and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use axum::{routing::get, Extension, Router};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The inventory is injected rather than created here so tests can point it
/// at their own storage.
pub fn build_app(inventory: services::SharedInventory) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(inventory))
        .layer(axum::middleware::from_fn(middleware::log_requests))
}
