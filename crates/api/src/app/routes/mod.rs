use axum::{routing::get, Router};

pub mod products;
pub mod system;

/// Router for the inventory endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(products::list_products))
        .merge(products::router())
}
