use axum::{
    extract::{rejection::FormRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Form, Json, Router,
};

use crate::app::{dto, errors};
use crate::app::services::{self, SharedInventory};

pub fn router() -> Router {
    Router::new()
        .route("/products", get(list_products).post(add_product))
        .route("/products/:id", axum::routing::delete(delete_product))
        // Link-style delete, as used by the plain HTML listing.
        .route("/products/:id/delete", get(delete_product))
        .route("/products/:id/stock", post(update_stock))
}

pub async fn list_products(
    Extension(inventory): Extension<SharedInventory>,
) -> axum::response::Response {
    let store = services::lock(&inventory);
    (StatusCode::OK, Json(dto::products_to_json(store.products()))).into_response()
}

pub async fn add_product(
    Extension(inventory): Extension<SharedInventory>,
    form: Result<Form<dto::AddProductForm>, FormRejection>,
) -> axum::response::Response {
    let Form(form) = match form {
        Ok(v) => v,
        Err(e) => return errors::form_rejection_to_response(e),
    };
    let input = match form.parse() {
        Ok(v) => v,
        Err(e) => return errors::input_error_to_response(e),
    };

    let mut store = services::lock(&inventory);
    match store.add_product(input.id, input.name, input.price, input.stock) {
        Ok(product) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "message": "product added",
                "product": dto::product_to_json(product),
            })),
        )
            .into_response(),
        Err(e) => errors::inventory_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(inventory): Extension<SharedInventory>,
    Path(id): Path<String>,
) -> axum::response::Response {
    services::lock(&inventory).delete_product(&id);

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "product deleted",
            "id": id,
        })),
    )
        .into_response()
}

pub async fn update_stock(
    Extension(inventory): Extension<SharedInventory>,
    Path(id): Path<String>,
    form: Result<Form<dto::UpdateStockForm>, FormRejection>,
) -> axum::response::Response {
    let Form(form) = match form {
        Ok(v) => v,
        Err(e) => return errors::form_rejection_to_response(e),
    };
    let stock = match form.parse() {
        Ok(v) => v,
        Err(e) => return errors::input_error_to_response(e),
    };

    let mut store = services::lock(&inventory);
    match store.update_stock(&id, stock) {
        Ok(product) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "stock updated",
                "product": dto::product_to_json(product),
            })),
        )
            .into_response(),
        Err(e) => errors::inventory_error_to_response(e),
    }
}
