//! Route definitions for the product catalog.
//!
//! Two routers are provided:
//! - `public_router()` for the catalog, mounted at `/products`
//! - `admin_router()` for the editor, mounted at `/admin/products`

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Public catalog routes mounted at `/products`.
///
/// ```text
/// GET /          -> list_products
/// GET /{slug}    -> get_product_by_slug
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list_products))
        .route("/{slug}", get(products::get_product_by_slug))
}

/// Admin product editor routes mounted at `/admin/products`.
///
/// ```text
/// GET    /               -> list_all_products
/// POST   /               -> create_product
/// PUT    /{id}           -> update_product
/// PUT    /{id}/status    -> set_product_status
/// GET    /{id}/tags      -> get_product_tags
/// PUT    /{id}/tags      -> set_product_tags
/// DELETE /{id}           -> delete_product
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(products::list_all_products).post(products::create_product),
        )
        .route(
            "/{id}",
            put(products::update_product).delete(products::delete_product),
        )
        .route("/{id}/status", put(products::set_product_status))
        .route(
            "/{id}/tags",
            get(products::get_product_tags).put(products::set_product_tags),
        )
}
