pub mod health;
pub mod home;
pub mod pages;
pub mod products;
pub mod sections;
pub mod tags;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /home                      composed homepage (?lang=)
/// /pages/{slug}              published page, resolved (?lang=)
/// /products                  public catalog
/// /products/{slug}           public product detail
/// /tags                      tag list
///
/// /admin/sections            section editor (list, create, hero, reorder,
///                            payload, enabled, delete)
/// /admin/products            product editor (list, create, update, status,
///                            tags, delete)
/// /admin/tags                tag editor (create, delete)
/// /admin/pages               page editor (list, create, update, delete)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/home", home::router())
        .nest("/pages", pages::public_router())
        .nest("/products", products::public_router())
        .nest("/tags", tags::public_router())
        .nest("/admin/sections", sections::router())
        .nest("/admin/products", products::admin_router())
        .nest("/admin/tags", tags::admin_router())
        .nest("/admin/pages", pages::admin_router())
}
