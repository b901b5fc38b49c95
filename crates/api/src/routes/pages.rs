//! Route definitions for static/dynamic pages.
//!
//! Two routers are provided:
//! - `public_router()` for resolved pages, mounted at `/pages`
//! - `admin_router()` for the editor, mounted at `/admin/pages`

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Public page routes mounted at `/pages`.
///
/// ```text
/// GET /{slug}    -> get_page (?lang=en|zh)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/{slug}", get(pages::get_page))
}

/// Admin page editor routes mounted at `/admin/pages`.
///
/// ```text
/// GET    /        -> list_pages
/// POST   /        -> create_page
/// PUT    /{id}    -> update_page
/// DELETE /{id}    -> delete_page
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::list_pages).post(pages::create_page))
        .route("/{id}", put(pages::update_page).delete(pages::delete_page))
}
