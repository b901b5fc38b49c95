//! Route definitions for the tag system.
//!
//! Two routers are provided:
//! - `public_router()` for the tag list, mounted at `/tags`
//! - `admin_router()` for the editor, mounted at `/admin/tags`

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::tags;
use crate::state::AppState;

/// Public tag routes mounted at `/tags`.
///
/// ```text
/// GET /    -> list_tags
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(tags::list_tags))
}

/// Admin tag editor routes mounted at `/admin/tags`.
///
/// ```text
/// POST   /        -> create_tag
/// DELETE /{id}    -> delete_tag
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(tags::create_tag))
        .route("/{id}", delete(tags::delete_tag))
}
