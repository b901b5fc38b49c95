//! Route definitions for the admin section editor.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::sections;
use crate::state::AppState;

/// Section editor routes mounted at `/admin/sections`.
///
/// ```text
/// GET    /               -> list_sections
/// POST   /               -> create_section
/// GET    /hero           -> get_hero_section
/// PUT    /reorder        -> reorder_sections
/// PUT    /{id}/payload   -> update_section_payload
/// PUT    /{id}/enabled   -> set_section_enabled
/// DELETE /{id}           -> delete_section
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(sections::list_sections).post(sections::create_section),
        )
        .route("/hero", get(sections::get_hero_section))
        .route("/reorder", put(sections::reorder_sections))
        .route("/{id}/payload", put(sections::update_section_payload))
        .route("/{id}/enabled", put(sections::set_section_enabled))
        .route("/{id}", axum::routing::delete(sections::delete_section))
}
