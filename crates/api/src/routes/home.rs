//! Route definitions for the public homepage composition.

use axum::routing::get;
use axum::Router;

use crate::handlers::home;
use crate::state::AppState;

/// Homepage routes mounted at `/home`.
///
/// ```text
/// GET /    -> get_home (?lang=en|zh)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home::get_home))
}
