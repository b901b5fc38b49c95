//! Handler for the public homepage composition endpoint.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use packline_core::compose::compose_page;
use packline_core::locale::Language;
use packline_core::section::Section;
use packline_db::repositories::{PgProductQuery, SectionRepo};

use crate::error::AppResult;
use crate::query::LangParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/home?lang=en
///
/// Compose the full homepage for the active language: enabled sections in
/// stored order, payloads normalized, products resolved, every bilingual
/// field already picked. A failed section read degrades to an empty page
/// rather than an error.
pub async fn get_home(
    State(state): State<AppState>,
    Query(params): Query<LangParams>,
) -> AppResult<impl IntoResponse> {
    let lang = Language::parse(params.lang.as_deref().unwrap_or_default());

    let rows = match SectionRepo::list_ordered(&state.pool).await {
        Ok(rows) => rows,
        Err(err) => {
            tracing::error!(error = %err, "Failed to load sections, rendering empty page");
            Vec::new()
        }
    };
    let sections: Vec<Section> = rows.into_iter().map(Into::into).collect();

    let store = PgProductQuery::new(state.pool.clone());
    let page = compose_page(&sections, lang, &store).await;

    Ok(Json(DataResponse { data: page }))
}
