//! Handlers for static/dynamic pages.
//!
//! The public endpoint resolves the bilingual title/body pair to the
//! active language with the same machinery the homepage sections use.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use packline_core::error::CoreError;
use packline_core::locale::{Language, LocalizedText};
use packline_core::types::DbId;
use packline_db::models::page::{CreatePage, PageRow, UpdatePage};
use packline_db::models::product::validate_slug;
use packline_db::repositories::PageRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::LangParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// A published page resolved to the active language.
#[derive(Debug, Serialize)]
pub struct PageView {
    pub slug: String,
    pub title: String,
    pub body: String,
}

fn resolve_page(page: PageRow, lang: Language) -> PageView {
    let title = LocalizedText::new(page.title_en, page.title_zh).resolve_or_empty(lang);
    let body = LocalizedText::new(page.body_en, page.body_zh).resolve_or_empty(lang);
    PageView {
        slug: page.slug,
        title,
        body,
    }
}

// ---------------------------------------------------------------------------
// Public
// ---------------------------------------------------------------------------

/// GET /api/v1/pages/{slug}?lang=en
///
/// A published page, resolved. Unpublished and unknown slugs both 404.
pub async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<LangParams>,
) -> AppResult<impl IntoResponse> {
    let lang = Language::parse(params.lang.as_deref().unwrap_or_default());

    let page = PageRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Page '{slug}' not found")))?;

    Ok(Json(DataResponse {
        data: resolve_page(page, lang),
    }))
}

// ---------------------------------------------------------------------------
// Admin CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/pages
pub async fn list_pages(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pages = PageRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: pages }))
}

/// POST /api/v1/admin/pages
pub async fn create_page(
    State(state): State<AppState>,
    Json(input): Json<CreatePage>,
) -> AppResult<impl IntoResponse> {
    validate_slug(&input.slug)?;

    let page = PageRepo::create(&state.pool, &input).await?;

    tracing::info!(page_id = page.id, slug = %page.slug, "Page created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: page })))
}

/// PUT /api/v1/admin/pages/{id}
pub async fn update_page(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePage>,
) -> AppResult<impl IntoResponse> {
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }

    let page = PageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Page", id }))?;

    tracing::info!(page_id = id, "Page updated");

    Ok(Json(DataResponse { data: page }))
}

/// DELETE /api/v1/admin/pages/{id}
pub async fn delete_page(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PageRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Page", id }));
    }

    tracing::info!(page_id = id, "Page deleted");

    Ok(StatusCode::NO_CONTENT)
}
