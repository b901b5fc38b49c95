//! Handlers for the tag system.
//!
//! Tags exist to drive tag-based product sourcing on the homepage; the
//! vocabulary is flat (no namespaces) and matched case-insensitively.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use packline_core::error::CoreError;
use packline_core::types::DbId;
use packline_db::models::tag::{validate_tag_name, CreateTag};
use packline_db::repositories::TagRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/tags
///
/// List all tags, alphabetically.
pub async fn list_tags(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tags = TagRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: tags }))
}

/// POST /api/v1/admin/tags
///
/// Create a tag, or return the existing one with the same normalized name.
pub async fn create_tag(
    State(state): State<AppState>,
    Json(input): Json<CreateTag>,
) -> AppResult<impl IntoResponse> {
    validate_tag_name(&input.name)?;

    let tag = TagRepo::create_or_get(&state.pool, &input.name).await?;

    tracing::info!(tag_id = tag.id, name = %tag.name, "Tag created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: tag })))
}

/// DELETE /api/v1/admin/tags/{id}
///
/// Delete a tag and all its product associations.
pub async fn delete_tag(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TagRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Tag", id }));
    }

    tracing::info!(tag_id = id, "Tag deleted");

    Ok(StatusCode::NO_CONTENT)
}
