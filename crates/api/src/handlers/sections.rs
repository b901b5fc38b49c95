//! Handlers for the admin section editor.
//!
//! Sections are created with their kind's documented default payload;
//! after that the payload is only ever replaced as a whole document.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use packline_core::error::CoreError;
use packline_core::payload::default_payload;
use packline_core::section::{find_primary_hero, validate_kind, Section};
use packline_core::types::DbId;
use packline_db::models::section::{
    CreateSection, ReorderSections, SetSectionEnabled, UpdateSectionPayload,
};
use packline_db::repositories::SectionRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/admin/sections
///
/// List every section in display order, payloads included.
pub async fn list_sections(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sections = SectionRepo::list_ordered(&state.pool).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// POST /api/v1/admin/sections
///
/// Create a section of the given kind with its documented default payload.
pub async fn create_section(
    State(state): State<AppState>,
    Json(input): Json<CreateSection>,
) -> AppResult<impl IntoResponse> {
    let kind = validate_kind(&input.kind)?;
    let payload = default_payload(kind);

    let section = SectionRepo::create(
        &state.pool,
        kind.as_str(),
        input.sort_order,
        input.enabled,
        &payload,
    )
    .await?;

    tracing::info!(section_id = section.id, kind = %section.kind, "Section created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: section })))
}

/// GET /api/v1/admin/sections/hero
///
/// The standalone hero-edit surface: targets the first *enabled* hero by
/// ascending order, or the first hero regardless of enabled when none is.
/// `data` is null when no hero section exists yet.
pub async fn get_hero_section(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = SectionRepo::list_ordered(&state.pool).await?;
    let sections: Vec<Section> = rows.iter().cloned().map(Into::into).collect();

    let hero = find_primary_hero(&sections)
        .map(|hero| hero.id)
        .and_then(|id| rows.into_iter().find(|row| row.id == id));

    Ok(Json(DataResponse { data: hero }))
}

/// PUT /api/v1/admin/sections/{id}/payload
///
/// Replace the section's payload document in full. Partial merges happen
/// in the admin frontend by spreading the previous payload before saving.
pub async fn update_section_payload(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSectionPayload>,
) -> AppResult<impl IntoResponse> {
    if !input.payload.is_object() {
        return Err(AppError::BadRequest(
            "payload must be a JSON object".to_string(),
        ));
    }

    let section = SectionRepo::update_payload(&state.pool, id, &input.payload)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Section",
            id,
        }))?;

    tracing::info!(section_id = id, "Section payload replaced");

    Ok(Json(DataResponse { data: section }))
}

/// PUT /api/v1/admin/sections/{id}/enabled
///
/// Toggle a section's visibility on the homepage.
pub async fn set_section_enabled(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetSectionEnabled>,
) -> AppResult<impl IntoResponse> {
    let section = SectionRepo::set_enabled(&state.pool, id, input.enabled)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Section",
            id,
        }))?;

    tracing::info!(section_id = id, enabled = input.enabled, "Section visibility changed");

    Ok(Json(DataResponse { data: section }))
}

/// PUT /api/v1/admin/sections/reorder
///
/// Replace the homepage ordering with an explicit id sequence.
pub async fn reorder_sections(
    State(state): State<AppState>,
    Json(input): Json<ReorderSections>,
) -> AppResult<impl IntoResponse> {
    if input.ordered_ids.is_empty() {
        return Err(AppError::BadRequest(
            "ordered_ids must not be empty".to_string(),
        ));
    }

    SectionRepo::reorder(&state.pool, &input.ordered_ids).await?;

    tracing::info!(count = input.ordered_ids.len(), "Sections reordered");

    let sections = SectionRepo::list_ordered(&state.pool).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// DELETE /api/v1/admin/sections/{id}
pub async fn delete_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SectionRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Section",
            id,
        }));
    }

    tracing::info!(section_id = id, "Section deleted");

    Ok(StatusCode::NO_CONTENT)
}
