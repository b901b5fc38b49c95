//! Handlers for the product catalog: public listing/detail plus the
//! admin CRUD surface.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use packline_core::error::CoreError;
use packline_core::product::ProductSummary;
use packline_core::types::DbId;
use packline_db::models::product::{
    validate_product_name, validate_slug, validate_status, CreateProduct, ProductListParams,
    SetProductStatus, SetProductTags, UpdateProduct,
};
use packline_db::repositories::{ProductRepo, TagRepo};

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Public catalog
// ---------------------------------------------------------------------------

/// GET /api/v1/products?limit=&offset=
///
/// Public catalog: ACTIVE products, newest first.
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let rows = ProductRepo::list_public(&state.pool, params.limit, params.offset).await?;
    let products: Vec<ProductSummary> = rows.into_iter().map(Into::into).collect();

    Ok(Json(DataResponse { data: products }))
}

/// GET /api/v1/products/{slug}
///
/// Public product detail. Only ACTIVE products are reachable.
pub async fn get_product_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let product: ProductSummary = ProductRepo::find_active_by_slug(&state.pool, &slug)
        .await?
        .map(Into::into)
        .ok_or_else(|| AppError::NotFound(format!("Product '{slug}' not found")))?;

    Ok(Json(DataResponse { data: product }))
}

// ---------------------------------------------------------------------------
// Admin CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/products?status=&limit=&offset=
///
/// Admin listing across every status.
pub async fn list_all_products(
    State(state): State<AppState>,
    Query(params): Query<ProductListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(status) = &params.status {
        validate_status(status)?;
    }

    let products = ProductRepo::list_all(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: products }))
}

/// POST /api/v1/admin/products
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    validate_product_name(&input.name)?;
    validate_slug(&input.slug)?;
    if let Some(status) = &input.status {
        validate_status(status)?;
    }

    let product = ProductRepo::create(&state.pool, &input).await?;

    tracing::info!(product_id = product.id, slug = %product.slug, "Product created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: product })))
}

/// PUT /api/v1/admin/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        validate_product_name(name)?;
    }
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }

    let product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    tracing::info!(product_id = id, "Product updated");

    Ok(Json(DataResponse { data: product }))
}

/// PUT /api/v1/admin/products/{id}/status
///
/// Move a product between draft, active and archived. Only ACTIVE
/// products appear on the public site.
pub async fn set_product_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetProductStatus>,
) -> AppResult<impl IntoResponse> {
    validate_status(&input.status)?;

    let product = ProductRepo::set_status(&state.pool, id, &input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))?;

    tracing::info!(product_id = id, status = %input.status, "Product status changed");

    Ok(Json(DataResponse { data: product }))
}

/// GET /api/v1/admin/products/{id}/tags
pub async fn get_product_tags(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_product_exists(&state, id).await?;

    let tags = TagRepo::list_for_product(&state.pool, id).await?;
    Ok(Json(DataResponse { data: tags }))
}

/// PUT /api/v1/admin/products/{id}/tags
///
/// Replace the product's tag set.
pub async fn set_product_tags(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetProductTags>,
) -> AppResult<impl IntoResponse> {
    ensure_product_exists(&state, id).await?;

    TagRepo::set_product_tags(&state.pool, id, &input.tag_ids).await?;

    tracing::info!(product_id = id, count = input.tag_ids.len(), "Product tags replaced");

    let tags = TagRepo::list_for_product(&state.pool, id).await?;
    Ok(Json(DataResponse { data: tags }))
}

/// DELETE /api/v1/admin/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ProductRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }));
    }

    tracing::info!(product_id = id, "Product deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn ensure_product_exists(state: &AppState, id: DbId) -> AppResult<()> {
    ProductRepo::find_by_id(&state.pool, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id,
        }))
}
