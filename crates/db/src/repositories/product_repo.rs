//! Repository for the `products` table, plus the [`PgProductQuery`]
//! adapter that the composition engine consumes.

use async_trait::async_trait;
use sqlx::PgPool;

use packline_core::error::CoreError;
use packline_core::product::{ProductQuery, ProductSummary};
use packline_core::types::DbId;

use crate::models::product::{
    CreateProduct, ProductListParams, ProductRow, UpdateProduct, STATUS_ACTIVE, STATUS_DRAFT,
};

/// Column list for `products` queries.
const PRODUCT_COLUMNS: &str = "\
    id, name, slug, short_desc, cover_image, price_hint, status, \
    created_at, updated_at";

/// Default page size for product listing.
const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for product listing.
const MAX_LIMIT: i64 = 200;

/// Provides CRUD operations for catalog products.
pub struct ProductRepo;

impl ProductRepo {
    // -----------------------------------------------------------------------
    // Homepage sourcing queries (ACTIVE only)
    // -----------------------------------------------------------------------

    /// The `limit` newest ACTIVE products, newest first.
    pub async fn latest_active(pool: &PgPool, limit: i64) -> Result<Vec<ProductRow>, sqlx::Error> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE status = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(STATUS_ACTIVE)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// ACTIVE products whose id is in `ids`, in storage order.
    pub async fn active_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<ProductRow>, sqlx::Error> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE status = $1 AND id = ANY($2)"
        );
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(STATUS_ACTIVE)
            .bind(ids.to_vec())
            .fetch_all(pool)
            .await
    }

    /// ACTIVE products carrying any of `tag_ids`, newest first.
    pub async fn active_by_tag_ids(
        pool: &PgPool,
        tag_ids: &[DbId],
        limit: i64,
    ) -> Result<Vec<ProductRow>, sqlx::Error> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE status = $1 \
               AND id IN (SELECT product_id FROM product_tags WHERE tag_id = ANY($2)) \
             ORDER BY created_at DESC, id DESC \
             LIMIT $3"
        );
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(STATUS_ACTIVE)
            .bind(tag_ids.to_vec())
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Catalog listing
    // -----------------------------------------------------------------------

    /// Public catalog listing: ACTIVE products, newest first, paginated.
    pub async fn list_public(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<ProductRow>, sqlx::Error> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = offset.unwrap_or(0).max(0);

        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE status = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(STATUS_ACTIVE)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Admin listing: every status, optionally filtered, paginated.
    pub async fn list_all(
        pool: &PgPool,
        params: &ProductListParams,
    ) -> Result<Vec<ProductRow>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = params.offset.unwrap_or(0).max(0);

        match &params.status {
            Some(status) => {
                let query = format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products \
                     WHERE status = $1 \
                     ORDER BY created_at DESC, id DESC \
                     LIMIT $2 OFFSET $3"
                );
                sqlx::query_as::<_, ProductRow>(&query)
                    .bind(status)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products \
                     ORDER BY created_at DESC, id DESC \
                     LIMIT $1 OFFSET $2"
                );
                sqlx::query_as::<_, ProductRow>(&query)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Find a product by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProductRow>, sqlx::Error> {
        let query = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an ACTIVE product by its public slug.
    pub async fn find_active_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<ProductRow>, sqlx::Error> {
        let query = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE slug = $1 AND status = $2"
        );
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(slug)
            .bind(STATUS_ACTIVE)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Admin CRUD
    // -----------------------------------------------------------------------

    /// Insert a new product. Status defaults to `draft`.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<ProductRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (name, slug, short_desc, cover_image, price_hint, status) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, '{STATUS_DRAFT}')) \
             RETURNING {PRODUCT_COLUMNS}"
        );
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.short_desc)
            .bind(&input.cover_image)
            .bind(&input.price_hint)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Update a product's editable fields. Omitted fields are unchanged.
    ///
    /// Returns `None` if no product with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<ProductRow>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET \
                 name = COALESCE($2, name), \
                 slug = COALESCE($3, slug), \
                 short_desc = COALESCE($4, short_desc), \
                 cover_image = COALESCE($5, cover_image), \
                 price_hint = COALESCE($6, price_hint), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {PRODUCT_COLUMNS}"
        );
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.short_desc)
            .bind(&input.cover_image)
            .bind(&input.price_hint)
            .fetch_optional(pool)
            .await
    }

    /// Change a product's status.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<ProductRow>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET status = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {PRODUCT_COLUMNS}"
        );
        sqlx::query_as::<_, ProductRow>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product and its tag associations. Returns `false` if it
    /// did not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// ProductQuery adapter
// ---------------------------------------------------------------------------

/// [`ProductQuery`] implementation over the Postgres product store.
///
/// The composition engine only sees this through the trait, so the core
/// crate stays free of sqlx.
#[derive(Clone)]
pub struct PgProductQuery {
    pool: PgPool,
}

impl PgProductQuery {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductQuery for PgProductQuery {
    async fn latest_active(&self, limit: i64) -> Result<Vec<ProductSummary>, CoreError> {
        ProductRepo::latest_active(&self.pool, limit)
            .await
            .map(into_summaries)
            .map_err(internal)
    }

    async fn active_by_ids(&self, ids: &[DbId]) -> Result<Vec<ProductSummary>, CoreError> {
        ProductRepo::active_by_ids(&self.pool, ids)
            .await
            .map(into_summaries)
            .map_err(internal)
    }

    async fn active_by_tag_ids(
        &self,
        tag_ids: &[DbId],
        limit: i64,
    ) -> Result<Vec<ProductSummary>, CoreError> {
        ProductRepo::active_by_tag_ids(&self.pool, tag_ids, limit)
            .await
            .map(into_summaries)
            .map_err(internal)
    }
}

fn into_summaries(rows: Vec<ProductRow>) -> Vec<ProductSummary> {
    rows.into_iter().map(Into::into).collect()
}

/// The composition engine degrades on store errors; log here so the
/// failure is still visible to operators.
fn internal(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Product query failed");
    CoreError::Internal(err.to_string())
}
