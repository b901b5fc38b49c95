//! Repository for the `pages` table.

use sqlx::PgPool;

use packline_core::types::DbId;

use crate::models::page::{CreatePage, PageRow, UpdatePage};

/// Column list for `pages` queries.
const PAGE_COLUMNS: &str = "\
    id, slug, title_en, title_zh, body_en, body_zh, published, \
    created_at, updated_at";

/// Provides CRUD operations for static/dynamic pages.
pub struct PageRepo;

impl PageRepo {
    /// List every page, by slug.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<PageRow>, sqlx::Error> {
        let query = format!("SELECT {PAGE_COLUMNS} FROM pages ORDER BY slug");
        sqlx::query_as::<_, PageRow>(&query).fetch_all(pool).await
    }

    /// Find a page by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PageRow>, sqlx::Error> {
        let query = format!("SELECT {PAGE_COLUMNS} FROM pages WHERE id = $1");
        sqlx::query_as::<_, PageRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a published page by its public slug.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<PageRow>, sqlx::Error> {
        let query = format!("SELECT {PAGE_COLUMNS} FROM pages WHERE slug = $1 AND published");
        sqlx::query_as::<_, PageRow>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new page. Unpublished unless stated.
    pub async fn create(pool: &PgPool, input: &CreatePage) -> Result<PageRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO pages (slug, title_en, title_zh, body_en, body_zh, published) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, FALSE)) \
             RETURNING {PAGE_COLUMNS}"
        );
        sqlx::query_as::<_, PageRow>(&query)
            .bind(&input.slug)
            .bind(&input.title_en)
            .bind(&input.title_zh)
            .bind(&input.body_en)
            .bind(&input.body_zh)
            .bind(input.published)
            .fetch_one(pool)
            .await
    }

    /// Update a page. Omitted fields are unchanged.
    ///
    /// Returns `None` if no page with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePage,
    ) -> Result<Option<PageRow>, sqlx::Error> {
        let query = format!(
            "UPDATE pages SET \
                 slug = COALESCE($2, slug), \
                 title_en = COALESCE($3, title_en), \
                 title_zh = COALESCE($4, title_zh), \
                 body_en = COALESCE($5, body_en), \
                 body_zh = COALESCE($6, body_zh), \
                 published = COALESCE($7, published), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {PAGE_COLUMNS}"
        );
        sqlx::query_as::<_, PageRow>(&query)
            .bind(id)
            .bind(&input.slug)
            .bind(&input.title_en)
            .bind(&input.title_zh)
            .bind(&input.body_en)
            .bind(&input.body_zh)
            .bind(input.published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a page. Returns `false` if it did not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
