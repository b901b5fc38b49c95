//! Repository for the `sections` table.
//!
//! Sections are the reorderable building blocks of the homepage. The
//! payload column is always written as a whole document; partial merges
//! happen in admin code before the write reaches this layer.

use sqlx::PgPool;

use packline_core::types::DbId;

use crate::models::section::SectionRow;

/// Column list for `sections` queries.
const SECTION_COLUMNS: &str = "id, kind, sort_order, enabled, payload, created_at, updated_at";

/// Provides CRUD operations for homepage sections.
pub struct SectionRepo;

impl SectionRepo {
    /// List every section in display order.
    pub async fn list_ordered(pool: &PgPool) -> Result<Vec<SectionRow>, sqlx::Error> {
        let query = format!("SELECT {SECTION_COLUMNS} FROM sections ORDER BY sort_order, id");
        sqlx::query_as::<_, SectionRow>(&query).fetch_all(pool).await
    }

    /// Find a section by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SectionRow>, sqlx::Error> {
        let query = format!("SELECT {SECTION_COLUMNS} FROM sections WHERE id = $1");
        sqlx::query_as::<_, SectionRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new section.
    ///
    /// When no explicit `sort_order` is given the section is appended after
    /// the current last one.
    pub async fn create(
        pool: &PgPool,
        kind: &str,
        sort_order: Option<i32>,
        enabled: Option<bool>,
        payload: &serde_json::Value,
    ) -> Result<SectionRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO sections (kind, sort_order, enabled, payload) \
             VALUES ($1, \
                     COALESCE($2, (SELECT COALESCE(MAX(sort_order) + 1, 0) FROM sections)), \
                     COALESCE($3, TRUE), \
                     $4) \
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, SectionRow>(&query)
            .bind(kind)
            .bind(sort_order)
            .bind(enabled)
            .bind(payload)
            .fetch_one(pool)
            .await
    }

    /// Replace a section's payload document in full.
    ///
    /// Returns `None` if no section with the given ID exists.
    pub async fn update_payload(
        pool: &PgPool,
        id: DbId,
        payload: &serde_json::Value,
    ) -> Result<Option<SectionRow>, sqlx::Error> {
        let query = format!(
            "UPDATE sections SET payload = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, SectionRow>(&query)
            .bind(id)
            .bind(payload)
            .fetch_optional(pool)
            .await
    }

    /// Toggle a section's visibility.
    pub async fn set_enabled(
        pool: &PgPool,
        id: DbId,
        enabled: bool,
    ) -> Result<Option<SectionRow>, sqlx::Error> {
        let query = format!(
            "UPDATE sections SET enabled = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {SECTION_COLUMNS}"
        );
        sqlx::query_as::<_, SectionRow>(&query)
            .bind(id)
            .bind(enabled)
            .fetch_optional(pool)
            .await
    }

    /// Rewrite `sort_order` to match the given id sequence.
    ///
    /// Ids absent from the list keep their stored order value; the write is
    /// transactional so a half-applied ordering is never visible.
    pub async fn reorder(pool: &PgPool, ordered_ids: &[DbId]) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        for (position, id) in ordered_ids.iter().enumerate() {
            sqlx::query("UPDATE sections SET sort_order = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(position as i32)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await
    }

    /// Delete a section. Returns `false` if it did not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
