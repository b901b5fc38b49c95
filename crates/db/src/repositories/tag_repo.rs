//! Repository for the `tags` and `product_tags` tables.

use sqlx::PgPool;

use packline_core::types::DbId;

use crate::models::tag::Tag;

/// Column list for `tags` queries.
const TAG_COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for tags and product-tag associations.
pub struct TagRepo;

impl TagRepo {
    /// List all tags, alphabetically.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!("SELECT {TAG_COLUMNS} FROM tags ORDER BY name");
        sqlx::query_as::<_, Tag>(&query).fetch_all(pool).await
    }

    /// Create a tag or return the existing one with the same normalized
    /// name. Uses `ON CONFLICT` for idempotent creation.
    pub async fn create_or_get(pool: &PgPool, name: &str) -> Result<Tag, sqlx::Error> {
        let normalized = normalize_tag_name(name);

        let query = format!(
            "INSERT INTO tags (name) VALUES ($1) \
             ON CONFLICT (name) DO UPDATE SET updated_at = NOW() \
             RETURNING {TAG_COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(&normalized)
            .fetch_one(pool)
            .await
    }

    /// Delete a tag and its product associations. Returns `false` if it
    /// did not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the tags applied to a product, alphabetically.
    pub async fn list_for_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<Tag>, sqlx::Error> {
        sqlx::query_as::<_, Tag>(
            "SELECT t.id, t.name, t.created_at, t.updated_at \
             FROM tags t \
             JOIN product_tags pt ON pt.tag_id = t.id \
             WHERE pt.product_id = $1 \
             ORDER BY t.name",
        )
        .bind(product_id)
        .fetch_all(pool)
        .await
    }

    /// Replace a product's tag set with the given tag ids.
    ///
    /// Transactional: the old set is removed and the new one inserted as
    /// one unit. Unknown tag ids fail the foreign key and roll back.
    pub async fn set_product_tags(
        pool: &PgPool,
        product_id: DbId,
        tag_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM product_tags WHERE product_id = $1")
            .bind(product_id)
            .execute(&mut *tx)
            .await?;

        for tag_id in tag_ids {
            sqlx::query(
                "INSERT INTO product_tags (product_id, tag_id) VALUES ($1, $2) \
                 ON CONFLICT DO NOTHING",
            )
            .bind(product_id)
            .bind(tag_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await
    }
}

/// Tags are matched case-insensitively; the stored name is the
/// normalized (trimmed, lowercased) form.
fn normalize_tag_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize_tag_name("  Eco Friendly "), "eco friendly");
        assert_eq!(normalize_tag_name("GIFT"), "gift");
    }
}
