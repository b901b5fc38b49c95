//! Product catalog models and DTOs.

use packline_core::error::CoreError;
use packline_core::product::ProductSummary;
use packline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Status vocabulary
// ---------------------------------------------------------------------------

/// Draft — visible in the admin panel only.
pub const STATUS_DRAFT: &str = "draft";

/// Active — eligible for the public catalog and homepage sections.
pub const STATUS_ACTIVE: &str = "active";

/// Archived — retired from everywhere but kept for reference.
pub const STATUS_ARCHIVED: &str = "archived";

/// All valid product statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_DRAFT, STATUS_ACTIVE, STATUS_ARCHIVED];

/// Maximum length for a product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum length for a product slug.
pub const MAX_PRODUCT_SLUG_LEN: usize = 200;

/// Validate that `status` is one of the allowed values.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Validate a product name: non-empty and within length limit.
pub fn validate_product_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Product name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_PRODUCT_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Product name too long: {} chars (max {MAX_PRODUCT_NAME_LEN})",
            name.len()
        )));
    }
    Ok(())
}

/// Validate a URL slug: non-empty, lowercase letters, digits and hyphens.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".to_string()));
    }
    if slug.len() > MAX_PRODUCT_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "Slug too long: {} chars (max {MAX_PRODUCT_SLUG_LEN})",
            slug.len()
        )));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(format!(
            "Invalid slug '{slug}'. Use lowercase letters, digits and hyphens"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductRow {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub short_desc: Option<String>,
    pub cover_image: Option<String>,
    pub price_hint: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ProductRow> for ProductSummary {
    fn from(row: ProductRow) -> Self {
        ProductSummary {
            id: row.id,
            name: row.name,
            slug: row.slug,
            short_desc: row.short_desc,
            cover_image: row.cover_image,
            price_hint: row.price_hint,
            created_at: row.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a new product. Defaults to `draft` status.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub slug: String,
    pub short_desc: Option<String>,
    pub cover_image: Option<String>,
    pub price_hint: Option<String>,
    pub status: Option<String>,
}

/// DTO for updating an existing product. Omitted fields are unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub short_desc: Option<String>,
    pub cover_image: Option<String>,
    pub price_hint: Option<String>,
}

/// DTO changing a product's status.
#[derive(Debug, Clone, Deserialize)]
pub struct SetProductStatus {
    pub status: String,
}

/// DTO replacing a product's tag set.
#[derive(Debug, Clone, Deserialize)]
pub struct SetProductTags {
    pub tag_ids: Vec<DbId>,
}

/// Query parameters for the admin product listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductListParams {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_status_accepts_the_vocabulary() {
        for status in VALID_STATUSES {
            assert!(validate_status(status).is_ok(), "status {status}");
        }
    }

    #[test]
    fn validate_status_rejects_unknown_values() {
        let err = validate_status("published").unwrap_err();
        assert!(err.to_string().contains("Invalid status"));
    }

    #[test]
    fn validate_slug_enforces_the_character_set() {
        assert!(validate_slug("kraft-mailer-box-2").is_ok());
        assert!(validate_slug("Kraft Box").is_err());
        assert!(validate_slug("").is_err());
    }

    #[test]
    fn validate_product_name_rejects_blank_names() {
        assert!(validate_product_name("Mailer Box").is_ok());
        assert!(validate_product_name("   ").is_err());
    }
}
