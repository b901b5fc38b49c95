//! Product tag models and DTOs.

use packline_core::error::CoreError;
use packline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Maximum length for a tag name.
pub const MAX_TAG_NAME_LEN: usize = 100;

/// Validate a tag name: non-empty after trimming, within length limit.
pub fn validate_tag_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Tag name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_TAG_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Tag name too long: {} chars (max {MAX_TAG_NAME_LEN})",
            name.len()
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a tag via the `create_or_get` operation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTag {
    pub name: String,
}
