//! Static/dynamic page models and DTOs.

use packline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `pages` table.
///
/// Title and body are stored as bilingual column pairs and resolved to the
/// active language at read time, like section payload fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PageRow {
    pub id: DbId,
    pub slug: String,
    pub title_en: Option<String>,
    pub title_zh: Option<String>,
    pub body_en: Option<String>,
    pub body_zh: Option<String>,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a page. Pages start unpublished unless stated.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePage {
    pub slug: String,
    pub title_en: Option<String>,
    pub title_zh: Option<String>,
    pub body_en: Option<String>,
    pub body_zh: Option<String>,
    pub published: Option<bool>,
}

/// DTO for updating a page. Omitted fields are unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePage {
    pub slug: Option<String>,
    pub title_en: Option<String>,
    pub title_zh: Option<String>,
    pub body_en: Option<String>,
    pub body_zh: Option<String>,
    pub published: Option<bool>,
}
