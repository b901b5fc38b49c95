//! Homepage section models and DTOs.

use packline_core::section::Section;
use packline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `sections` table.
///
/// `payload` is the whole stored configuration document for the section;
/// it is read and replaced as one value, never patched key-by-key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SectionRow {
    pub id: DbId,
    pub kind: String,
    pub sort_order: i32,
    pub enabled: bool,
    pub payload: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<SectionRow> for Section {
    fn from(row: SectionRow) -> Self {
        Section {
            id: row.id,
            kind: row.kind,
            sort_order: row.sort_order,
            enabled: row.enabled,
            payload: row.payload,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a section. The stored payload starts as the kind's
/// documented default document.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSection {
    pub kind: String,
    /// Appended after the current last section when omitted.
    pub sort_order: Option<i32>,
    pub enabled: Option<bool>,
}

/// DTO replacing a section's payload document in full.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSectionPayload {
    pub payload: serde_json::Value,
}

/// DTO toggling a section's visibility.
#[derive(Debug, Clone, Deserialize)]
pub struct SetSectionEnabled {
    pub enabled: bool,
}

/// DTO replacing the homepage ordering with an explicit id sequence.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderSections {
    pub ordered_ids: Vec<DbId>,
}
