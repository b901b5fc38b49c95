//! Render-ready product data and the store seam.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// A product as a homepage section displays it.
///
/// This is the render-ready card: only ACTIVE products ever reach this
/// type, so it carries no status column.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ProductSummary {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub short_desc: Option<String>,
    pub cover_image: Option<String>,
    pub price_hint: Option<String>,
    pub created_at: Timestamp,
}

/// Queryable product store, as the composition engine needs it.
///
/// Implementations must return ACTIVE products only; eligibility filtering
/// happens at the store, not in the resolver.
#[async_trait]
pub trait ProductQuery: Send + Sync {
    /// The `limit` most recently created products, newest first.
    async fn latest_active(&self, limit: i64) -> Result<Vec<ProductSummary>, CoreError>;

    /// Products whose id is in `ids`, in no guaranteed order.
    async fn active_by_ids(&self, ids: &[DbId]) -> Result<Vec<ProductSummary>, CoreError>;

    /// Products carrying any of `tag_ids`, newest first, at most `limit`.
    async fn active_by_tag_ids(
        &self,
        tag_ids: &[DbId],
        limit: i64,
    ) -> Result<Vec<ProductSummary>, CoreError>;
}
