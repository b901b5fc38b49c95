//! In-memory test doubles shared by the core test modules.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::error::CoreError;
use crate::product::{ProductQuery, ProductSummary};
use crate::types::DbId;

/// Build a product created `age_days` days ago (smaller = newer).
pub fn product(id: DbId, name: &str, age_days: i64) -> ProductSummary {
    ProductSummary {
        id,
        name: name.to_string(),
        slug: name.to_ascii_lowercase().replace(' ', "-"),
        short_desc: None,
        cover_image: None,
        price_hint: None,
        created_at: Utc::now() - Duration::days(age_days),
    }
}

/// An in-memory [`ProductQuery`] over a fixed product list.
///
/// Only ACTIVE products should be placed in `products`, mirroring the
/// contract that real stores filter on status before returning rows.
#[derive(Default)]
pub struct InMemoryProducts {
    pub products: Vec<ProductSummary>,
    /// tag id -> product ids carrying that tag.
    pub tags: HashMap<DbId, Vec<DbId>>,
}

impl InMemoryProducts {
    pub fn with_products(products: Vec<ProductSummary>) -> Self {
        Self {
            products,
            tags: HashMap::new(),
        }
    }

    pub fn tag(mut self, tag_id: DbId, product_ids: &[DbId]) -> Self {
        self.tags.insert(tag_id, product_ids.to_vec());
        self
    }

    fn newest_first(&self) -> Vec<ProductSummary> {
        let mut sorted = self.products.clone();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted
    }
}

#[async_trait]
impl ProductQuery for InMemoryProducts {
    async fn latest_active(&self, limit: i64) -> Result<Vec<ProductSummary>, CoreError> {
        Ok(self
            .newest_first()
            .into_iter()
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn active_by_ids(&self, ids: &[DbId]) -> Result<Vec<ProductSummary>, CoreError> {
        Ok(self
            .products
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn active_by_tag_ids(
        &self,
        tag_ids: &[DbId],
        limit: i64,
    ) -> Result<Vec<ProductSummary>, CoreError> {
        let mut matched_ids: Vec<DbId> = Vec::new();
        for tag_id in tag_ids {
            if let Some(ids) = self.tags.get(tag_id) {
                for id in ids {
                    if !matched_ids.contains(id) {
                        matched_ids.push(*id);
                    }
                }
            }
        }

        Ok(self
            .newest_first()
            .into_iter()
            .filter(|p| matched_ids.contains(&p.id))
            .take(limit.max(0) as usize)
            .collect())
    }
}

/// A store that fails every query, for exercising degradation paths.
pub struct FailingProducts;

#[async_trait]
impl ProductQuery for FailingProducts {
    async fn latest_active(&self, _limit: i64) -> Result<Vec<ProductSummary>, CoreError> {
        Err(CoreError::Internal("store unavailable".to_string()))
    }

    async fn active_by_ids(&self, _ids: &[DbId]) -> Result<Vec<ProductSummary>, CoreError> {
        Err(CoreError::Internal("store unavailable".to_string()))
    }

    async fn active_by_tag_ids(
        &self,
        _tag_ids: &[DbId],
        _limit: i64,
    ) -> Result<Vec<ProductSummary>, CoreError> {
        Err(CoreError::Internal("store unavailable".to_string()))
    }
}
