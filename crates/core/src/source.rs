//! Product-source resolution for PRODUCTS sections.
//!
//! A section's source configuration picks which products it displays:
//! the newest ones, a manually curated list, or the union of one or more
//! tags. Every failure mode degrades to "fewer products" rather than an
//! error; tag-based sourcing additionally falls back to the latest
//! products so a misconfigured tag filter never leaves the section empty.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::de;
use crate::error::CoreError;
use crate::product::{ProductQuery, ProductSummary};
use crate::types::DbId;

/// Products shown when the stored limit is missing or unusable.
pub const DEFAULT_PRODUCT_LIMIT: i64 = 9;

/// The strategy a PRODUCTS section uses to pick products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceMode {
    #[default]
    Latest,
    Manual,
    Tags,
}

impl SourceMode {
    /// Parse a stored mode keyword. Unknown keywords become `Latest`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "manual" => SourceMode::Manual,
            "tags" => SourceMode::Tags,
            _ => SourceMode::Latest,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SourceMode::Latest => "latest",
            SourceMode::Manual => "manual",
            SourceMode::Tags => "tags",
        }
    }
}

impl Serialize for SourceMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SourceMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::parse(raw.as_str().unwrap_or_default()))
    }
}

/// Tag matching logic for `SourceMode::Tags`.
///
/// `all` is accepted in stored configurations but resolution currently
/// applies any-of union semantics for both values; intersection matching
/// has never been implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    #[default]
    Any,
    All,
}

impl MatchMode {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" => MatchMode::All,
            _ => MatchMode::Any,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Any => "any",
            MatchMode::All => "all",
        }
    }
}

impl Serialize for MatchMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MatchMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::parse(raw.as_str().unwrap_or_default()))
    }
}

/// Stored source configuration of a PRODUCTS section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductSourceConfig {
    pub mode: SourceMode,
    #[serde(deserialize_with = "de::lenient_seq")]
    pub tag_ids: Vec<DbId>,
    /// Curated product ids; display order follows this list exactly.
    #[serde(deserialize_with = "de::lenient_seq")]
    pub manual_product_ids: Vec<DbId>,
    pub match_mode: MatchMode,
    /// Stored as a number or a numeric string; see [`Self::effective_limit`].
    #[serde(deserialize_with = "de::lenient_int")]
    pub limit: Option<i64>,
}

impl Default for ProductSourceConfig {
    fn default() -> Self {
        Self {
            mode: SourceMode::Latest,
            tag_ids: Vec::new(),
            manual_product_ids: Vec::new(),
            match_mode: MatchMode::Any,
            limit: Some(DEFAULT_PRODUCT_LIMIT),
        }
    }
}

impl ProductSourceConfig {
    /// The limit as a positive integer, regardless of how it was stored.
    pub fn effective_limit(&self) -> i64 {
        match self.limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_PRODUCT_LIMIT,
        }
    }
}

/// Resolve the ordered product list a section should display.
///
/// - `latest`: the `limit` newest products.
/// - `manual`: the curated ids, re-ordered to match the stored sequence;
///   ids pointing at deleted or inactive products are silently dropped.
/// - `tags`: any-of union across the configured tags, newest first; when
///   the union is empty (including an empty tag list) the latest products
///   are returned instead, with the same limit.
///
/// Store failures propagate; every content-level misconfiguration degrades
/// silently.
pub async fn resolve_products(
    config: &ProductSourceConfig,
    store: &dyn ProductQuery,
) -> Result<Vec<ProductSummary>, CoreError> {
    let limit = config.effective_limit();

    match config.mode {
        SourceMode::Latest => store.latest_active(limit).await,

        SourceMode::Manual => {
            if config.manual_product_ids.is_empty() {
                return Ok(Vec::new());
            }

            let fetched = store.active_by_ids(&config.manual_product_ids).await?;
            let mut by_id: HashMap<DbId, ProductSummary> =
                fetched.into_iter().map(|p| (p.id, p)).collect();

            Ok(config
                .manual_product_ids
                .iter()
                .filter_map(|id| by_id.remove(id))
                .take(limit as usize)
                .collect())
        }

        SourceMode::Tags => {
            let matched = if config.tag_ids.is_empty() {
                Vec::new()
            } else {
                store.active_by_tag_ids(&config.tag_ids, limit).await?
            };

            if matched.is_empty() {
                // Safety net: a tag filter that matches nothing must not
                // leave the section empty.
                store.latest_active(limit).await
            } else {
                Ok(matched)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{product, InMemoryProducts};
    use serde_json::json;

    fn store() -> InMemoryProducts {
        // Ids 1..=5, id 5 newest.
        InMemoryProducts::with_products(vec![
            product(1, "Mailer Box", 50),
            product(2, "Kraft Bag", 40),
            product(3, "Rigid Box", 30),
            product(4, "Label Roll", 20),
            product(5, "Corrugated Carton", 10),
        ])
    }

    fn ids(products: &[ProductSummary]) -> Vec<DbId> {
        products.iter().map(|p| p.id).collect()
    }

    // --- Limit coercion ---

    #[test]
    fn limit_accepts_numbers_and_numeric_strings() {
        let config: ProductSourceConfig = serde_json::from_value(json!({"limit": 4})).unwrap();
        assert_eq!(config.effective_limit(), 4);

        let config: ProductSourceConfig = serde_json::from_value(json!({"limit": "7"})).unwrap();
        assert_eq!(config.effective_limit(), 7);
    }

    #[test]
    fn unusable_limits_fall_back_to_the_default() {
        for raw in [json!(0), json!(-3), json!("many"), json!(null), json!(true)] {
            let config: ProductSourceConfig =
                serde_json::from_value(json!({ "limit": raw.clone() })).unwrap();
            assert_eq!(config.effective_limit(), DEFAULT_PRODUCT_LIMIT, "limit {raw}");
        }
    }

    #[test]
    fn missing_limit_falls_back_to_the_default() {
        let config: ProductSourceConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config.effective_limit(), DEFAULT_PRODUCT_LIMIT);
    }

    // --- Latest mode ---

    #[tokio::test]
    async fn latest_returns_newest_first_truncated() {
        let config = ProductSourceConfig {
            mode: SourceMode::Latest,
            limit: Some(3),
            ..Default::default()
        };
        let resolved = resolve_products(&config, &store()).await.unwrap();
        assert_eq!(ids(&resolved), vec![5, 4, 3]);
    }

    // --- Manual mode ---

    #[tokio::test]
    async fn manual_preserves_the_configured_order() {
        let config = ProductSourceConfig {
            mode: SourceMode::Manual,
            manual_product_ids: vec![3, 1, 2],
            ..Default::default()
        };
        let resolved = resolve_products(&config, &store()).await.unwrap();
        assert_eq!(ids(&resolved), vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn manual_drops_dangling_ids_silently() {
        let config = ProductSourceConfig {
            mode: SourceMode::Manual,
            manual_product_ids: vec![99, 2, 42, 4],
            ..Default::default()
        };
        let resolved = resolve_products(&config, &store()).await.unwrap();
        assert_eq!(ids(&resolved), vec![2, 4]);
    }

    #[tokio::test]
    async fn manual_truncates_after_reordering() {
        let config = ProductSourceConfig {
            mode: SourceMode::Manual,
            manual_product_ids: vec![5, 4, 3, 2],
            limit: Some(2),
            ..Default::default()
        };
        let resolved = resolve_products(&config, &store()).await.unwrap();
        assert_eq!(ids(&resolved), vec![5, 4]);
    }

    #[tokio::test]
    async fn manual_with_no_ids_yields_no_products() {
        let config = ProductSourceConfig {
            mode: SourceMode::Manual,
            ..Default::default()
        };
        let resolved = resolve_products(&config, &store()).await.unwrap();
        assert!(resolved.is_empty());
    }

    // --- Tags mode ---

    #[tokio::test]
    async fn tags_returns_the_union_newest_first() {
        let store = store().tag(10, &[1, 3]).tag(20, &[2]);
        let config = ProductSourceConfig {
            mode: SourceMode::Tags,
            tag_ids: vec![10, 20],
            ..Default::default()
        };
        let resolved = resolve_products(&config, &store).await.unwrap();
        assert_eq!(ids(&resolved), vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn tags_with_no_matches_falls_back_to_latest_with_same_limit() {
        let store = store().tag(10, &[]);
        let config = ProductSourceConfig {
            mode: SourceMode::Tags,
            tag_ids: vec![10],
            limit: Some(2),
            ..Default::default()
        };
        let latest = ProductSourceConfig {
            mode: SourceMode::Latest,
            limit: Some(2),
            ..Default::default()
        };

        let resolved = resolve_products(&config, &store).await.unwrap();
        let expected = resolve_products(&latest, &store).await.unwrap();
        assert_eq!(ids(&resolved), ids(&expected));
        assert_eq!(ids(&resolved), vec![5, 4]);
    }

    #[tokio::test]
    async fn empty_tag_list_also_falls_back_to_latest() {
        let config = ProductSourceConfig {
            mode: SourceMode::Tags,
            limit: Some(1),
            ..Default::default()
        };
        let resolved = resolve_products(&config, &store()).await.unwrap();
        assert_eq!(ids(&resolved), vec![5]);
    }

    #[tokio::test]
    async fn match_mode_all_currently_resolves_with_any_semantics() {
        // Intersection matching is not implemented; both modes must produce
        // the same union result.
        let store = store().tag(10, &[1, 2]).tag(20, &[2, 3]);
        let any = ProductSourceConfig {
            mode: SourceMode::Tags,
            tag_ids: vec![10, 20],
            match_mode: MatchMode::Any,
            ..Default::default()
        };
        let all = ProductSourceConfig {
            match_mode: MatchMode::All,
            ..any.clone()
        };

        let resolved_any = resolve_products(&any, &store).await.unwrap();
        let resolved_all = resolve_products(&all, &store).await.unwrap();
        assert_eq!(ids(&resolved_any), ids(&resolved_all));
        assert_eq!(ids(&resolved_any), vec![3, 2, 1]);
    }

    // --- Stored-shape defensiveness ---

    #[test]
    fn garbled_config_degrades_to_defaults() {
        let config: ProductSourceConfig = serde_json::from_value(json!({
            "mode": 7,
            "tagIds": "not-a-list",
            "manualProductIds": [1, "2", null, 3],
            "matchMode": {},
            "limit": "9x",
        }))
        .unwrap();

        assert_eq!(config.mode, SourceMode::Latest);
        assert!(config.tag_ids.is_empty());
        // Non-numeric elements are dropped, numeric ones survive.
        assert_eq!(config.manual_product_ids, vec![1, 3]);
        assert_eq!(config.match_mode, MatchMode::Any);
        assert_eq!(config.effective_limit(), DEFAULT_PRODUCT_LIMIT);
    }
}
