//! Homepage section records and kind handling.
//!
//! A section is one ordered, independently enableable block of the
//! homepage. The `kind` column is stored as free text so that records
//! written by a newer admin build never break an older reader: unknown
//! kinds are skipped at composition time and rejected only when creating a
//! section.

use crate::error::CoreError;
use crate::types::DbId;

/// Section kind keywords, as stored.
pub const KIND_HERO: &str = "hero";
pub const KIND_WHY: &str = "why";
pub const KIND_PRODUCTS: &str = "products";
pub const KIND_FACTORY: &str = "factory";
pub const KIND_CTA: &str = "cta";
pub const KIND_RICH_TEXT: &str = "rich_text";

/// All valid section kinds.
pub const VALID_KINDS: &[&str] = &[
    KIND_HERO,
    KIND_WHY,
    KIND_PRODUCTS,
    KIND_FACTORY,
    KIND_CTA,
    KIND_RICH_TEXT,
];

/// The typed view of a section kind keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    Why,
    Products,
    Factory,
    Cta,
    RichText,
}

impl SectionKind {
    /// Parse a stored kind keyword. Returns `None` for unknown kinds.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            KIND_HERO => Some(SectionKind::Hero),
            KIND_WHY => Some(SectionKind::Why),
            KIND_PRODUCTS => Some(SectionKind::Products),
            KIND_FACTORY => Some(SectionKind::Factory),
            KIND_CTA => Some(SectionKind::Cta),
            KIND_RICH_TEXT => Some(SectionKind::RichText),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Hero => KIND_HERO,
            SectionKind::Why => KIND_WHY,
            SectionKind::Products => KIND_PRODUCTS,
            SectionKind::Factory => KIND_FACTORY,
            SectionKind::Cta => KIND_CTA,
            SectionKind::RichText => KIND_RICH_TEXT,
        }
    }
}

/// Validate a kind keyword for admin creation.
pub fn validate_kind(kind: &str) -> Result<SectionKind, CoreError> {
    SectionKind::parse(kind).ok_or_else(|| {
        CoreError::Validation(format!(
            "Invalid section kind '{kind}'. Must be one of: {}",
            VALID_KINDS.join(", ")
        ))
    })
}

/// An already-fetched section record, as the composition engine sees it.
///
/// The payload is carried as a whole JSON document; it is only ever read
/// or replaced in full, never patched key-by-key.
#[derive(Debug, Clone)]
pub struct Section {
    pub id: DbId,
    pub kind: String,
    pub sort_order: i32,
    pub enabled: bool,
    pub payload: serde_json::Value,
}

/// Select the hero section that the standalone hero-edit surface targets.
///
/// Two-step rule: the first *enabled* hero by ascending `sort_order`; if no
/// hero is enabled, the first hero regardless of its enabled flag. Returns
/// `None` only when no hero section exists at all.
pub fn find_primary_hero(sections: &[Section]) -> Option<&Section> {
    let mut heroes: Vec<&Section> = sections
        .iter()
        .filter(|s| SectionKind::parse(&s.kind) == Some(SectionKind::Hero))
        .collect();
    heroes.sort_by_key(|s| s.sort_order);

    heroes
        .iter()
        .find(|s| s.enabled)
        .copied()
        .or_else(|| heroes.first().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn section(id: DbId, kind: &str, sort_order: i32, enabled: bool) -> Section {
        Section {
            id,
            kind: kind.to_string(),
            sort_order,
            enabled,
            payload: json!({}),
        }
    }

    // --- Kind parsing ---

    #[test]
    fn parse_accepts_all_valid_kinds() {
        for kind in VALID_KINDS {
            assert!(SectionKind::parse(kind).is_some(), "kind {kind}");
        }
    }

    #[test]
    fn parse_rejects_unknown_kinds() {
        assert_eq!(SectionKind::parse("banner"), None);
        assert_eq!(SectionKind::parse(""), None);
    }

    #[test]
    fn validate_kind_reports_the_allowed_values() {
        let err = validate_kind("banner").unwrap_err();
        assert!(err.to_string().contains("Invalid section kind"));
        assert!(err.to_string().contains("hero"));
    }

    // --- Primary hero selection ---

    #[test]
    fn primary_hero_is_first_enabled_by_sort_order() {
        let sections = vec![
            section(1, "hero", 5, true),
            section(2, "hero", 2, true),
            section(3, "why", 0, true),
        ];
        assert_eq!(find_primary_hero(&sections).unwrap().id, 2);
    }

    #[test]
    fn disabled_heroes_are_skipped_when_an_enabled_one_exists() {
        let sections = vec![
            section(1, "hero", 0, false),
            section(2, "hero", 9, true),
        ];
        assert_eq!(find_primary_hero(&sections).unwrap().id, 2);
    }

    #[test]
    fn falls_back_to_first_hero_when_none_enabled() {
        let sections = vec![
            section(1, "hero", 3, false),
            section(2, "hero", 1, false),
        ];
        assert_eq!(find_primary_hero(&sections).unwrap().id, 2);
    }

    #[test]
    fn no_hero_sections_yields_none() {
        let sections = vec![section(1, "why", 0, true)];
        assert!(find_primary_hero(&sections).is_none());
    }
}
