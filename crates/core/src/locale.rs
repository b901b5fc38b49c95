//! Bilingual text resolution.
//!
//! Every user-visible string on the site exists as an English/Chinese pair.
//! Resolution picks the variant for the active language and falls back to a
//! caller-supplied default when the variant is missing or whitespace-only.

/// English language code.
pub const LANG_EN: &str = "en";

/// Chinese language code.
pub const LANG_ZH: &str = "zh";

/// The active display language for a request.
///
/// Exactly two languages exist; any unrecognised selector degrades to
/// English rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    /// Parse a raw language selector. Anything other than `"zh"` is English.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case(LANG_ZH) {
            Language::Zh
        } else {
            Language::En
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => LANG_EN,
            Language::Zh => LANG_ZH,
        }
    }
}

/// A bilingual text value.
///
/// Stored payloads keep the two variants as flat sibling keys
/// (`foo_en` / `foo_zh`); this type is the in-memory view of such a pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalizedText {
    pub en: Option<String>,
    pub zh: Option<String>,
}

impl LocalizedText {
    pub fn new(en: Option<String>, zh: Option<String>) -> Self {
        Self { en, zh }
    }

    /// Resolve to the active language.
    ///
    /// The selected variant is trimmed first; if the result is empty the
    /// `fallback` is returned instead. There is no cross-language fallback:
    /// an empty English variant does not borrow the Chinese one.
    pub fn resolve(&self, lang: Language, fallback: &str) -> String {
        let selected = match lang {
            Language::En => self.en.as_deref(),
            Language::Zh => self.zh.as_deref(),
        };

        match selected.map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => fallback.to_string(),
        }
    }

    /// Resolve with an empty-string fallback.
    pub fn resolve_or_empty(&self, lang: Language) -> String {
        self.resolve(lang, "")
    }

    /// True when the active language has no usable content.
    pub fn is_blank(&self, lang: Language) -> bool {
        self.resolve(lang, "").is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Language parsing ---

    #[test]
    fn parse_accepts_both_languages() {
        assert_eq!(Language::parse("en"), Language::En);
        assert_eq!(Language::parse("zh"), Language::Zh);
    }

    #[test]
    fn parse_defaults_unknown_selectors_to_english() {
        assert_eq!(Language::parse("fr"), Language::En);
        assert_eq!(Language::parse(""), Language::En);
        assert_eq!(Language::parse("zh-CN"), Language::En);
    }

    #[test]
    fn parse_is_case_insensitive_and_trimmed() {
        assert_eq!(Language::parse(" ZH "), Language::Zh);
    }

    // --- Resolution ---

    #[test]
    fn resolve_picks_active_language() {
        let text = LocalizedText::new(Some("Boxes".into()), Some("纸盒".into()));
        assert_eq!(text.resolve(Language::En, "x"), "Boxes");
        assert_eq!(text.resolve(Language::Zh, "x"), "纸盒");
    }

    #[test]
    fn resolve_falls_back_when_variant_missing() {
        let text = LocalizedText::new(Some("Boxes".into()), None);
        assert_eq!(text.resolve(Language::Zh, "默认"), "默认");
    }

    #[test]
    fn resolve_falls_back_when_variant_whitespace_only() {
        let text = LocalizedText::new(Some("   ".into()), Some("\t\n".into()));
        assert_eq!(text.resolve(Language::En, "fallback"), "fallback");
        assert_eq!(text.resolve(Language::Zh, "fallback"), "fallback");
    }

    #[test]
    fn resolve_trims_the_selected_value() {
        let text = LocalizedText::new(Some("  Cartons  ".into()), None);
        assert_eq!(text.resolve(Language::En, ""), "Cartons");
    }

    #[test]
    fn resolve_does_not_borrow_the_other_language() {
        let text = LocalizedText::new(None, Some("纸盒".into()));
        assert_eq!(text.resolve(Language::En, "fallback"), "fallback");
    }

    #[test]
    fn both_variants_empty_yields_the_supplied_fallback() {
        let text = LocalizedText::default();
        assert_eq!(text.resolve(Language::En, "fb"), "fb");
        assert_eq!(text.resolve(Language::Zh, "fb"), "fb");
    }

    #[test]
    fn is_blank_reflects_the_active_language_only() {
        let text = LocalizedText::new(None, Some("内容".into()));
        assert!(text.is_blank(Language::En));
        assert!(!text.is_blank(Language::Zh));
    }
}
