//! Typed section payload schemas.
//!
//! Each section kind owns a payload struct deserialized from the stored
//! JSON document. Container-level `#[serde(default)]` merges the stored
//! keys over the documented admin defaults, and every scalar field uses a
//! lenient deserializer, so a missing or wrong-typed key can never fail
//! normalization. A payload that is not an object at all degrades to the
//! full default document.
//!
//! Key names mirror the stored shape: camelCase, with bilingual pairs as
//! flat `_en` / `_zh` siblings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::cta::CtaActionType;
use crate::de;
use crate::locale::LocalizedText;
use crate::section::SectionKind;
use crate::source::ProductSourceConfig;

/* --------------------------------------------------------------------------
   Display constants
   -------------------------------------------------------------------------- */

/// Carousel cards per view bounds and default.
pub const MIN_ITEMS_PER_VIEW: i64 = 3;
pub const MAX_ITEMS_PER_VIEW: i64 = 10;
pub const DEFAULT_ITEMS_PER_VIEW: i64 = 5;

/// CTA background overlay opacity bounds and default.
pub const MAX_OVERLAY_OPACITY: f64 = 0.95;
pub const DEFAULT_OVERLAY_OPACITY: f64 = 0.4;

/// Cards shown in the fixed column row of WHY / FACTORY sections; any
/// surviving cards beyond this count move to the overflow list.
pub const CARD_COLUMNS: usize = 3;

/* --------------------------------------------------------------------------
   Display enums
   -------------------------------------------------------------------------- */

/// Layout of a PRODUCTS section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductsLayout {
    #[default]
    Grid,
    Carousel,
    Scroll,
}

impl ProductsLayout {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "carousel" => ProductsLayout::Carousel,
            "scroll" => ProductsLayout::Scroll,
            _ => ProductsLayout::Grid,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProductsLayout::Grid => "grid",
            ProductsLayout::Carousel => "carousel",
            ProductsLayout::Scroll => "scroll",
        }
    }
}

impl Serialize for ProductsLayout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProductsLayout {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::parse(raw.as_str().unwrap_or_default()))
    }
}

/// CTA section background treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundStyle {
    #[default]
    Solid,
    Image,
}

impl BackgroundStyle {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "image" => BackgroundStyle::Image,
            _ => BackgroundStyle::Solid,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BackgroundStyle::Solid => "solid",
            BackgroundStyle::Image => "image",
        }
    }
}

impl Serialize for BackgroundStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BackgroundStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::parse(raw.as_str().unwrap_or_default()))
    }
}

/// Text tone rendered over the CTA background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextTone {
    #[default]
    Light,
    Dark,
}

impl TextTone {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dark" => TextTone::Dark,
            _ => TextTone::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextTone::Light => "light",
            TextTone::Dark => "dark",
        }
    }
}

impl Serialize for TextTone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TextTone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::parse(raw.as_str().unwrap_or_default()))
    }
}

/* --------------------------------------------------------------------------
   HERO
   -------------------------------------------------------------------------- */

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroPayload {
    #[serde(rename = "titleLine1_en", deserialize_with = "de::lenient_string")]
    pub title_line1_en: Option<String>,
    #[serde(rename = "titleLine1_zh", deserialize_with = "de::lenient_string")]
    pub title_line1_zh: Option<String>,
    #[serde(rename = "titleLine2_en", deserialize_with = "de::lenient_string")]
    pub title_line2_en: Option<String>,
    #[serde(rename = "titleLine2_zh", deserialize_with = "de::lenient_string")]
    pub title_line2_zh: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub subtitle_en: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub subtitle_zh: Option<String>,
    #[serde(rename = "primaryCtaLabel_en", deserialize_with = "de::lenient_string")]
    pub primary_cta_label_en: Option<String>,
    #[serde(rename = "primaryCtaLabel_zh", deserialize_with = "de::lenient_string")]
    pub primary_cta_label_zh: Option<String>,
    #[serde(rename = "primaryCtaUrl", deserialize_with = "de::lenient_string")]
    pub primary_cta_url: Option<String>,
    #[serde(rename = "secondaryCtaLabel_en", deserialize_with = "de::lenient_string")]
    pub secondary_cta_label_en: Option<String>,
    #[serde(rename = "secondaryCtaLabel_zh", deserialize_with = "de::lenient_string")]
    pub secondary_cta_label_zh: Option<String>,
    #[serde(rename = "secondaryCtaUrl", deserialize_with = "de::lenient_string")]
    pub secondary_cta_url: Option<String>,
    #[serde(rename = "imageUrl", deserialize_with = "de::lenient_string")]
    pub image_url: Option<String>,
}

impl Default for HeroPayload {
    fn default() -> Self {
        Self {
            title_line1_en: Some("Packaging That Sells Your Product".into()),
            title_line1_zh: Some("让产品更出众的包装".into()),
            title_line2_en: Some("Designed, Printed, Delivered".into()),
            title_line2_zh: Some("设计、印刷、交付".into()),
            subtitle_en: Some(
                "Custom boxes, bags and cartons manufactured to spec for brands worldwide.".into(),
            ),
            subtitle_zh: Some("为全球品牌定制生产纸盒、纸袋与彩盒。".into()),
            primary_cta_label_en: Some("Get a Quote".into()),
            primary_cta_label_zh: Some("获取报价".into()),
            primary_cta_url: Some("/contact".into()),
            secondary_cta_label_en: Some("Browse Products".into()),
            secondary_cta_label_zh: Some("浏览产品".into()),
            secondary_cta_url: Some("/products".into()),
            image_url: None,
        }
    }
}

impl HeroPayload {
    pub fn title_line1(&self) -> LocalizedText {
        LocalizedText::new(self.title_line1_en.clone(), self.title_line1_zh.clone())
    }

    pub fn title_line2(&self) -> LocalizedText {
        LocalizedText::new(self.title_line2_en.clone(), self.title_line2_zh.clone())
    }

    pub fn subtitle(&self) -> LocalizedText {
        LocalizedText::new(self.subtitle_en.clone(), self.subtitle_zh.clone())
    }

    pub fn primary_cta_label(&self) -> LocalizedText {
        LocalizedText::new(
            self.primary_cta_label_en.clone(),
            self.primary_cta_label_zh.clone(),
        )
    }

    pub fn secondary_cta_label(&self) -> LocalizedText {
        LocalizedText::new(
            self.secondary_cta_label_en.clone(),
            self.secondary_cta_label_zh.clone(),
        )
    }
}

/* --------------------------------------------------------------------------
   Cards (WHY / FACTORY)
   -------------------------------------------------------------------------- */

/// One card of a WHY or FACTORY section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardPayload {
    #[serde(deserialize_with = "de::lenient_string")]
    pub title_en: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub title_zh: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub body_en: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub body_zh: Option<String>,
    #[serde(rename = "imageUrl", deserialize_with = "de::lenient_string")]
    pub image_url: Option<String>,
}

impl CardPayload {
    pub fn title(&self) -> LocalizedText {
        LocalizedText::new(self.title_en.clone(), self.title_zh.clone())
    }

    pub fn body(&self) -> LocalizedText {
        LocalizedText::new(self.body_en.clone(), self.body_zh.clone())
    }

    fn bilingual(title_en: &str, title_zh: &str, body_en: &str, body_zh: &str) -> Self {
        Self {
            title_en: Some(title_en.into()),
            title_zh: Some(title_zh.into()),
            body_en: Some(body_en.into()),
            body_zh: Some(body_zh.into()),
            image_url: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WhyPayload {
    #[serde(deserialize_with = "de::lenient_string")]
    pub title_en: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub title_zh: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub subtitle_en: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub subtitle_zh: Option<String>,
    #[serde(deserialize_with = "de::lenient_seq")]
    pub cards: Vec<CardPayload>,
}

impl Default for WhyPayload {
    fn default() -> Self {
        Self {
            title_en: Some("Why Choose Us".into()),
            title_zh: Some("为什么选择我们".into()),
            subtitle_en: Some("Three reasons brands stay with us.".into()),
            subtitle_zh: Some("品牌长期合作的三个理由。".into()),
            cards: vec![
                CardPayload::bilingual(
                    "Consistent Quality",
                    "稳定品质",
                    "Every run is inspected against your approved sample.",
                    "每批产品均对照签样全检。",
                ),
                CardPayload::bilingual(
                    "Fast Lead Times",
                    "快速交期",
                    "Standard orders ship within 10 working days.",
                    "常规订单 10 个工作日内发货。",
                ),
                CardPayload::bilingual(
                    "Sustainable Materials",
                    "环保材料",
                    "FSC-certified papers and soy-based inks available.",
                    "可选 FSC 认证纸张与大豆油墨。",
                ),
            ],
        }
    }
}

impl WhyPayload {
    pub fn title(&self) -> LocalizedText {
        LocalizedText::new(self.title_en.clone(), self.title_zh.clone())
    }

    pub fn subtitle(&self) -> LocalizedText {
        LocalizedText::new(self.subtitle_en.clone(), self.subtitle_zh.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryPayload {
    #[serde(deserialize_with = "de::lenient_string")]
    pub title_en: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub title_zh: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub subtitle_en: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub subtitle_zh: Option<String>,
    #[serde(deserialize_with = "de::lenient_seq")]
    pub cards: Vec<CardPayload>,
}

impl Default for FactoryPayload {
    fn default() -> Self {
        Self {
            title_en: Some("Inside Our Factory".into()),
            title_zh: Some("工厂实力".into()),
            subtitle_en: Some("From printing floor to finishing line.".into()),
            subtitle_zh: Some("从印刷车间到后道成型。".into()),
            cards: vec![
                CardPayload::bilingual(
                    "Offset Printing",
                    "胶印车间",
                    "Six-color presses with inline coating.",
                    "六色印刷机，联线上光。",
                ),
                CardPayload::bilingual(
                    "Die Cutting",
                    "模切成型",
                    "Automatic die cutters for clean creases at volume.",
                    "全自动模切，批量压痕平整。",
                ),
                CardPayload::bilingual(
                    "Quality Control",
                    "品质检测",
                    "Inline camera inspection on every finishing line.",
                    "每条后道产线配备在线视觉检测。",
                ),
            ],
        }
    }
}

impl FactoryPayload {
    pub fn title(&self) -> LocalizedText {
        LocalizedText::new(self.title_en.clone(), self.title_zh.clone())
    }

    pub fn subtitle(&self) -> LocalizedText {
        LocalizedText::new(self.subtitle_en.clone(), self.subtitle_zh.clone())
    }
}

/* --------------------------------------------------------------------------
   PRODUCTS
   -------------------------------------------------------------------------- */

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductsPayload {
    #[serde(deserialize_with = "de::lenient_string")]
    pub title_en: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub title_zh: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub subtitle_en: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub subtitle_zh: Option<String>,
    #[serde(deserialize_with = "de::or_default")]
    pub source: ProductSourceConfig,
    pub layout: ProductsLayout,
    #[serde(rename = "itemsPerView", deserialize_with = "de::lenient_int")]
    pub items_per_view: Option<i64>,
    #[serde(rename = "autoPlay", deserialize_with = "de::lenient_bool")]
    pub auto_play: Option<bool>,
    #[serde(rename = "showArrows", deserialize_with = "de::lenient_bool")]
    pub show_arrows: Option<bool>,
    #[serde(rename = "showProductName", deserialize_with = "de::lenient_bool")]
    pub show_product_name: Option<bool>,
    #[serde(rename = "showSubtitle", deserialize_with = "de::lenient_bool")]
    pub show_subtitle: Option<bool>,
    #[serde(rename = "showPriceHint", deserialize_with = "de::lenient_bool")]
    pub show_price_hint: Option<bool>,
    #[serde(deserialize_with = "de::lenient_bool")]
    pub clickable: Option<bool>,
    #[serde(rename = "showSectionTitle", deserialize_with = "de::lenient_bool")]
    pub show_section_title: Option<bool>,
}

impl Default for ProductsPayload {
    fn default() -> Self {
        Self {
            title_en: Some("Our Products".into()),
            title_zh: Some("产品中心".into()),
            subtitle_en: Some("Explore our most popular packaging formats.".into()),
            subtitle_zh: Some("了解最受欢迎的包装产品。".into()),
            source: ProductSourceConfig::default(),
            layout: ProductsLayout::Grid,
            items_per_view: Some(DEFAULT_ITEMS_PER_VIEW),
            auto_play: Some(true),
            show_arrows: Some(true),
            show_product_name: Some(true),
            show_subtitle: Some(true),
            show_price_hint: Some(false),
            clickable: Some(true),
            show_section_title: Some(true),
        }
    }
}

impl ProductsPayload {
    pub fn title(&self) -> LocalizedText {
        LocalizedText::new(self.title_en.clone(), self.title_zh.clone())
    }

    pub fn subtitle(&self) -> LocalizedText {
        LocalizedText::new(self.subtitle_en.clone(), self.subtitle_zh.clone())
    }

    /// Carousel cards per view, clamped into the supported range.
    pub fn effective_items_per_view(&self) -> i64 {
        self.items_per_view
            .unwrap_or(DEFAULT_ITEMS_PER_VIEW)
            .clamp(MIN_ITEMS_PER_VIEW, MAX_ITEMS_PER_VIEW)
    }
}

/* --------------------------------------------------------------------------
   CTA
   -------------------------------------------------------------------------- */

/// One button of a CTA section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaButtonPayload {
    #[serde(deserialize_with = "de::lenient_string")]
    pub label_en: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub label_zh: Option<String>,
    #[serde(rename = "actionType")]
    pub action_type: CtaActionType,
    #[serde(deserialize_with = "de::lenient_string")]
    pub value: Option<String>,
}

impl CtaButtonPayload {
    pub fn label(&self) -> LocalizedText {
        LocalizedText::new(self.label_en.clone(), self.label_zh.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaPayload {
    #[serde(deserialize_with = "de::lenient_string")]
    pub title_en: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub title_zh: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub subtitle_en: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub subtitle_zh: Option<String>,
    #[serde(rename = "backgroundStyle")]
    pub background_style: BackgroundStyle,
    #[serde(rename = "backgroundColor", deserialize_with = "de::lenient_string")]
    pub background_color: Option<String>,
    #[serde(rename = "backgroundImageUrl", deserialize_with = "de::lenient_string")]
    pub background_image_url: Option<String>,
    /// Numbers only; a numeric string falls back to the default.
    #[serde(rename = "overlayOpacity", deserialize_with = "de::strict_f64")]
    pub overlay_opacity: Option<f64>,
    #[serde(rename = "textTone")]
    pub text_tone: TextTone,
    #[serde(deserialize_with = "de::lenient_seq")]
    pub buttons: Vec<CtaButtonPayload>,
}

impl Default for CtaPayload {
    fn default() -> Self {
        Self {
            title_en: Some("Ready to Start Your Project?".into()),
            title_zh: Some("准备好开始您的项目了吗？".into()),
            subtitle_en: Some(
                "Tell us about your product and we'll suggest the right packaging.".into(),
            ),
            subtitle_zh: Some("告诉我们您的产品，我们将为您推荐合适的包装方案。".into()),
            background_style: BackgroundStyle::Solid,
            background_color: Some("#1e3a5f".into()),
            background_image_url: None,
            overlay_opacity: Some(DEFAULT_OVERLAY_OPACITY),
            text_tone: TextTone::Light,
            buttons: vec![CtaButtonPayload {
                label_en: Some("Contact Us".into()),
                label_zh: Some("联系我们".into()),
                action_type: CtaActionType::Link,
                value: Some("/contact".into()),
            }],
        }
    }
}

impl CtaPayload {
    pub fn title(&self) -> LocalizedText {
        LocalizedText::new(self.title_en.clone(), self.title_zh.clone())
    }

    pub fn subtitle(&self) -> LocalizedText {
        LocalizedText::new(self.subtitle_en.clone(), self.subtitle_zh.clone())
    }

    /// Overlay opacity clamped into `[0, 0.95]`.
    pub fn effective_overlay_opacity(&self) -> f64 {
        self.overlay_opacity
            .unwrap_or(DEFAULT_OVERLAY_OPACITY)
            .clamp(0.0, MAX_OVERLAY_OPACITY)
    }
}

/* --------------------------------------------------------------------------
   RICH_TEXT
   -------------------------------------------------------------------------- */

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RichTextPayload {
    #[serde(deserialize_with = "de::lenient_string")]
    pub title_en: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub title_zh: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub body_en: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub body_zh: Option<String>,
}

impl RichTextPayload {
    pub fn title(&self) -> LocalizedText {
        LocalizedText::new(self.title_en.clone(), self.title_zh.clone())
    }

    pub fn body(&self) -> LocalizedText {
        LocalizedText::new(self.body_en.clone(), self.body_zh.clone())
    }
}

/* --------------------------------------------------------------------------
   Stored-document helpers
   -------------------------------------------------------------------------- */

/// Deserialize a stored payload document, degrading to the full default
/// document when the stored value is not an object.
pub fn from_stored<T>(payload: &Value) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    serde_json::from_value(payload.clone()).unwrap_or_default()
}

/// The default payload document written when a section is created.
pub fn default_payload(kind: SectionKind) -> Value {
    let document = match kind {
        SectionKind::Hero => serde_json::to_value(HeroPayload::default()),
        SectionKind::Why => serde_json::to_value(WhyPayload::default()),
        SectionKind::Products => serde_json::to_value(ProductsPayload::default()),
        SectionKind::Factory => serde_json::to_value(FactoryPayload::default()),
        SectionKind::Cta => serde_json::to_value(CtaPayload::default()),
        SectionKind::RichText => serde_json::to_value(RichTextPayload::default()),
    };
    document.unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // --- Merge over defaults ---

    #[test]
    fn missing_keys_take_the_documented_defaults() {
        let payload: HeroPayload = from_stored(&json!({"titleLine1_en": "Premium Boxes"}));
        assert_eq!(payload.title_line1_en.as_deref(), Some("Premium Boxes"));
        // Untouched keys keep the admin defaults.
        assert_eq!(payload.primary_cta_url.as_deref(), Some("/contact"));
        assert_eq!(payload.title_line2_zh.as_deref(), Some("设计、印刷、交付"));
    }

    #[test]
    fn non_object_payload_degrades_to_the_full_default_document() {
        let payload: WhyPayload = from_stored(&json!("corrupted"));
        assert_eq!(payload.cards.len(), 3);
        assert_eq!(payload.title_en.as_deref(), Some("Why Choose Us"));
    }

    #[test]
    fn wrong_typed_scalars_degrade_to_none_not_a_parse_error() {
        let payload: HeroPayload = from_stored(&json!({
            "titleLine1_en": 42,
            "subtitle_zh": ["not", "a", "string"],
        }));
        assert_eq!(payload.title_line1_en, None);
        assert_eq!(payload.subtitle_zh, None);
    }

    // --- Items per view ---

    #[test]
    fn items_per_view_is_clamped_into_range() {
        for (raw, expected) in [(json!(0), 3), (json!(2), 3), (json!(15), 10), (json!("7"), 7)] {
            let payload: ProductsPayload = from_stored(&json!({ "itemsPerView": raw.clone() }));
            assert_eq!(payload.effective_items_per_view(), expected, "raw {raw}");
        }
    }

    #[test]
    fn unusable_items_per_view_falls_back_to_the_default() {
        let payload: ProductsPayload = from_stored(&json!({"itemsPerView": "lots"}));
        assert_eq!(payload.effective_items_per_view(), DEFAULT_ITEMS_PER_VIEW);
    }

    // --- Overlay opacity ---

    #[test]
    fn overlay_opacity_is_clamped() {
        let payload: CtaPayload = from_stored(&json!({"overlayOpacity": -1.0}));
        assert_eq!(payload.effective_overlay_opacity(), 0.0);

        let payload: CtaPayload = from_stored(&json!({"overlayOpacity": 0.99}));
        assert_eq!(payload.effective_overlay_opacity(), MAX_OVERLAY_OPACITY);
    }

    #[test]
    fn overlay_opacity_does_not_coerce_numeric_strings() {
        let payload: CtaPayload = from_stored(&json!({"overlayOpacity": "0.4"}));
        assert_eq!(payload.overlay_opacity, None);
        assert_eq!(payload.effective_overlay_opacity(), DEFAULT_OVERLAY_OPACITY);
    }

    // --- Enum keyword parsing ---

    #[test]
    fn layout_parses_with_grid_default() {
        let payload: ProductsPayload = from_stored(&json!({"layout": "carousel"}));
        assert_eq!(payload.layout, ProductsLayout::Carousel);

        let payload: ProductsPayload = from_stored(&json!({"layout": "mosaic"}));
        assert_eq!(payload.layout, ProductsLayout::Grid);
    }

    #[test]
    fn buttons_with_unknown_action_types_coerce_to_link() {
        let payload: CtaPayload = from_stored(&json!({
            "buttons": [{"label_en": "Go", "actionType": "pager", "value": "/x"}],
        }));
        assert_eq!(payload.buttons.len(), 1);
        assert_eq!(payload.buttons[0].action_type, CtaActionType::Link);
    }

    #[test]
    fn malformed_button_entries_are_dropped() {
        let payload: CtaPayload = from_stored(&json!({
            "buttons": [
                "junk",
                {"label_en": "Call", "actionType": "phone", "value": "+86138"},
            ],
        }));
        assert_eq!(payload.buttons.len(), 1);
        assert_eq!(payload.buttons[0].action_type, CtaActionType::Phone);
    }

    // --- Default documents ---

    #[test]
    fn default_payload_round_trips_through_its_schema() {
        let document = default_payload(SectionKind::Cta);
        let payload: CtaPayload = from_stored(&document);
        assert_eq!(payload.title_en.as_deref(), Some("Ready to Start Your Project?"));
        assert_eq!(payload.buttons.len(), 1);
    }

    #[test]
    fn default_payload_uses_the_stored_key_names() {
        let document = default_payload(SectionKind::Hero);
        assert!(document.get("titleLine1_en").is_some());
        assert!(document.get("primaryCtaUrl").is_some());

        let document = default_payload(SectionKind::Products);
        assert!(document.get("itemsPerView").is_some());
        assert_eq!(document["source"]["mode"], "latest");
    }
}
