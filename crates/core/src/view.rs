//! Render-ready section view models.
//!
//! Everything in here is already localized, already resolved, and already
//! filtered: the rendering layer performs layout only. Serialized with a
//! `type` tag so the frontend can dispatch per section kind.

use serde::Serialize;

use crate::payload::{BackgroundStyle, ProductsLayout, TextTone};
use crate::product::ProductSummary;
use crate::types::DbId;

/// A resolved hero link (label + plain href).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CtaLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub id: DbId,
    pub title_line1: String,
    pub title_line2: String,
    pub subtitle: String,
    pub image_url: Option<String>,
    pub primary_cta: Option<CtaLink>,
    pub secondary_cta: Option<CtaLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub title: String,
    pub body: String,
    pub image_url: Option<String>,
}

/// A WHY or FACTORY section: up to three cards in the fixed column row,
/// the rest in a horizontally scrollable overflow list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardsView {
    pub id: DbId,
    pub title: String,
    pub subtitle: String,
    pub columns: Vec<CardView>,
    pub overflow: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductsView {
    pub id: DbId,
    pub title: String,
    pub subtitle: String,
    pub layout: ProductsLayout,
    pub items_per_view: i64,
    pub auto_play: bool,
    pub show_arrows: bool,
    pub show_product_name: bool,
    pub show_subtitle: bool,
    pub show_price_hint: bool,
    pub clickable: bool,
    pub show_section_title: bool,
    pub products: Vec<ProductSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundView {
    pub style: BackgroundStyle,
    pub color: Option<String>,
    pub image_url: Option<String>,
    pub overlay_opacity: f64,
    pub text_tone: TextTone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CtaButtonView {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CtaView {
    pub id: DbId,
    pub title: String,
    pub subtitle: String,
    pub background: BackgroundView,
    pub buttons: Vec<CtaButtonView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichTextView {
    pub id: DbId,
    pub title: String,
    pub body: String,
}

/// One composed homepage section, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionView {
    Hero(HeroView),
    Why(CardsView),
    Products(ProductsView),
    Factory(CardsView),
    Cta(CtaView),
    RichText(RichTextView),
}
