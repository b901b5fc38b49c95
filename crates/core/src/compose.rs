//! Homepage composition.
//!
//! Turns the stored, ordered section list into render-ready view models:
//! filter to enabled sections, normalize each payload against its schema,
//! resolve products where needed, resolve every bilingual field to the
//! active language, and suppress sections that would render empty. A
//! failure anywhere shrinks the output; it never surfaces as an error.

use crate::cta::{resolve_href, UNRESOLVED_HREF};
use crate::locale::{Language, LocalizedText};
use crate::payload::{
    self, CardPayload, CtaPayload, FactoryPayload, HeroPayload, ProductsPayload, RichTextPayload,
    WhyPayload, CARD_COLUMNS,
};
use crate::product::ProductQuery;
use crate::section::{Section, SectionKind};
use crate::source::resolve_products;
use crate::view::{
    BackgroundView, CardView, CardsView, CtaButtonView, CtaLink, CtaView, HeroView, ProductsView,
    RichTextView, SectionView,
};

/// Compose the full page for one request.
///
/// Sections are filtered to `enabled`, kept in stored order, and
/// normalized per kind. Unknown kinds and sections with no content are
/// skipped.
pub async fn compose_page(
    sections: &[Section],
    lang: Language,
    store: &dyn ProductQuery,
) -> Vec<SectionView> {
    let mut ordered: Vec<&Section> = sections.iter().filter(|s| s.enabled).collect();
    ordered.sort_by_key(|s| s.sort_order);

    let mut views = Vec::with_capacity(ordered.len());
    for section in ordered {
        let Some(kind) = SectionKind::parse(&section.kind) else {
            continue;
        };

        let view = match kind {
            SectionKind::Hero => normalize_hero(section, lang),
            SectionKind::Why => normalize_why(section, lang),
            SectionKind::Products => normalize_products(section, lang, store).await,
            SectionKind::Factory => normalize_factory(section, lang),
            SectionKind::Cta => normalize_cta(section, lang),
            SectionKind::RichText => normalize_rich_text(section, lang),
        };

        if let Some(view) = view {
            views.push(view);
        }
    }
    views
}

/// A HERO with no resolved title line and no subtitle has no content and
/// renders nothing.
pub fn normalize_hero(section: &Section, lang: Language) -> Option<SectionView> {
    let stored: HeroPayload = payload::from_stored(&section.payload);

    let title_line1 = stored.title_line1().resolve_or_empty(lang);
    let title_line2 = stored.title_line2().resolve_or_empty(lang);
    let subtitle = stored.subtitle().resolve_or_empty(lang);

    if title_line1.is_empty() && title_line2.is_empty() && subtitle.is_empty() {
        return None;
    }

    Some(SectionView::Hero(HeroView {
        id: section.id,
        title_line1,
        title_line2,
        subtitle,
        image_url: non_empty(stored.image_url.clone()),
        primary_cta: hero_link(stored.primary_cta_label(), stored.primary_cta_url.as_deref(), lang),
        secondary_cta: hero_link(
            stored.secondary_cta_label(),
            stored.secondary_cta_url.as_deref(),
            lang,
        ),
    }))
}

pub fn normalize_why(section: &Section, lang: Language) -> Option<SectionView> {
    let stored: WhyPayload = payload::from_stored(&section.payload);
    // WHY cards have no mandatory image, so body text alone keeps a card.
    let cards = collect_cards(&stored.cards, lang, true);
    if cards.is_empty() {
        return None;
    }

    let (columns, overflow) = split_columns(cards);
    Some(SectionView::Why(CardsView {
        id: section.id,
        title: stored.title().resolve_or_empty(lang),
        subtitle: stored.subtitle().resolve_or_empty(lang),
        columns,
        overflow,
    }))
}

pub fn normalize_factory(section: &Section, lang: Language) -> Option<SectionView> {
    let stored: FactoryPayload = payload::from_stored(&section.payload);
    let cards = collect_cards(&stored.cards, lang, false);
    if cards.is_empty() {
        return None;
    }

    let (columns, overflow) = split_columns(cards);
    Some(SectionView::Factory(CardsView {
        id: section.id,
        title: stored.title().resolve_or_empty(lang),
        subtitle: stored.subtitle().resolve_or_empty(lang),
        columns,
        overflow,
    }))
}

/// A PRODUCTS section that resolves to zero products is suppressed
/// entirely; a product-store failure is treated the same way.
pub async fn normalize_products(
    section: &Section,
    lang: Language,
    store: &dyn ProductQuery,
) -> Option<SectionView> {
    let stored: ProductsPayload = payload::from_stored(&section.payload);

    let products = resolve_products(&stored.source, store)
        .await
        .unwrap_or_default();
    if products.is_empty() {
        return None;
    }

    Some(SectionView::Products(ProductsView {
        id: section.id,
        title: stored.title().resolve_or_empty(lang),
        subtitle: stored.subtitle().resolve_or_empty(lang),
        layout: stored.layout,
        items_per_view: stored.effective_items_per_view(),
        auto_play: stored.auto_play.unwrap_or(true),
        show_arrows: stored.show_arrows.unwrap_or(true),
        show_product_name: stored.show_product_name.unwrap_or(true),
        show_subtitle: stored.show_subtitle.unwrap_or(true),
        show_price_hint: stored.show_price_hint.unwrap_or(false),
        clickable: stored.clickable.unwrap_or(true),
        show_section_title: stored.show_section_title.unwrap_or(true),
        products,
    }))
}

/// Buttons resolving to the `"#"` sentinel are dropped; a CTA with no
/// title, no subtitle and no surviving button is suppressed.
pub fn normalize_cta(section: &Section, lang: Language) -> Option<SectionView> {
    let stored: CtaPayload = payload::from_stored(&section.payload);

    let title = stored.title().resolve_or_empty(lang);
    let subtitle = stored.subtitle().resolve_or_empty(lang);

    let buttons: Vec<CtaButtonView> = stored
        .buttons
        .iter()
        .filter_map(|button| {
            let href = resolve_href(button.action_type, button.value.as_deref().unwrap_or_default());
            if href == UNRESOLVED_HREF {
                return None;
            }
            Some(CtaButtonView {
                label: button.label().resolve_or_empty(lang),
                href,
            })
        })
        .collect();

    if title.is_empty() && subtitle.is_empty() && buttons.is_empty() {
        return None;
    }

    Some(SectionView::Cta(CtaView {
        id: section.id,
        title,
        subtitle,
        background: BackgroundView {
            style: stored.background_style,
            color: non_empty(stored.background_color.clone()),
            image_url: non_empty(stored.background_image_url.clone()),
            overlay_opacity: stored.effective_overlay_opacity(),
            text_tone: stored.text_tone,
        },
        buttons,
    }))
}

pub fn normalize_rich_text(section: &Section, lang: Language) -> Option<SectionView> {
    let stored: RichTextPayload = payload::from_stored(&section.payload);

    let title = stored.title().resolve_or_empty(lang);
    let body = stored.body().resolve_or_empty(lang);
    if title.is_empty() && body.is_empty() {
        return None;
    }

    Some(SectionView::RichText(RichTextView {
        id: section.id,
        title,
        body,
    }))
}

/* --------------------------------------------------------------------------
   Helpers
   -------------------------------------------------------------------------- */

/// Resolve the surviving cards for the active language.
///
/// A card survives when it has a title or an image; for WHY sections
/// (`body_keeps_card`) body text alone is also enough.
fn collect_cards(cards: &[CardPayload], lang: Language, body_keeps_card: bool) -> Vec<CardView> {
    cards
        .iter()
        .filter_map(|card| {
            let title = card.title().resolve_or_empty(lang);
            let body = card.body().resolve_or_empty(lang);
            let image_url = non_empty(card.image_url.clone());

            let keep = !title.is_empty()
                || image_url.is_some()
                || (body_keeps_card && !body.is_empty());
            keep.then_some(CardView {
                title,
                body,
                image_url,
            })
        })
        .collect()
}

/// The fixed 3-column / overflow split. Structural, not configurable.
fn split_columns(mut cards: Vec<CardView>) -> (Vec<CardView>, Vec<CardView>) {
    let overflow = if cards.len() > CARD_COLUMNS {
        cards.split_off(CARD_COLUMNS)
    } else {
        Vec::new()
    };
    (cards, overflow)
}

fn hero_link(label: LocalizedText, url: Option<&str>, lang: Language) -> Option<CtaLink> {
    let label = label.resolve_or_empty(lang);
    let href = url.map(str::trim).unwrap_or_default();
    if label.is_empty() || href.is_empty() {
        return None;
    }
    Some(CtaLink {
        label,
        href: href.to_string(),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{product, FailingProducts, InMemoryProducts};
    use serde_json::json;

    fn section(id: i64, kind: &str, sort_order: i32, enabled: bool, payload: serde_json::Value) -> Section {
        Section {
            id,
            kind: kind.to_string(),
            sort_order,
            enabled,
            payload,
        }
    }

    fn five_products() -> InMemoryProducts {
        InMemoryProducts::with_products(vec![
            product(1, "Mailer Box", 50),
            product(2, "Kraft Bag", 40),
            product(3, "Rigid Box", 30),
            product(4, "Label Roll", 20),
            product(5, "Corrugated Carton", 10),
        ])
    }

    // --- Full page composition ---

    #[tokio::test]
    async fn composes_enabled_sections_in_stored_order() {
        let sections = vec![
            section(1, "hero", 0, true, json!({"titleLine1_en": "Premium Boxes"})),
            section(
                2,
                "products",
                1,
                true,
                json!({"source": {"mode": "latest", "limit": 2}}),
            ),
            section(3, "why", 2, false, json!({})),
        ];

        let views = compose_page(&sections, Language::En, &five_products()).await;
        assert_eq!(views.len(), 2);

        match &views[0] {
            SectionView::Hero(hero) => assert_eq!(hero.title_line1, "Premium Boxes"),
            other => panic!("expected hero first, got {other:?}"),
        }
        match &views[1] {
            SectionView::Products(products) => {
                let ids: Vec<i64> = products.products.iter().map(|p| p.id).collect();
                assert_eq!(ids, vec![5, 4]);
            }
            other => panic!("expected products second, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn input_order_does_not_matter_only_sort_order_does() {
        let sections = vec![
            section(2, "rich_text", 7, true, json!({"title_en": "Late"})),
            section(1, "rich_text", 1, true, json!({"title_en": "Early"})),
        ];

        let views = compose_page(&sections, Language::En, &five_products()).await;
        let titles: Vec<&str> = views
            .iter()
            .map(|v| match v {
                SectionView::RichText(rt) => rt.title.as_str(),
                other => panic!("unexpected view {other:?}"),
            })
            .collect();
        assert_eq!(titles, vec!["Early", "Late"]);
    }

    #[tokio::test]
    async fn unknown_kinds_are_skipped_not_an_error() {
        let sections = vec![
            section(1, "banner", 0, true, json!({})),
            section(2, "rich_text", 1, true, json!({"title_en": "Hi"})),
        ];
        let views = compose_page(&sections, Language::En, &five_products()).await;
        assert_eq!(views.len(), 1);
    }

    // --- Hero ---

    #[test]
    fn hero_with_explicitly_cleared_text_is_suppressed() {
        let sec = section(
            1,
            "hero",
            0,
            true,
            json!({
                "titleLine1_en": "", "titleLine1_zh": "",
                "titleLine2_en": "", "titleLine2_zh": "",
                "subtitle_en": "", "subtitle_zh": "",
            }),
        );
        assert!(normalize_hero(&sec, Language::En).is_none());
        assert!(normalize_hero(&sec, Language::Zh).is_none());
    }

    #[test]
    fn hero_suppression_is_per_language() {
        // Chinese content only: the English rendition has nothing to show.
        let sec = section(
            1,
            "hero",
            0,
            true,
            json!({
                "titleLine1_en": "", "titleLine1_zh": "优质包装",
                "titleLine2_en": "", "titleLine2_zh": "",
                "subtitle_en": "", "subtitle_zh": "",
            }),
        );
        assert!(normalize_hero(&sec, Language::En).is_none());
        assert!(normalize_hero(&sec, Language::Zh).is_some());
    }

    #[test]
    fn hero_links_require_both_label_and_url() {
        let sec = section(
            1,
            "hero",
            0,
            true,
            json!({
                "titleLine1_en": "Boxes",
                "primaryCtaLabel_en": "Get a Quote", "primaryCtaLabel_zh": "",
                "primaryCtaUrl": "/quote",
                "secondaryCtaLabel_en": "Browse", "secondaryCtaLabel_zh": "",
                "secondaryCtaUrl": "",
            }),
        );
        let Some(SectionView::Hero(hero)) = normalize_hero(&sec, Language::En) else {
            panic!("hero expected");
        };
        assert_eq!(hero.primary_cta.as_ref().unwrap().href, "/quote");
        assert!(hero.secondary_cta.is_none());
    }

    #[test]
    fn hero_default_payload_renders_the_documented_defaults() {
        let sec = section(1, "hero", 0, true, json!({}));
        let Some(SectionView::Hero(hero)) = normalize_hero(&sec, Language::Zh) else {
            panic!("hero expected");
        };
        assert_eq!(hero.title_line1, "让产品更出众的包装");
        assert_eq!(hero.primary_cta.as_ref().unwrap().label, "获取报价");
    }

    // --- Cards ---

    #[test]
    fn cards_split_three_columns_and_overflow() {
        let cards: Vec<serde_json::Value> = (1..=5)
            .map(|i| json!({"title_en": format!("Card {i}"), "body_en": "text"}))
            .collect();
        let sec = section(1, "why", 0, true, json!({ "cards": cards }));

        let Some(SectionView::Why(view)) = normalize_why(&sec, Language::En) else {
            panic!("why expected");
        };
        assert_eq!(view.columns.len(), 3);
        assert_eq!(view.overflow.len(), 2);
        assert_eq!(view.columns[0].title, "Card 1");
        assert_eq!(view.overflow[1].title, "Card 5");
    }

    #[test]
    fn why_card_survives_on_body_text_alone() {
        let sec = section(
            1,
            "why",
            0,
            true,
            json!({"cards": [
                {"title_en": "", "body_en": "Body only"},
                {"title_en": "", "body_en": ""},
            ]}),
        );
        let Some(SectionView::Why(view)) = normalize_why(&sec, Language::En) else {
            panic!("why expected");
        };
        assert_eq!(view.columns.len(), 1);
        assert_eq!(view.columns[0].body, "Body only");
    }

    #[test]
    fn factory_card_does_not_survive_on_body_alone() {
        let sec = section(
            1,
            "factory",
            0,
            true,
            json!({"cards": [
                {"title_en": "", "body_en": "Body only"},
                {"title_en": "", "imageUrl": "/img/press.jpg"},
            ]}),
        );
        let Some(SectionView::Factory(view)) = normalize_factory(&sec, Language::En) else {
            panic!("factory expected");
        };
        assert_eq!(view.columns.len(), 1);
        assert_eq!(view.columns[0].image_url.as_deref(), Some("/img/press.jpg"));
    }

    #[test]
    fn cards_section_with_no_surviving_cards_is_suppressed() {
        let sec = section(
            1,
            "why",
            0,
            true,
            json!({"title_en": "Why Us", "cards": [{"title_en": "", "body_en": ""}]}),
        );
        assert!(normalize_why(&sec, Language::En).is_none());
    }

    // --- Products ---

    #[tokio::test]
    async fn products_section_with_zero_results_is_suppressed() {
        let sec = section(
            1,
            "products",
            0,
            true,
            json!({"source": {"mode": "manual", "manualProductIds": [99]}}),
        );
        let view = normalize_products(&sec, Language::En, &five_products()).await;
        assert!(view.is_none());
    }

    #[tokio::test]
    async fn products_store_failure_suppresses_the_section_silently() {
        let sections = vec![
            section(1, "rich_text", 0, true, json!({"title_en": "Intro"})),
            section(2, "products", 1, true, json!({})),
        ];
        let views = compose_page(&sections, Language::En, &FailingProducts).await;
        // The rest of the page still renders.
        assert_eq!(views.len(), 1);
    }

    #[tokio::test]
    async fn products_view_carries_normalized_display_settings() {
        let sec = section(
            1,
            "products",
            0,
            true,
            json!({
                "layout": "carousel",
                "itemsPerView": "7",
                "showPriceHint": true,
                "source": {"mode": "latest", "limit": 3},
            }),
        );
        let Some(SectionView::Products(view)) =
            normalize_products(&sec, Language::En, &five_products()).await
        else {
            panic!("products expected");
        };
        assert_eq!(view.layout, crate::payload::ProductsLayout::Carousel);
        assert_eq!(view.items_per_view, 7);
        assert!(view.show_price_hint);
        assert_eq!(view.products.len(), 3);
    }

    // --- CTA ---

    #[test]
    fn cta_drops_buttons_resolving_to_the_sentinel() {
        let sec = section(
            1,
            "cta",
            0,
            true,
            json!({
                "title_en": "Talk to us",
                "buttons": [
                    {"label_en": "Email", "actionType": "email", "value": ""},
                    {"label_en": "Call", "actionType": "phone", "value": "+86138"},
                ],
            }),
        );
        let Some(SectionView::Cta(view)) = normalize_cta(&sec, Language::En) else {
            panic!("cta expected");
        };
        assert_eq!(view.buttons.len(), 1);
        assert_eq!(view.buttons[0].href, "tel:+86138");
    }

    #[test]
    fn cta_with_nothing_to_show_is_suppressed() {
        let sec = section(
            1,
            "cta",
            0,
            true,
            json!({
                "title_en": "", "title_zh": "",
                "subtitle_en": "", "subtitle_zh": "",
                "buttons": [{"label_en": "Email", "actionType": "email", "value": ""}],
            }),
        );
        assert!(normalize_cta(&sec, Language::En).is_none());
    }

    #[test]
    fn cta_background_is_normalized() {
        let sec = section(
            1,
            "cta",
            0,
            true,
            json!({
                "backgroundStyle": "image",
                "backgroundImageUrl": "/img/hero.jpg",
                "overlayOpacity": 0.99,
                "textTone": "dark",
            }),
        );
        let Some(SectionView::Cta(view)) = normalize_cta(&sec, Language::En) else {
            panic!("cta expected");
        };
        assert_eq!(view.background.style, crate::payload::BackgroundStyle::Image);
        assert_eq!(view.background.overlay_opacity, 0.95);
        assert_eq!(view.background.text_tone, crate::payload::TextTone::Dark);
    }

    // --- Rich text ---

    #[test]
    fn rich_text_needs_title_or_body() {
        let empty = section(1, "rich_text", 0, true, json!({"title_en": "", "body_en": ""}));
        assert!(normalize_rich_text(&empty, Language::En).is_none());

        let body_only = section(2, "rich_text", 0, true, json!({"body_en": "Our story."}));
        let Some(SectionView::RichText(view)) = normalize_rich_text(&body_only, Language::En)
        else {
            panic!("rich text expected");
        };
        assert_eq!(view.body, "Our story.");
        assert_eq!(view.title, "");
    }
}
