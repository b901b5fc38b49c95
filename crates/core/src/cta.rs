//! Call-to-action href resolution.
//!
//! A CTA button stores an abstract action (link, email, phone, or a
//! messaging app) plus a raw value; resolution turns the pair into a
//! concrete href. Buttons that resolve to the [`UNRESOLVED_HREF`] sentinel
//! must be excluded from the rendered button list by the caller.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel href for a button whose value is empty.
pub const UNRESOLVED_HREF: &str = "#";

/// The abstract action behind a CTA button.
///
/// Unknown or garbled stored values coerce to [`CtaActionType::Link`]; a
/// button never fails to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CtaActionType {
    #[default]
    Link,
    Email,
    Phone,
    Line,
    Whatsapp,
    Telegram,
    Wechat,
}

impl CtaActionType {
    /// Parse a stored action keyword. Unknown keywords become `Link`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "email" => CtaActionType::Email,
            "phone" => CtaActionType::Phone,
            "line" => CtaActionType::Line,
            "whatsapp" => CtaActionType::Whatsapp,
            "telegram" => CtaActionType::Telegram,
            "wechat" => CtaActionType::Wechat,
            _ => CtaActionType::Link,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CtaActionType::Link => "link",
            CtaActionType::Email => "email",
            CtaActionType::Phone => "phone",
            CtaActionType::Line => "line",
            CtaActionType::Whatsapp => "whatsapp",
            CtaActionType::Telegram => "telegram",
            CtaActionType::Wechat => "wechat",
        }
    }
}

impl Serialize for CtaActionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CtaActionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::parse(raw.as_str().unwrap_or_default()))
    }
}

/// Resolve an action/value pair into a concrete href.
///
/// - Empty value resolves to [`UNRESOLVED_HREF`].
/// - `email` and `phone` get their scheme prefix unless already present.
/// - Everything else passes the value through unchanged; the admin is
///   responsible for supplying a dereferenceable URL for link and
///   messaging-app actions.
pub fn resolve_href(action: CtaActionType, value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        return UNRESOLVED_HREF.to_string();
    }

    match action {
        CtaActionType::Email => {
            if value.starts_with("mailto:") {
                value.to_string()
            } else {
                format!("mailto:{value}")
            }
        }
        CtaActionType::Phone => {
            if value.starts_with("tel:") {
                value.to_string()
            } else {
                format!("tel:{value}")
            }
        }
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Action parsing ---

    #[test]
    fn parse_accepts_all_known_actions() {
        assert_eq!(CtaActionType::parse("link"), CtaActionType::Link);
        assert_eq!(CtaActionType::parse("email"), CtaActionType::Email);
        assert_eq!(CtaActionType::parse("phone"), CtaActionType::Phone);
        assert_eq!(CtaActionType::parse("line"), CtaActionType::Line);
        assert_eq!(CtaActionType::parse("whatsapp"), CtaActionType::Whatsapp);
        assert_eq!(CtaActionType::parse("telegram"), CtaActionType::Telegram);
        assert_eq!(CtaActionType::parse("wechat"), CtaActionType::Wechat);
    }

    #[test]
    fn parse_coerces_unknown_actions_to_link() {
        assert_eq!(CtaActionType::parse("fax"), CtaActionType::Link);
        assert_eq!(CtaActionType::parse(""), CtaActionType::Link);
        assert_eq!(CtaActionType::parse("EMAIL "), CtaActionType::Email);
    }

    // --- Href resolution ---

    #[test]
    fn empty_value_resolves_to_sentinel() {
        assert_eq!(resolve_href(CtaActionType::Link, ""), UNRESOLVED_HREF);
        assert_eq!(resolve_href(CtaActionType::Email, "   "), UNRESOLVED_HREF);
    }

    #[test]
    fn email_gets_mailto_prefix() {
        assert_eq!(
            resolve_href(CtaActionType::Email, "sales@example.com"),
            "mailto:sales@example.com"
        );
    }

    #[test]
    fn email_prefix_is_not_doubled() {
        assert_eq!(
            resolve_href(CtaActionType::Email, "mailto:sales@example.com"),
            "mailto:sales@example.com"
        );
    }

    #[test]
    fn phone_gets_tel_prefix() {
        assert_eq!(resolve_href(CtaActionType::Phone, "+8613800138000"), "tel:+8613800138000");
    }

    #[test]
    fn phone_prefix_is_not_doubled() {
        assert_eq!(resolve_href(CtaActionType::Phone, "tel:+86138"), "tel:+86138");
    }

    #[test]
    fn link_and_messaging_values_pass_through() {
        assert_eq!(resolve_href(CtaActionType::Link, "/contact"), "/contact");
        assert_eq!(
            resolve_href(CtaActionType::Whatsapp, "https://wa.me/8613800138000"),
            "https://wa.me/8613800138000"
        );
        assert_eq!(
            resolve_href(CtaActionType::Wechat, "weixin://dl/chat?packline"),
            "weixin://dl/chat?packline"
        );
    }
}
