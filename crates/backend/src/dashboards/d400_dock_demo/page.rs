//! Page shell around the dock: header with the colour-scheme switch, API key
//! section and the empty dock container filled by the API key binding.

use contracts::dashboards::d400_dock_demo::*;
use contracts::shared::component::{Component, Element};
use serde_json::json;

pub const PAGE_TITLE: &str = "Dock Example";

/// Feature list shown in the API key hover card, `(icon, text)`.
const FEATURES: [(&str, &str); 5] = [
    ("mdi:check", "Free Tier: Up to 3 Tabs"),
    ("mdi:check", "Light / Dark Mode"),
    ("mdi:check", "Dynamic Windows and Tabs"),
    ("mdi:star", "Premium: Unlimited Tabs"),
    ("fluent-emoji:sparkling-heart", "Supports independent component development"),
];

fn header() -> Element {
    Element::new("div").with_id("app-header").child(
        Element::new("paper").child(
            Element::new("group")
                .prop("justify", "apart")
                .child(Element::new("title").prop("order", 3).child(PAGE_TITLE))
                .child(
                    Element::new("switch")
                        .with_id(COLOR_SCHEME_SWITCH)
                        .prop(PROP_CHECKED, false)
                        .prop("persistence", true)
                        .prop("onLabel", "radix-icons:moon")
                        .prop("offLabel", "radix-icons:sun"),
                ),
        ),
    )
}

fn api_key_section() -> Element {
    let features = FEATURES.iter().map(|(icon, text)| {
        Element::new("li")
            .child(Element::new("icon").prop("icon", *icon))
            .child(*text)
    });

    Element::new("div").with_id("api-key-section").child(
        Element::new("paper").child(
            Element::new("group")
                .prop("justify", "left")
                .child(
                    Element::new("password-input")
                        .with_id(API_KEY_INPUT)
                        .prop("placeholder", "Enter API key for premium features")
                        .prop("w", "70%"),
                )
                .child(
                    Element::new("hover-card")
                        .prop("target", "Buy an API key")
                        .child(Element::new("h2").child("Features"))
                        .child(Element::new("ul").children(features)),
                ),
        ),
    )
}

pub fn page_layout() -> Component {
    Element::new("div")
        .with_id("app-container")
        .prop("style", json!({ "width": "100%", "height": "100vh" }))
        .child(header())
        .child(api_key_section())
        .child(Element::new("div").with_id(DOCK_CONTAINER))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_exposes_control_surface() {
        let page = page_layout();
        assert_eq!(page.find(COLOR_SCHEME_SWITCH).unwrap().kind, "switch");
        assert_eq!(page.find(API_KEY_INPUT).unwrap().kind, "password-input");
        let container = page.find(DOCK_CONTAINER).unwrap();
        // filled by the API key binding on first load
        assert!(container.children.is_empty());
    }
}
