use contracts::dashboards::d400_dock_demo::*;
use contracts::enums::ChartType;
use contracts::shared::component::{Component, Element};
use serde_json::json;

use crate::shared::dock::{TabRegistry, TabRegistryBuilder};

/// Datasets offered in the explorer, `(label, key)`.
pub const DATASETS: [(&str, &str); 3] = [
    ("Dataset A", "a"),
    ("Dataset B", "b"),
    ("Dataset C", "c"),
];

pub const DEFAULT_CHART_TYPE: ChartType = ChartType::Line;

fn explorer() -> Component {
    let options: Vec<_> = DATASETS
        .iter()
        .map(|(label, value)| json!({ "label": label, "value": value }))
        .collect();

    Element::new("div")
        .child(Element::new("h4").child("Explorer"))
        .child(
            Element::new("checklist")
                .with_id(DATASET_SELECTOR)
                .prop("options", options)
                .prop(PROP_VALUE, json!(["a"])),
        )
        .into()
}

fn main_view() -> Component {
    Element::new("div")
        .child(Element::new("h3").child("Main Visualization"))
        .child(Element::new("div").with_id(SELECTED_DATASETS_DISPLAY))
        .child(Element::new("div").with_id(MAIN_CHART_CONTAINER))
        .into()
}

fn data_properties() -> Component {
    Element::new("div")
        .child(Element::new("h4").child("Data Properties"))
        .child(
            Element::new("button")
                .with_id(REFRESH_DATA_BTN)
                .child("Refresh Data"),
        )
        .child(Element::new("div").with_id(DATA_REFRESH_STATUS))
        .into()
}

fn chart_properties() -> Component {
    let options: Vec<_> = ChartType::all()
        .iter()
        .map(|t| json!({ "label": t.display_name(), "value": t.code() }))
        .collect();

    Element::new("div")
        .child(Element::new("h4").child("Chart Properties"))
        .child(
            Element::new("radio-group")
                .with_id(CHART_TYPE_SELECTOR)
                .prop("label", "Select Chart Type")
                .prop("options", options)
                .prop(PROP_VALUE, DEFAULT_CHART_TYPE.code()),
        )
        .child(Element::new("div").with_id(SELECTED_CHART_TYPE))
        .into()
}

fn console() -> Component {
    Element::new("div")
        .child(Element::new("h4").child("Console"))
        .child(
            Element::new("pre")
                .with_id(CONSOLE_OUTPUT)
                .prop("style", json!({ "height": "80px", "overflow": "auto" })),
        )
        .into()
}

fn icon_header(icon: &str, title: &str) -> Component {
    Element::new("div")
        .prop("style", json!({ "display": "flex", "alignItems": "center" }))
        .child(Element::new("icon").prop("icon", icon).prop("width", 15))
        .child(title)
        .into()
}

pub fn tab_registry() -> TabRegistry {
    let mut builder = TabRegistryBuilder::new();
    builder
        .register(
            TAB_EXPLORER,
            explorer(),
            Some(icon_header("flat-color-icons:folder", "Explorer")),
        )
        .register(
            TAB_MAIN_VIEW,
            main_view(),
            Some(icon_header("fluent-emoji:bar-chart", "Main View")),
        )
        .register(TAB_DATA_PROPERTIES, data_properties(), None)
        .register(TAB_CHART_PROPERTIES, chart_properties(), None)
        .register(TAB_CONSOLE, console(), None);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tab_registered() {
        let reg = tab_registry();
        assert_eq!(reg.len(), 5);
        for id in [
            TAB_CONSOLE,
            TAB_EXPLORER,
            TAB_MAIN_VIEW,
            TAB_DATA_PROPERTIES,
            TAB_CHART_PROPERTIES,
        ] {
            assert!(reg.resolve(id).is_ok(), "{id} missing");
        }
        assert!(reg.resolve_header(TAB_MAIN_VIEW).is_some());
        assert!(reg.resolve_header(TAB_CONSOLE).is_none());
    }

    #[test]
    fn test_controls_live_in_their_tabs() {
        let reg = tab_registry();
        let explorer = reg.resolve(TAB_EXPLORER).unwrap();
        let selector = explorer.find(DATASET_SELECTOR).unwrap();
        assert_eq!(selector.kind, "checklist");
        assert_eq!(selector.get_prop(PROP_VALUE), Some(&json!(["a"])));

        let chart_tab = reg.resolve(TAB_CHART_PROPERTIES).unwrap();
        let radio = chart_tab.find(CHART_TYPE_SELECTOR).unwrap();
        assert_eq!(radio.get_prop(PROP_VALUE), Some(&json!("line")));
        assert_eq!(radio.get_prop("options").unwrap().as_array().unwrap().len(), 3);
    }
}
