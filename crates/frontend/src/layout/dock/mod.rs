//! Dock layout: borders around a tree of rows and tabsets.
//!
//! The server sends the whole dock as one `dock` element; every API key
//! change replaces it, so the view below is rebuilt from scratch each time.

pub mod tabset;

use contracts::shared::component::{Component, Element};
use contracts::shared::dock::{ConfigError, DockModel, LayoutNode, TabCount};
use leptos::prelude::*;
use serde_json::Value;
use std::collections::{HashMap, HashSet};

use crate::shared::state::PageStore;
use tabset::{BorderView, RowView};

/// Everything the dock element carries, decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct DockProps {
    pub model: DockModel,
    pub headers: HashMap<String, Component>,
    pub contents: HashMap<String, Component>,
    pub limited: bool,
    pub free_tab_limit: usize,
    pub tab_count: TabCount,
    pub debug_mode: bool,
}

impl DockProps {
    pub fn from_element(element: &Element) -> Result<Self, ConfigError> {
        let model = DockModel::from_value(element.get_prop("model").cloned().unwrap_or(Value::Null))?;

        let headers = element
            .get_prop("headers")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(id, header)| {
                        let header = serde_json::from_value(header.clone()).ok()?;
                        Some((id.clone(), header))
                    })
                    .collect()
            })
            .unwrap_or_default();

        let contents = element
            .children
            .iter()
            .filter_map(Component::as_element)
            .filter(|tab| tab.kind == "tab")
            .filter_map(|tab| {
                let id = tab.id.clone()?;
                let content = match tab.children.as_slice() {
                    [single] => single.clone(),
                    many => Element::new("div").children(many.to_vec()).into(),
                };
                Some((id, content))
            })
            .collect();

        let flag = |key: &str| element.get_prop(key).and_then(Value::as_bool).unwrap_or(false);

        Ok(Self {
            headers,
            contents,
            limited: flag("limited"),
            debug_mode: flag("debugMode"),
            free_tab_limit: element
                .get_prop("freeTabLimit")
                .and_then(Value::as_u64)
                .unwrap_or(0) as usize,
            tab_count: element
                .get_prop("tabCount")
                .cloned()
                .and_then(|v| serde_json::from_value(v).ok())
                .unwrap_or_else(|| model.count_tabs()),
            model,
        })
    }

    pub fn notice(&self) -> Option<String> {
        self.limited.then(|| {
            format!(
                "Free tier: showing {} of {} tabs. Enter an API key to unlock all tabs.",
                self.free_tab_limit, self.tab_count.total
            )
        })
    }
}

/// Shared by every tabset of one dock instance.
#[derive(Clone, Copy)]
pub struct DockContext {
    pub store: PageStore,
    pub props: StoredValue<DockProps>,
    /// Tabs closed by the user in this dock instance.
    pub closed: RwSignal<HashSet<String>>,
}

impl DockContext {
    pub fn tab_content(&self, id: &str) -> Option<Component> {
        self.props.with_value(|p| p.contents.get(id).cloned())
    }

    pub fn tab_header(&self, id: &str) -> Option<Component> {
        self.props.with_value(|p| p.headers.get(id).cloned())
    }

    pub fn closable(&self) -> bool {
        self.props.with_value(|p| p.model.global.tab_enable_close)
    }

    pub fn floatable(&self, tab_enable_float: bool) -> bool {
        tab_enable_float || self.props.with_value(|p| p.model.global.tab_enable_float)
    }
}

#[component]
pub fn DockView(element: Element, store: PageStore) -> impl IntoView {
    let props = match DockProps::from_element(&element) {
        Ok(props) => props,
        Err(e) => {
            log::error!("dock {:?} not rendered: {}", element.id, e);
            return view! { <div class="dc-dock dc-dock--error">{e.to_string()}</div> }.into_any();
        }
    };
    if props.debug_mode {
        log::debug!(
            "dock {:?}: {} tabs, limited={}",
            element.id,
            props.tab_count.total,
            props.limited
        );
    }

    let notice = props.notice();
    let borders = props.model.borders.clone();
    let root = props.model.layout.clone();
    let ctx = DockContext {
        store,
        props: StoredValue::new(props),
        closed: RwSignal::new(HashSet::new()),
    };

    let border_at = |side: &str| -> Vec<AnyView> {
        borders
            .iter()
            .filter_map(|node| match node {
                LayoutNode::Border(border) if border.location.as_str() == side => {
                    Some(view! { <BorderView border=border.clone() ctx=ctx/> }.into_any())
                }
                _ => None,
            })
            .collect()
    };
    let (top, left, right, bottom) = (
        border_at("top"),
        border_at("left"),
        border_at("right"),
        border_at("bottom"),
    );

    let center = match root {
        LayoutNode::Row(row) => view! { <RowView row=row horizontal=true ctx=ctx/> }.into_any(),
        _ => ().into_any(),
    };

    view! {
        <div id=element.id.clone() class="dc-dock">
            {notice.map(|text| view! { <div class="dc-dock__notice">{text}</div> })}
            {top}
            <div class="dc-dock__middle" style="display: flex; flex: 1; min-height: 0;">
                {left}
                <div class="dc-dock__center" style="display: flex; flex: 1; min-width: 0;">
                    {center}
                </div>
                {right}
            </div>
            {bottom}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dock_element(limited: bool) -> Element {
        Element::new("dock")
            .with_id("dock-layout")
            .prop(
                "model",
                json!({
                    "layout": { "type": "row", "children": [
                        { "type": "tabset", "children": [
                            { "type": "tab", "id": "one", "name": "One" }
                        ] }
                    ] }
                }),
            )
            .prop("headers", json!({ "one": "First" }))
            .prop("limited", limited)
            .prop("freeTabLimit", 3)
            .prop("tabCount", json!({ "total": 5, "border_tabs": 2, "layout_tabs": 3 }))
            .child(Element::new("tab").with_id("one").child("content"))
            .child(
                Element::new("tab")
                    .with_id("two")
                    .child("a")
                    .child("b"),
            )
    }

    #[test]
    fn test_props_from_element() {
        let props = DockProps::from_element(&dock_element(false)).unwrap();
        assert_eq!(props.model.tab_ids(), vec!["one"]);
        assert_eq!(props.headers.get("one"), Some(&Component::text("First")));
        assert_eq!(props.contents.get("one"), Some(&Component::text("content")));
        // several children are wrapped into one container
        let two = props.contents.get("two").unwrap().as_element().unwrap();
        assert_eq!(two.children.len(), 2);
        assert_eq!(props.tab_count.total, 5);
        assert_eq!(props.notice(), None);
    }

    #[test]
    fn test_limited_notice() {
        let props = DockProps::from_element(&dock_element(true)).unwrap();
        assert_eq!(
            props.notice().unwrap(),
            "Free tier: showing 3 of 5 tabs. Enter an API key to unlock all tabs."
        );
    }

    #[test]
    fn test_malformed_model() {
        let element = Element::new("dock").prop("model", json!({ "layout": 1 }));
        assert!(matches!(
            DockProps::from_element(&element),
            Err(ConfigError::Malformed(_))
        ));
    }
}
