//! Turns the server-described component tree into leptos views.
//!
//! Elements with an id show the `children` output of that id once the
//! server has produced one, otherwise the children they were declared with.

pub mod charts;
pub mod controls;

use contracts::dashboards::d400_dock_demo::PROP_CHILDREN;
use contracts::shared::callbacks::PropRef;
use contracts::shared::component::{Component, Element};
use leptos::prelude::*;
use serde::Deserialize;
use serde_json::Value;

use crate::layout::dock::DockView;
use crate::shared::state::PageStore;

/// `{label, value}` entry of a checklist or radio group.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChoiceOption {
    pub label: String,
    pub value: String,
}

pub fn parse_options(value: Option<&Value>) -> Vec<ChoiceOption> {
    value
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

/// Inline CSS from a `{camelCase: value}` object; numbers are pixels.
pub fn style_string(style: &Value) -> String {
    let Value::Object(map) = style else {
        return String::new();
    };
    map.iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => format!("{}px", n),
                other => other.to_string(),
            };
            format!("{}: {};", kebab_case(key), value)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// An output value as a list of components: strings are text, objects are
/// elements, arrays are several children.
pub fn value_to_components(value: Value) -> Vec<Component> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.into_iter().flat_map(value_to_components).collect(),
        Value::String(s) => vec![Component::Text(s)],
        Value::Object(_) => match serde_json::from_value::<Component>(value.clone()) {
            Ok(component) => vec![component],
            Err(_) => vec![Component::Text(value.to_string())],
        },
        other => vec![Component::Text(other.to_string())],
    }
}

/// Plain text of the direct text children, used for button labels.
pub fn text_content(element: &Element) -> String {
    element
        .children
        .iter()
        .filter_map(|c| match c {
            Component::Text(t) => Some(t.as_str()),
            Component::Element(_) => None,
        })
        .collect()
}

pub fn render_component(component: Component, store: PageStore) -> AnyView {
    match component {
        Component::Text(text) => text.into_any(),
        Component::Element(element) => render_element(element, store),
    }
}

pub fn render_children(children: Vec<Component>, store: PageStore) -> AnyView {
    children
        .into_iter()
        .map(|child| render_component(child, store))
        .collect_view()
        .into_any()
}

fn children_view(element: &Element, store: PageStore) -> AnyView {
    let declared = element.children.clone();
    match element.id.as_deref() {
        Some(id) => {
            let output = store.watch(PropRef::new(id, PROP_CHILDREN));
            (move || match output.get() {
                Some(value) => render_children(value_to_components(value), store),
                None => render_children(declared.clone(), store),
            })
            .into_any()
        }
        None => render_children(declared, store),
    }
}

fn render_element(element: Element, store: PageStore) -> AnyView {
    match element.kind.as_str() {
        "dock" => view! { <DockView element=element store=store/> }.into_any(),
        "checklist" => view! { <controls::Checklist element=element store=store/> }.into_any(),
        "radio-group" => {
            view! { <controls::RadioGroupControl element=element store=store/> }.into_any()
        }
        "button" => view! { <controls::ClickButton element=element store=store/> }.into_any(),
        "password-input" => {
            view! { <controls::PasswordInput element=element store=store/> }.into_any()
        }
        "switch" => view! { <controls::SwitchControl element=element store=store/> }.into_any(),
        "line-chart" | "bar-chart" => view! { <charts::CategoryChart element=element/> }.into_any(),
        "scatter-chart" => view! { <charts::ScatterChart element=element/> }.into_any(),
        "icon" => {
            let icon = element
                .get_prop("icon")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            view! { <span class="dc-icon" data-icon=icon></span> }.into_any()
        }
        "hover-card" => {
            let target = element
                .get_prop("target")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let body = children_view(&element, store);
            view! {
                <details class="dc-hover-card">
                    <summary>{target}</summary>
                    <div class="dc-hover-card__dropdown">{body}</div>
                </details>
            }
            .into_any()
        }
        _ => render_container(element, store),
    }
}

fn render_container(element: Element, store: PageStore) -> AnyView {
    let id = element.id.clone();
    let class = format!("dc-{}", element.kind);
    let mut style = element.get_prop("style").map(style_string).unwrap_or_default();
    if element.kind == "group" {
        let justify = match element.get_prop("justify").and_then(Value::as_str) {
            Some("apart") => "space-between",
            Some("center") => "center",
            Some("right") => "flex-end",
            _ => "flex-start",
        };
        style.push_str(&format!(
            " display: flex; align-items: center; gap: 12px; justify-content: {justify};"
        ));
    }
    let children = children_view(&element, store);

    match element.kind.as_str() {
        "h2" => view! { <h2 id=id class=class style=style>{children}</h2> }.into_any(),
        "h3" => view! { <h3 id=id class=class style=style>{children}</h3> }.into_any(),
        "h4" => view! { <h4 id=id class=class style=style>{children}</h4> }.into_any(),
        "title" => {
            let order = element.get_prop("order").and_then(Value::as_u64).unwrap_or(2);
            match order {
                1 => view! { <h1 id=id class=class style=style>{children}</h1> }.into_any(),
                2 => view! { <h2 id=id class=class style=style>{children}</h2> }.into_any(),
                3 => view! { <h3 id=id class=class style=style>{children}</h3> }.into_any(),
                _ => view! { <h4 id=id class=class style=style>{children}</h4> }.into_any(),
            }
        }
        "pre" => view! { <pre id=id class=class style=style>{children}</pre> }.into_any(),
        "ul" => view! { <ul id=id class=class style=style>{children}</ul> }.into_any(),
        "li" => view! { <li id=id class=class style=style>{children}</li> }.into_any(),
        "span" => view! { <span id=id class=class style=style>{children}</span> }.into_any(),
        _ => view! { <div id=id class=class style=style>{children}</div> }.into_any(),
    }
}
