//! Input components. Each one writes its value into the page store, which
//! decides whether the server has to hear about it.

use contracts::dashboards::d400_dock_demo::{PROP_CHECKED, PROP_N_CLICKS, PROP_VALUE};
use contracts::shared::callbacks::PropRef;
use contracts::shared::component::Element;
use leptos::prelude::*;
use serde_json::Value;
use thaw::{Button, Radio, RadioGroup, Switch};

use super::{parse_options, text_content};
use crate::shared::state::PageStore;
use crate::shared::theme::ColorSchemeSwitch;

fn prop_key(element: &Element, property: &str) -> PropRef {
    PropRef::new(element.id.as_deref().unwrap_or_default(), property)
}

/// Value currently known for the property, else the one the element was
/// declared with.
fn initial_value(element: &Element, store: PageStore, property: &str) -> Value {
    store
        .value_untracked(&prop_key(element, property))
        .or_else(|| element.get_prop(property).cloned())
        .unwrap_or(Value::Null)
}

pub fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Checked values stay in click order: a newly checked value goes last.
pub fn toggle_selection(selected: &[String], value: &str, checked: bool) -> Vec<String> {
    let mut next: Vec<String> = selected.iter().filter(|v| *v != value).cloned().collect();
    if checked {
        next.push(value.to_string());
    }
    next
}

pub fn next_click_count(current: Option<&Value>) -> u64 {
    current.and_then(Value::as_u64).unwrap_or(0) + 1
}

#[component]
pub fn Checklist(element: Element, store: PageStore) -> impl IntoView {
    let key = prop_key(&element, PROP_VALUE);
    let declared = initial_value(&element, store, PROP_VALUE);
    let current = store.watch(key.clone());
    let selected =
        Memo::new(move |_| string_list(&current.get().unwrap_or_else(|| declared.clone())));
    let options = parse_options(element.get_prop("options"));

    view! {
        <div id=element.id.clone() class="dc-checklist">
            {options
                .into_iter()
                .map(|option| {
                    let value = option.value.clone();
                    let key = key.clone();
                    let is_checked = {
                        let value = value.clone();
                        move || selected.with(|s| s.contains(&value))
                    };
                    view! {
                        <label class="dc-checklist__item">
                            <input
                                type="checkbox"
                                prop:checked=is_checked
                                on:change=move |ev| {
                                    let next = toggle_selection(
                                        &selected.get_untracked(),
                                        &value,
                                        event_target_checked(&ev),
                                    );
                                    store.set_input(key.clone(), serde_json::json!(next));
                                }
                            />
                            {option.label}
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn RadioGroupControl(element: Element, store: PageStore) -> impl IntoView {
    let key = prop_key(&element, PROP_VALUE);
    let initial = initial_value(&element, store, PROP_VALUE)
        .as_str()
        .unwrap_or_default()
        .to_string();
    let selected = RwSignal::new(initial);
    let label = element
        .get_prop("label")
        .and_then(Value::as_str)
        .map(str::to_string);
    let options = parse_options(element.get_prop("options"));

    Effect::new(move |prev: Option<String>| {
        let current = selected.get();
        if prev.is_some_and(|p| p != current) {
            store.set_input(key.clone(), Value::from(current.clone()));
        }
        current
    });

    view! {
        <div id=element.id.clone() class="dc-radio-group">
            {label.map(|l| view! { <div class="dc-radio-group__label">{l}</div> })}
            <RadioGroup value=selected>
                {options
                    .into_iter()
                    .map(|o| view! { <Radio value=o.value label=o.label/> })
                    .collect_view()}
            </RadioGroup>
        </div>
    }
}

/// Counts clicks into `n_clicks`.
#[component]
pub fn ClickButton(element: Element, store: PageStore) -> impl IntoView {
    let key = prop_key(&element, PROP_N_CLICKS);
    let label = text_content(&element);

    view! {
        <span id=element.id.clone() class="dc-button">
            <Button on_click=move |_| {
                let clicks = next_click_count(store.value_untracked(&key).as_ref());
                store.set_input(key.clone(), Value::from(clicks));
            }>
                {label}
            </Button>
        </span>
    }
}

/// Sends the value on change (enter or blur), not on every keystroke.
#[component]
pub fn PasswordInput(element: Element, store: PageStore) -> impl IntoView {
    let key = prop_key(&element, PROP_VALUE);
    let initial = initial_value(&element, store, PROP_VALUE)
        .as_str()
        .unwrap_or_default()
        .to_string();
    let placeholder = element
        .get_prop("placeholder")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let width = element
        .get_prop("w")
        .and_then(Value::as_str)
        .map(|w| format!("width: {w};"))
        .unwrap_or_default();

    view! {
        <input
            id=element.id.clone()
            class="dc-password-input"
            type="password"
            autocomplete="off"
            placeholder=placeholder
            style=width
            prop:value=initial
            on:change=move |ev| {
                store.set_input(key.clone(), Value::from(event_target_value(&ev)));
            }
        />
    }
}

/// Switches bound to a browser-side binding drive the colour scheme; the
/// rest report `checked` like any other input.
#[component]
pub fn SwitchControl(element: Element, store: PageStore) -> impl IntoView {
    let id = element.id.clone().unwrap_or_default();
    let key = prop_key(&element, PROP_CHECKED);

    if store.is_client_input(&key) {
        return view! { <ColorSchemeSwitch id=id/> }.into_any();
    }

    let checked = RwSignal::new(
        initial_value(&element, store, PROP_CHECKED)
            .as_bool()
            .unwrap_or(false),
    );
    Effect::new(move |prev: Option<bool>| {
        let current = checked.get();
        if prev.is_some() {
            store.set_input(key.clone(), Value::from(current));
        }
        current
    });

    view! {
        <span id=id class="dc-switch">
            <Switch checked=checked/>
        </span>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_toggle_keeps_click_order() {
        let selected = strings(&["a"]);
        let selected = toggle_selection(&selected, "c", true);
        let selected = toggle_selection(&selected, "b", true);
        assert_eq!(selected, strings(&["a", "c", "b"]));

        let selected = toggle_selection(&selected, "a", false);
        assert_eq!(selected, strings(&["c", "b"]));

        // re-checking an already present value moves it last
        assert_eq!(toggle_selection(&selected, "c", true), strings(&["b", "c"]));
    }

    #[test]
    fn test_string_list() {
        assert_eq!(string_list(&json!(["b", "a"])), strings(&["b", "a"]));
        assert!(string_list(&Value::Null).is_empty());
        assert!(string_list(&json!("a")).is_empty());
    }

    #[test]
    fn test_next_click_count() {
        assert_eq!(next_click_count(None), 1);
        assert_eq!(next_click_count(Some(&Value::Null)), 1);
        assert_eq!(next_click_count(Some(&json!(4))), 5);
    }
}
