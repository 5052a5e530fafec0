//! Bindings of the demo page.
//!
//! Every handler accepts any JSON value for its inputs; values outside the
//! expected domain take the default branch instead of failing the update.

use contracts::dashboards::d400_dock_demo::*;
use contracts::enums::ChartType;
use serde_json::Value;

use super::charts;
use crate::shared::callbacks::Binding;
use crate::shared::dock::DockApp;

pub const NO_DATASETS_TEXT: &str = "No datasets selected";
pub const NOT_REFRESHED_STATUS: &str = "Data not refreshed yet";
pub const CONSOLE_READY_TEXT: &str = "Console initialized. Waiting for events...";

pub fn bindings() -> Vec<Binding> {
    vec![
        Binding::server(
            "update_dash_dock",
            &[(API_KEY_INPUT, PROP_VALUE)],
            &[(DOCK_CONTAINER, PROP_CHILDREN)],
            on_api_key,
        ),
        Binding::server(
            "update_selected_datasets",
            &[(DATASET_SELECTOR, PROP_VALUE)],
            &[(SELECTED_DATASETS_DISPLAY, PROP_CHILDREN)],
            on_dataset_selection,
        ),
        Binding::server(
            "update_chart_type",
            &[(CHART_TYPE_SELECTOR, PROP_VALUE)],
            &[(SELECTED_CHART_TYPE, PROP_CHILDREN)],
            on_chart_type_label,
        ),
        Binding::server(
            "refresh_data",
            &[(REFRESH_DATA_BTN, PROP_N_CLICKS)],
            &[
                (DATA_REFRESH_STATUS, PROP_CHILDREN),
                (CONSOLE_OUTPUT, PROP_CHILDREN),
            ],
            on_refresh,
        ),
        Binding::server(
            "update_chart",
            &[(CHART_TYPE_SELECTOR, PROP_VALUE)],
            &[(MAIN_CHART_CONTAINER, PROP_CHILDREN)],
            on_chart_type,
        ),
        // Theme switching happens in the browser only.
        Binding::client(
            "toggle_color_scheme",
            &[(COLOR_SCHEME_SWITCH, PROP_CHECKED)],
            &[(COLOR_SCHEME_SWITCH, "id")],
        ),
    ]
}

// ---------------------------------------------------------------------------
// Pure behaviour
// ---------------------------------------------------------------------------

/// Keys are shown in the order they were clicked, never sorted.
pub fn selected_datasets_text(selected: &[String]) -> String {
    if selected.is_empty() {
        return NO_DATASETS_TEXT.to_string();
    }
    format!("Selected datasets: {}", selected.join(", "))
}

pub fn chart_type_label(value: Option<&str>) -> String {
    format!("Selected chart type: {}", value.unwrap_or("None"))
}

/// Returns `(status, console message)` for the click count.
pub fn refresh_status(n_clicks: u64) -> (String, String) {
    if n_clicks == 0 {
        return (
            NOT_REFRESHED_STATUS.to_string(),
            CONSOLE_READY_TEXT.to_string(),
        );
    }
    (
        format!("Data refreshed {n_clicks} times"),
        format!("Data refresh requested at click {n_clicks}"),
    )
}

// ---------------------------------------------------------------------------
// Value decoding
// ---------------------------------------------------------------------------

static NULL: Value = Value::Null;

fn arg(inputs: &[Value], index: usize) -> &Value {
    inputs.get(index).unwrap_or(&NULL)
}

fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .collect(),
        Value::String(s) => vec![s.clone()],
        _ => Vec::new(),
    }
}

/// Whole positive numbers only; fractional or negative counts are treated
/// as no clicks.
fn click_count(value: &Value) -> u64 {
    value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f > 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        })
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn on_api_key(dock: &DockApp, inputs: &[Value]) -> Vec<Value> {
    let api_key = arg(inputs, 0).as_str();
    vec![dock.render(DOCK_LAYOUT, api_key).to_value()]
}

fn on_dataset_selection(_: &DockApp, inputs: &[Value]) -> Vec<Value> {
    let selected = string_list(arg(inputs, 0));
    vec![Value::from(selected_datasets_text(&selected))]
}

fn on_chart_type_label(_: &DockApp, inputs: &[Value]) -> Vec<Value> {
    let value = arg(inputs, 0);
    let label = match value {
        Value::Null => chart_type_label(None),
        Value::String(s) => chart_type_label(Some(s.as_str())),
        other => chart_type_label(Some(other.to_string().as_str())),
    };
    vec![Value::from(label)]
}

fn on_chart_type(_: &DockApp, inputs: &[Value]) -> Vec<Value> {
    let chart_type = arg(inputs, 0).as_str().and_then(ChartType::from_code);
    if chart_type.is_none() {
        tracing::debug!("unknown chart type {}, rendering fallback", arg(inputs, 0));
    }
    vec![charts::render_chart(chart_type).to_value()]
}

fn on_refresh(_: &DockApp, inputs: &[Value]) -> Vec<Value> {
    let (status, console) = refresh_status(click_count(arg(inputs, 0)));
    vec![Value::from(status), Value::from(console)]
}
