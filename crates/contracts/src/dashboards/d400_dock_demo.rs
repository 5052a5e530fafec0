//! Control-surface identifiers of the dock demo page.
//!
//! These names are the contract between client events and server bindings;
//! renaming one breaks the binding it triggers.

// Inputs
pub const DATASET_SELECTOR: &str = "dataset-selector";
pub const CHART_TYPE_SELECTOR: &str = "chart-type-selector";
pub const REFRESH_DATA_BTN: &str = "refresh-data-btn";
pub const API_KEY_INPUT: &str = "api-key-input";
pub const COLOR_SCHEME_SWITCH: &str = "color-scheme-switch";

// Outputs
pub const SELECTED_DATASETS_DISPLAY: &str = "selected-datasets-display";
pub const MAIN_CHART_CONTAINER: &str = "main-chart-container";
pub const SELECTED_CHART_TYPE: &str = "selected-chart-type";
pub const DATA_REFRESH_STATUS: &str = "data-refresh-status";
pub const CONSOLE_OUTPUT: &str = "console-output";
pub const DOCK_CONTAINER: &str = "dash-dock-container";

/// Id of the dock element rendered into [`DOCK_CONTAINER`].
pub const DOCK_LAYOUT: &str = "dock-layout";

// Properties
pub const PROP_VALUE: &str = "value";
pub const PROP_CHILDREN: &str = "children";
pub const PROP_N_CLICKS: &str = "n_clicks";
pub const PROP_CHECKED: &str = "checked";

// Tabs
pub const TAB_CONSOLE: &str = "console-tab";
pub const TAB_EXPLORER: &str = "explorer-tab";
pub const TAB_MAIN_VIEW: &str = "main-view-tab";
pub const TAB_DATA_PROPERTIES: &str = "data-properties-tab";
pub const TAB_CHART_PROPERTIES: &str = "chart-properties-tab";

/// Attribute set on `<html>` by the colour-scheme switch.
pub const COLOR_SCHEME_ATTRIBUTE: &str = "data-color-scheme";
