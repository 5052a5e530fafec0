use contracts::dashboards::d400_dock_demo::*;
use contracts::shared::dock::{ConfigError, DockModel};
use serde_json::json;

/// Dock layout of the demo page as a structural literal.
pub fn dock_config() -> serde_json::Value {
    json!({
        "global": {
            "tabEnableClose": false,
            "tabEnableFloat": true
        },
        "borders": [
            {
                "type": "border",
                "location": "bottom",
                "size": 100,
                "children": [
                    { "type": "tab", "name": "Console", "component": "text", "id": TAB_CONSOLE }
                ]
            },
            {
                "type": "border",
                "location": "left",
                "size": 250,
                "children": [
                    { "type": "tab", "name": "Explorer", "component": "text", "id": TAB_EXPLORER }
                ]
            }
        ],
        "layout": {
            "type": "row",
            "weight": 100,
            "children": [
                {
                    "type": "tabset",
                    "weight": 60,
                    "selected": 0,
                    "children": [
                        {
                            "type": "tab",
                            "name": "Main View",
                            "component": "text",
                            "enableFloat": true,
                            "id": TAB_MAIN_VIEW
                        }
                    ]
                },
                {
                    "type": "tabset",
                    "weight": 40,
                    "selected": 0,
                    "children": [
                        { "type": "tab", "name": "Data Properties", "component": "text", "id": TAB_DATA_PROPERTIES },
                        { "type": "tab", "name": "Chart Properties", "component": "text", "id": TAB_CHART_PROPERTIES }
                    ]
                }
            ]
        }
    })
}

pub fn dock_model() -> Result<DockModel, ConfigError> {
    let model = DockModel::from_value(dock_config())?;
    model.validate()?;
    Ok(model)
}
