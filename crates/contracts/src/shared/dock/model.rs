use serde::{Deserialize, Serialize};

use super::validation::ConfigError;

// ---------------------------------------------------------------------------
// Layout tree
// ---------------------------------------------------------------------------

/// Edge of the dock a border is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderLocation {
    Top,
    Bottom,
    Left,
    Right,
}

impl BorderLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderLocation::Top => "top",
            BorderLocation::Bottom => "bottom",
            BorderLocation::Left => "left",
            BorderLocation::Right => "right",
        }
    }
}

impl std::fmt::Display for BorderLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the dock layout tree, tagged by the `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayoutNode {
    Row(RowNode),
    #[serde(rename = "tabset")]
    TabSet(TabSetNode),
    Tab(TabNode),
    Border(BorderNode),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowNode {
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub children: Vec<LayoutNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabSetNode {
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Index of the active tab within `children`.
    #[serde(default)]
    pub selected: usize,
    #[serde(default)]
    pub children: Vec<LayoutNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub enable_float: bool,
    /// Factory hint for the client widget ("text" in the demo).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderNode {
    pub location: BorderLocation,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub children: Vec<LayoutNode>,
}

fn default_weight() -> f64 {
    100.0
}

impl LayoutNode {
    /// Tag name as it appears in the `type` field.
    pub fn kind(&self) -> &'static str {
        match self {
            LayoutNode::Row(_) => "row",
            LayoutNode::TabSet(_) => "tabset",
            LayoutNode::Tab(_) => "tab",
            LayoutNode::Border(_) => "border",
        }
    }

    pub fn children(&self) -> &[LayoutNode] {
        match self {
            LayoutNode::Row(row) => &row.children,
            LayoutNode::TabSet(set) => &set.children,
            LayoutNode::Border(border) => &border.children,
            LayoutNode::Tab(_) => &[],
        }
    }

    pub fn as_tab(&self) -> Option<&TabNode> {
        match self {
            LayoutNode::Tab(tab) => Some(tab),
            _ => None,
        }
    }

    /// Collects every tab below (and including) this node in document order.
    pub fn collect_tabs<'a>(&'a self, out: &mut Vec<&'a TabNode>) {
        match self {
            LayoutNode::Tab(tab) => out.push(tab),
            other => {
                for child in other.children() {
                    child.collect_tabs(out);
                }
            }
        }
    }

    pub fn tab(id: &str, name: &str) -> Self {
        LayoutNode::Tab(TabNode {
            id: id.to_string(),
            name: name.to_string(),
            enable_float: false,
            component: None,
        })
    }
}

// ---------------------------------------------------------------------------
// Dock model (root container)
// ---------------------------------------------------------------------------

/// Options applied to every tab unless the tab overrides them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalOptions {
    #[serde(default)]
    pub tab_enable_close: bool,
    #[serde(default)]
    pub tab_enable_float: bool,
}

/// Complete dock description: borders around one root layout row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockModel {
    #[serde(default)]
    pub global: GlobalOptions,
    #[serde(default)]
    pub borders: Vec<LayoutNode>,
    pub layout: LayoutNode,
}

impl DockModel {
    /// Parses a structural literal (the `serde_json::Value` form).
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Plain structural representation. Field order follows declaration order,
    /// so equal models always produce identical output.
    pub fn to_value(&self) -> serde_json::Value {
        // Every field is a plain struct/enum/number/string, serialization cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    /// All tabs in document order, borders first.
    pub fn tabs(&self) -> Vec<&TabNode> {
        let mut out = Vec::new();
        for border in &self.borders {
            border.collect_tabs(&mut out);
        }
        self.layout.collect_tabs(&mut out);
        out
    }

    pub fn tab_ids(&self) -> Vec<&str> {
        self.tabs().into_iter().map(|t| t.id.as_str()).collect()
    }

    pub fn find_tab(&self, id: &str) -> Option<&TabNode> {
        self.tabs().into_iter().find(|t| t.id == id)
    }
}
