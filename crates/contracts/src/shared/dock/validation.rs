//! Structural validation of the dock layout tree.
//!
//! Runs once at startup; any error here means the process must not serve
//! the layout.

use std::collections::HashSet;

use thiserror::Error;

use super::model::{BorderLocation, DockModel, LayoutNode};

/// Configuration errors detected before the server starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("malformed layout: {0}")]
    Malformed(String),

    #[error("duplicate tab id '{0}'")]
    DuplicateTabId(String),

    #[error("tabset has no tabs")]
    EmptyTabSet,

    #[error("selected index {selected} out of range for tabset with {len} tab(s)")]
    IndexOutOfRange { selected: usize, len: usize },

    #[error("more than one border at location '{0}'")]
    DuplicateBorder(BorderLocation),

    #[error("'{found}' node is not allowed inside '{parent}'")]
    UnexpectedNode {
        parent: &'static str,
        found: &'static str,
    },

    #[error("negative weight or size: {0}")]
    NegativeWeight(f64),

    #[error("root layout node must be a row")]
    RootNotRow,

    #[error("tab id '{0}' is not registered")]
    UnknownTabId(String),
}

impl DockModel {
    /// Checks every structural invariant of the model.
    ///
    /// Validation is read-only, so calling it repeatedly yields the same result.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen_ids = HashSet::new();
        let mut seen_borders = HashSet::new();

        for border in &self.borders {
            let LayoutNode::Border(border) = border else {
                return Err(ConfigError::UnexpectedNode {
                    parent: "borders",
                    found: border.kind(),
                });
            };
            if !seen_borders.insert(border.location) {
                return Err(ConfigError::DuplicateBorder(border.location));
            }
            check_non_negative(border.size)?;
            check_tabs_only("border", &border.children, &mut seen_ids)?;
        }

        if !matches!(self.layout, LayoutNode::Row(_)) {
            return Err(ConfigError::RootNotRow);
        }
        validate_container(&self.layout, &mut seen_ids)
    }
}

fn validate_container<'a>(
    node: &'a LayoutNode,
    seen_ids: &mut HashSet<&'a str>,
) -> Result<(), ConfigError> {
    match node {
        LayoutNode::Row(row) => {
            check_non_negative(row.weight)?;
            for child in &row.children {
                match child {
                    LayoutNode::Row(_) | LayoutNode::TabSet(_) => {
                        validate_container(child, seen_ids)?
                    }
                    other => {
                        return Err(ConfigError::UnexpectedNode {
                            parent: "row",
                            found: other.kind(),
                        })
                    }
                }
            }
            Ok(())
        }
        LayoutNode::TabSet(set) => {
            check_non_negative(set.weight)?;
            if set.children.is_empty() {
                return Err(ConfigError::EmptyTabSet);
            }
            check_tabs_only("tabset", &set.children, seen_ids)?;
            if set.selected >= set.children.len() {
                return Err(ConfigError::IndexOutOfRange {
                    selected: set.selected,
                    len: set.children.len(),
                });
            }
            Ok(())
        }
        other => Err(ConfigError::UnexpectedNode {
            parent: "layout",
            found: other.kind(),
        }),
    }
}

fn check_tabs_only<'a>(
    parent: &'static str,
    children: &'a [LayoutNode],
    seen_ids: &mut HashSet<&'a str>,
) -> Result<(), ConfigError> {
    for child in children {
        let Some(tab) = child.as_tab() else {
            return Err(ConfigError::UnexpectedNode {
                parent,
                found: child.kind(),
            });
        };
        if !seen_ids.insert(tab.id.as_str()) {
            return Err(ConfigError::DuplicateTabId(tab.id.clone()));
        }
    }
    Ok(())
}

fn check_non_negative(value: f64) -> Result<(), ConfigError> {
    // NaN fails too
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeWeight(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn model(value: serde_json::Value) -> DockModel {
        DockModel::from_value(value).unwrap()
    }

    fn valid() -> DockModel {
        model(json!({
            "borders": [
                { "type": "border", "location": "bottom", "size": 100,
                  "children": [ { "type": "tab", "id": "console", "name": "Console" } ] },
                { "type": "border", "location": "left", "size": 250,
                  "children": [ { "type": "tab", "id": "explorer", "name": "Explorer" } ] }
            ],
            "layout": {
                "type": "row", "weight": 100,
                "children": [
                    { "type": "tabset", "weight": 60, "selected": 0,
                      "children": [ { "type": "tab", "id": "main", "name": "Main" } ] },
                    { "type": "row", "weight": 40, "children": [
                        { "type": "tabset", "weight": 50, "selected": 1,
                          "children": [
                            { "type": "tab", "id": "data", "name": "Data" },
                            { "type": "tab", "id": "chart", "name": "Chart" }
                          ] }
                    ] }
                ]
            }
        }))
    }

    #[test]
    fn test_valid_model_passes() {
        let m = valid();
        assert_eq!(m.validate(), Ok(()));
        // idempotent
        assert_eq!(m.validate(), m.validate());
    }

    #[test]
    fn test_duplicate_tab_id_in_layout() {
        let m = model(json!({
            "layout": { "type": "row", "children": [
                { "type": "tabset", "children": [
                    { "type": "tab", "id": "a", "name": "A" },
                    { "type": "tab", "id": "b", "name": "B" }
                ] },
                { "type": "tabset", "children": [ { "type": "tab", "id": "a", "name": "A again" } ] }
            ] }
        }));
        assert_eq!(m.validate(), Err(ConfigError::DuplicateTabId("a".into())));
    }

    #[test]
    fn test_duplicate_tab_id_across_border_and_layout() {
        let mut m = valid();
        if let LayoutNode::Border(border) = &mut m.borders[0] {
            border.children.push(LayoutNode::tab("main", "Shadow"));
        }
        assert_eq!(m.validate(), Err(ConfigError::DuplicateTabId("main".into())));
    }

    #[test]
    fn test_empty_tabset_rejected() {
        let m = model(json!({
            "layout": { "type": "row", "children": [ { "type": "tabset", "children": [] } ] }
        }));
        assert_eq!(m.validate(), Err(ConfigError::EmptyTabSet));
    }

    #[test]
    fn test_selected_out_of_range() {
        let m = model(json!({
            "layout": { "type": "row", "children": [
                { "type": "tabset", "selected": 2, "children": [
                    { "type": "tab", "id": "a", "name": "A" },
                    { "type": "tab", "id": "b", "name": "B" }
                ] }
            ] }
        }));
        assert_eq!(
            m.validate(),
            Err(ConfigError::IndexOutOfRange { selected: 2, len: 2 })
        );
    }

    #[test]
    fn test_duplicate_border_location() {
        let m = model(json!({
            "borders": [
                { "type": "border", "location": "left", "children": [ { "type": "tab", "id": "a", "name": "A" } ] },
                { "type": "border", "location": "left", "children": [ { "type": "tab", "id": "b", "name": "B" } ] }
            ],
            "layout": { "type": "row", "children": [] }
        }));
        assert_eq!(
            m.validate(),
            Err(ConfigError::DuplicateBorder(BorderLocation::Left))
        );
    }

    #[test]
    fn test_root_must_be_row() {
        let m = model(json!({
            "layout": { "type": "tabset", "children": [ { "type": "tab", "id": "a", "name": "A" } ] }
        }));
        assert_eq!(m.validate(), Err(ConfigError::RootNotRow));
    }

    #[test]
    fn test_tabset_accepts_only_tabs() {
        let m = model(json!({
            "layout": { "type": "row", "children": [
                { "type": "tabset", "children": [ { "type": "row", "children": [] } ] }
            ] }
        }));
        assert_eq!(
            m.validate(),
            Err(ConfigError::UnexpectedNode { parent: "tabset", found: "row" })
        );
    }

    #[test]
    fn test_border_accepts_only_tabs() {
        let m = model(json!({
            "borders": [
                { "type": "border", "location": "left", "children": [
                    { "type": "tabset", "children": [ { "type": "tab", "id": "a", "name": "A" } ] }
                ] }
            ],
            "layout": { "type": "row", "children": [] }
        }));
        assert_eq!(
            m.validate(),
            Err(ConfigError::UnexpectedNode { parent: "border", found: "tabset" })
        );
    }

    #[test]
    fn test_tab_directly_in_row_rejected() {
        let m = model(json!({
            "layout": { "type": "row", "children": [ { "type": "tab", "id": "a", "name": "A" } ] }
        }));
        assert_eq!(
            m.validate(),
            Err(ConfigError::UnexpectedNode { parent: "row", found: "tab" })
        );
    }

    #[test]
    fn test_negative_weight_rejected() {
        let m = model(json!({
            "layout": { "type": "row", "weight": -1, "children": [] }
        }));
        assert_eq!(m.validate(), Err(ConfigError::NegativeWeight(-1.0)));
    }

    #[test]
    fn test_error_messages_name_the_violation() {
        assert_eq!(
            ConfigError::DuplicateTabId("x".into()).to_string(),
            "duplicate tab id 'x'"
        );
        assert_eq!(
            ConfigError::DuplicateBorder(BorderLocation::Top).to_string(),
            "more than one border at location 'top'"
        );
    }
}
