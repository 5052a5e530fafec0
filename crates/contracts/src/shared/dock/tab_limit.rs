//! Tab counting and the free-tier tab limit.
//!
//! Without an API key the dock shows at most `limit` tabs: borders consume
//! the budget first, then the main layout depth-first.

use serde::{Deserialize, Serialize};

use super::model::{DockModel, LayoutNode, RowNode, TabSetNode};

/// Default number of tabs available without an API key.
pub const DEFAULT_FREE_TAB_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabCount {
    pub total: usize,
    pub border_tabs: usize,
    pub layout_tabs: usize,
}

impl DockModel {
    pub fn count_tabs(&self) -> TabCount {
        let border_tabs: usize = self.borders.iter().map(count_in_node).sum();
        let layout_tabs = count_in_node(&self.layout);
        TabCount {
            total: border_tabs + layout_tabs,
            border_tabs,
            layout_tabs,
        }
    }

    pub fn exceeds_free_tier_limit(&self, limit: usize) -> bool {
        self.count_tabs().total > limit
    }

    /// Returns a copy of the model trimmed to at most `limit` tabs.
    ///
    /// Tabsets and nested rows left without tabs are dropped, the root row is
    /// always kept, and `selected` is clamped so a valid model stays valid.
    pub fn limit_to_free_tier(&self, limit: usize) -> DockModel {
        if !self.exceeds_free_tier_limit(limit) {
            return self.clone();
        }

        let mut remaining = limit;
        let mut borders = Vec::with_capacity(self.borders.len());
        for node in &self.borders {
            let LayoutNode::Border(border) = node else {
                borders.push(node.clone());
                continue;
            };
            let mut border = border.clone();
            let keep = border.children.len().min(remaining);
            border.children.truncate(keep);
            remaining -= keep;
            borders.push(LayoutNode::Border(border));
        }

        let layout = match limit_node(&self.layout, &mut remaining) {
            Some(node) => node,
            None => LayoutNode::Row(RowNode {
                weight: match &self.layout {
                    LayoutNode::Row(row) => row.weight,
                    _ => 100.0,
                },
                children: Vec::new(),
            }),
        };

        DockModel {
            global: self.global.clone(),
            borders,
            layout,
        }
    }
}

fn count_in_node(node: &LayoutNode) -> usize {
    match node {
        LayoutNode::Tab(_) => 1,
        other => other.children().iter().map(count_in_node).sum(),
    }
}

fn limit_node(node: &LayoutNode, remaining: &mut usize) -> Option<LayoutNode> {
    if *remaining == 0 {
        return None;
    }
    match node {
        LayoutNode::Tab(_) => {
            *remaining -= 1;
            Some(node.clone())
        }
        LayoutNode::TabSet(set) => {
            let keep = set.children.len().min(*remaining);
            if keep == 0 {
                return None;
            }
            *remaining -= keep;
            Some(LayoutNode::TabSet(TabSetNode {
                weight: set.weight,
                selected: set.selected.min(keep - 1),
                children: set.children[..keep].to_vec(),
            }))
        }
        LayoutNode::Row(row) => {
            let mut children = Vec::new();
            for child in &row.children {
                if let Some(limited) = limit_node(child, remaining) {
                    children.push(limited);
                }
            }
            if children.is_empty() {
                return None;
            }
            Some(LayoutNode::Row(RowNode {
                weight: row.weight,
                children,
            }))
        }
        LayoutNode::Border(_) => None,
    }
}
