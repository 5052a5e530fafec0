use contracts::shared::dock::{
    BorderLocation, BorderNode, LayoutNode, RowNode, TabNode, TabSetNode,
};
use leptos::ev;
use leptos::prelude::*;
use std::collections::HashSet;

use super::DockContext;
use crate::shared::renderer::render_component;

fn tabs_of(children: &[LayoutNode]) -> Vec<TabNode> {
    children.iter().filter_map(LayoutNode::as_tab).cloned().collect()
}

/// Id of the tab to show after `closed` went away: the first one still open.
pub fn next_active(tabs: &[TabNode], closed: &HashSet<String>) -> Option<String> {
    tabs.iter()
        .find(|t| !closed.contains(&t.id))
        .map(|t| t.id.clone())
}

/// Rows alternate direction with depth, the root row is horizontal.
#[component]
pub fn RowView(row: RowNode, horizontal: bool, ctx: DockContext) -> AnyView {
    let direction = if horizontal { "row" } else { "column" };
    let cell_style =
        |weight: f64| format!("display: flex; flex: {weight} 1 0; min-width: 0; min-height: 0;");
    let children = row
        .children
        .into_iter()
        .map(|child| match child {
            LayoutNode::Row(inner) => {
                let style = cell_style(inner.weight);
                view! {
                    <div class="dc-dock__cell" style=style>
                        <RowView row=inner horizontal={!horizontal} ctx=ctx/>
                    </div>
                }
                .into_any()
            }
            LayoutNode::TabSet(tabset) => {
                let style = cell_style(tabset.weight);
                view! {
                    <div class="dc-dock__cell" style=style>
                        <TabSetView tabset=tabset ctx=ctx/>
                    </div>
                }
                .into_any()
            }
            _ => ().into_any(),
        })
        .collect_view();

    view! {
        <div class="dc-dock__row" style=format!("display: flex; flex: 1; flex-direction: {direction};")>
            {children}
        </div>
    }
    .into_any()
}

#[component]
fn TabButton(
    tab: TabNode,
    active: RwSignal<Option<String>>,
    toggles: bool,
    ctx: DockContext,
) -> impl IntoView {
    let id = tab.id.clone();
    let is_active = {
        let id = id.clone();
        Memo::new(move |_| active.get().as_deref() == Some(id.as_str()))
    };
    let title = match ctx.tab_header(&tab.id) {
        Some(header) => render_component(header, ctx.store),
        None => tab.name.clone().into_any(),
    };
    let floatable = ctx.floatable(tab.enable_float);

    let on_click = {
        let id = id.clone();
        move |_| {
            if toggles && is_active.get_untracked() {
                active.set(None);
            } else {
                active.set(Some(id.clone()));
            }
        }
    };

    let close = ctx.closable().then(|| {
        let id = id.clone();
        let on_close = move |ev: ev::MouseEvent| {
            ev.stop_propagation();
            ctx.closed.update(|closed| {
                closed.insert(id.clone());
            });
        };
        view! { <button class="dc-tab__close" on:click=on_close>"×"</button> }
    });

    let hidden = move || ctx.closed.with(|closed| closed.contains(&id));

    view! {
        <div
            class="dc-tab"
            class:active=is_active
            class:floatable=floatable
            style:display=move || if hidden() { "none" } else { "flex" }
            on:click=on_click
        >
            <span class="dc-tab__title">{title}</span>
            {close}
        </div>
    }
}

/// All tab contents stay mounted; only the active one is displayed.
#[component]
fn TabPanels(
    tabs: Vec<TabNode>,
    active: RwSignal<Option<String>>,
    ctx: DockContext,
) -> impl IntoView {
    tabs.into_iter()
        .map(|tab| {
            let content = match ctx.tab_content(&tab.id) {
                Some(content) => render_component(content, ctx.store),
                None => format!("No content registered for tab {}", tab.id).into_any(),
            };
            let id = tab.id;
            view! {
                <div
                    class="dc-tab-panel"
                    style:display=move || {
                        if active.get().as_deref() == Some(id.as_str()) { "block" } else { "none" }
                    }
                >
                    {content}
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn TabSetView(tabset: TabSetNode, ctx: DockContext) -> impl IntoView {
    let tabs = tabs_of(&tabset.children);
    let initial = tabs
        .get(tabset.selected)
        .or(tabs.first())
        .map(|t| t.id.clone());
    let active = RwSignal::new(initial);

    // Closing the active tab activates the first one still open
    {
        let tabs = tabs.clone();
        Effect::new(move |_| {
            let closed = ctx.closed.get();
            let current = active.get_untracked();
            if current.as_ref().is_some_and(|id| closed.contains(id)) {
                active.set(next_active(&tabs, &closed));
            }
        });
    }

    let buttons = tabs
        .iter()
        .cloned()
        .map(|tab| view! { <TabButton tab=tab active=active toggles=false ctx=ctx/> })
        .collect_view();

    view! {
        <div class="dc-tabset" style="display: flex; flex-direction: column; flex: 1; min-width: 0;">
            <div class="dc-tabset__strip">{buttons}</div>
            <div class="dc-tabset__content" style="flex: 1; overflow: auto;">
                <TabPanels tabs=tabs active=active ctx=ctx/>
            </div>
        </div>
    }
}

/// A border starts collapsed; clicking a tab opens it, clicking it again
/// collapses the border.
#[component]
pub fn BorderView(border: BorderNode, ctx: DockContext) -> impl IntoView {
    let tabs = tabs_of(&border.children);
    let active = RwSignal::new(None::<String>);
    let vertical = matches!(border.location, BorderLocation::Left | BorderLocation::Right);
    let size = border.size;
    let panel_style = move || {
        if active.get().is_none() {
            "display: none;".to_string()
        } else if vertical {
            format!("width: {size}px; overflow: auto;")
        } else {
            format!("height: {size}px; overflow: auto;")
        }
    };
    let direction = if vertical { "row" } else { "column" };
    let strip_direction = if vertical { "column" } else { "row" };
    let strip_first = matches!(border.location, BorderLocation::Left | BorderLocation::Top);

    let strip = {
        let buttons = tabs
            .iter()
            .cloned()
            .map(|tab| view! { <TabButton tab=tab active=active toggles=true ctx=ctx/> })
            .collect_view();
        view! {
            <div class="dc-border__strip" style=format!("display: flex; flex-direction: {strip_direction};")>
                {buttons}
            </div>
        }
    };
    let panel = view! {
        <div class="dc-border__panel" style=panel_style>
            <TabPanels tabs=tabs active=active ctx=ctx/>
        </div>
    };

    let (first, second) = if strip_first {
        (strip.into_any(), panel.into_any())
    } else {
        (panel.into_any(), strip.into_any())
    };

    view! {
        <div
            class=format!("dc-border dc-border--{}", border.location)
            style=format!("display: flex; flex-direction: {direction};")
        >
            {first}
            {second}
        </div>
    }
}
