use crate::dashboards::DockDemoPage;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeProvider>
            <DockDemoPage />
        </ThemeProvider>
    }
}
