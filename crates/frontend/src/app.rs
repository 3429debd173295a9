use crate::layout::tab_bar::FloatingTabBar;
use crate::routes::routes::AppRoutes;
use crate::shared::config::load_tab_bar_config;
use contracts::TabBarTheme;
use leptos::prelude::*;
use leptos_router::components::Router;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let mut tab_bar = load_tab_bar_config();
    if prefers_dark_scheme() {
        tab_bar.theme = TabBarTheme::dark();
    }
    // Room for the floating bar plus its bottom margin.
    let content_padding = format!("{}px", tab_bar.bar_height + tab_bar.bottom_margin * 2.0);

    view! {
        <ConfigProvider>
            <Router>
                <main class="app-main" style:padding-bottom=content_padding>
                    <AppRoutes />
                </main>
                <FloatingTabBar config=tab_bar />
            </Router>
        </ConfigProvider>
    }
}

fn prefers_dark_scheme() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}
