//! Academix Items Frontend App
//!
//! Root component: provides the app context and routes
//! `/sub-categories/:subCategoryId` to the items page.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

use crate::components::{ItemsPage, ToastStack};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    tracing::info!("[APP] Starting with page size {}, API at {}", config.page_size, config.api_prefix);
    provide_context(AppContext::new(config));

    view! {
        <Router>
            <div class="app-layout">
                <main class="main-content">
                    <Routes fallback=|| view! { <p class="route-missing">"No sub-category selected"</p> }>
                        <Route path=path!("/sub-categories/:subCategoryId") view=SubCategoryRoute />
                        <Route path=path!("/sub-categories/:subCategoryId/items") view=SubCategoryRoute />
                    </Routes>
                </main>
                <ToastStack />
            </div>
        </Router>
    }
}

/// Keeps the mounted page and follows the route parameter
#[component]
fn SubCategoryRoute() -> impl IntoView {
    let params = use_params_map();
    let sub_category_id = Signal::derive(move || {
        params.with(|p| p.get("subCategoryId").unwrap_or_default())
    });

    view! { <ItemsPage sub_category_id=sub_category_id /> }
}
