//! Items Page Component
//!
//! Sub-category header, paginated item list and the item detail modal.

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpCatalogApi;
use crate::components::{ItemList, ItemModal, PaginationBar};
use crate::context::use_app_context;
use crate::controller::ItemsController;
use crate::models::Item;
use crate::store::{ItemsView, Settled};

fn run(task: impl Future<Output = Settled> + 'static) {
    spawn_local(async move {
        task.await;
    });
}

/// Items of one sub-category
///
/// Reloads the header and the first page whenever `sub_category_id` changes.
#[component]
pub fn ItemsPage(#[prop(into)] sub_category_id: Signal<String>) -> impl IntoView {
    let ctx = use_app_context();
    let view_state = RwSignal::new(ItemsView::new(ctx.config.page_size));

    let api = HttpCatalogApi::for_current_origin(ctx.config.api_prefix.clone()).unwrap_or_else(|e| {
        tracing::warn!("[ITEMS] {}, using relative URLs", e);
        HttpCatalogApi::new("", ctx.config.api_prefix.clone())
    });
    let controller = ItemsController::new(Arc::new(api), view_state, ctx.toasts);

    // Mount and identifier changes: both fetchers, no ordering between them
    let ctrl = controller.clone();
    Effect::new(move |prev: Option<String>| {
        let id = sub_category_id.get();
        if id.is_empty() || prev.as_deref() == Some(id.as_str()) {
            return id;
        }
        if prev.is_some() {
            ctrl.retarget();
        }
        tracing::info!("[ITEMS] Loading sub-category {}", id);
        run(ctrl.load_first_page(&id));
        run(ctrl.load_details(&id));
        id
    });

    let ctrl = controller.clone();
    let on_page = Callback::new(move |page: u32| {
        run(ctrl.load_page(&sub_category_id.get_untracked(), page));
    });

    let ctrl = controller.clone();
    let on_select = Callback::new(move |item: Item| ctrl.select(item));

    let ctrl = controller;
    let on_dismiss = Callback::new(move |_: ()| ctrl.dismiss());

    let items = Memo::new(move |_| view_state.with(|v| v.items.clone()));
    let is_loading = Memo::new(move |_| view_state.with(|v| v.is_loading));
    let pagination = Memo::new(move |_| view_state.with(|v| v.pagination));
    let requested = Memo::new(move |_| view_state.with(|v| v.requested_page()));
    let title = Memo::new(move |_| {
        view_state.with(|v| v.sub_category.as_ref().map(|s| s.primary_name().to_string()))
    });
    let selected = Memo::new(move |_| view_state.with(|v| v.selection.selected().cloned()));
    let modal_visible = Memo::new(move |_| view_state.with(|v| v.selection.is_modal_visible()));

    view! {
        <div class="items-page">
            <ItemModal selected=selected visible=modal_visible on_dismiss=on_dismiss />
            <section class="item-list-container">
                <header class="item-list-header">
                    {move || title.get().map(|name| view! { <h3 class="item-list-title">{name}</h3> })}
                </header>
                <ItemList items=items is_loading=is_loading on_select=on_select />
                <PaginationBar pagination=pagination requested=requested on_change=on_page />
            </section>
        </div>
    }
}
