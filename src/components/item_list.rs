//! Item List Component
//!
//! One row per item on the current page, showing its primary name.

use leptos::prelude::*;

use crate::models::Item;

#[component]
pub fn ItemList(
    #[prop(into)] items: Signal<Vec<Item>>,
    #[prop(into)] is_loading: Signal<bool>,
    on_select: Callback<Item>,
) -> impl IntoView {
    let list_class = move || if is_loading.get() { "item-list loading" } else { "item-list" };

    view! {
        <div class=list_class>
            <Show when=move || is_loading.get()>
                <div class="item-list-spinner">"Loading..."</div>
            </Show>
            <Show when=move || !is_loading.get() && items.with(|list| list.is_empty())>
                <div class="item-list-empty">"No items"</div>
            </Show>
            <ul class="item-list-rows">
                <For
                    each=move || items.get()
                    key=|item| item.id.clone()
                    children=move |item| {
                        let name = item.primary_name().to_string();
                        view! {
                            <li class="item-row pointer" on:click=move |_| on_select.run(item.clone())>
                                <span class="item-row-title">{name}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
