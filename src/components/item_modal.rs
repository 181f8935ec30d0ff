//! Item Detail Modal
//!
//! Shows the selected item's description with a link to its source.
//! Closed by the × button, a click on the overlay, or Escape.

use leptos::prelude::*;

use crate::models::Item;

#[component]
pub fn ItemModal(
    #[prop(into)] selected: Signal<Option<Item>>,
    #[prop(into)] visible: Signal<bool>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && visible.get_untracked() {
            on_dismiss.run(());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || visible.get()>
            {move || selected.get().map(|item| {
                let title = item.primary_name().to_string();
                let description = item.primary_description().to_string();
                view! {
                    <div class="modal-overlay" on:click=move |_| on_dismiss.run(())>
                        <div
                            class="modal-content"
                            role="dialog"
                            on:click=|ev| ev.stop_propagation()
                        >
                            <div class="modal-header">
                                <h4 class="modal-title">{title}</h4>
                                <button class="modal-close" on:click=move |_| on_dismiss.run(())>
                                    "×"
                                </button>
                            </div>
                            <div class="modal-body">
                                <p>{description}</p>
                            </div>
                            <div class="modal-footer">
                                <a
                                    class="button button-primary"
                                    href=item.link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    "Visit source"
                                </a>
                            </div>
                        </div>
                    </div>
                }
            })}
        </Show>
    }
}
