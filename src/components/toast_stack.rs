//! Toast Stack Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Error toasts, newest last; click to dismiss early
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = use_app_context().toasts;

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.list()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast toast-error" on:click=move |_| toasts.remove(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
