//! Pagination Bar Component
//!
//! Prev/next buttons and a window of page numbers around the current page.

use leptos::prelude::*;

use crate::store::Pagination;

/// Pages shown on each side of the current one
const RADIUS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageLink {
    Page(u32),
    Gap,
}

/// First and last page, the current page with its neighbours, gaps between
pub fn page_window(current: u32, page_count: u32) -> Vec<PageLink> {
    if page_count == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, page_count);
    let lo = current.saturating_sub(RADIUS).max(1);
    let hi = (current + RADIUS).min(page_count);

    let mut links = Vec::new();
    if lo > 1 {
        links.push(PageLink::Page(1));
        if lo > 2 {
            links.push(PageLink::Gap);
        }
    }
    links.extend((lo..=hi).map(PageLink::Page));
    if hi < page_count {
        if hi + 1 < page_count {
            links.push(PageLink::Gap);
        }
        links.push(PageLink::Page(page_count));
    }
    links
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    Prev,
    Next,
    To(u32),
}

/// Page to request for a click, relative to the latest requested page
///
/// `None` when the click asks for the page already requested or leaves the
/// range.
pub fn page_target(nav: PageNav, requested: u32, page_count: u32) -> Option<u32> {
    let target = match nav {
        PageNav::Prev => requested.checked_sub(1)?,
        PageNav::Next => requested + 1,
        PageNav::To(page) => page,
    };
    (target >= 1 && target <= page_count.max(1) && target != requested).then_some(target)
}

/// Emits the 1-based page the user asked for
#[component]
pub fn PaginationBar(
    #[prop(into)] pagination: Signal<Pagination>,
    /// Page of the latest request, ahead of `pagination.current` while loading
    #[prop(into)] requested: Signal<u32>,
    on_change: Callback<u32>,
) -> impl IntoView {
    let current = move || pagination.get().current;
    let page_count = move || pagination.get().page_count();

    let go_to = move |nav: PageNav| {
        if let Some(page) = page_target(nav, requested.get_untracked(), page_count()) {
            on_change.run(page);
        }
    };

    view! {
        <Show when=move || { page_count() > 0 }>
            <nav class="pagination">
                <button
                    class="pagination-prev"
                    disabled=move || requested.get() <= 1
                    on:click=move |_| go_to(PageNav::Prev)
                >
                    "‹"
                </button>
                <For
                    each=move || page_window(current(), page_count()).into_iter().enumerate()
                    key=|(index, link)| (*index, *link)
                    children=move |(_, link)| match link {
                        PageLink::Page(page) => {
                            let page_class = move || {
                                if current() == page { "pagination-item active" } else { "pagination-item" }
                            };
                            view! {
                                <button class=page_class on:click=move |_| go_to(PageNav::To(page))>
                                    {page}
                                </button>
                            }
                            .into_any()
                        }
                        PageLink::Gap => view! { <span class="pagination-gap">"…"</span> }.into_any(),
                    }
                />
                <button
                    class="pagination-next"
                    disabled=move || requested.get() >= page_count()
                    on:click=move |_| go_to(PageNav::Next)
                >
                    "›"
                </button>
            </nav>
        </Show>
    }
}
