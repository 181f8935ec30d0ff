//! Items Controller
//!
//! Drives the detail fetcher, the page fetcher and the selection state of
//! the items view. Each fetch method performs its synchronous transition
//! (loading flag, request ticket) before returning the future, so the
//! caller decides where to run it.

use std::future::Future;
use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{CatalogApi, PageQuery};
use crate::models::Item;
use crate::notify::Notifier;
use crate::store::{ItemsView, Settled};

pub const DETAILS_ERROR: &str = "Something went wrong when trying to load subcategory details";
pub const ITEMS_ERROR: &str = "Something went wrong when trying to load items";

pub struct ItemsController<A, N> {
    /// Shared so clones of the controller can live in `Callback`s
    api: Arc<A>,
    view: RwSignal<ItemsView>,
    notifier: N,
}

impl<A, N: Clone> Clone for ItemsController<A, N> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            view: self.view,
            notifier: self.notifier.clone(),
        }
    }
}

impl<A, N> ItemsController<A, N>
where
    A: CatalogApi + 'static,
    N: Notifier,
{
    pub fn new(api: Arc<A>, view: RwSignal<ItemsView>, notifier: N) -> Self {
        Self { api, view, notifier }
    }

    /// Fetch the sub-category shown in the list header
    pub fn load_details(&self, sub_category_id: &str) -> impl Future<Output = Settled> + 'static {
        let ticket = self.view.try_update(|v| v.begin_detail_request());
        let api = Arc::clone(&self.api);
        let view = self.view;
        let notifier = self.notifier.clone();
        let id = sub_category_id.to_string();

        async move {
            let Some(ticket) = ticket else {
                return Settled::Discarded;
            };
            let result = api.sub_category(&id).await;
            // `None` once the page owning the signal is disposed
            let settled = view
                .try_update(|v| v.finish_detail_request(ticket, result))
                .unwrap_or(Settled::Discarded);

            match &settled {
                Settled::Failed(err) => {
                    tracing::error!("[ITEMS] Failed to load sub-category {}: {}", id, err);
                    notifier.error(DETAILS_ERROR);
                }
                Settled::Applied => tracing::debug!("[ITEMS] Loaded sub-category {}", id),
                _ => tracing::debug!("[ITEMS] Dropped sub-category {} response ({:?})", id, settled),
            }
            settled
        }
    }

    /// Fetch a page of items. `page` is 1-based as shown to the user.
    pub fn load_page(&self, sub_category_id: &str, page: u32) -> impl Future<Output = Settled> + 'static {
        let started = self
            .view
            .try_update(|v| (v.begin_page_request(page), v.pagination.page_size));
        let api = Arc::clone(&self.api);
        let view = self.view;
        let notifier = self.notifier.clone();
        let id = sub_category_id.to_string();

        async move {
            let Some((ticket, page_size)) = started else {
                return Settled::Discarded;
            };
            let query = PageQuery { page_number: ticket.page - 1, page_size };
            let result = api.items(&id, query).await;
            let settled = view
                .try_update(|v| v.finish_page_request(ticket, result))
                .unwrap_or(Settled::Discarded);

            match &settled {
                Settled::Failed(err) => {
                    tracing::error!("[ITEMS] Failed to load page {} of sub-category {}: {}", ticket.page, id, err);
                    notifier.error(ITEMS_ERROR);
                }
                Settled::Applied => tracing::debug!("[ITEMS] Loaded page {} of sub-category {}", ticket.page, id),
                _ => tracing::debug!("[ITEMS] Dropped page {} response ({:?})", ticket.page, settled),
            }
            settled
        }
    }

    pub fn load_first_page(&self, sub_category_id: &str) -> impl Future<Output = Settled> + 'static {
        self.load_page(sub_category_id, 1)
    }

    /// Open the detail modal for an item already on the page
    pub fn select(&self, item: Item) {
        self.view.try_update(|v| v.selection.select(item));
    }

    pub fn dismiss(&self) {
        self.view.try_update(|v| v.selection.dismiss());
    }

    /// Called before reloading for a new sub-category identifier
    pub fn retarget(&self) {
        self.view.try_update(|v| v.retarget());
    }
}
