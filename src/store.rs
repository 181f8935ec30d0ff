//! Items View State
//!
//! Page-local state of the items view and its transitions. Fetch completion
//! and selection handlers are the only writers.

use crate::api::{ApiError, ApiResult};
use crate::models::{Item, ItemPage, SubCategory};

/// Pagination cursor as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number
    pub current: u32,
    /// Total element count reported by the backend
    pub total: u64,
    pub page_size: u32,
}

impl Pagination {
    pub fn new(page_size: u32) -> Self {
        Self { current: 1, total: 0, page_size: page_size.max(1) }
    }

    pub fn page_count(&self) -> u32 {
        let size = u64::from(self.page_size);
        u32::try_from(self.total.div_ceil(size)).unwrap_or(u32::MAX)
    }
}

/// Modal visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Selected item and modal state
///
/// Dismissing keeps the selected item around until the next selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    selected: Option<Item>,
    modal: ModalState,
}

impl Selection {
    pub fn select(&mut self, item: Item) {
        self.selected = Some(item);
        self.modal = ModalState::Open;
    }

    pub fn dismiss(&mut self) {
        self.modal = ModalState::Closed;
    }

    pub fn selected(&self) -> Option<&Item> {
        self.selected.as_ref()
    }

    pub fn is_modal_visible(&self) -> bool {
        self.modal == ModalState::Open && self.selected.is_some()
    }
}

/// Issued when a request starts; only the latest ticket may apply its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTicket {
    seq: u64,
    pub page: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailTicket {
    seq: u64,
}

/// What happened to a settled request
#[derive(Debug, Clone, PartialEq)]
pub enum Settled {
    Applied,
    Failed(ApiError),
    /// A newer request was issued, the result was dropped
    Superseded,
    /// The view was torn down before the request settled
    Discarded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemsView {
    pub items: Vec<Item>,
    pub pagination: Pagination,
    pub sub_category: Option<SubCategory>,
    pub is_loading: bool,
    pub selection: Selection,
    /// Page of the latest issued request, `pagination.current` once it settles
    requested: u32,
    page_seq: u64,
    detail_seq: u64,
}

impl ItemsView {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::new(page_size),
            sub_category: None,
            is_loading: false,
            selection: Selection::default(),
            requested: 1,
            page_seq: 0,
            detail_seq: 0,
        }
    }

    /// Start a page request. `page` is 1-based, 0 is read as 1.
    pub fn begin_page_request(&mut self, page: u32) -> PageTicket {
        self.page_seq += 1;
        self.is_loading = true;
        self.requested = page.max(1);
        PageTicket { seq: self.page_seq, page: self.requested }
    }

    pub fn requested_page(&self) -> u32 {
        self.requested
    }

    pub fn finish_page_request(&mut self, ticket: PageTicket, result: ApiResult<ItemPage>) -> Settled {
        if ticket.seq != self.page_seq {
            return Settled::Superseded;
        }
        self.is_loading = false;
        let settled = match result {
            Ok(page) => {
                self.items = page.content;
                self.pagination.total = page.total_elements;
                self.pagination.current = ticket.page;
                Settled::Applied
            }
            Err(err) => Settled::Failed(err),
        };
        self.requested = self.pagination.current;
        settled
    }

    pub fn begin_detail_request(&mut self) -> DetailTicket {
        self.detail_seq += 1;
        DetailTicket { seq: self.detail_seq }
    }

    pub fn finish_detail_request(&mut self, ticket: DetailTicket, result: ApiResult<SubCategory>) -> Settled {
        if ticket.seq != self.detail_seq {
            return Settled::Superseded;
        }
        match result {
            Ok(sub_category) => {
                self.sub_category = Some(sub_category);
                Settled::Applied
            }
            Err(err) => Settled::Failed(err),
        }
    }

    /// The sub-category identifier changed underneath the view: nothing of
    /// the previous sub-category stays on screen and in-flight requests lose
    /// their tickets.
    pub fn retarget(&mut self) {
        self.items.clear();
        self.pagination = Pagination::new(self.pagination.page_size);
        self.sub_category = None;
        self.is_loading = false;
        self.requested = 1;
        self.page_seq += 1;
        self.detail_seq += 1;
        self.selection.dismiss();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Translation;

    fn item(id: u64, name: &str) -> Item {
        Item {
            id: id.to_string(),
            link: format!("https://example.org/{}", id),
            translations: vec![Translation { name: name.to_string(), description: format!("{} text", name) }],
        }
    }

    fn page(items: Vec<Item>, total: u64) -> ItemPage {
        ItemPage { content: items, total_elements: total }
    }

    #[test]
    fn test_initial_state() {
        let view = ItemsView::new(10);
        assert_eq!(view.pagination, Pagination { current: 1, total: 0, page_size: 10 });
        assert!(!view.is_loading);
        assert!(view.selection.selected().is_none());
        assert!(!view.selection.is_modal_visible());
        assert!(view.sub_category.is_none());
    }

    #[test]
    fn test_page_count_rounds_up() {
        let mut p = Pagination::new(10);
        assert_eq!(p.page_count(), 0);
        p.total = 23;
        assert_eq!(p.page_count(), 3);
        p.total = 30;
        assert_eq!(p.page_count(), 3);
    }

    #[test]
    fn test_success_sets_requested_page_and_total() {
        let mut view = ItemsView::new(10);
        view.pagination.current = 5;
        view.pagination.total = 999;

        let ticket = view.begin_page_request(2);
        assert!(view.is_loading);
        let settled = view.finish_page_request(ticket, Ok(page(vec![item(1, "A")], 23)));

        assert_eq!(settled, Settled::Applied);
        assert!(!view.is_loading);
        assert_eq!(view.pagination.current, 2);
        assert_eq!(view.pagination.total, 23);
        assert_eq!(view.items, vec![item(1, "A")]);
    }

    #[test]
    fn test_failure_leaves_items_and_pagination() {
        let mut view = ItemsView::new(10);
        let t = view.begin_page_request(1);
        view.finish_page_request(t, Ok(page(vec![item(1, "A"), item(2, "B")], 23)));
        let before = (view.items.clone(), view.pagination);

        let t = view.begin_page_request(3);
        let settled = view.finish_page_request(t, Err(ApiError::Status(500)));

        assert_eq!(settled, Settled::Failed(ApiError::Status(500)));
        assert!(!view.is_loading);
        assert_eq!((view.items.clone(), view.pagination), before);
    }

    #[test]
    fn test_superseded_response_is_dropped() {
        let mut view = ItemsView::new(10);
        let older = view.begin_page_request(2);
        let newer = view.begin_page_request(3);

        assert_eq!(view.finish_page_request(newer, Ok(page(vec![item(3, "C")], 30))), Settled::Applied);
        let after_newer = view.clone();

        let settled = view.finish_page_request(older, Ok(page(vec![item(2, "B")], 30)));
        assert_eq!(settled, Settled::Superseded);
        assert_eq!(view, after_newer);
        assert_eq!(view.pagination.current, 3);
    }

    #[test]
    fn test_stale_response_keeps_loading_for_newer_request() {
        let mut view = ItemsView::new(10);
        let older = view.begin_page_request(1);
        let _newer = view.begin_page_request(2);

        view.finish_page_request(older, Err(ApiError::Transport("reset".into())));
        assert!(view.is_loading);
    }

    #[test]
    fn test_page_zero_reads_as_first_page() {
        let mut view = ItemsView::new(10);
        assert_eq!(view.begin_page_request(0).page, 1);
    }

    #[test]
    fn test_detail_superseded_and_failure() {
        let mut view = ItemsView::new(10);
        let sub = |id: &str| SubCategory { id: id.to_string(), translations: vec![] };

        let old = view.begin_detail_request();
        let new = view.begin_detail_request();
        assert_eq!(view.finish_detail_request(old, Ok(sub("1"))), Settled::Superseded);
        assert!(view.sub_category.is_none());

        assert_eq!(view.finish_detail_request(new, Ok(sub("2"))), Settled::Applied);
        let t = view.begin_detail_request();
        assert_eq!(
            view.finish_detail_request(t, Err(ApiError::Status(404))),
            Settled::Failed(ApiError::Status(404))
        );
        assert_eq!(view.sub_category, Some(sub("2")));
    }

    #[test]
    fn test_dismiss_keeps_selection() {
        let mut selection = Selection::default();
        selection.select(item(1, "A"));
        assert!(selection.is_modal_visible());
        assert_eq!(selection.selected(), Some(&item(1, "A")));

        selection.dismiss();
        assert!(!selection.is_modal_visible());
        assert_eq!(selection.selected(), Some(&item(1, "A")));

        selection.select(item(2, "B"));
        assert!(selection.is_modal_visible());
        assert_eq!(selection.selected(), Some(&item(2, "B")));
    }

    #[test]
    fn test_retarget_clears_previous_sub_category() {
        let mut view = ItemsView::new(10);
        let t = view.begin_page_request(2);
        view.finish_page_request(t, Ok(page(vec![item(9, "Old")], 23)));
        let d = view.begin_detail_request();
        view.finish_detail_request(d, Ok(SubCategory { id: "1".into(), translations: vec![] }));
        view.selection.select(item(9, "Old"));

        view.retarget();

        assert!(view.items.is_empty());
        assert!(view.sub_category.is_none());
        assert_eq!(view.pagination, Pagination { current: 1, total: 0, page_size: 10 });
        assert_eq!(view.requested_page(), 1);
        assert!(!view.selection.is_modal_visible());

        // Both fetches for the new identifier fail: nothing old comes back
        let t = view.begin_page_request(1);
        view.finish_page_request(t, Err(ApiError::Status(500)));
        let d = view.begin_detail_request();
        view.finish_detail_request(d, Err(ApiError::Status(500)));
        assert!(view.items.is_empty());
        assert!(view.sub_category.is_none());
    }

    #[test]
    fn test_retarget_drops_in_flight_responses() {
        let mut view = ItemsView::new(10);
        let t = view.begin_page_request(1);
        let d = view.begin_detail_request();

        view.retarget();

        assert!(!view.is_loading);
        assert_eq!(view.finish_page_request(t, Ok(page(vec![item(9, "Old")], 1))), Settled::Superseded);
        assert_eq!(
            view.finish_detail_request(d, Ok(SubCategory { id: "1".into(), translations: vec![] })),
            Settled::Superseded
        );
        assert!(view.items.is_empty());
        assert!(view.sub_category.is_none());
    }

    #[test]
    fn test_requested_page_tracks_latest_request() {
        let mut view = ItemsView::new(10);
        let t = view.begin_page_request(1);
        view.finish_page_request(t, Ok(page(vec![], 30)));

        let slow = view.begin_page_request(3);
        assert_eq!(view.requested_page(), 3);
        assert_eq!(view.pagination.current, 1);

        // Going back to the page still shown is a fresh request
        let back = view.begin_page_request(1);
        assert_eq!(view.requested_page(), 1);
        assert_eq!(view.finish_page_request(slow, Ok(page(vec![item(3, "C")], 30))), Settled::Superseded);
        assert_eq!(view.finish_page_request(back, Ok(page(vec![item(1, "A")], 30))), Settled::Applied);
        assert_eq!(view.pagination.current, 1);
        assert_eq!(view.items, vec![item(1, "A")]);
    }

    #[test]
    fn test_failed_request_resets_requested_page() {
        let mut view = ItemsView::new(10);
        let t = view.begin_page_request(4);
        view.finish_page_request(t, Err(ApiError::Status(500)));
        assert_eq!(view.requested_page(), 1);
    }
}
