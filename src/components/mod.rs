//! UI Components
//!
//! Leptos components of the items view.

mod item_list;
mod item_modal;
mod items_page;
mod pagination_bar;
mod toast_stack;

pub use item_list::ItemList;
pub use item_modal::ItemModal;
pub use items_page::ItemsPage;
pub use pagination_bar::PaginationBar;
pub use toast_stack::ToastStack;
