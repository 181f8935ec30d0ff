//! User-facing Notifications
//!
//! Error toasts shown when a fetch fails.

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Sink for generic user-facing error messages
pub trait Notifier: Clone + 'static {
    fn error(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
}

/// Toast stack provided via context
#[derive(Clone, Copy)]
pub struct Toasts {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
    timeout: Duration,
}

impl Toasts {
    pub fn new(timeout: Duration) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            timeout,
        }
    }

    pub fn list(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    /// Add a toast and schedule its removal
    pub fn push(&self, message: impl Into<String>) -> u32 {
        let id = self.insert(message);
        let this = *self;
        spawn_local(async move {
            sleep(this.timeout).await;
            this.remove(id);
        });
        id
    }

    fn insert(&self, message: impl Into<String>) -> u32 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.toasts.update(|list| list.push(Toast { id, message: message.into() }));
        id
    }

    pub fn remove(&self, id: u32) {
        // The stack may already be disposed when a timer fires
        self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }
}

impl Notifier for Toasts {
    fn error(&self, message: &str) {
        self.push(message);
    }
}
