//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::notify::Toasts;

/// App-wide values provided via context
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    /// Error toast stack
    pub toasts: Toasts,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let toasts = Toasts::new(Duration::from_millis(u64::from(config.toast_timeout_ms)));
        Self { config: Arc::new(config), toasts }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
