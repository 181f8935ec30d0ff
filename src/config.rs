//! Application Configuration
//!
//! Defaults can be overridden by a JSON block embedded in the host page:
//! `<script id="app-config" type="application/json">{"pageSize": 20}</script>`

use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Path prefix of the catalog API on the page origin
    pub api_prefix: String,
    /// Items per page, fixed for the lifetime of the view
    pub page_size: u32,
    /// How long an error toast stays visible
    pub toast_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_prefix: "/core/academix".to_string(),
            page_size: 10,
            toast_timeout_ms: 4000,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: AppConfig = serde_json::from_str(json)?;
        config.page_size = config.page_size.max(1);
        Ok(config)
    }

    /// Read overrides from the host page, falling back to defaults
    pub fn load() -> Self {
        let Some(text) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("[CONFIG] Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}
