//! Browser `fetch` implementation of [`CatalogApi`].

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::{endpoints, ApiError, ApiResult, CatalogApi, PageQuery};
use crate::models::{ItemPage, SubCategory};

/// Issues origin-relative GET requests through `window.fetch`
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    origin: String,
    prefix: String,
}

impl HttpCatalogApi {
    pub fn new(origin: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self { origin: origin.into(), prefix: prefix.into() }
    }

    /// Use the origin of the current page
    pub fn for_current_origin(prefix: impl Into<String>) -> ApiResult<Self> {
        let window = web_sys::window().ok_or(ApiError::NoWindow)?;
        let origin = window.location().origin().map_err(js_error)?;
        Ok(Self::new(origin, prefix))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = format!("{}{}", self.origin, path);
        tracing::debug!("[API] GET {}", url);

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::SameOrigin);

        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(js_error)?;

        let window = web_sys::window().ok_or(ApiError::NoWindow)?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;

        // Anything but a plain 200 counts as a failure
        if resp.status() != 200 {
            return Err(ApiError::Status(resp.status()));
        }

        let text = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        let text = text
            .as_string()
            .ok_or_else(|| ApiError::Decode("body is not text".to_string()))?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalogApi {
    async fn sub_category(&self, sub_category_id: &str) -> ApiResult<SubCategory> {
        self.get_json(&endpoints::sub_category_path(&self.prefix, sub_category_id))
            .await
    }

    async fn items(&self, sub_category_id: &str, query: PageQuery) -> ApiResult<ItemPage> {
        self.get_json(&endpoints::items_path(&self.prefix, sub_category_id, query))
            .await
    }
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", err))
}
