//! Catalog API
//!
//! Frontend bindings to the academix REST backend.

mod endpoints;
mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{ItemPage, SubCategory};

pub use http::HttpCatalogApi;

/// Failure of a single backend read
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("no browser window available")]
    NoWindow,
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Zero-based page query sent to the items endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page_number: u32,
    pub page_size: u32,
}

/// Read access to the catalog backend
///
/// Futures are `?Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait CatalogApi {
    /// Fetch sub-category metadata
    async fn sub_category(&self, sub_category_id: &str) -> ApiResult<SubCategory>;

    /// Fetch one page of items of a sub-category
    async fn items(&self, sub_category_id: &str, query: PageQuery) -> ApiResult<ItemPage>;
}
