//! Response envelope and pagination shared by all handlers

use axum::Json;
use serde::Serialize;

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Successful response body: `{"error": null, "data": ...}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub error: Option<String>,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap `data` in a success envelope
    pub fn ok(data: T) -> Json<Self> {
        Json(Self { error: None, data })
    }
}

impl ApiResponse<()> {
    /// Success envelope with `data: null`
    pub fn empty() -> Json<Self> {
        Json(Self {
            error: None,
            data: (),
        })
    }
}

/// One page of results with the unpaginated total
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub total: i64,
}

/// Resolve `limit`/`offset` query parameters into `(offset, limit)`
pub fn page_window(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    let limit = limit
        .filter(|l| *l > 0)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .min(MAX_PAGE_SIZE);
    let offset = offset.unwrap_or(0).max(0);
    (offset, limit)
}
