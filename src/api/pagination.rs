//! Page query parsing and pagination response headers

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::repository::PageParams;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 20;
pub const MAX_PER_PAGE: i64 = 100;

pub static X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");

/// Pagination query parameters (1-based)
#[derive(Debug, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Page number (default: 1)
    pub page: Option<i64>,
    /// Items per page (default: 20, max: 100)
    pub per_page: Option<i64>,
}

impl PageQuery {
    /// Resolve defaults and clamp to sane bounds
    pub fn params(&self) -> PageParams {
        PageParams {
            page: self.page.unwrap_or(DEFAULT_PAGE).max(1),
            per_page: self
                .per_page
                .unwrap_or(DEFAULT_PER_PAGE)
                .clamp(1, MAX_PER_PAGE),
        }
    }
}

/// Build the `X-Total-Count` and `Link` response headers for a page result.
///
/// `Link` carries `next`/`prev` where applicable plus `last` and `first`,
/// rebuilt from the request path.
pub fn pagination_headers(path: &str, page: &PageParams, total: i64) -> HeaderMap {
    let last = ((total + page.per_page - 1) / page.per_page).max(1);

    let link = |p: i64, rel: &str| {
        format!(
            "<{}?page={}&per_page={}>; rel=\"{}\"",
            path, p, page.per_page, rel
        )
    };

    let mut links = Vec::new();
    if page.page < last {
        links.push(link(page.page + 1, "next"));
    }
    if page.page > 1 {
        links.push(link(page.page - 1, "prev"));
    }
    links.push(link(last, "last"));
    links.push(link(1, "first"));

    let mut headers = HeaderMap::new();
    headers.insert(
        X_TOTAL_COUNT.clone(),
        HeaderValue::from_str(&total.to_string()).expect("count is a valid header value"),
    );
    if let Ok(value) = HeaderValue::from_str(&links.join(", ")) {
        headers.insert(axum::http::header::LINK, value);
    }
    headers
}
