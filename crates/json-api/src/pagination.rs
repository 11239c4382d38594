//! Page query parameters and response metadata.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use stockroom_app::pagination::{Page, PageRequest};

/// Pagination metadata returned alongside every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct PageMeta {
    /// Current page, starting at 1
    pub page: u32,

    /// Items per page
    pub per_page: u32,

    /// Total number of matching items
    pub total: u64,

    /// Number of the last page
    pub last_page: u64,
}

impl<T> From<&Page<T>> for PageMeta {
    fn from(page: &Page<T>) -> Self {
        Self {
            page: page.page,
            per_page: page.per_page,
            total: page.total,
            last_page: page.last_page(),
        }
    }
}

/// Build a clamped page request from optional query values.
pub(crate) fn page_request(page: Option<u32>, per_page: Option<u32>, default_per_page: u32) -> PageRequest {
    PageRequest::new(page.unwrap_or(1), per_page.unwrap_or(default_per_page))
}
