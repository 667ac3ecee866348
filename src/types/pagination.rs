//! Pagination types for list endpoints.

use serde::Deserialize;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Pagination parameters (DRY - reusable across all list endpoints).
///
/// List query structs carry `page`/`limit` directly and convert into this
/// type; `serde(flatten)` breaks numeric defaults under `serde_urlencoded`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

/// Default page number for query deserialization
pub fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

/// Default page size for query deserialization
pub fn default_limit() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    /// Offset of the first returned item
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) * self.limit()) as usize
    }

    /// Page size capped at the maximum
    pub fn limit(&self) -> u64 {
        self.limit.min(MAX_PAGE_SIZE)
    }

    /// The window of `items` selected by this page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = (start + self.limit() as usize).min(items.len());
        &items[start..end]
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}
