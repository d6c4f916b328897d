//! Shared pagination envelope.
//!
//! Every paginated endpoint clamps `limit` to 1..=100 (default 20) and
//! `page` to >= 1, and responds with `{items, pagination}` metadata.

use serde::{Deserialize, Serialize};

/// Maximum page size accepted from clients.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Default page size when the client does not specify one.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Sanitized pagination inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    pub page: u32,
    pub limit: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl PaginationParams {
    /// Clamp raw query values into range. `None` or zero fall back to the
    /// defaults; `limit` is capped at [`MAX_PAGE_LIMIT`].
    pub fn sanitize(page: Option<u32>, limit: Option<u32>) -> Self {
        let page = page.filter(|p| *p >= 1).unwrap_or(1);
        let limit = limit
            .filter(|l| *l >= 1)
            .unwrap_or(DEFAULT_PAGE_LIMIT)
            .min(MAX_PAGE_LIMIT);
        Self { page, limit }
    }

    /// Zero-based offset of the first item on this page.
    pub fn offset(&self) -> usize {
        ((self.page - 1) * self.limit) as usize
    }
}

/// Pagination metadata returned alongside a page of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: usize,
    pub total_pages: u32,
    pub has_more: bool,
}

/// A page of items plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: PageMeta,
}

impl<T: Clone> Paginated<T> {
    /// Slice one page out of the full item list.
    pub fn from_slice(items: &[T], params: PaginationParams) -> Self {
        let total = items.len();
        let start = params.offset().min(total);
        let end = (start + params.limit as usize).min(total);
        let page_items = items[start..end].to_vec();

        let total_pages = (total as u32).div_ceil(params.limit);

        Self {
            items: page_items,
            pagination: PageMeta {
                page: params.page,
                limit: params.limit,
                total,
                total_pages,
                has_more: params.page < total_pages,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_defaults() {
        let p = PaginationParams::sanitize(None, None);
        assert_eq!(p, PaginationParams { page: 1, limit: 20 });
    }

    #[test]
    fn sanitize_clamps_limit_to_cap() {
        let p = PaginationParams::sanitize(Some(2), Some(500));
        assert_eq!(p.limit, MAX_PAGE_LIMIT);
        assert_eq!(p.page, 2);
    }

    #[test]
    fn sanitize_rejects_zero_values() {
        let p = PaginationParams::sanitize(Some(0), Some(0));
        assert_eq!(p, PaginationParams::default());
    }

    #[test]
    fn from_slice_pages_and_meta() {
        let items: Vec<u32> = (0..45).collect();
        let page = Paginated::from_slice(&items, PaginationParams { page: 2, limit: 20 });

        assert_eq!(page.items.first(), Some(&20));
        assert_eq!(page.items.len(), 20);
        assert_eq!(page.pagination.total, 45);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.pagination.has_more);

        let last = Paginated::from_slice(&items, PaginationParams { page: 3, limit: 20 });
        assert_eq!(last.items.len(), 5);
        assert!(!last.pagination.has_more);
    }

    #[test]
    fn from_slice_past_the_end_is_empty() {
        let items: Vec<u32> = (0..5).collect();
        let page = Paginated::from_slice(&items, PaginationParams { page: 9, limit: 20 });
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total, 5);
        assert!(!page.pagination.has_more);
    }
}
