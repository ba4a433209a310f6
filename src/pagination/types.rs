//! Pagination types and the page-fetching seam

use crate::error::Result;
use crate::filter::{Filter, LIMIT_KEY, OFFSET_KEY};
use async_trait::async_trait;

/// Largest page the server will return per request, regardless of the
/// requested limit
pub const MAX_PAGE_SIZE: u32 = 100;

/// Floor applied when a filter's `limit` value is missing or not numeric
pub const MIN_LIMIT: u32 = 10;

/// One bounded batch of items plus the server's total-count hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items in server order
    pub items: Vec<T>,
    /// Total matching items reported by the server
    pub total_count: u64,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(items: Vec<T>, total_count: u64) -> Self {
        Self { items, total_count }
    }
}

/// Parameters for a single fixed-size page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Starting position of this page
    pub offset: u32,
    /// Page size, always [`MAX_PAGE_SIZE`]
    pub limit: u32,
}

impl PageRequest {
    /// Derive the query parameters for this page from the caller's filter.
    ///
    /// Returns a fresh [`Filter`] with the reserved `limit`/`offset` keys
    /// replaced by this request's values; everything else passes through.
    pub fn params(&self, filter: &Filter) -> Filter {
        let mut params = filter.clone();
        params.set(OFFSET_KEY, self.offset.to_string());
        params.set(LIMIT_KEY, self.limit.to_string());
        params
    }
}

/// The sequence of page requests needed to satisfy a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    base_offset: u32,
    total_limit: u32,
}

impl PagePlan {
    /// Read the requested total and starting position from a filter.
    ///
    /// Values that are missing or not parseable as non-negative integers
    /// are not errors: `limit` falls back to [`MIN_LIMIT`] and `offset`
    /// to 0.
    pub fn from_filter(filter: &Filter) -> Self {
        let total_limit = filter
            .get(LIMIT_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or(MIN_LIMIT);
        let base_offset = filter
            .get(OFFSET_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        Self {
            base_offset,
            total_limit,
        }
    }

    /// Number of full pages the plan will request.
    ///
    /// Integer division: a total below [`MAX_PAGE_SIZE`] plans zero
    /// requests.
    pub fn page_count(&self) -> u32 {
        self.total_limit / MAX_PAGE_SIZE
    }

    /// The page requests, in fetch order
    pub fn requests(&self) -> impl Iterator<Item = PageRequest> + '_ {
        (0..self.page_count()).map(|index| PageRequest {
            offset: self.base_offset + MAX_PAGE_SIZE * index,
            limit: MAX_PAGE_SIZE,
        })
    }
}

/// Seam for fetching one page of a collection endpoint
#[async_trait]
pub trait PageFetcher: Sync {
    /// The item type this fetcher returns
    type Entry: Send;

    /// Perform one HTTP call with the given query parameters
    async fn fetch_page(&self, params: &Filter) -> Result<Page<Self::Entry>>;
}
