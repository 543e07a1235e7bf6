//! Page arithmetic and pagination wrappers

use std::ops::Range;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::errors::PaginationError;

/// Page size used when a request does not specify one
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Largest page size a request may ask for
pub const MAX_PAGE_SIZE: u32 = 100;

/// Half-open, zero-indexed range `[start, end)` of one page within a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexRange {
    pub start: u64,
    pub end: u64,
}

impl IndexRange {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Intersect with `[0, total)`. A page entirely past the end collapses to
    /// the empty range `[total, total)`.
    pub fn clamp_to(&self, total: u64) -> Self {
        Self {
            start: self.start.min(total),
            end: self.end.min(total),
        }
    }

    /// Convert to a `usize` range for slicing, saturating on 32-bit targets.
    pub fn to_usize_range(&self) -> Range<usize> {
        let start = usize::try_from(self.start).unwrap_or(usize::MAX);
        let end = usize::try_from(self.end).unwrap_or(usize::MAX);
        start..end
    }
}

impl From<IndexRange> for (u64, u64) {
    fn from(range: IndexRange) -> Self {
        (range.start, range.end)
    }
}

impl From<IndexRange> for Range<u64> {
    fn from(range: IndexRange) -> Self {
        range.start..range.end
    }
}

impl PartialEq<(u64, u64)> for IndexRange {
    fn eq(&self, other: &(u64, u64)) -> bool {
        self.start == other.0 && self.end == other.1
    }
}

/// Compute the index range for a 1-based `page` of `page_size` items.
///
/// Returns `[(page - 1) * page_size, page * page_size)`. Both arguments must
/// be at least 1.
pub fn index_range(page: u64, page_size: u64) -> Result<IndexRange, PaginationError> {
    if page < 1 {
        return Err(PaginationError::InvalidArgument {
            name: "page",
            value: page,
        });
    }
    if page_size < 1 {
        return Err(PaginationError::InvalidArgument {
            name: "page_size",
            value: page_size,
        });
    }

    let end = page
        .checked_mul(page_size)
        .ok_or(PaginationError::Overflow { page, page_size })?;

    Ok(IndexRange::new(end - page_size, end))
}

/// Pagination query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PaginationParams {
    /// Page number, starting at 1. Default: 1
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u32,
    /// Items per page (1-100). Default: 50
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100))]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    pub fn index_range(&self) -> Result<IndexRange, PaginationError> {
        index_range(u64::from(self.page), u64::from(self.limit))
    }
}

/// Paginated response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    /// Items on the current page
    pub items: Vec<T>,
    /// Number of items across all pages
    pub total: u64,
    /// Current page (1-based)
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Number of pages
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        Self {
            items,
            total,
            page,
            limit,
            total_pages: total_pages(total, u64::from(limit)),
        }
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// `ceil(total / limit)`, or 0 when `limit` is 0.
pub fn total_pages(total: u64, limit: u64) -> u32 {
    if limit == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(limit)).unwrap_or(u32::MAX)
}
