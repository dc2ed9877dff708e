//! Page window calculation
//!
//! Turns the `page`/`limit` pair from a list request and the total number of
//! matching rows into an offset/limit window plus metadata for the response.

use serde::Serialize;

use crate::error::PaginationError;

/// Pagination metadata for a list response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub page: u64,
    pub per_page: u64,
    pub page_count: u64,
    pub total_count: u64,
}

impl PageMeta {
    /// Build the page window
    ///
    /// A `limit` of zero falls back to `default_limit`. A `page` of zero means
    /// the first page; pages past the end are clamped to the last page.
    pub fn new(
        page: i64,
        limit: i64,
        total: u64,
        default_limit: i64,
    ) -> Result<Self, PaginationError> {
        if page < 0 {
            return Err(PaginationError::NegativePage(page));
        }
        if limit < 0 {
            return Err(PaginationError::NegativeLimit(limit));
        }

        let per_page = if limit == 0 {
            if default_limit <= 0 {
                return Err(PaginationError::InvalidDefaultLimit(default_limit));
            }
            default_limit as u64
        } else {
            limit as u64
        };

        let page_count = total.div_ceil(per_page);
        let page = (page as u64).min(page_count).max(1);

        Ok(Self {
            page,
            per_page,
            page_count,
            total_count: total,
        })
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.per_page
    }

    pub fn limit(&self) -> u64 {
        self.per_page
    }
}
