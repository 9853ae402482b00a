//! Page requests and the metadata returned alongside each page.

use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
pub const MAX_ITEMS_PER_PAGE: usize = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page must be a positive integer, got {0:?}")]
    InvalidPage(String),

    #[error("limit must be a positive integer, got {0:?}")]
    InvalidLimit(String),

    #[error("limit must not exceed {max}, got {limit}")]
    LimitTooLarge { limit: usize, max: usize },

    #[error("page {page} with limit {limit} is out of range")]
    OutOfRange { page: usize, limit: usize },
}

/// A validated `(page, limit)` pair; `page` is 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    limit: usize,
}

impl PageRequest {
    pub fn new(page: usize, limit: usize) -> Result<Self, PaginationError> {
        if page == 0 {
            return Err(PaginationError::InvalidPage(page.to_string()));
        }
        if limit == 0 {
            return Err(PaginationError::InvalidLimit(limit.to_string()));
        }
        // The store addresses rows with signed 64-bit offsets.
        let in_range = (page - 1)
            .checked_mul(limit)
            .is_some_and(|skip| i64::try_from(skip).is_ok() && i64::try_from(limit).is_ok());
        if !in_range {
            return Err(PaginationError::OutOfRange { page, limit });
        }
        Ok(Self { page, limit })
    }

    /// Parses raw query values. Absent or empty values fall back to page 1 and
    /// `default_limit`; anything else must be a positive integer.
    pub fn parse(
        page: Option<&str>,
        limit: Option<&str>,
        default_limit: usize,
        max_limit: usize,
    ) -> Result<Self, PaginationError> {
        let page = match page.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|p| *p > 0)
                .ok_or_else(|| PaginationError::InvalidPage(raw.to_string()))?,
            None => DEFAULT_PAGE,
        };

        let limit = match limit.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|l| *l > 0)
                .ok_or_else(|| PaginationError::InvalidLimit(raw.to_string()))?,
            None => default_limit,
        };

        if limit > max_limit {
            return Err(PaginationError::LimitTooLarge {
                limit,
                max: max_limit,
            });
        }

        Self::new(page, limit)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of items preceding this page.
    pub fn skip(&self) -> usize {
        (self.page - 1) * self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

/// `ceil(total_count / limit)`; zero when there is nothing to show.
pub fn total_pages(total_count: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    total_count.div_ceil(limit)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub limit: usize,
}

impl PageMeta {
    pub fn new(request: PageRequest, total_count: usize) -> Self {
        Self {
            current_page: request.page(),
            total_pages: total_pages(total_count, request.limit()),
            total_count,
            limit: request.limit(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, request: PageRequest, total_count: usize) -> Self {
        Self {
            data,
            meta: PageMeta::new(request, total_count),
        }
    }
}
