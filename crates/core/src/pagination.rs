//! Page slicing parameters and the paginated result envelope.
//!
//! Paged repository queries take [`PageParams`] and return a [`Page`]. Page
//! numbers are 1-based. The caller layer is responsible for rejecting or
//! defaulting out-of-range values before constructing [`PageParams`]; see
//! [`PageParams::new`].

use serde::Serialize;

use crate::error::CoreError;

/// Default page number when the caller supplies none.
pub const DEFAULT_PAGE_NUMBER: i64 = 1;

/// Default page size when the caller supplies none.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Validated 1-based pagination parameters.
#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    pub page_number: i64,
    pub page_size: i64,
}

impl PageParams {
    /// Build validated parameters. Both values must be >= 1.
    pub fn new(page_number: i64, page_size: i64) -> Result<Self, CoreError> {
        if page_number < 1 {
            return Err(CoreError::Validation(
                "page_number must be at least 1".into(),
            ));
        }
        if page_size < 1 {
            return Err(CoreError::Validation("page_size must be at least 1".into()));
        }
        Ok(Self {
            page_number,
            page_size,
        })
    }

    /// Number of rows to skip: `(page_number - 1) * page_size`.
    pub fn offset(&self) -> i64 {
        (self.page_number - 1) * self.page_size
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of results plus the metadata needed to render pager controls.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Count of the full filtered set, not just this page.
    pub total_count: i64,
    pub page_number: i64,
    pub page_size: i64,
    /// `ceil(total_count / page_size)`; zero when the set is empty.
    pub total_pages: i64,
}

impl<T> Page<T> {
    /// Assemble a page from fetched items and the unpaged total.
    pub fn new(items: Vec<T>, total_count: i64, params: &PageParams) -> Self {
        let total_pages = if total_count == 0 {
            0
        } else {
            (total_count + params.page_size - 1) / params.page_size
        };
        Self {
            items,
            total_count,
            page_number: params.page_number,
            page_size: params.page_size,
            total_pages,
        }
    }

    /// Convert the item type while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}
