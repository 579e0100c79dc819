//! Shared query parameter types for API handlers.
//!
//! Pagination defaults live here; values below 1 are rejected before they
//! reach the repository layer, which assumes validated parameters.

use serde::Deserialize;
use taskhub_core::pagination::{PageParams, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};

use crate::error::AppResult;

/// Generic pagination parameters (`?page_number=&page_size=`).
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

impl PageQuery {
    /// Apply defaults (page 1, size 10) and validate. Non-positive values
    /// are a 400 for the caller.
    pub fn into_params(self) -> AppResult<PageParams> {
        let params = PageParams::new(
            self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )?;
        Ok(params)
    }
}

/// Query parameters for paginated list endpoints over soft-deletable
/// entities. `include_deleted` defaults to false: the active-only predicate
/// is applied unless the caller opts out.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub include_deleted: bool,
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

impl ListParams {
    /// Extract the validated pagination portion.
    pub fn page(&self) -> AppResult<PageParams> {
        let params = PageParams::new(
            self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )?;
        Ok(params)
    }
}
