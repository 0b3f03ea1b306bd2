//! Page number and page size normalization for feedback listings.
//!
//! Every function here is total: out-of-range input is clamped into a valid
//! page instead of being rejected.

use typed_builder::TypedBuilder;

pub const MIN_PAGE_SIZE: i64 = 5;
pub const MAX_PAGE_SIZE: i64 = 20;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const DEFAULT_PAGE: i64 = 1;

pub fn clamp_page_size(requested: i64) -> i64 {
    requested.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE)
}

/// Number of pages needed for `total_count` documents. `page_size` must be positive.
pub fn total_pages(total_count: u64, page_size: i64) -> i64 {
    let page_size = page_size.max(1) as u64;
    i64::try_from(total_count.div_ceil(page_size)).unwrap_or(i64::MAX)
}

pub fn normalize_page(requested: i64, total_pages: i64) -> i64 {
    if total_pages <= 0 {
        return 1;
    }
    requested.clamp(1, total_pages)
}

pub fn is_first_page(page: i64, total_pages: i64) -> bool {
    page == 1 || total_pages <= 1
}

pub fn is_last_page(page: i64, total_pages: i64) -> bool {
    page >= total_pages
}

/// Skip/limit pair selecting one page of a sorted result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    skip: u64,
    limit: u64,
}

impl PageWindow {
    /// `page` is 1-based and already normalized.
    pub fn for_page(page: i64, page_size: i64) -> Self {
        let page_size = page_size.max(0) as u64;
        let preceding = (page.max(1) - 1) as u64;
        Self {
            skip: preceding.saturating_mul(page_size),
            limit: page_size,
        }
    }

    pub fn skip(&self) -> u64 {
        self.skip
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

/// Raw listing parameters as the client sent them.
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct PageQuery {
    #[builder(default = DEFAULT_PAGE)]
    page: i64,
    #[builder(default = DEFAULT_PAGE_SIZE)]
    page_size: i64,
    #[builder(default)]
    customer: Option<String>,
    #[builder(default)]
    rating: Option<i32>,
    #[builder(default)]
    product: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn customer(&self) -> Option<&str> {
        self.customer.as_deref()
    }

    pub fn rating(&self) -> Option<i32> {
        self.rating
    }

    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }
}
