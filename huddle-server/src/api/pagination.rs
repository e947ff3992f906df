//! Page-number pagination for list endpoints

use serde::{Deserialize, Serialize};

const DEFAULT_PAGE_SIZE: u32 = 10;
const MAX_PAGE_SIZE: u32 = 1000;

/// `page` / `page_size` query parameters, both optional
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PageQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Client-overridable page size, clamped to 1..=1000 (default 10)
    pub fn page_size(&self) -> u32 {
        self.page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    pub fn limit(&self) -> i64 {
        self.page_size() as i64
    }

    pub fn offset(&self) -> i64 {
        (self.page() as i64 - 1) * self.limit()
    }
}

/// Paginated response envelope with page-number cursors
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub count: i64,
    pub next: Option<u32>,
    pub previous: Option<u32>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(results: Vec<T>, count: i64, query: &PageQuery) -> Self {
        let page = query.page();
        let page_size = query.page_size() as i64;

        let next = if (page as i64) * page_size < count {
            Some(page + 1)
        } else {
            None
        };
        let previous = if page > 1 { Some(page - 1) } else { None };

        Self {
            count,
            next,
            previous,
            results,
        }
    }
}
