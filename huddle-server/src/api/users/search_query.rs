use crate::api::pagination::PageQuery;

use serde::Deserialize;

// Flattening PageQuery here trips serde_urlencoded's string-only values, so
// the paging fields are inlined and converted.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl SearchQuery {
    pub fn page_query(&self) -> PageQuery {
        PageQuery {
            page: self.page,
            page_size: self.page_size,
        }
    }
}
