use crate::domain::pagination::Page;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_items: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub page_size: u32,
}

impl<T> PaginatedResult<T> {
    pub fn from_page<S>(page: Page<S>) -> Self
    where
        S: Into<T>,
    {
        let page = page.map(Into::into);
        Self {
            items: page.items,
            total_items: page.total_items,
            total_pages: page.total_pages,
            current_page: page.current_page,
            page_size: page.page_size,
        }
    }
}
