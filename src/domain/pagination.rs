// src/domain/pagination.rs
//! Offset pagination over declarative query descriptors.
//!
//! A [`PageSource`] knows how to count and slice the result set of a query
//! value; [`paginate`] turns that into a bounded [`Page`]. Pages are 1-based.
//! A page past the end is not an error: it comes back empty while still
//! reporting the real totals.

use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Items per page for every listing in the system.
pub const PAGE_SIZE: u32 = 10;

#[async_trait]
pub trait PageSource<Q: Sync, T: Send>: Send + Sync {
    /// Total number of records matched by `query`, ignoring any paging.
    async fn count(&self, query: &Q) -> DomainResult<u64>;

    /// At most `limit` records starting at `offset`, in the query's order.
    async fn slice(&self, query: &Q, offset: u64, limit: u32) -> DomainResult<Vec<T>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Request `page` with the fixed [`PAGE_SIZE`]. Page `0` is read as page `1`.
    pub fn new(page: u32) -> Self {
        Self::sized(page, PAGE_SIZE)
    }

    pub fn sized(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Lenient parse used by request handlers: anything that is not a positive
    /// integer falls back to the first page.
    pub fn parse(raw: Option<&str>) -> Self {
        let page = raw
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|page| *page > 0)
            .unwrap_or(1);
        Self::new(page)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_items: u64, request: PageRequest) -> Self {
        Self {
            items,
            total_items,
            total_pages: total_pages(total_items, request.page_size()),
            current_page: request.page(),
            page_size: request.page_size(),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            total_pages: self.total_pages,
            current_page: self.current_page,
            page_size: self.page_size,
        }
    }
}

/// `ceil(total / page_size)`, saturating at `u32::MAX`.
pub fn total_pages(total_items: u64, page_size: u32) -> u32 {
    if total_items == 0 || page_size == 0 {
        return 0;
    }
    let pages = (total_items - 1) / u64::from(page_size) + 1;
    u32::try_from(pages).unwrap_or(u32::MAX)
}

pub async fn paginate<Q, T, S>(source: &S, query: &Q, request: PageRequest) -> DomainResult<Page<T>>
where
    S: PageSource<Q, T> + ?Sized,
    Q: Sync,
    T: Send,
{
    let total_items = source.count(query).await?;
    let offset = request.offset();

    if offset >= total_items {
        return Ok(Page::new(Vec::new(), total_items, request));
    }

    let items = source.slice(query, offset, request.page_size()).await?;
    Ok(Page::new(items, total_items, request))
}
