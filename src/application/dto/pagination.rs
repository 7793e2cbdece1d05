use crate::domain::pagination::PageRequest;

/// One window of a listing plus the totals needed to page through it.
#[derive(Debug, Clone)]
pub struct OffsetPage<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub total_pages: u64,
    pub page: u32,
    pub per_page: u32,
}

impl<T> OffsetPage<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            total_pages: request.total_pages(total),
            page: request.page(),
            per_page: request.per_page(),
        }
    }
}
