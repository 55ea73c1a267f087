use serde::Serialize;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// JSON envelope returned by paged listings.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total: usize, per_page: usize) -> Self {
        let page = if current_page == 0 { 1 } else { current_page };
        let total_pages = if per_page == 0 {
            0
        } else {
            total.div_ceil(per_page)
        };

        Self {
            items,
            page,
            total,
            total_pages,
        }
    }
}
