use serde::Serialize;
use std::ops::Range;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "page", rename_all = "snake_case")]
pub enum PageControl {
    Previous(usize),
    Page(usize),
    Next(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub total_items: usize,
    pub items_per_page: usize,
    pub current_page: usize,
}

impl Pagination {
    pub fn new(total_items: usize, items_per_page: usize, current_page: usize) -> Self {
        Self {
            total_items,
            items_per_page: items_per_page.max(1),
            current_page: current_page.max(1),
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page)
    }

    /// Clamp a requested page into `1..=total_pages` (1 when there are no pages).
    pub fn clamp(&self, page: usize) -> usize {
        page.clamp(1, self.total_pages().max(1))
    }

    /// Previous, page numbers, Next. Empty when everything fits on one page.
    pub fn controls(&self) -> Vec<PageControl> {
        let total = self.total_pages();
        if total <= 1 {
            return Vec::new();
        }
        let current = self.clamp(self.current_page);
        let mut controls = Vec::with_capacity(total + 2);
        if current > 1 {
            controls.push(PageControl::Previous(current - 1));
        }
        controls.extend((1..=total).map(PageControl::Page));
        if current < total {
            controls.push(PageControl::Next(current + 1));
        }
        controls
    }

    /// Item indices that belong to the current page.
    pub fn page_range(&self) -> Range<usize> {
        let page = self.clamp(self.current_page);
        let start = ((page - 1) * self.items_per_page).min(self.total_items);
        let end = (start + self.items_per_page).min(self.total_items);
        start..end
    }
}
