//! Slicing a visible set into pages.

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// A 1-based page request; page 0 is read as page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: usize,
    pub per_page: usize,
}

impl PageRequest {
    pub fn new(page: usize, per_page: usize) -> Result<Self, FilterError> {
        if per_page == 0 {
            return Err(FilterError::InvalidPageSize);
        }
        Ok(Self {
            page: page.max(1),
            per_page,
        })
    }
}

#[derive(Debug)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Returns the requested page; pages past the end are empty.
pub fn paginate<T>(items: &[T], request: PageRequest) -> Page<'_, T> {
    let per_page = request.per_page.max(1);
    let page = request.page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page);
    let start = (page - 1).saturating_mul(per_page).min(total_items);
    let end = start.saturating_add(per_page).min(total_items);
    Page {
        items: &items[start..end],
        page,
        per_page,
        total_items,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_size_is_rejected() {
        assert_eq!(PageRequest::new(1, 0), Err(FilterError::InvalidPageSize));
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<u32> = (1..=7).collect();
        let page = paginate(&items, PageRequest::new(3, 3).unwrap());
        assert_eq!(page.items, &[7]);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next());
    }

    #[test]
    fn page_past_end_is_empty() {
        let items: Vec<u32> = (1..=4).collect();
        let page = paginate(&items, PageRequest { page: 9, per_page: 2 });
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 4);
    }

    #[test]
    fn empty_input_has_no_pages() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, PageRequest::new(1, 10).unwrap());
        assert_eq!(page.total_pages, 0);
    }
}
