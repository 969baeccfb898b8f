use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of one page read: 0-based page index, page size and sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort_field: String,
    pub sort_direction: SortDirection,
}

impl PageRequest {
    pub fn new(page: u32, size: u32, sort_field: impl Into<String>, sort_direction: SortDirection) -> Self {
        Self {
            page,
            size,
            sort_field: sort_field.into(),
            sort_direction,
        }
    }
}

/// One page of records plus the authoritative total count.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<T> {
    pub records: Vec<T>,
    pub total_items: u64,
}

/// Display metadata of a paginated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub current_page: u32,
    pub page_size: u32,
    pub sort_field: String,
    pub sort_direction: SortDirection,
    pub total_items: u64,
    pub total_pages: u32,
}

impl PageState {
    /// State before the first fetch: one empty page.
    pub fn initial(page_size: u32, sort_field: impl Into<String>, sort_direction: SortDirection) -> Self {
        Self {
            current_page: 0,
            page_size,
            sort_field: sort_field.into(),
            sort_direction,
            total_items: 0,
            total_pages: 1,
        }
    }

    /// Rebuilds the state for `request` from the server-reported total.
    /// `current_page` is clamped so it is always below `total_pages`.
    pub fn from_response(request: &PageRequest, total_items: u64) -> Self {
        let total_pages = total_pages(total_items, request.size);
        Self {
            current_page: request.page.min(total_pages - 1),
            page_size: request.size,
            sort_field: request.sort_field.clone(),
            sort_direction: request.sort_direction,
            total_items,
            total_pages,
        }
    }

    pub fn request_for(&self, page: u32) -> PageRequest {
        PageRequest::new(page, self.page_size, self.sort_field.clone(), self.sort_direction)
    }

    pub fn contains_page(&self, page: u32) -> bool {
        page < self.total_pages
    }

    pub fn has_next(&self) -> bool {
        self.contains_page(self.current_page.saturating_add(1))
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }
}

/// `ceil(total_items / page_size)`, never less than 1.
pub fn total_pages(total_items: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = total_items.div_ceil(u64::from(page_size)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(12, 5), 3);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn empty_result_still_has_one_page() {
        assert_eq!(total_pages(0, 10), 1);
        let state = PageState::from_response(&PageRequest::new(0, 10, "itemId", SortDirection::Asc), 0);
        assert_eq!(state.total_pages, 1);
        assert!(!state.has_next());
        assert!(!state.has_previous());
    }

    #[test]
    fn current_page_never_exceeds_total() {
        let state = PageState::from_response(&PageRequest::new(2, 10, "itemId", SortDirection::Asc), 5);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.current_page, 0);
        assert!(!state.has_previous());
    }

    #[test]
    fn navigation_bounds() {
        let state = PageState::from_response(&PageRequest::new(1, 10, "orderId", SortDirection::Desc), 23);
        assert!(state.contains_page(2));
        assert!(!state.contains_page(3));
        assert!(state.has_next());
        assert!(state.has_previous());
        assert_eq!(state.request_for(2).page, 2);
        assert_eq!(state.request_for(2).sort_field, "orderId");
    }

    #[test]
    fn direction_wire_form() {
        assert_eq!(SortDirection::Desc.to_string(), "desc");
        assert_eq!(serde_json::to_string(&SortDirection::Asc).unwrap(), "\"asc\"");
    }
}
