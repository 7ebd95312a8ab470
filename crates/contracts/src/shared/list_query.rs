use serde::{Deserialize, Serialize};
use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }
}

/// Ephemeral list parameters driven by user interaction. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search_text: String,
    pub sort_field: Option<String>,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_text: String::new(),
            sort_field: None,
            sort_direction: SortDirection::Asc,
            page: 1,
            page_size: if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size },
        }
    }

    pub fn sorted_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_field = Some(field.into());
        self.sort_direction = direction;
        self
    }

    /// Header click: a new field sorts ascending, the current field flips direction.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field.as_deref() == Some(field) {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = Some(field.to_string());
            self.sort_direction = SortDirection::Asc;
        }
    }

    pub fn clear_sort(&mut self) {
        self.sort_field = None;
        self.sort_direction = SortDirection::Asc;
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size };
        self.page = 1;
    }

    pub fn trimmed_search(&self) -> &str {
        self.search_text.trim()
    }

    fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }

    /// `ceil(filtered_count / page_size)`, never less than 1.
    pub fn total_pages(&self, filtered_count: usize) -> usize {
        filtered_count.div_ceil(self.effective_page_size()).max(1)
    }

    /// Keeps `page` within `[1, total_pages]`.
    pub fn clamp_page(&mut self, filtered_count: usize) {
        let total = self.total_pages(filtered_count);
        self.page = self.page.clamp(1, total);
    }

    /// Index range of the current page within a list of `len` rows.
    pub fn page_range(&self, len: usize) -> Range<usize> {
        let size = self.effective_page_size();
        let start = self.page.saturating_sub(1).saturating_mul(size).min(len);
        let end = start.saturating_add(size).min(len);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sort_same_field_twice() {
        let mut q = ListQuery::default();
        q.toggle_sort("name");
        assert_eq!(q.sort_field.as_deref(), Some("name"));
        assert_eq!(q.sort_direction, SortDirection::Asc);

        q.toggle_sort("name");
        assert_eq!(q.sort_field.as_deref(), Some("name"));
        assert_eq!(q.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn test_toggle_sort_other_field_resets_to_asc() {
        let mut q = ListQuery::default().sorted_by("name", SortDirection::Desc);
        q.toggle_sort("code");
        assert_eq!(q.sort_field.as_deref(), Some("code"));
        assert_eq!(q.sort_direction, SortDirection::Asc);
    }

    #[test]
    fn test_total_pages_minimum_one() {
        let q = ListQuery::new(10);
        assert_eq!(q.total_pages(0), 1);
        assert_eq!(q.total_pages(10), 1);
        assert_eq!(q.total_pages(11), 2);
        assert_eq!(q.total_pages(25), 3);
    }

    #[test]
    fn test_clamp_page() {
        let mut q = ListQuery::new(10);
        q.set_page(7);
        q.clamp_page(25);
        assert_eq!(q.page, 3);

        q.clamp_page(0);
        assert_eq!(q.page, 1);

        q.page = 0;
        q.clamp_page(25);
        assert_eq!(q.page, 1);
    }

    #[test]
    fn test_search_and_page_size_reset_page() {
        let mut q = ListQuery::new(10);
        q.set_page(3);
        q.set_search("brake");
        assert_eq!(q.page, 1);

        q.set_page(2);
        q.set_page_size(0);
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_range() {
        let mut q = ListQuery::new(10);
        q.set_page(3);
        assert_eq!(q.page_range(25), 20..25);
        q.set_page(4);
        assert_eq!(q.page_range(25), 25..25);
    }
}
