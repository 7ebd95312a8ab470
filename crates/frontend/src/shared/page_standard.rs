//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a002_product--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: the id copied from
//! the DOM inspector points at the `domain/a002_product/` directory.

/// List of records: table with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Add / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a002_product--list"));
        assert!(is_valid_page_id("sys_users--system"));
        assert!(!is_valid_page_id("a002_product"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a002_product--dashboard"));
    }
}
