//! Client-side list processing: filter, sort and paginate a fetched
//! collection for one table page.
//!
//! The processor never mutates the input rows. Filtering and sorting work on
//! borrowed rows and only the rows of the requested page are cloned, so
//! calling [`derive`] twice with the same inputs yields the same page.

use super::collation::locale_compare;
use super::list_query::{ListQuery, SortDirection};
use super::lookup::LookupTables;

/// Rows that take part in the free-text search.
pub trait Searchable {
    /// The component-defined set of searchable fields. `None` marks an absent
    /// value, which is treated as an empty string.
    fn search_fields(&self) -> Vec<Option<&str>>;

    /// `needle` must already be trimmed and lowercased.
    fn matches_filter(&self, needle: &str) -> bool {
        self.search_fields()
            .into_iter()
            .any(|value| value.unwrap_or_default().to_lowercase().contains(needle))
    }
}

/// Rows that can be ordered by a named field.
pub trait Sortable {
    /// String projection of `field` used for ordering, resolved through
    /// `lookups` for foreign keys. Returns `None` when `field` is not a
    /// sortable column of this row type.
    fn sort_key(&self, field: &str, lookups: &LookupTables) -> Option<String>;
}

pub trait ListRow: Searchable + Sortable + Clone {}

impl<T: Searchable + Sortable + Clone> ListRow for T {}

/// One rendered page of a list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub page_rows: Vec<T>,
    pub total_pages: usize,
    /// Number of rows that survived filtering.
    pub total_count: usize,
    /// The page actually shown after clamping.
    pub page: usize,
}

pub fn filter_rows<'a, T: Searchable>(rows: &'a [T], search_text: &str) -> Vec<&'a T> {
    let needle = search_text.trim().to_lowercase();
    if needle.is_empty() {
        return rows.iter().collect();
    }
    rows.iter().filter(|row| row.matches_filter(&needle)).collect()
}

/// Stable sort of borrowed rows. An unknown field leaves the order untouched.
pub fn sort_rows<T: Sortable>(
    rows: &mut Vec<&T>,
    field: &str,
    direction: SortDirection,
    lookups: &LookupTables,
) {
    let keys: Option<Vec<String>> = rows.iter().map(|row| row.sort_key(field, lookups)).collect();
    let Some(keys) = keys else {
        return;
    };

    let mut keyed: Vec<(String, &T)> = keys.into_iter().zip(rows.iter().copied()).collect();
    keyed.sort_by(|(a, _), (b, _)| {
        let cmp = locale_compare(a, b);
        if direction.is_ascending() {
            cmp
        } else {
            cmp.reverse()
        }
    });

    *rows = keyed.into_iter().map(|(_, row)| row).collect();
}

fn filtered_sorted<'a, T: ListRow>(
    rows: &'a [T],
    query: &ListQuery,
    lookups: &LookupTables,
) -> Vec<&'a T> {
    let mut filtered = filter_rows(rows, &query.search_text);
    if let Some(field) = query.sort_field.as_deref() {
        sort_rows(&mut filtered, field, query.sort_direction, lookups);
    }
    filtered
}

/// Every filtered row in display order, without pagination.
pub fn derive_all<T: ListRow>(rows: &[T], query: &ListQuery, lookups: &LookupTables) -> Vec<T> {
    filtered_sorted(rows, query, lookups)
        .into_iter()
        .cloned()
        .collect()
}

/// Derives the page of rows to render for `query`.
pub fn derive<T: ListRow>(rows: &[T], query: &ListQuery, lookups: &LookupTables) -> ListPage<T> {
    let filtered = filtered_sorted(rows, query, lookups);
    let total_count = filtered.len();

    let mut effective = query.clone();
    effective.clamp_page(total_count);

    let page_rows = filtered[effective.page_range(total_count)]
        .iter()
        .map(|row| (*row).clone())
        .collect();

    ListPage {
        page_rows,
        total_pages: effective.total_pages(total_count),
        total_count,
        page: effective.page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::lookup::LookupTable;
    use crate::shared::select_option::SelectOption;

    #[derive(Debug, Clone, PartialEq)]
    struct Part {
        name: Option<String>,
        code: String,
        type_id: Option<String>,
    }

    fn part(name: &str, code: &str, type_id: &str) -> Part {
        Part {
            name: Some(name.to_string()),
            code: code.to_string(),
            type_id: Some(type_id.to_string()),
        }
    }

    impl Searchable for Part {
        fn search_fields(&self) -> Vec<Option<&str>> {
            vec![self.name.as_deref(), Some(self.code.as_str())]
        }
    }

    impl Sortable for Part {
        fn sort_key(&self, field: &str, lookups: &LookupTables) -> Option<String> {
            match field {
                "name" => Some(self.name.clone().unwrap_or_default()),
                "code" => Some(self.code.clone()),
                "type" => Some(lookups.resolve("type", self.type_id.as_deref())),
                _ => None,
            }
        }
    }

    fn numbered(n: usize) -> Vec<Part> {
        (1..=n)
            .map(|i| part(&format!("Part {i:02}"), &format!("P{i:02}"), "t1"))
            .collect()
    }

    fn names(rows: &[Part]) -> Vec<String> {
        rows.iter().map(|r| r.name.clone().unwrap_or_default()).collect()
    }

    #[test]
    fn test_third_page_of_twenty_five() {
        let rows = numbered(25);
        let mut query = ListQuery::new(10);
        query.set_page(3);

        let page = derive(&rows, &query, &LookupTables::new());
        assert_eq!(page.page_rows.len(), 5);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_count, 25);
        assert_eq!(page.page, 3);
    }

    #[test]
    fn test_empty_search_keeps_all_rows_in_fetch_order() {
        let rows = vec![part("Oil Filter", "OF", "t1"), part("Air Filter", "AF", "t1")];
        let query = ListQuery::new(50);
        let page = derive(&rows, &query, &LookupTables::new());
        assert_eq!(page.page_rows, rows);

        let mut blank = ListQuery::new(50);
        blank.set_search("   ");
        assert_eq!(derive(&rows, &blank, &LookupTables::new()).page_rows, rows);
    }

    #[test]
    fn test_search_is_case_insensitive_and_trimmed() {
        let rows = vec![part("Brake Pad", "BP-1", "t1"), part("Air Filter", "AF-1", "t1")];
        let mut query = ListQuery::new(10);
        query.set_search("  brake ");

        let page = derive(&rows, &query, &LookupTables::new());
        assert_eq!(names(&page.page_rows), vec!["Brake Pad"]);
        assert_eq!(page.total_count, 1);
    }

    #[test]
    fn test_absent_fields_never_match_and_never_panic() {
        let rows = vec![
            Part { name: None, code: "X1".into(), type_id: None },
            part("Brake Disc", "BD", "t1"),
        ];
        let mut query = ListQuery::new(10);
        query.set_search("brake");
        let page = derive(&rows, &query, &LookupTables::new());
        assert_eq!(page.total_count, 1);

        query.set_search("");
        assert_eq!(derive(&rows, &query, &LookupTables::new()).total_count, 2);
    }

    #[test]
    fn test_no_matches_still_reports_one_page() {
        let rows = numbered(5);
        let mut query = ListQuery::new(10);
        query.set_search("clutch");
        query.page = 4;

        let page = derive(&rows, &query, &LookupTables::new());
        assert!(page.page_rows.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let rows = numbered(25);
        let mut query = ListQuery::new(10);
        query.set_page(9);
        let page = derive(&rows, &query, &LookupTables::new());
        assert_eq!(page.page, 3);
        assert_eq!(page.page_rows.len(), 5);
    }

    #[test]
    fn test_sort_desc_and_stability() {
        let rows = vec![
            part("beta", "1", "t1"),
            part("Alpha", "2", "t1"),
            part("beta", "3", "t1"),
            part("alpha", "4", "t1"),
        ];

        let asc = ListQuery::new(10).sorted_by("name", SortDirection::Asc);
        let sorted = derive(&rows, &asc, &LookupTables::new()).page_rows;
        let codes: Vec<&str> = sorted.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["4", "2", "1", "3"]);

        let desc = ListQuery::new(10).sorted_by("name", SortDirection::Desc);
        let sorted = derive(&rows, &desc, &LookupTables::new()).page_rows;
        let codes: Vec<&str> = sorted.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_sort_through_lookup_table() {
        let rows = vec![
            part("Mirror", "M", "t2"),
            part("Chain", "C", "t3"),
            part("Wiper", "W", "t1"),
        ];
        let lookups = LookupTables::new().with(
            "type",
            LookupTable::from_options(
                "Vehicle Type",
                &[SelectOption::new("t1", "Car"), SelectOption::new("t2", "Bus")],
            ),
        );
        let query = ListQuery::new(10).sorted_by("type", SortDirection::Asc);
        let page = derive(&rows, &query, &lookups);
        // "Bus" < "Car" < "Unknown Vehicle Type"
        assert_eq!(names(&page.page_rows), vec!["Mirror", "Wiper", "Chain"]);
    }

    #[test]
    fn test_unknown_sort_field_keeps_order() {
        let rows = vec![part("b", "1", "t1"), part("a", "2", "t1")];
        let query = ListQuery::new(10).sorted_by("weight", SortDirection::Asc);
        assert_eq!(derive(&rows, &query, &LookupTables::new()).page_rows, rows);
    }

    #[test]
    fn test_input_is_untouched_and_derive_is_idempotent() {
        let rows = vec![part("c", "1", "t1"), part("a", "2", "t1"), part("b", "3", "t1")];
        let snapshot = rows.clone();
        let mut query = ListQuery::new(2).sorted_by("name", SortDirection::Asc);
        query.set_page(2);
        let lookups = LookupTables::new();

        let first = derive(&rows, &query, &lookups);
        let second = derive(&rows, &query, &lookups);
        assert_eq!(first, second);
        assert_eq!(rows, snapshot);

        let resorted = derive(&derive_all(&rows, &query, &lookups), &query, &lookups);
        assert_eq!(resorted.page_rows, first.page_rows);
    }
}
