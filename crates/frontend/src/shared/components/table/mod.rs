//! Table building blocks shared by the list pages.

mod number_format;
mod sortable_header_cell;

pub use number_format::{format_count, format_money};
pub use sortable_header_cell::SortableHeaderCell;
