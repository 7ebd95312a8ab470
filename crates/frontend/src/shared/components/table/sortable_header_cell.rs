//! Header cell that toggles the list sort on click and shows the current
//! direction next to its label.
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Price"
//!     sort_field="price"
//!     query=query
//!     on_sort=Callback::new(move |field: String| query.update(|q| q.toggle_sort(&field)))
//!     align="right"
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Field name passed to `ListQuery::toggle_sort`
    #[prop(into)]
    sort_field: String,

    #[prop(into)]
    query: Signal<ListQuery>,

    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// "left" or "right"
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let field = StoredValue::new(sort_field);
    let marker = Memo::new(move |_| {
        field.with_value(|f| query.with(|q| (get_sort_class(q, f), get_sort_indicator(q, f))))
    });
    let header_class = if align == "right" {
        "table__sortable-header table__sortable-header--right"
    } else {
        "table__sortable-header"
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div class=header_class on:click=move |_| on_sort.run(field.get_value())>
                {label}
                <span class=move || marker.get().0>{move || marker.get().1}</span>
            </div>
        </TableHeaderCell>
    }
}
