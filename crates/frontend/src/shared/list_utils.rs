//! List page helpers: debounced search box, sort indicators and the
//! derived page memo.

use contracts::shared::list_processor::{derive, ListPage, ListRow};
use contracts::shared::list_query::ListQuery;
use contracts::shared::lookup::LookupTables;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::use_config;

/// Search box that reports its value after the configured debounce delay.
/// Clearing the box reports immediately.
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };
    let debounce_ms = use_config().list.search_debounce_ms;

    let (input_value, set_input_value) = signal(value.get_untracked());
    // Only the latest keystroke's timer may fire.
    let latest = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        latest.update_value(|n| *n += 1);
        let ticket = latest.get_value();
        spawn_local(async move {
            TimeoutFuture::new(debounce_ms).await;
            if latest.get_value() == ticket {
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        latest.update_value(|n| *n += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}

/// " ▲" / " ▼" for the active sort column, " ⇅" for the others.
pub fn get_sort_indicator(query: &ListQuery, field: &str) -> &'static str {
    if query.sort_field.as_deref() == Some(field) {
        if query.sort_direction.is_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(query: &ListQuery, field: &str) -> &'static str {
    if query.sort_field.as_deref() == Some(field) {
        "sort-icon sort-icon--active"
    } else {
        "sort-icon"
    }
}

/// The rendered page of `rows` under `query`, recomputed whenever either
/// (or anything `lookups` reads) changes.
pub fn list_page_memo<T, R, L>(rows: R, query: RwSignal<ListQuery>, lookups: L) -> Memo<ListPage<T>>
where
    T: ListRow + PartialEq + Send + Sync + 'static,
    R: With<Value = Vec<T>> + Send + Sync + 'static,
    L: Fn() -> LookupTables + Send + Sync + 'static,
{
    Memo::new(move |_| {
        let lookups = lookups();
        rows.with(|rows| query.with(|q| derive(rows, q, &lookups)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::SortDirection;

    #[test]
    fn test_sort_indicator_follows_query() {
        let mut query = ListQuery::new(10);
        assert_eq!(get_sort_indicator(&query, "name"), " ⇅");

        query.toggle_sort("name");
        assert_eq!(get_sort_indicator(&query, "name"), " ▲");
        assert_eq!(get_sort_class(&query, "name"), "sort-icon sort-icon--active");
        assert_eq!(get_sort_class(&query, "sku"), "sort-icon");

        query.toggle_sort("name");
        assert_eq!(query.sort_direction, SortDirection::Desc);
        assert_eq!(get_sort_indicator(&query, "name"), " ▼");
    }
}
