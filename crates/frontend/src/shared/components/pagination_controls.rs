use crate::shared::icons::icon;
use leptos::prelude::*;

fn summary(page: usize, total_pages: usize, total_count: usize) -> String {
    let noun = if total_count == 1 { "item" } else { "items" };
    format!("Page {page} of {} ({total_count} {noun})", total_pages.max(1))
}

/// Page a navigation button leads to, or `None` when it would go nowhere.
fn target_page(step: &str, page: usize, total_pages: usize) -> Option<usize> {
    let last = total_pages.max(1);
    let target = match step {
        "first" => 1,
        "prev" => page.saturating_sub(1).max(1),
        "next" => (page + 1).min(last),
        _ => last,
    };
    (target != page).then_some(target)
}

/// Pagination bar: first, previous, a summary, next, last and a page size
/// selector. Pages are 1-based.
#[component]
pub fn PaginationControls(
    /// Already clamped by the list processor
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    /// Rows left after filtering
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    page_size_options: Vec<usize>,
) -> impl IntoView {
    let nav = move |step: &'static str, icon_name: &'static str, title: &'static str| {
        let target = move || target_page(step, current_page.get(), total_pages.get());
        view! {
            <button
                class="pagination-btn"
                title=title
                disabled=move || target().is_none()
                on:click=move |_| {
                    if let Some(page) = target() {
                        on_page_change.run(page);
                    }
                }
            >
                {icon(icon_name)}
            </button>
        }
    };

    view! {
        <div class="pagination-controls">
            {nav("first", "chevrons-left", "First page")}
            {nav("prev", "chevron-left", "Previous page")}
            <span class="pagination-info">
                {move || summary(current_page.get(), total_pages.get(), total_count.get())}
            </span>
            {nav("next", "chevron-right", "Next page")}
            {nav("last", "chevrons-right", "Last page")}
            <select
                class="page-size-select"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    // 0 makes ListQuery fall back to its default page size
                    on_page_size_change.run(event_target_value(&ev).parse().unwrap_or(0));
                }
            >
                {page_size_options.into_iter().map(|size| view! {
                    <option value=size.to_string() selected=move || page_size.get() == size>
                        {format!("{size} / page")}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_text() {
        assert_eq!(summary(3, 3, 25), "Page 3 of 3 (25 items)");
        assert_eq!(summary(1, 0, 0), "Page 1 of 1 (0 items)");
        assert_eq!(summary(1, 1, 1), "Page 1 of 1 (1 item)");
    }

    #[test]
    fn test_navigation_targets() {
        assert_eq!(target_page("first", 1, 3), None);
        assert_eq!(target_page("prev", 1, 3), None);
        assert_eq!(target_page("next", 1, 3), Some(2));
        assert_eq!(target_page("last", 1, 3), Some(3));
        assert_eq!(target_page("next", 3, 3), None);
        assert_eq!(target_page("first", 3, 3), Some(1));
        assert_eq!(target_page("next", 1, 0), None);
    }
}
