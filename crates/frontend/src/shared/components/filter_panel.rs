//! Collapsible filter block used by every list page. The header row carries
//! the toggle, the active-filter badge, the pagination bar and a reset
//! button; the body holds the page's own inputs and the active filter chips.

use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn FilterPanel(
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Shown as a badge; also gates the reset button
    #[prop(into)]
    active_filters_count: Signal<usize>,

    #[prop(into)]
    pagination_controls: ViewFn,

    #[prop(into)]
    filter_content: ViewFn,

    #[prop(optional, into)]
    filter_tags: Option<ViewFn>,

    #[prop(optional)]
    on_reset: Option<Callback<()>>,
) -> impl IntoView {
    let body_class = move || {
        if is_expanded.get() {
            "filter-panel__collapsible filter-panel__collapsible--expanded"
        } else {
            "filter-panel__collapsible filter-panel__collapsible--collapsed"
        }
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span
                        class="filter-panel__chevron"
                        class:filter-panel__chevron--expanded=move || is_expanded.get()
                    >
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls.run()}
                </div>
                <div class="filter-panel-header__right">
                    {move || on_reset.filter(|_| active_filters_count.get() > 0).map(|reset| view! {
                        <button class="button button--secondary" on:click=move |_| reset.run(())>
                            {icon("x")}
                            " Clear filters"
                        </button>
                    })}
                </div>
            </div>

            <div class=body_class>
                <div class="filter-panel-content">
                    {filter_content.run()}
                    {filter_tags.as_ref().map(|tags| view! {
                        <div class="filter-panel__tags">{tags.run()}</div>
                    })}
                </div>
            </div>
        </div>
    }
}

/// Chip for one active filter; clicking the cross clears that filter only.
#[component]
pub fn FilterTag(#[prop(into)] label: String, on_remove: Callback<()>) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <button
                class="filter-tag__remove"
                title="Remove filter"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </button>
        </div>
    }
}
