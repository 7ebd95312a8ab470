//! PageFrame: root wrapper for every page rendered inside a tab.
//!
//! Sets `id` (`"{entity}--{category}"`) and `data-page-category` on the
//! root element.

use super::page_standard::*;
use leptos::prelude::*;

/// Adds the BEM modifier class for the category:
/// - `list`   → `page`
/// - `detail` → `page page--detail`
/// - `system` → `page page--system`
#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a002_product--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {page_id}");

    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}

/// Standard page header: title on the left, actions on the right.
#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(optional, into)] subtitle: Option<Signal<String>>,
    /// Header actions (buttons)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {subtitle.map(|s| view! { <span class="page__subtitle">{move || s.get()}</span> })}
            </div>
            <div class="page__header-right">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
