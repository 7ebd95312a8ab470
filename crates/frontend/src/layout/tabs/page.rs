use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::logging::log;
use leptos::prelude::*;

/// Wrapper for one open tab.
///
/// The content is created once, when the tab opens, and stays mounted while
/// other tabs are active; visibility is toggled with `tabs__item--hidden`.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let key_for_active = tab_key.clone();

    let is_active = move || tabs_store.active.get().as_ref() == Some(&key_for_active);

    let key_for_cleanup = tab_key.clone();
    on_cleanup(move || {
        log!("tab '{}' closed", key_for_cleanup);
    });

    let content = render_tab_content(&tab_key, tabs_store);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key
        >
            {content}
        </div>
    }
}
