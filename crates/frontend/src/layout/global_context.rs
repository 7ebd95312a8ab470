use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::layout::tabs::registry::is_registered;
use crate::layout::tabs::tab_label_for_key;

const ACTIVE_PARAM: &str = "active";

/// Key of the tab named by `?active=` in a location search string.
fn active_from_search(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get(ACTIVE_PARAM).filter(|k| !k.is_empty()).cloned()
}

fn search_for_active(key: &str) -> String {
    let params = HashMap::from([(ACTIVE_PARAM.to_string(), key.to_string())]);
    format!("?{}", serde_qs::to_string(&params).unwrap_or_default())
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Tab strip state shared by the sidebar, the tab bar and the pages.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Reopens the tab named in `?active=` and mirrors the active tab into
    /// the query string from then on, so a reload lands on the same page.
    pub fn init_router_integration(&self) {
        match active_from_search(&current_search()) {
            Some(key) if is_registered(&key) => self.open_tab(&key, tab_label_for_key(&key)),
            Some(key) => log::warn!("ignoring unknown tab in url: {key}"),
            None => {}
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(key) = this.active.get() else {
                return;
            };
            let wanted = search_for_active(&key);
            if current_search() == wanted {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&wanted));
            }
        });
    }

    /// Opens `key` (once) and makes it the active tab.
    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: {key}");
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    /// Closing the active tab activates the last remaining one.
    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: {key}");
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    /// Closes every tab, e.g. on logout.
    pub fn close_all(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_param_round_trip() {
        assert_eq!(active_from_search("?active=a003_ticket").as_deref(), Some("a003_ticket"));
        assert_eq!(active_from_search(&search_for_active("sys_users")).as_deref(), Some("sys_users"));
        assert_eq!(active_from_search(""), None);
        assert_eq!(active_from_search("?active="), None);
    }
}
