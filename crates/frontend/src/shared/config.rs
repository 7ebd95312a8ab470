//! Dashboard configuration for the browser.
//!
//! An optional override document may be embedded in `index.html`:
//!
//! ```html
//! <script type="application/toml" id="dashboard-config">
//! [api]
//! port = 8080
//! ...
//! </script>
//! ```
//!
//! Anything missing or invalid falls back to the built-in defaults.

use contracts::shared::config::{load_config, DashboardConfig};
use leptos::prelude::*;
use once_cell::sync::OnceCell;

const CONFIG_ELEMENT_ID: &str = "dashboard-config";

static CONFIG: OnceCell<DashboardConfig> = OnceCell::new();

fn read_override() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

/// Loads the configuration once and provides it through context.
pub fn provide_config() -> DashboardConfig {
    let config = app_config().clone();
    provide_context(config.clone());
    config
}

/// Process-wide configuration, usable outside the reactive tree (e.g. in
/// spawned fetches).
pub fn app_config() -> &'static DashboardConfig {
    CONFIG.get_or_init(|| load_config(read_override().as_deref()))
}

pub fn use_config() -> DashboardConfig {
    use_context::<DashboardConfig>().unwrap_or_else(|| app_config().clone())
}
