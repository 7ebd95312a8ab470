use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Port of the REST API on the same host as the dashboard.
    pub port: u16,
    /// Path prepended to every endpoint (e.g. `/gateway`).
    #[serde(default)]
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    pub search_debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationConfig {
    pub ttl_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000
prefix = ""

[list]
default_page_size = 10
page_size_options = [10, 25, 50, 100]
search_debounce_ms = 300

[notifications]
ttl_ms = 4000
"#;

static DEFAULT: Lazy<DashboardConfig> = Lazy::new(|| {
    toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("embedded config is invalid: {e}");
        DashboardConfig::fallback()
    })
});

impl DashboardConfig {
    fn fallback() -> Self {
        Self {
            api: ApiConfig {
                port: 3000,
                prefix: String::new(),
            },
            list: ListConfig {
                default_page_size: 10,
                page_size_options: vec![10, 25, 50, 100],
                search_debounce_ms: 300,
            },
            notifications: NotificationConfig { ttl_ms: 4000 },
        }
    }

    /// Page size to use, ignoring a configured 0.
    pub fn page_size(&self) -> usize {
        if self.list.default_page_size == 0 {
            crate::shared::list_query::DEFAULT_PAGE_SIZE
        } else {
            self.list.default_page_size
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DEFAULT.clone()
    }
}

/// Parse a TOML configuration document.
pub fn parse_config(contents: &str) -> anyhow::Result<DashboardConfig> {
    let config: DashboardConfig = toml::from_str(contents)?;
    if config.list.page_size_options.is_empty() {
        anyhow::bail!("list.page_size_options must not be empty");
    }
    Ok(config)
}

/// Load configuration
///
/// Order:
/// 1. The override document, when present and valid
/// 2. Falls back to the embedded default config
pub fn load_config(override_doc: Option<&str>) -> DashboardConfig {
    if let Some(contents) = override_doc {
        match parse_config(contents) {
            Ok(config) => {
                log::info!("Loaded dashboard config override");
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid dashboard config: {e}"),
        }
    }
    log::info!("Using default embedded configuration");
    DashboardConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.list.default_page_size, 10);
        assert_eq!(config.list.search_debounce_ms, 300);
        assert_eq!(config, DashboardConfig::fallback());
    }

    #[test]
    fn test_override_and_fallback() {
        let custom = r#"
[api]
port = 8080
prefix = "/gateway"

[list]
default_page_size = 25
page_size_options = [25, 50]
search_debounce_ms = 150

[notifications]
ttl_ms = 2000
"#;
        let config = load_config(Some(custom));
        assert_eq!(config.api.prefix, "/gateway");
        assert_eq!(config.page_size(), 25);

        let broken = load_config(Some("[api]\nport = \"x\""));
        assert_eq!(broken, DashboardConfig::default());
        assert_eq!(load_config(None).notifications.ttl_ms, 4000);
    }

    #[test]
    fn test_empty_page_size_options_rejected() {
        let doc = DEFAULT_CONFIG.replace("[10, 25, 50, 100]", "[]");
        assert!(parse_config(&doc).is_err());
    }
}
