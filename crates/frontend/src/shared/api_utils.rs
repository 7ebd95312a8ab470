//! API URL helpers.

use crate::shared::config::app_config;

/// Base URL of the REST API: the page's host on the configured port, plus
/// the configured path prefix.
///
/// Returns an empty string when there is no window (tests).
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    let api = &app_config().api;
    format!(
        "{}//{}:{}{}",
        protocol,
        hostname,
        api.port,
        api.prefix.trim_end_matches('/')
    )
}

/// Full API URL for `path` (which starts with `/`).
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `path` followed by a percent-encoded id segment.
pub fn scoped_path(path: &str, id: &str) -> String {
    format!("{}/{}", path.trim_end_matches('/'), urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_path_encodes_id() {
        assert_eq!(
            scoped_path("/category/api/brands/brandByType/", "64f a/b"),
            "/category/api/brands/brandByType/64f%20a%2Fb"
        );
    }
}
