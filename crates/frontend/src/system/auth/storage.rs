//! Session persistence in `localStorage`: the bearer token plus a cached copy
//! of the signed-in user, so menus can be filtered before `/me` answers.

use contracts::system::auth::UserInfo;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "parts_admin_access_token";
const USER_INFO_KEY: &str = "parts_admin_user";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_session(token: &str, user: &UserInfo) {
    let Some(storage) = local_storage() else {
        return;
    };
    let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    match serde_json::to_string(user) {
        Ok(json) => {
            let _ = storage.set_item(USER_INFO_KEY, &json);
        }
        Err(e) => log::warn!("could not cache user profile: {e}"),
    }
}

pub fn get_access_token() -> Option<String> {
    local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Cached profile; unreadable entries are treated as absent.
pub fn get_cached_user() -> Option<UserInfo> {
    let json = local_storage()?.get_item(USER_INFO_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(USER_INFO_KEY);
    }
}
