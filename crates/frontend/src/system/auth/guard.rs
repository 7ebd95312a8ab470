use contracts::system::auth::{AccessPolicy, PERMISSION_DENIED_MESSAGE};
use leptos::prelude::*;

use super::context::use_auth;

/// Renders `children` only when the signed-in role is allowed by `policy`.
///
/// Access is checked once, when the page mounts.
#[component]
pub fn RequireRole(policy: AccessPolicy, children: Children) -> impl IntoView {
    let auth_state = use_auth();
    let allowed = auth_state.with_untracked(|s| policy.allows(s.user_info.as_ref()));

    if allowed {
        children().into_any()
    } else {
        view! {
            <div class="page">
                <div class="alert alert--error">{PERMISSION_DENIED_MESSAGE}</div>
            </div>
        }
        .into_any()
    }
}
