//! Authentication state.
//!
//! Components read the session through [`use_auth`], which hands out a
//! read-only signal. Only [`AuthActions`] (login/logout) and the session
//! restore in [`AuthProvider`] write it.

use contracts::shared::error::DashboardError;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// The only writers of [`AuthState`].
#[derive(Clone, Copy)]
pub struct AuthActions {
    set_state: WriteSignal<AuthState>,
}

impl AuthActions {
    /// Logs in and stores the token. When the login response carries no user
    /// profile it is fetched from `/me`.
    pub async fn login(self, email: String, password: String) -> Result<UserInfo, DashboardError> {
        let response = api::login(email, password).await?;
        let user = match response.user {
            Some(user) => user,
            None => api::get_current_user(&response.token).await?,
        };

        storage::save_session(&response.token, &user);
        log::info!("signed in as {} ({})", user.display_name(), user.role);
        self.set_state.set(AuthState {
            access_token: Some(response.token),
            user_info: Some(user.clone()),
        });
        Ok(user)
    }

    pub fn logout(self) {
        storage::clear_session();
        self.set_state.set(AuthState::default());
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore the stored session right away, then confirm it with `/me`.
    if let Some(access_token) = storage::get_access_token() {
        if let Some(cached) = storage::get_cached_user() {
            set_auth_state.set(AuthState {
                access_token: Some(access_token.clone()),
                user_info: Some(cached),
            });
        }
        spawn_local(async move {
            match api::get_current_user(&access_token).await {
                Ok(user_info) => {
                    storage::save_session(&access_token, &user_info);
                    set_auth_state.set(AuthState {
                        access_token: Some(access_token),
                        user_info: Some(user_info),
                    });
                }
                Err(e) => {
                    log::warn!("stored session is no longer valid: {e}");
                    storage::clear_session();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    }

    provide_context(auth_state);
    provide_context(AuthActions {
        set_state: set_auth_state,
    });

    children()
}

/// Read-only view of the session.
pub fn use_auth() -> ReadSignal<AuthState> {
    use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

pub fn use_auth_actions() -> AuthActions {
    use_context::<AuthActions>().expect("AuthProvider not found in component tree")
}
