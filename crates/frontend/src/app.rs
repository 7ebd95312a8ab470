use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::config::provide_config;
use crate::shared::notifications::{NotificationService, ToastStack};
use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Shell shown once signed in. The active tab is restored from `?active=`.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

#[component]
fn SessionGate() -> impl IntoView {
    let auth_state = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.access_token.is_some())
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    let config = provide_config();
    provide_context(NotificationService::new(config.notifications.ttl_ms));

    view! {
        <AuthProvider>
            <SessionGate />
        </AuthProvider>
        <ToastStack />
    }
}
