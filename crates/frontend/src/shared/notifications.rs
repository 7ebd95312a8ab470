//! Toast notifications. Every toast can be dismissed by hand and expires
//! after its level's lifetime.

use contracts::shared::error::DashboardError;
use contracts::shared::notification::Notification;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::shared::icons::icon;

#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    ttl_ms: u32,
}

impl NotificationService {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            ttl_ms,
        }
    }

    pub fn push(&self, notification: Notification) {
        let id = notification.id;
        let lifetime = notification.level.lifetime_ms(self.ttl_ms);
        self.items.update(|items| items.push(notification));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(lifetime).await;
            this.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Notification::success(message));
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(Notification::warning(message));
    }

    /// Logs a failure and shows its user-facing message.
    pub fn report(&self, err: &DashboardError) {
        log::error!("{err}");
        self.push(Notification::from(err));
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not found in context")
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || service.items.get()
                key=|n| n.id
                children=move |notification: Notification| {
                    let id = notification.id;
                    view! {
                        <div class=notification.css_class()>
                            <span class="toast__message">{notification.message.clone()}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| service.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
