//! Reactive wrapper around [`SelectionChain`]: performs the option fetches
//! and routes every response back through `SelectionChain::resolve`, which
//! drops responses for an outdated upstream value.

use std::future::Future;
use std::pin::Pin;

use contracts::shared::cascade::{FetchRequest, Resolution, SelectionChain, SlotStatus};
use contracts::shared::error::DashboardError;
use contracts::shared::select_option::SelectOption;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;
use crate::shared::notifications::{use_notifications, NotificationService};

pub type OptionsFuture = Pin<Box<dyn Future<Output = Result<Vec<SelectOption>, DashboardError>>>>;

/// Unscoped fetch for the first slot.
pub type RootFetcher = fn() -> OptionsFuture;

/// Fetch for slot `k`, given the value of slot `k - 1`.
pub type ScopedFetcher = fn(String) -> OptionsFuture;

#[derive(Clone, Copy)]
pub struct CascadeController {
    pub chain: RwSignal<SelectionChain>,
    root: RootFetcher,
    /// `scoped[k - 1]` loads slot `k`.
    scoped: StoredValue<Vec<ScopedFetcher>>,
    notifications: NotificationService,
}

impl CascadeController {
    /// `slots` are `(key, label)` pairs; `scoped` must hold one fetcher per
    /// slot after the first.
    pub fn new(slots: &[(&str, &str)], root: RootFetcher, scoped: Vec<ScopedFetcher>) -> Self {
        debug_assert_eq!(scoped.len() + 1, slots.len());
        let controller = Self {
            chain: RwSignal::new(SelectionChain::new(slots)),
            root,
            scoped: StoredValue::new(scoped),
            notifications: use_notifications(),
        };
        controller.load_root();
        controller
    }

    pub fn load_root(&self) {
        let this = *self;
        spawn_local(async move {
            match (this.root)().await {
                Ok(options) => this.chain.update(|c| c.set_root_options(options)),
                Err(e) => {
                    this.chain.update(|c| c.fail_root());
                    this.notifications.report(&e);
                }
            }
        });
    }

    /// Records the choice for slot `idx`, clears everything below it right
    /// away and starts loading the next slot.
    pub fn select(&self, idx: usize, option_id: Option<String>) {
        let mut request = None;
        self.chain
            .update(|c| request = c.select(idx, option_id.as_deref()));
        if let Some(request) = request {
            self.run(request);
        }
    }

    pub fn retry(&self, idx: usize) {
        if idx == 0 {
            self.load_root();
            return;
        }
        let mut request = None;
        self.chain.update(|c| request = c.retry(idx));
        if let Some(request) = request {
            self.run(request);
        }
    }

    pub fn clear(&self, idx: usize) {
        self.chain.update(|c| c.clear(idx));
    }

    pub fn values(&self) -> Vec<Option<String>> {
        self.chain.with_untracked(|c| c.values())
    }

    fn run(&self, request: FetchRequest) {
        let Some(fetch) = self
            .scoped
            .with_value(|f| request.slot.checked_sub(1).and_then(|i| f.get(i).copied()))
        else {
            log::warn!("cascade: no fetcher for slot {}", request.slot);
            return;
        };
        let this = *self;
        spawn_local(async move {
            let result = fetch(request.scope_key.clone()).await;
            // `None` when the owning view was unmounted meanwhile.
            match this.chain.try_update(|c| c.resolve(&request, result)) {
                Some(Resolution::Failed { error, .. }) => this.notifications.report(&error),
                Some(Resolution::Applied { slot, count }) => {
                    log::debug!("cascade: slot {slot} loaded {count} options")
                }
                Some(Resolution::Stale) | None => {}
            }
        });
    }
}

/// Dropdown bound to one slot of a [`CascadeController`].
#[component]
pub fn CascadeSelect(
    controller: CascadeController,
    idx: usize,
    #[prop(optional)] required: bool,
    /// Inline validation message for this field
    #[prop(optional, into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let chain = controller.chain;
    let label = chain.with_untracked(|c| c.slot(idx).map(|s| s.label.clone()).unwrap_or_default());
    let field_id = chain.with_untracked(|c| c.slot(idx).map(|s| s.key.clone()).unwrap_or_default());

    let status = move || chain.with(|c| c.status(idx));
    let is_disabled = move || !matches!(status(), Some(SlotStatus::Ready));

    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            <label for=field_id.clone()>
                {label}
                {required.then_some(" *")}
            </label>
            <div class="form__select-row">
                <select
                    id=field_id
                    class="form__select"
                    disabled=is_disabled
                    prop:value=move || chain.with(|c| c.value(idx).unwrap_or_default().to_string())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let value = (!value.is_empty()).then_some(value);
                        controller.select(idx, value);
                    }
                >
                    <option value="">{move || chain.with(|c| c.placeholder(idx))}</option>
                    {move || chain.with(|c| {
                        let selected = c.value(idx).map(str::to_string);
                        c.options(idx)
                            .iter()
                            .map(|option| {
                                let is_selected = selected.as_deref() == Some(option.id.as_str());
                                view! {
                                    <option value=option.id.clone() selected=is_selected>
                                        {option.label.clone()}
                                    </option>
                                }
                            })
                            .collect_view()
                    })}
                </select>
                {move || matches!(status(), Some(SlotStatus::Failed)).then(|| view! {
                    <button
                        class="button button--secondary"
                        title="Retry"
                        on:click=move |_| controller.retry(idx)
                    >
                        {icon("refresh")}
                    </button>
                })}
            </div>
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}
