use chrono::Utc;
use contracts::domain::a005_dealer::{DealerForm, DealerPayload};
use contracts::shared::select_option::SelectOption;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_category::api::category_options;
use crate::domain::a004_employee::api::employee_options;
use crate::domain::a005_dealer::api::create_dealer;
use crate::shared::notifications::{use_notifications, NotificationService};

#[derive(Clone, Copy)]
pub struct DealerDetailsViewModel {
    pub form: RwSignal<DealerForm>,
    pub errors: RwSignal<ValidationErrors>,
    pub pending: RwSignal<Option<DealerPayload>>,
    pub submitting: RwSignal<bool>,
    pub categories: RwSignal<Vec<SelectOption>>,
    pub employees: RwSignal<Vec<SelectOption>>,
    notifications: NotificationService,
}

impl DealerDetailsViewModel {
    pub fn new() -> Self {
        let vm = Self {
            form: RwSignal::new(DealerForm::default()),
            errors: RwSignal::new(ValidationErrors::new()),
            pending: RwSignal::new(None),
            submitting: RwSignal::new(false),
            categories: RwSignal::new(Vec::new()),
            employees: RwSignal::new(Vec::new()),
            notifications: use_notifications(),
        };
        vm.load_reference_data();
        vm
    }

    fn load_reference_data(&self) {
        let (categories, employees, notifications) = (self.categories, self.employees, self.notifications);
        spawn_local(async move {
            match category_options().await {
                Ok(options) => categories.set(options),
                Err(e) => {
                    categories.set(Vec::new());
                    notifications.report(&e);
                }
            }
        });
        spawn_local(async move {
            match employee_options().await {
                Ok(options) => employees.set(options),
                Err(e) => {
                    employees.set(Vec::new());
                    notifications.report(&e);
                }
            }
        });
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    pub fn field(&self, get: fn(&DealerForm) -> &String) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| get(f).clone()))
    }

    pub fn setter(&self, set: fn(&mut DealerForm, String)) -> Callback<String> {
        let form = self.form;
        Callback::new(move |value: String| form.update(|f| set(f, value)))
    }

    pub fn update(&self, f: impl FnOnce(&mut DealerForm)) {
        self.form.update(f);
    }

    pub fn reset(&self) {
        self.form.set(DealerForm::default());
        self.errors.set(ValidationErrors::new());
        self.pending.set(None);
    }

    pub fn request_submit(&self) {
        let today = Utc::now().date_naive();
        match self.form.with_untracked(|f| f.validate(today)) {
            Ok(payload) => {
                self.errors.set(ValidationErrors::new());
                self.pending.set(Some(payload));
            }
            Err(errors) => {
                log::debug!("dealer form rejected: {errors}");
                self.errors.set(errors);
                self.notifications.warning("Please fix the highlighted fields.");
            }
        }
    }

    pub fn cancel(&self) {
        if !self.submitting.get_untracked() {
            self.pending.set(None);
        }
    }

    pub fn confirm(&self, on_created: Callback<()>) {
        if self.submitting.get_untracked() {
            return;
        }
        let Some(payload) = self.pending.get_untracked() else {
            return;
        };
        let this = *self;
        this.submitting.set(true);
        spawn_local(async move {
            match create_dealer(&payload).await {
                Ok(()) => {
                    this.notifications.success("Dealer created successfully");
                    this.reset();
                    on_created.run(());
                }
                Err(e) => {
                    this.pending.set(None);
                    this.notifications.report(&e);
                }
            }
            this.submitting.set(false);
        });
    }
}
