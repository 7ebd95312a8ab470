use contracts::domain::a004_employee::{EmployeeForm, EmployeePayload};
use contracts::enums::role::Role;
use contracts::shared::select_option::SelectOption;
use contracts::shared::validation::ValidationErrors;
use contracts::system::users::DEFAULT_REGIONS;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_employee::api::create_employee;
use crate::shared::notifications::{use_notifications, NotificationService};

pub fn role_options() -> Vec<SelectOption> {
    Role::employee_roles()
        .into_iter()
        .map(|r| SelectOption::new(r.code(), r.display_name()))
        .collect()
}

pub fn region_options() -> Vec<SelectOption> {
    DEFAULT_REGIONS.iter().map(|r| SelectOption::new(*r, *r)).collect()
}

#[derive(Clone, Copy)]
pub struct EmployeeDetailsViewModel {
    pub form: RwSignal<EmployeeForm>,
    pub errors: RwSignal<ValidationErrors>,
    /// Validated payload waiting for confirmation.
    pub pending: RwSignal<Option<EmployeePayload>>,
    pub submitting: RwSignal<bool>,
    notifications: NotificationService,
}

impl EmployeeDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(EmployeeForm::default()),
            errors: RwSignal::new(ValidationErrors::new()),
            pending: RwSignal::new(None),
            submitting: RwSignal::new(false),
            notifications: use_notifications(),
        }
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    pub fn field(&self, get: fn(&EmployeeForm) -> &String) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| get(f).clone()))
    }

    pub fn setter(&self, set: fn(&mut EmployeeForm, String)) -> Callback<String> {
        let form = self.form;
        Callback::new(move |value: String| form.update(|f| set(f, value)))
    }

    pub fn toggle_region(&self, region: String) {
        self.form.update(|f| f.toggle_region(&region));
    }

    pub fn reset(&self) {
        self.form.set(EmployeeForm::default());
        self.errors.set(ValidationErrors::new());
        self.pending.set(None);
    }

    /// First step: validate and ask for confirmation.
    pub fn request_submit(&self) {
        match self.form.with_untracked(|f| f.validate()) {
            Ok(payload) => {
                self.errors.set(ValidationErrors::new());
                self.pending.set(Some(payload));
            }
            Err(errors) => {
                log::debug!("employee form rejected: {errors}");
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

    /// Second step: post the confirmed payload.
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
            match create_employee(&payload).await {
                Ok(()) => {
                    this.notifications.success("Employee created successfully");
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_choices_exclude_dealers_and_users() {
        let codes: Vec<String> = role_options().into_iter().map(|o| o.id).collect();
        assert!(codes.contains(&"Inventory-Staff".to_string()));
        assert!(!codes.contains(&"Dealer".to_string()));
        assert!(!codes.contains(&"User".to_string()));
        assert_eq!(region_options().len(), DEFAULT_REGIONS.len());
    }
}
