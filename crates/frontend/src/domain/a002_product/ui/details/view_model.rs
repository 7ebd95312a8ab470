use contracts::domain::a002_product::ProductForm;
use contracts::shared::select_option::SelectOption;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_category::api::category_cascade;
use crate::domain::a002_product::api::create_product;
use crate::domain::a005_dealer::api::dealer_options;
use crate::domain::a006_vehicle_catalog::api::{fetch_year_ranges, vehicle_cascade};
use crate::shared::cascade::CascadeController;
use crate::shared::notifications::{use_notifications, NotificationService};
use crate::system::auth::context::{use_auth, AuthState};

/// (value sent to the API, label)
pub const PRODUCT_TYPES: [(&str, &str); 3] = [("OE", "OE"), ("OEM", "OEM"), ("AfterMarket", "Aftermarket")];
pub const RETURN_POLICIES: [(&str, &str); 3] = [("7 days", "7 days"), ("15 days", "15 days"), ("30 days", "30 days")];

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub errors: RwSignal<ValidationErrors>,
    /// Vehicle Type → Brand → Model → Variant
    pub vehicle: CascadeController,
    /// Category → Sub-category
    pub category: CascadeController,
    pub year_ranges: RwSignal<Vec<SelectOption>>,
    pub dealers: RwSignal<Vec<SelectOption>>,
    pub submitting: RwSignal<bool>,
    auth: ReadSignal<AuthState>,
    notifications: NotificationService,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        let vm = Self {
            form: RwSignal::new(ProductForm::default()),
            errors: RwSignal::new(ValidationErrors::new()),
            vehicle: vehicle_cascade(),
            category: category_cascade(),
            year_ranges: RwSignal::new(Vec::new()),
            dealers: RwSignal::new(Vec::new()),
            submitting: RwSignal::new(false),
            auth: use_auth(),
            notifications: use_notifications(),
        };
        vm.load_reference_data();
        vm
    }

    /// Year ranges and dealers load concurrently, each on its own.
    fn load_reference_data(&self) {
        let (year_ranges, dealers, notifications) = (self.year_ranges, self.dealers, self.notifications);
        spawn_local(async move {
            match fetch_year_ranges().await {
                Ok(options) => year_ranges.set(options),
                Err(e) => {
                    year_ranges.set(Vec::new());
                    notifications.report(&e);
                }
            }
        });
        spawn_local(async move {
            match dealer_options().await {
                Ok(options) => dealers.set(options),
                Err(e) => {
                    dealers.set(Vec::new());
                    notifications.report(&e);
                }
            }
        });
    }

    pub fn field_error(&self, field: impl Into<String>) -> Signal<Option<String>> {
        let errors = self.errors;
        let field = field.into();
        Signal::derive(move || errors.with(|e| e.get(&field).map(str::to_string)))
    }

    pub fn field(&self, get: fn(&ProductForm) -> &String) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| get(f).clone()))
    }

    pub fn setter(&self, set: fn(&mut ProductForm, String)) -> Callback<String> {
        let form = self.form;
        Callback::new(move |value: String| form.update(|f| set(f, value)))
    }

    pub fn update(&self, f: impl FnOnce(&mut ProductForm)) {
        self.form.update(f);
    }

    pub fn reset(&self) {
        self.form.set(ProductForm::default());
        self.errors.set(ValidationErrors::new());
        self.vehicle.clear(0);
        self.category.clear(0);
    }

    /// Validates, posts and, on success, resets the form and calls `on_created`.
    pub fn submit(&self, on_created: Callback<()>) {
        if self.submitting.get_untracked() {
            return;
        }
        let vehicle_values = self.vehicle.values();
        let category_values = self.category.values();
        self.form.update(|f| {
            f.apply_vehicle_chain(&vehicle_values);
            f.apply_category_chain(&category_values);
        });

        let Some(created_by) = self.auth.with_untracked(|s| s.user_info.as_ref().map(|u| u.id.clone()))
        else {
            self.notifications.warning("Your session has expired. Please sign in again.");
            return;
        };

        let payload = match self.form.with_untracked(|f| f.validate(&created_by)) {
            Ok(payload) => payload,
            Err(errors) => {
                log::debug!("product form rejected: {errors}");
                self.errors.set(errors);
                self.notifications.warning("Please fix the highlighted fields.");
                return;
            }
        };
        self.errors.set(ValidationErrors::new());

        let this = *self;
        this.submitting.set(true);
        spawn_local(async move {
            match create_product(&payload).await {
                Ok(()) => {
                    this.notifications.success("Product added successfully");
                    this.reset();
                    on_created.run(());
                }
                Err(e) => this.notifications.report(&e),
            }
            this.submitting.set(false);
        });
    }
}
