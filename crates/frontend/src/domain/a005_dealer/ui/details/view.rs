use super::view_model::DealerDetailsViewModel;
use contracts::domain::a005_dealer::form::SLA_TYPES;
use contracts::shared::select_option::SelectOption;
use leptos::prelude::*;

use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::form_fields::{CheckboxField, MultiCheckField, SelectField, TextField};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DETAIL;

fn sla_options() -> Vec<SelectOption> {
    SLA_TYPES.iter().map(|s| SelectOption::new(*s, *s)).collect()
}

#[component]
#[allow(non_snake_case)]
pub fn DealerDetails(on_created: Callback<()>) -> impl IntoView {
    let vm = DealerDetailsViewModel::new();

    view! {
        <PageFrame page_id="a005_dealer--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title="Add Dealer" />

            <div class="page__content details-form">
                <section class="form__section">
                    <h3 class="form__section-title">"Business"</h3>
                    <div class="form__grid">
                        <TextField
                            id="legal_name"
                            label="Legal Name"
                            required=true
                            value=vm.field(|f| &f.legal_name)
                            on_input=vm.setter(|f, v| f.legal_name = v)
                            error=vm.field_error("legal_name")
                        />
                        <TextField
                            id="trade_name"
                            label="Trade Name"
                            required=true
                            value=vm.field(|f| &f.trade_name)
                            on_input=vm.setter(|f, v| f.trade_name = v)
                            error=vm.field_error("trade_name")
                        />
                        <TextField
                            id="GSTIN"
                            label="GSTIN"
                            required=true
                            placeholder="29ABCDE1234F1Z5"
                            value=vm.field(|f| &f.gstin)
                            on_input=vm.setter(|f, v| f.gstin = v)
                            error=vm.field_error("GSTIN")
                        />
                        <TextField
                            id="Pan"
                            label="PAN"
                            required=true
                            placeholder="ABCDE1234F"
                            value=vm.field(|f| &f.pan)
                            on_input=vm.setter(|f, v| f.pan = v)
                            error=vm.field_error("Pan")
                        />
                    </div>
                </section>

                <section class="form__section">
                    <h3 class="form__section-title">"Login"</h3>
                    <div class="form__grid">
                        <TextField
                            id="email"
                            label="Email"
                            required=true
                            input_type="email"
                            value=vm.field(|f| &f.email)
                            on_input=vm.setter(|f, v| f.email = v)
                            error=vm.field_error("email")
                        />
                        <TextField
                            id="phone_Number"
                            label="Phone Number"
                            required=true
                            input_type="tel"
                            value=vm.field(|f| &f.phone_number)
                            on_input=vm.setter(|f, v| f.phone_number = v)
                            error=vm.field_error("phone_Number")
                        />
                        <TextField
                            id="password"
                            label="Password"
                            input_type="password"
                            value=vm.field(|f| &f.password)
                            on_input=vm.setter(|f, v| f.password = v)
                        />
                    </div>
                </section>

                <section class="form__section">
                    <h3 class="form__section-title">"Address"</h3>
                    <div class="form__grid">
                        <TextField
                            id="Address.street"
                            label="Street"
                            required=true
                            value=vm.field(|f| &f.address.street)
                            on_input=vm.setter(|f, v| f.address.street = v)
                            error=vm.field_error("Address.street")
                        />
                        <TextField
                            id="Address.city"
                            label="City"
                            required=true
                            value=vm.field(|f| &f.address.city)
                            on_input=vm.setter(|f, v| f.address.city = v)
                            error=vm.field_error("Address.city")
                        />
                        <TextField
                            id="Address.state"
                            label="State"
                            required=true
                            value=vm.field(|f| &f.address.state)
                            on_input=vm.setter(|f, v| f.address.state = v)
                            error=vm.field_error("Address.state")
                        />
                        <TextField
                            id="Address.pincode"
                            label="Pincode"
                            required=true
                            value=vm.field(|f| &f.address.pincode)
                            on_input=vm.setter(|f, v| f.address.pincode = v)
                            error=vm.field_error("Address.pincode")
                        />
                    </div>
                </section>

                <section class="form__section">
                    <h3 class="form__section-title">"Contact Person"</h3>
                    <div class="form__grid">
                        <TextField
                            id="contact_person.name"
                            label="Name"
                            required=true
                            value=vm.field(|f| &f.contact_person.name)
                            on_input=vm.setter(|f, v| f.contact_person.name = v)
                            error=vm.field_error("contact_person.name")
                        />
                        <TextField
                            id="contact_person.email"
                            label="Email"
                            input_type="email"
                            value=vm.field(|f| &f.contact_person.email)
                            on_input=vm.setter(|f, v| f.contact_person.email = v)
                            error=vm.field_error("contact_person.email")
                        />
                        <TextField
                            id="contact_person.phone_number"
                            label="Phone"
                            input_type="tel"
                            value=vm.field(|f| &f.contact_person.phone_number)
                            on_input=vm.setter(|f, v| f.contact_person.phone_number = v)
                            error=vm.field_error("contact_person.phone_number")
                        />
                    </div>
                </section>

                <section class="form__section">
                    <h3 class="form__section-title">"Commercial Terms"</h3>
                    <div class="form__grid">
                        <TextField
                            id="default_margin"
                            label="Default Margin (%)"
                            required=true
                            input_type="number"
                            value=vm.field(|f| &f.default_margin)
                            on_input=vm.setter(|f, v| f.default_margin = v)
                            error=vm.field_error("default_margin")
                        />
                        <SelectField
                            id="SLA_type"
                            label="SLA Type"
                            value=vm.field(|f| &f.sla_type)
                            options=Signal::derive(sla_options)
                            on_change=vm.setter(|f, v| f.sla_type = v)
                        />
                        <CheckboxField
                            id="upload_access_enabled"
                            label="Upload access enabled"
                            checked=Signal::derive(move || vm.form.with(|f| f.upload_access_enabled))
                            on_toggle=Callback::new(move |v| vm.update(|f| f.upload_access_enabled = v))
                        />
                    </div>
                    <MultiCheckField
                        label="Categories Allowed"
                        required=true
                        options=vm.categories
                        selected=Signal::derive(move || vm.form.with(|f| f.categories_allowed.clone()))
                        on_toggle=Callback::new(move |id: String| vm.update(|f| f.toggle_category(&id)))
                        error=vm.field_error("categories_allowed")
                    />
                    <MultiCheckField
                        label="Assigned Employees"
                        options=vm.employees
                        selected=Signal::derive(move || vm.form.with(|f| f.assigned_employees.clone()))
                        on_toggle=Callback::new(move |id: String| vm.update(|f| f.toggle_employee(&id)))
                    />
                    <TextField
                        id="remarks"
                        label="Remarks"
                        rows=3
                        value=vm.field(|f| &f.remarks)
                        on_input=vm.setter(|f, v| f.remarks = v)
                    />
                </section>

                <div class="details-actions">
                    <button
                        class="button button--primary"
                        disabled=move || vm.submitting.get()
                        on:click=move |_| vm.request_submit()
                    >
                        {icon("store")}
                        " Create Dealer"
                    </button>
                    <button
                        class="button button--secondary"
                        disabled=move || vm.submitting.get()
                        on:click=move |_| vm.reset()
                    >
                        {icon("x")}
                        " Clear"
                    </button>
                </div>
            </div>

            <ConfirmDialog
                open=Signal::derive(move || vm.pending.with(Option::is_some))
                title="Create this dealer?"
                confirm_label="Create"
                busy=vm.submitting
                on_confirm=Callback::new(move |_| vm.confirm(on_created))
                on_cancel=Callback::new(move |_| vm.cancel())
            >
                {move || vm.pending.get().map(|p| view! {
                    <dl class="summary">
                        <dt>"Legal Name"</dt><dd>{p.legal_name.clone()}</dd>
                        <dt>"GSTIN"</dt><dd>{p.gstin.clone()}</dd>
                        <dt>"City"</dt><dd>{p.address.city.clone()}</dd>
                        <dt>"Margin"</dt><dd>{format!("{}%", p.default_margin)}</dd>
                        <dt>"Categories"</dt><dd>{p.categories_allowed.len()}</dd>
                        <dt>"Onboarding"</dt><dd>{p.onboarding_date.format("%d %b %Y").to_string()}</dd>
                    </dl>
                })}
            </ConfirmDialog>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sla_choices() {
        let ids: Vec<String> = sla_options().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, ["Standard", "Priority", "Express"]);
    }
}
