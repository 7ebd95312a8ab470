use super::view_model::{region_options, role_options, EmployeeDetailsViewModel};
use leptos::prelude::*;

use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::form_fields::{MultiCheckField, SelectField, TextField};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DETAIL;

#[component]
#[allow(non_snake_case)]
pub fn EmployeeDetails(on_created: Callback<()>) -> impl IntoView {
    let vm = EmployeeDetailsViewModel::new();

    view! {
        <PageFrame page_id="a004_employee--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title="Add Employee" />

            <div class="page__content details-form">
                <section class="form__section">
                    <h3 class="form__section-title">"Identity"</h3>
                    <div class="form__grid">
                        <TextField
                            id="fullName"
                            label="Full Name"
                            required=true
                            value=vm.field(|f| &f.full_name)
                            on_input=vm.setter(|f, v| f.full_name = v)
                            error=vm.field_error("fullName")
                        />
                        <TextField
                            id="employeeId"
                            label="Employee ID"
                            required=true
                            placeholder="EMP-001"
                            value=vm.field(|f| &f.employee_id)
                            on_input=vm.setter(|f, v| f.employee_id = v)
                            error=vm.field_error("employeeId")
                        />
                        <SelectField
                            id="role"
                            label="Role"
                            required=true
                            placeholder="Select role"
                            value=vm.field(|f| &f.role)
                            options=Signal::derive(role_options)
                            on_change=vm.setter(|f, v| f.role = v)
                            error=vm.field_error("role")
                        />
                    </div>
                </section>

                <section class="form__section">
                    <h3 class="form__section-title">"Account"</h3>
                    <div class="form__grid">
                        <TextField
                            id="username"
                            label="Username"
                            required=true
                            value=vm.field(|f| &f.username)
                            on_input=vm.setter(|f, v| f.username = v)
                            error=vm.field_error("username")
                        />
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
                            id="mobileNumber"
                            label="Mobile Number"
                            required=true
                            input_type="tel"
                            placeholder="10-digit mobile number"
                            value=vm.field(|f| &f.mobile_number)
                            on_input=vm.setter(|f, v| f.mobile_number = v)
                            error=vm.field_error("mobileNumber")
                        />
                        <TextField
                            id="password"
                            label="Password"
                            required=true
                            input_type="password"
                            placeholder="At least 8 characters"
                            value=vm.field(|f| &f.password)
                            on_input=vm.setter(|f, v| f.password = v)
                            error=vm.field_error("password")
                        />
                    </div>
                </section>

                <section class="form__section">
                    <MultiCheckField
                        label="Assigned Regions"
                        options=Signal::derive(region_options)
                        selected=Signal::derive(move || vm.form.with(|f| f.assigned_regions.clone()))
                        on_toggle=Callback::new(move |region| vm.toggle_region(region))
                    />
                </section>

                <div class="details-actions">
                    <button
                        class="button button--primary"
                        disabled=move || vm.submitting.get()
                        on:click=move |_| vm.request_submit()
                    >
                        {icon("user-plus")}
                        " Create Employee"
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
                title="Create this employee?"
                confirm_label="Create"
                busy=vm.submitting
                on_confirm=Callback::new(move |_| vm.confirm(on_created))
                on_cancel=Callback::new(move |_| vm.cancel())
            >
                {move || vm.pending.get().map(|p| view! {
                    <dl class="summary">
                        <dt>"Name"</dt><dd>{p.first_name.clone()}</dd>
                        <dt>"Employee ID"</dt><dd>{p.employee_id.clone()}</dd>
                        <dt>"Role"</dt><dd>{p.role.display_name()}</dd>
                        <dt>"Email"</dt><dd>{p.email.clone()}</dd>
                        <dt>"Regions"</dt>
                        <dd>{if p.assigned_regions.is_empty() { "None".to_string() } else { p.assigned_regions.join(", ") }}</dd>
                    </dl>
                })}
            </ConfirmDialog>
        </PageFrame>
    }
}
