use super::view_model::{ProductDetailsViewModel, PRODUCT_TYPES, RETURN_POLICIES};
use contracts::domain::a002_product::DealerAssignmentForm;
use contracts::shared::select_option::SelectOption;
use leptos::prelude::*;

use crate::shared::cascade::CascadeSelect;
use crate::shared::components::form_fields::{CheckboxField, SelectField, TextField};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::shared::page_standard::PAGE_CAT_DETAIL;

fn static_options(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
    pairs.iter().map(|(value, label)| SelectOption::new(*value, *label)).collect()
}

#[component]
pub fn ProductDetails(on_created: Callback<()>) -> impl IntoView {
    let vm = ProductDetailsViewModel::new();
    let assignment_count = Memo::new(move |_| vm.form.with(|f| f.dealer_assignments.len()));

    view! {
        <PageFrame page_id="a002_product--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title="Add Product" />

            <div class="page__content details-form">
                <section class="form__section">
                    <h3 class="form__section-title">"Core Product Identity"</h3>
                    <div class="form__grid">
                        <TextField
                            id="manufacturer_part_name"
                            label="Manufacturer Part Number"
                            value=vm.field(|f| &f.manufacturer_part_name)
                            on_input=vm.setter(|f, v| f.manufacturer_part_name = v)
                        />
                        <TextField
                            id="product_name"
                            label="Product Name"
                            required=true
                            value=vm.field(|f| &f.product_name)
                            on_input=vm.setter(|f, v| f.product_name = v)
                            error=vm.field_error("product_name")
                        />
                        <TextField
                            id="hsn_code"
                            label="HSN Code"
                            input_type="number"
                            value=vm.field(|f| &f.hsn_code)
                            on_input=vm.setter(|f, v| f.hsn_code = v)
                            error=vm.field_error("hsn_code")
                        />
                        <CascadeSelect controller=vm.category idx=0 required=true error=vm.field_error("category") />
                        <CascadeSelect controller=vm.category idx=1 required=true error=vm.field_error("sub_category") />
                        <SelectField
                            id="product_type"
                            label="Product Type"
                            required=true
                            value=vm.field(|f| &f.product_type)
                            options=Signal::derive(|| static_options(&PRODUCT_TYPES))
                            on_change=vm.setter(|f, v| f.product_type = v)
                            error=vm.field_error("product_type")
                        />
                        <TextField
                            id="no_of_stock"
                            label="No. of Stock"
                            required=true
                            input_type="number"
                            value=vm.field(|f| &f.no_of_stock)
                            on_input=vm.setter(|f, v| f.no_of_stock = v)
                            error=vm.field_error("no_of_stock")
                        />
                    </div>
                </section>

                <section class="form__section">
                    <h3 class="form__section-title">"Vehicle Compatibility"</h3>
                    <div class="form__grid">
                        <CascadeSelect controller=vm.vehicle idx=0 />
                        <CascadeSelect controller=vm.vehicle idx=1 />
                        <TextField
                            id="make"
                            label="Make"
                            required=true
                            placeholder="e.g. Maruti Suzuki"
                            value=vm.field(|f| &f.make)
                            on_input=vm.setter(|f, v| f.make = v)
                            error=vm.field_error("make")
                        />
                        <CascadeSelect controller=vm.vehicle idx=2 required=true error=vm.field_error("model") />
                        <CascadeSelect controller=vm.vehicle idx=3 required=true error=vm.field_error("variant") />
                        <SelectField
                            id="year_range"
                            label="Year Range"
                            value=vm.field(|f| &f.year_range)
                            options=vm.year_ranges
                            on_change=vm.setter(|f, v| f.year_range = v)
                        />
                    </div>
                    <TextField
                        id="fitment_notes"
                        label="Fitment Notes"
                        rows=3
                        value=vm.field(|f| &f.fitment_notes)
                        on_input=vm.setter(|f, v| f.fitment_notes = v)
                    />
                    <div class="form__row">
                        <CheckboxField
                            id="is_universal"
                            label="Universal fit"
                            checked=Signal::derive(move || vm.form.with(|f| f.is_universal))
                            on_toggle=Callback::new(move |v| vm.update(|f| f.is_universal = v))
                        />
                        <CheckboxField
                            id="is_consumable"
                            label="Consumable"
                            checked=Signal::derive(move || vm.form.with(|f| f.is_consumable))
                            on_toggle=Callback::new(move |v| vm.update(|f| f.is_consumable = v))
                        />
                    </div>
                </section>

                <section class="form__section">
                    <h3 class="form__section-title">"Technical Specifications"</h3>
                    <TextField
                        id="key_specifications"
                        label="Key Specifications"
                        rows=3
                        value=vm.field(|f| &f.key_specifications)
                        on_input=vm.setter(|f, v| f.key_specifications = v)
                    />
                    <div class="form__grid">
                        <TextField
                            id="weight"
                            label="Weight (kg)"
                            input_type="number"
                            value=vm.field(|f| &f.weight)
                            on_input=vm.setter(|f, v| f.weight = v)
                            error=vm.field_error("weight")
                        />
                        <TextField
                            id="certifications"
                            label="Certifications"
                            value=vm.field(|f| &f.certifications)
                            on_input=vm.setter(|f, v| f.certifications = v)
                        />
                        <TextField
                            id="warranty"
                            label="Warranty (months)"
                            input_type="number"
                            value=vm.field(|f| &f.warranty)
                            on_input=vm.setter(|f, v| f.warranty = v)
                            error=vm.field_error("warranty")
                        />
                        <TextField
                            id="video_url"
                            label="Product Video URL"
                            input_type="url"
                            value=vm.field(|f| &f.video_url)
                            on_input=vm.setter(|f, v| f.video_url = v)
                        />
                    </div>
                </section>

                <section class="form__section">
                    <h3 class="form__section-title">"Pricing & Returns"</h3>
                    <div class="form__grid">
                        <TextField
                            id="mrp_with_gst"
                            label="MRP (incl. GST)"
                            required=true
                            input_type="number"
                            value=vm.field(|f| &f.mrp_with_gst)
                            on_input=vm.setter(|f, v| f.mrp_with_gst = v)
                            error=vm.field_error("mrp_with_gst")
                        />
                        <TextField
                            id="gst_percentage"
                            label="GST %"
                            required=true
                            input_type="number"
                            value=vm.field(|f| &f.gst_percentage)
                            on_input=vm.setter(|f, v| f.gst_percentage = v)
                            error=vm.field_error("gst_percentage")
                        />
                        <TextField
                            id="selling_price"
                            label="Selling Price"
                            required=true
                            input_type="number"
                            value=vm.field(|f| &f.selling_price)
                            on_input=vm.setter(|f, v| f.selling_price = v)
                            error=vm.field_error("selling_price")
                        />
                        <SelectField
                            id="return_policy"
                            label="Return Policy"
                            required=true
                            value=vm.field(|f| &f.return_policy)
                            options=Signal::derive(|| static_options(&RETURN_POLICIES))
                            on_change=vm.setter(|f, v| f.return_policy = v)
                            error=vm.field_error("return_policy")
                        />
                    </div>
                    <CheckboxField
                        id="is_returnable"
                        label="Returnable"
                        checked=Signal::derive(move || vm.form.with(|f| f.is_returnable))
                        on_toggle=Callback::new(move |v| vm.update(|f| f.is_returnable = v))
                    />
                </section>

                <section class="form__section">
                    <div class="form__section-header">
                        <h3 class="form__section-title">"Dealer Assignment"</h3>
                        <button class="button button--secondary" on:click=move |_| vm.update(|f| f.add_assignment())>
                            {icon("plus")}
                            " Add Dealer"
                        </button>
                    </div>
                    {move || {
                        let count = assignment_count.get();
                        if count == 0 {
                            return view! { <p class="form__hint">"No dealers assigned yet."</p> }.into_any();
                        }
                        (0..count)
                            .map(|idx| view! { <DealerAssignmentRow vm=vm idx=idx /> })
                            .collect_view()
                            .into_any()
                    }}
                    <TextField
                        id="admin_notes"
                        label="Admin Notes"
                        rows=2
                        value=vm.field(|f| &f.admin_notes)
                        on_input=vm.setter(|f, v| f.admin_notes = v)
                    />
                </section>

                <section class="form__section">
                    <h3 class="form__section-title">"SEO"</h3>
                    <div class="form__grid">
                        <TextField
                            id="seo_title"
                            label="SEO Title"
                            value=vm.field(|f| &f.seo_title)
                            on_input=vm.setter(|f, v| f.seo_title = v)
                        />
                        <TextField
                            id="search_tags"
                            label="Search Tags"
                            placeholder="brake, pad, front"
                            value=vm.field(|f| &f.search_tags)
                            on_input=vm.setter(|f, v| f.search_tags = v)
                        />
                    </div>
                    <TextField
                        id="seo_description"
                        label="SEO Description"
                        rows=3
                        value=vm.field(|f| &f.seo_description)
                        on_input=vm.setter(|f, v| f.seo_description = v)
                    />
                </section>

                <div class="details-actions">
                    <button
                        class="button button--primary"
                        disabled=move || vm.submitting.get()
                        on:click=move |_| vm.submit(on_created)
                    >
                        {icon("save")}
                        {move || if vm.submitting.get() { " Saving..." } else { " Add Product" }}
                    </button>
                    <button
                        class="button button--secondary"
                        disabled=move || vm.submitting.get()
                        on:click=move |_| vm.reset()
                    >
                        {icon("x")}
                        " Reset"
                    </button>
                </div>
            </div>
        </PageFrame>
    }
}

/// One dealer row. A dealer already picked in another row is not offered.
#[component]
fn DealerAssignmentRow(vm: ProductDetailsViewModel, idx: usize) -> impl IntoView {
    let form = vm.form;
    let read = move |get: fn(&DealerAssignmentForm) -> String| {
        Signal::derive(move || {
            form.with(|f| f.dealer_assignments.get(idx).map(get).unwrap_or_default())
        })
    };
    let write = move |set: fn(&mut DealerAssignmentForm, String)| {
        Callback::new(move |value: String| {
            form.update(|f| {
                if let Some(row) = f.dealer_assignments.get_mut(idx) {
                    set(row, value);
                }
            })
        })
    };
    let available = Signal::derive(move || {
        vm.dealers.with(|dealers| form.with(|f| f.available_dealers(idx, dealers)))
    });
    let prefix = format!("dealerAssignments.{idx}");

    view! {
        <div class="form__grid form__grid--row">
            <SelectField
                id=format!("{prefix}.dealer_id")
                label="Dealer"
                required=true
                placeholder="Select dealer"
                value=read(|a| a.dealer_id.clone())
                options=available
                on_change=write(|a, v| a.dealer_id = v)
                error=vm.field_error(format!("{prefix}.dealerId"))
            />
            <TextField
                id=format!("{prefix}.quantity")
                label="Quantity"
                required=true
                input_type="number"
                value=read(|a| a.quantity.clone())
                on_input=write(|a, v| a.quantity = v)
                error=vm.field_error(format!("{prefix}.quantity"))
            />
            <TextField
                id=format!("{prefix}.margin")
                label="Margin %"
                input_type="number"
                value=read(|a| a.margin.clone())
                on_input=write(|a, v| a.margin = v)
                error=vm.field_error(format!("{prefix}.margin"))
            />
            <TextField
                id=format!("{prefix}.priority")
                label="Priority"
                input_type="number"
                value=read(|a| a.priority.clone())
                on_input=write(|a, v| a.priority = v)
                error=vm.field_error(format!("{prefix}.priority"))
            />
            <button
                class="button button--icon"
                title="Remove dealer"
                on:click=move |_| vm.update(|f| f.remove_assignment(idx))
            >
                {icon("trash")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_types_send_api_values() {
        let options = static_options(&PRODUCT_TYPES);
        let ids: Vec<&str> = options.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["OE", "OEM", "AfterMarket"]);
        assert_eq!(options[2].label, "Aftermarket");
        assert_eq!(static_options(&RETURN_POLICIES)[0].id, "7 days");
    }
}
