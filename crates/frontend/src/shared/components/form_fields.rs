//! Labelled inputs with an inline validation message, bound to one field of
//! a form signal through a getter signal and an input callback.

use contracts::shared::select_option::SelectOption;
use leptos::prelude::*;

fn field_label(label: &'static str, required: bool) -> String {
    if required {
        format!("{label} *")
    } else {
        label.to_string()
    }
}

#[component]
pub fn TextField(
    #[prop(into)] id: String,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(optional)] required: bool,
    /// `text`, `email`, `number`, `password`, `tel`, `url`, `date`
    #[prop(optional, default = "text")]
    input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    /// Renders a textarea with this many rows when non-zero
    #[prop(optional)]
    rows: u32,
) -> impl IntoView {
    let input = if rows > 0 {
        view! {
            <textarea
                id=id.clone()
                class="form__textarea"
                rows=rows.to_string()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    } else {
        view! {
            <input
                id=id.clone()
                type=input_type
                class="form__input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            <label for=id>{field_label(label, required)}</label>
            {input}
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}

/// Plain (non-cascading) dropdown. An empty choice reports `""`.
#[component]
pub fn SelectField(
    #[prop(into)] id: String,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    on_change: Callback<String>,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(optional)] required: bool,
    #[prop(optional, default = "Select")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            <label for=id.clone()>{field_label(label, required)}</label>
            <select
                id=id
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {move || {
                    let selected = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let is_selected = option.id == selected;
                            view! {
                                <option value=option.id selected=is_selected>{option.label}</option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)] id: String,
    label: &'static str,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="form__checkbox" for=id.clone()>
            <input
                id=id.clone()
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}

/// A set of checkboxes over `options`, e.g. allowed categories or regions.
#[component]
pub fn MultiCheckField(
    label: &'static str,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] selected: Signal<Vec<String>>,
    on_toggle: Callback<String>,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <fieldset class="form__group form__group--checks" class:form__group--invalid=move || error.get().is_some()>
            <legend>{field_label(label, required)}</legend>
            {move || {
                let chosen = selected.get();
                options
                    .get()
                    .into_iter()
                    .map(|option| {
                        let is_checked = chosen.contains(&option.id);
                        let id = option.id.clone();
                        view! {
                            <label class="form__checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=is_checked
                                    on:change=move |_| on_toggle.run(id.clone())
                                />
                                <span>{option.label}</span>
                            </label>
                        }
                    })
                    .collect_view()
            }}
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </fieldset>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_label_gets_marker() {
        assert_eq!(field_label("Email", true), "Email *");
        assert_eq!(field_label("Remarks", false), "Remarks");
    }
}
