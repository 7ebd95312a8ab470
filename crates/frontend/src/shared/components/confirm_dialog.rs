use leptos::prelude::*;

use crate::shared::icons::icon;

/// Overlay asking the user to confirm a submit. Clicking outside the box
/// cancels; the buttons are disabled while `busy`.
///
/// ```rust,ignore
/// view! {
///     <ConfirmDialog
///         open=Signal::derive(move || pending.with(Option::is_some))
///         title="Create employee?"
///         on_confirm=Callback::new(move |_| vm.confirm(on_created))
///         on_cancel=Callback::new(move |_| pending.set(None))
///     >
///         <p>"Summary..."</p>
///     </ConfirmDialog>
/// }
/// ```
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    title: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] busy: Signal<bool>,
    #[prop(optional, default = "Confirm")] confirm_label: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    move || {
        if !open.get() {
            return view! { <></> }.into_any();
        }
        view! {
            <div
                class="modal-overlay"
                on:click=move |_| {
                    if !busy.get_untracked() {
                        on_cancel.run(());
                    }
                }
            >
                <div class="modal-content" role="dialog" on:click=|e| e.stop_propagation()>
                    <h3 class="modal-content__title">{title}</h3>
                    <div class="modal-content__body">{children()}</div>
                    <div class="details-actions">
                        <button
                            class="button button--primary"
                            disabled=move || busy.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            {icon("check")}
                            {move || if busy.get() { " Saving...".to_string() } else { format!(" {confirm_label}") }}
                        </button>
                        <button
                            class="button button--secondary"
                            disabled=move || busy.get()
                            on:click=move |_| on_cancel.run(())
                        >
                            {icon("x")}
                            " Cancel"
                        </button>
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}
