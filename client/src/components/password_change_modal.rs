//! Modal dialog for changing the signed-in user's password.
//!
//! The component owns no state: field values, visibility, the error message,
//! and the busy flag all arrive as `Signal` props from the hosting page, and
//! every user action is forwarded through a callback. Submission in
//! particular hands the raw `SubmitEvent` to the caller, which decides
//! whether to prevent the browser default and what to do with the values.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::state::password_form::PasswordField;

#[cfg(test)]
#[path = "password_change_modal_test.rs"]
mod password_change_modal_test;

/// Display strings for the modal. All labels are caller-supplied so the
/// hosting page can localize them; the defaults are English.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordModalLabels {
    pub title: String,
    pub current_label: String,
    pub new_label: String,
    pub confirm_label: String,
    pub submit: String,
    pub submitting: String,
    pub cancel: String,
}

impl Default for PasswordModalLabels {
    fn default() -> Self {
        Self {
            title: "Change Password".to_owned(),
            current_label: "Current password".to_owned(),
            new_label: "New password".to_owned(),
            confirm_label: "Confirm new password".to_owned(),
            submit: "Change password".to_owned(),
            submitting: "Changing...".to_owned(),
            cancel: "Cancel".to_owned(),
        }
    }
}

/// Label shown on the submit button for the given busy state.
fn submit_label(labels: &PasswordModalLabels, busy: bool) -> String {
    if busy { labels.submitting.clone() } else { labels.submit.clone() }
}

/// Password-change dialog bound to externally-owned form state.
///
/// Renders nothing at all while `open` is false. While `busy` is true the
/// submit button is disabled and shows the submitting label; the cancel and
/// close controls stay enabled. Clicking the backdrop or pressing Escape
/// invokes `on_close`; clicks inside the dialog body never dismiss.
#[component]
pub fn PasswordChangeModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] current_password: Signal<String>,
    #[prop(into)] new_password: Signal<String>,
    #[prop(into)] confirm_password: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] busy: Signal<bool>,
    #[prop(optional)] labels: PasswordModalLabels,
    #[prop(into)] on_field_change: Callback<(PasswordField, String)>,
    #[prop(into)] on_submit: Callback<SubmitEvent>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let labels = StoredValue::new(labels);
    let current_input = NodeRef::<leptos::html::Input>::new();

    // Focus the first field when the dialog opens.
    Effect::new(move || {
        if !open.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = current_input.get() {
                let _ = el.focus();
            }
        }
    });

    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        {move || {
            if !open.get() {
                return ().into_any();
            }

            let l = labels.get_value();
            let submit_text = submit_label(&l, busy.get());

            view! {
                <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                    <div
                        class="dialog dialog--password"
                        on:click=move |ev| ev.stop_propagation()
                        on:keydown=move |ev| on_keydown.run(ev)
                        tabindex="0"
                    >
                        <div class="dialog__header">
                            <h2>{l.title}</h2>
                            <button
                                type="button"
                                class="dialog__close"
                                title="Close"
                                on:click=move |_| on_close.run(())
                            >
                                "✕"
                            </button>
                        </div>

                        {move || {
                            error
                                .get()
                                .map(|msg| view! { <div class="dialog__alert" role="alert">{msg}</div> })
                        }}

                        <form class="dialog__form" on:submit=move |ev| on_submit.run(ev)>
                            <label class="dialog__label">
                                {l.current_label}
                                <input
                                    class="dialog__input"
                                    type="password"
                                    required=true
                                    node_ref=current_input
                                    prop:value=move || current_password.get()
                                    on:input=move |ev| {
                                        on_field_change
                                            .run((PasswordField::Current, event_target_value(&ev)));
                                    }
                                />
                            </label>
                            <label class="dialog__label">
                                {l.new_label}
                                <input
                                    class="dialog__input"
                                    type="password"
                                    required=true
                                    prop:value=move || new_password.get()
                                    on:input=move |ev| {
                                        on_field_change
                                            .run((PasswordField::New, event_target_value(&ev)));
                                    }
                                />
                            </label>
                            <label class="dialog__label">
                                {l.confirm_label}
                                <input
                                    class="dialog__input"
                                    type="password"
                                    required=true
                                    prop:value=move || confirm_password.get()
                                    on:input=move |ev| {
                                        on_field_change
                                            .run((PasswordField::Confirm, event_target_value(&ev)));
                                    }
                                />
                            </label>

                            <div class="dialog__actions">
                                <button
                                    type="button"
                                    class="btn"
                                    on:click=move |_| on_close.run(())
                                >
                                    {l.cancel}
                                </button>
                                <button
                                    type="submit"
                                    class="btn btn--primary"
                                    disabled=move || busy.get()
                                >
                                    {submit_text}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            }
                .into_any()
        }}
    }
}
