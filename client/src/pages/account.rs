//! Account page hosting the password-change workflow.
//!
//! The page is the single owner of the form state: it opens and closes the
//! modal, runs cross-field validation, drives the busy flag around the
//! network call, and surfaces failures as the modal's error string. The
//! modal itself only reflects this state and relays events back here.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::info_card::InfoCard;
use crate::components::password_change_modal::PasswordChangeModal;
use crate::state::password_form::{PasswordField, PasswordFormState};

#[component]
pub fn AccountPage() -> impl IntoView {
    let form = RwSignal::new(PasswordFormState::default());

    let on_open = move |_| form.update(PasswordFormState::show);
    let on_close = Callback::new(move |()| form.update(PasswordFormState::dismiss));
    let on_field_change = Callback::new(move |(field, value): (PasswordField, String)| {
        form.update(|f| f.set_field(field, value));
    });

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();

        let snapshot = form.get_untracked();
        if snapshot.busy {
            return;
        }
        if let Some(msg) = snapshot.validation_error() {
            form.update(|f| f.error = Some(msg));
            return;
        }
        form.update(PasswordFormState::start_submit);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::change_password(&snapshot.current, &snapshot.new).await {
                Ok(()) => form.update(PasswordFormState::succeed),
                Err(e) => form.update(|f| f.fail(e)),
            }
        });
    });

    view! {
        <div class="account-page">
            <h1>"My Account"</h1>

            <InfoCard
                title="Security".to_owned()
                subtitle="Credentials and sign-in settings".to_owned()
            >
                <p>"Choose a strong password you do not use anywhere else."</p>
                <button class="btn btn--primary" on:click=on_open>
                    "Change password"
                </button>
            </InfoCard>

            <PasswordChangeModal
                open=Signal::derive(move || form.get().open)
                current_password=Signal::derive(move || form.get().current)
                new_password=Signal::derive(move || form.get().new)
                confirm_password=Signal::derive(move || form.get().confirm)
                error=Signal::derive(move || form.get().error)
                busy=Signal::derive(move || form.get().busy)
                on_field_change=on_field_change
                on_submit=on_submit
                on_close=on_close
            />
        </div>
    }
}
