use super::*;

// =============================================================
// PasswordField
// =============================================================

#[test]
fn password_field_names_match_backend_schema() {
    assert_eq!(PasswordField::Current.as_str(), "current_password");
    assert_eq!(PasswordField::New.as_str(), "new_password");
    assert_eq!(PasswordField::Confirm.as_str(), "confirm_password");
}

// =============================================================
// set_field mutates exactly one field
// =============================================================

#[test]
fn set_field_current_leaves_other_fields_untouched() {
    let mut state = PasswordFormState::default();
    state.set_field(PasswordField::Current, "hunter2".to_owned());
    assert_eq!(state.current, "hunter2");
    assert_eq!(state.new, "");
    assert_eq!(state.confirm, "");
}

#[test]
fn set_field_new_leaves_other_fields_untouched() {
    let mut state = PasswordFormState::default();
    state.set_field(PasswordField::New, "correct-horse".to_owned());
    assert_eq!(state.current, "");
    assert_eq!(state.new, "correct-horse");
    assert_eq!(state.confirm, "");
}

#[test]
fn set_field_confirm_leaves_other_fields_untouched() {
    let mut state = PasswordFormState::default();
    state.set_field(PasswordField::Confirm, "correct-horse".to_owned());
    assert_eq!(state.current, "");
    assert_eq!(state.new, "");
    assert_eq!(state.confirm, "correct-horse");
}

#[test]
fn set_field_overwrites_previous_value() {
    let mut state = PasswordFormState::default();
    state.set_field(PasswordField::New, "first".to_owned());
    state.set_field(PasswordField::New, "second".to_owned());
    assert_eq!(state.new, "second");
}

// =============================================================
// show / dismiss
// =============================================================

#[test]
fn show_opens_with_blank_fields_and_no_error() {
    let mut state = PasswordFormState {
        current: "old".to_owned(),
        error: Some("stale".to_owned()),
        busy: true,
        ..PasswordFormState::default()
    };
    state.show();
    assert!(state.open);
    assert_eq!(state.current, "");
    assert_eq!(state.error, None);
    assert!(!state.busy);
}

#[test]
fn dismiss_closes_and_wipes_typed_values() {
    let mut state = PasswordFormState { open: true, ..PasswordFormState::default() };
    state.set_field(PasswordField::New, "secret-value".to_owned());
    state.dismiss();
    assert!(!state.open);
    assert_eq!(state.new, "");
}

// =============================================================
// validation_error
// =============================================================

#[test]
fn validation_rejects_short_new_password() {
    let mut state = PasswordFormState::default();
    state.set_field(PasswordField::New, "short".to_owned());
    state.set_field(PasswordField::Confirm, "short".to_owned());
    let msg = state.validation_error().unwrap();
    assert!(msg.contains("at least"));
}

#[test]
fn validation_rejects_mismatched_confirmation() {
    let mut state = PasswordFormState::default();
    state.set_field(PasswordField::New, "long-enough-password".to_owned());
    state.set_field(PasswordField::Confirm, "different-password".to_owned());
    let msg = state.validation_error().unwrap();
    assert!(msg.contains("do not match"));
}

#[test]
fn validation_passes_matching_long_passwords() {
    let mut state = PasswordFormState::default();
    state.set_field(PasswordField::New, "long-enough-password".to_owned());
    state.set_field(PasswordField::Confirm, "long-enough-password".to_owned());
    assert_eq!(state.validation_error(), None);
}

// =============================================================
// submit transitions
// =============================================================

#[test]
fn start_submit_sets_busy_and_clears_error() {
    let mut state = PasswordFormState {
        open: true,
        error: Some("previous failure".to_owned()),
        ..PasswordFormState::default()
    };
    state.start_submit();
    assert!(state.busy);
    assert_eq!(state.error, None);
}

#[test]
fn succeed_closes_the_modal() {
    let mut state = PasswordFormState { open: true, busy: true, ..PasswordFormState::default() };
    state.succeed();
    assert!(!state.open);
    assert!(!state.busy);
}

#[test]
fn fail_keeps_modal_open_with_error_and_idle() {
    let mut state = PasswordFormState { open: true, busy: true, ..PasswordFormState::default() };
    state.set_field(PasswordField::Current, "typed".to_owned());
    state.fail("Current password is incorrect.".to_owned());
    assert!(state.open);
    assert!(!state.busy);
    assert_eq!(state.error.as_deref(), Some("Current password is incorrect."));
    // Typed values survive a failed attempt.
    assert_eq!(state.current, "typed");
}
