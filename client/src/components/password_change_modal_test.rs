use super::*;

#[test]
fn submit_label_idle_uses_submit_text() {
    let labels = PasswordModalLabels::default();
    assert_eq!(submit_label(&labels, false), "Change password");
}

#[test]
fn submit_label_busy_uses_submitting_text() {
    let labels = PasswordModalLabels::default();
    assert_eq!(submit_label(&labels, true), "Changing...");
}

#[test]
fn submit_label_respects_caller_supplied_strings() {
    let labels = PasswordModalLabels {
        submit: "Lagre".to_owned(),
        submitting: "Lagrer...".to_owned(),
        ..PasswordModalLabels::default()
    };
    assert_eq!(submit_label(&labels, false), "Lagre");
    assert_eq!(submit_label(&labels, true), "Lagrer...");
}

#[test]
fn default_labels_are_all_nonempty() {
    let labels = PasswordModalLabels::default();
    for value in [
        &labels.title,
        &labels.current_label,
        &labels.new_label,
        &labels.confirm_label,
        &labels.submit,
        &labels.submitting,
        &labels.cancel,
    ] {
        assert!(!value.is_empty());
    }
}

#[test]
fn cancel_label_is_parameterized_like_the_rest() {
    // Every label, cancel included, can be overridden for localization.
    let labels = PasswordModalLabels { cancel: "Avbryt".to_owned(), ..PasswordModalLabels::default() };
    assert_eq!(labels.cancel, "Avbryt");
}
