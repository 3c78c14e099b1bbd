#[cfg(test)]
#[path = "password_form_test.rs"]
mod password_form_test;

/// Minimum accepted length for a new password. Mirrors the backend policy so
/// obviously-short passwords are rejected before a round trip.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Identifies one of the three inputs in the password-change form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordField {
    Current,
    New,
    Confirm,
}

impl PasswordField {
    /// Stable field name, matching the backend request schema.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current_password",
            Self::New => "new_password",
            Self::Confirm => "confirm_password",
        }
    }
}

/// Caller-owned state backing the password-change modal.
///
/// The modal component reads these values through `Signal` props and never
/// keeps its own copy; the owning page is the single source of truth for
/// field contents, visibility, the error message, and the busy flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordFormState {
    pub current: String,
    pub new: String,
    pub confirm: String,
    pub error: Option<String>,
    pub busy: bool,
    pub open: bool,
}

impl PasswordFormState {
    /// Open the modal with blank fields and no stale error.
    pub fn show(&mut self) {
        *self = Self { open: true, ..Self::default() };
    }

    /// Close the modal, discarding whatever was typed.
    pub fn dismiss(&mut self) {
        *self = Self::default();
    }

    /// Overwrite exactly one field, leaving the other two untouched.
    pub fn set_field(&mut self, field: PasswordField, value: String) {
        match field {
            PasswordField::Current => self.current = value,
            PasswordField::New => self.new = value,
            PasswordField::Confirm => self.confirm = value,
        }
    }

    /// Cross-field validation run by the owning page before submitting.
    /// The modal itself never validates; it only displays the result.
    #[must_use]
    pub fn validation_error(&self) -> Option<String> {
        if self.new.len() < MIN_PASSWORD_LEN {
            return Some(format!("New password must be at least {MIN_PASSWORD_LEN} characters."));
        }
        if self.new != self.confirm {
            return Some("New password and confirmation do not match.".to_owned());
        }
        None
    }

    /// Transition into the busy state for an in-flight request.
    pub fn start_submit(&mut self) {
        self.busy = true;
        self.error = None;
    }

    /// Request succeeded: close and wipe the form.
    pub fn succeed(&mut self) {
        self.dismiss();
    }

    /// Request failed: surface the message and allow another attempt.
    pub fn fail(&mut self, message: String) {
        self.busy = false;
        self.error = Some(message);
    }
}
