use super::validators::{EMAIL_RULES, PASSWORD_RULES, Rule, first_violation, satisfies_all};

/// Field values and derived validity for one mounted sign-in form.
///
/// Validity flags are recomputed synchronously on every field update.
/// `is_submitting` is driven by the submission controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) email_valid: bool,
    pub(crate) password_valid: bool,
    pub(crate) is_submitting: bool,
}

impl SignInForm {
    /// Creates an empty form (both fields invalid, not submitting).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn email_valid(&self) -> bool {
        self.email_valid
    }

    pub fn password_valid(&self) -> bool {
        self.password_valid
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Replaces the email value and revalidates it.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.email_valid = satisfies_all(EMAIL_RULES, &self.email);
    }

    /// Replaces the password value and revalidates it.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
        self.password_valid = satisfies_all(PASSWORD_RULES, &self.password);
    }

    /// Login needs both fields valid and no submission in flight.
    pub fn is_login_enabled(&self) -> bool {
        self.email_valid && self.password_valid && !self.is_submitting
    }

    /// Recovery only needs a valid email.
    pub fn is_recover_enabled(&self) -> bool {
        self.email_valid
    }

    /// First rule the email value breaks, for display.
    pub fn email_violation(&self) -> Option<Rule> {
        first_violation(EMAIL_RULES, &self.email)
    }

    /// First rule the password value breaks, for display.
    pub fn password_violation(&self) -> Option<Rule> {
        first_violation(PASSWORD_RULES, &self.password)
    }

    pub(crate) fn set_submitting(&mut self, submitting: bool) {
        self.is_submitting = submitting;
    }
}
