//! Sign-in form state.

use signin_core::form::SignInForm;
use signin_core::submission::{SubmissionController, SubmissionPolicy};

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Email,
    Password,
    Login,
    Recover,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::Email, Focus::Password, Focus::Login, Focus::Recover];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn is_field(self) -> bool {
        matches!(self, Focus::Email | Focus::Password)
    }
}

/// State of the mounted sign-in screen.
#[derive(Debug, Clone)]
pub struct SignInState {
    pub controller: SubmissionController,
    pub focus: Focus,
    /// Hints stay hidden until the user edits the field.
    pub email_touched: bool,
    pub password_touched: bool,
}

impl SignInState {
    pub fn new(policy: SubmissionPolicy) -> Self {
        Self {
            controller: SubmissionController::new(policy),
            focus: Focus::Email,
            email_touched: false,
            password_touched: false,
        }
    }

    /// Starts with the email field filled in and focus on the password.
    pub fn with_email(policy: SubmissionPolicy, email: &str) -> Self {
        let mut state = Self::new(policy);
        state.controller.set_email(email);
        state.email_touched = true;
        state.focus = Focus::Password;
        state
    }

    pub fn form(&self) -> &SignInForm {
        self.controller.form()
    }

    /// Text of the focused field, or `None` when a button has focus.
    pub fn focused_value(&self) -> Option<&str> {
        match self.focus {
            Focus::Email => Some(self.form().email()),
            Focus::Password => Some(self.form().password()),
            Focus::Login | Focus::Recover => None,
        }
    }

    /// Replaces the focused field's value and marks it edited.
    ///
    /// Fields are read-only while a sign-in is in flight.
    pub fn set_focused_value(&mut self, value: String) {
        if self.form().is_submitting() {
            return;
        }
        match self.focus {
            Focus::Email => {
                self.controller.set_email(value);
                self.email_touched = true;
            }
            Focus::Password => {
                self.controller.set_password(value);
                self.password_touched = true;
            }
            Focus::Login | Focus::Recover => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_in_both_directions() {
        assert_eq!(Focus::Email.next(), Focus::Password);
        assert_eq!(Focus::Recover.next(), Focus::Email);
        assert_eq!(Focus::Email.prev(), Focus::Recover);
        assert_eq!(Focus::Login.prev(), Focus::Password);
    }

    #[test]
    fn test_with_email_prefills_and_focuses_password() {
        let state = SignInState::with_email(SubmissionPolicy::default(), "valid@email.com");
        assert_eq!(state.form().email(), "valid@email.com");
        assert!(state.form().email_valid());
        assert_eq!(state.focus, Focus::Password);
        assert!(!state.password_touched);
    }

    #[test]
    fn test_set_focused_value_ignores_buttons() {
        let mut state = SignInState::new(SubmissionPolicy::default());
        state.focus = Focus::Login;
        state.set_focused_value("x".to_string());
        assert_eq!(state.form().email(), "");
        assert_eq!(state.form().password(), "");
        assert!(state.focused_value().is_none());
    }

    #[test]
    fn test_fields_are_read_only_while_submitting() {
        let mut state = SignInState::new(SubmissionPolicy::default());
        state.set_focused_value("valid@email.com".to_string());
        state.focus = Focus::Password;
        state.set_focused_value("qwerty123".to_string());
        assert!(state.controller.click_login().is_some());

        state.set_focused_value(String::new());
        state.focus = Focus::Email;
        state.set_focused_value("other@email.com".to_string());

        assert_eq!(state.form().email(), "valid@email.com");
        assert_eq!(state.form().password(), "qwerty123");
    }
}
