//! Submission controller (sans-IO state machine).
//!
//! The controller owns the form and decides what should happen on clicks and
//! on authentication results. It returns [`Command`]s; a driver executes them
//! against the ports and feeds results back through [`SubmissionController::resolve`].
//!
//! ## States
//!
//! ```text
//! Idle --click (login enabled)--> Submitting(attempt)
//! Submitting --Success--> Idle   emits Navigate(success route)
//! Submitting --Failure--> Idle   emits Notify(message, action, duration)
//! ```
//!
//! On success `is_submitting` stays set: the loading indicator remains visible
//! until navigation replaces the form. Field edits are ignored while
//! `is_submitting` is set, so the submitted email is the one signed in.

use std::time::Duration;

use crate::error::AuthenticationFailure;
use crate::form::SignInForm;
use crate::ports::{Credentials, Notification, Route};

/// Identifies one login click. Only the attempt in flight may resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttemptId(pub u64);

/// Terminal result of an authentication (or recovery) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure { message: String },
}

impl From<Result<(), AuthenticationFailure>> for SubmissionOutcome {
    fn from(result: Result<(), AuthenticationFailure>) -> Self {
        match result {
            Ok(()) => SubmissionOutcome::Success,
            Err(failure) => SubmissionOutcome::Failure {
                message: failure.message,
            },
        }
    }
}

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting(AttemptId),
}

/// Work the controller asks its driver to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Call the authentication port and report back with `resolve(attempt, ..)`.
    Authenticate {
        attempt: AttemptId,
        credentials: Credentials,
    },
    /// Call the authentication port's recovery and report back with `resolve_recovery`.
    RecoverPassword { email: String },
    /// Ask the navigation port to switch routes.
    Navigate(Route),
    /// Hand a notification to the notification port.
    Notify(Notification),
}

/// Fixed parameters of the submission flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPolicy {
    /// Acknowledgement label on failure notifications.
    pub notification_action: String,
    /// How long failure notifications stay visible.
    pub notification_duration: Duration,
    /// Where a successful sign-in navigates.
    pub success_route: Route,
}

impl SubmissionPolicy {
    pub const DEFAULT_ACTION: &str = "OK";
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

    fn notification(&self, message: String) -> Notification {
        Notification {
            message,
            action: self.notification_action.clone(),
            duration: self.notification_duration,
        }
    }
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self {
            notification_action: Self::DEFAULT_ACTION.to_string(),
            notification_duration: Self::DEFAULT_DURATION,
            success_route: Route::Home,
        }
    }
}

/// Click-to-outcome orchestration for one sign-in form.
#[derive(Debug, Clone, Default)]
pub struct SubmissionController {
    form: SignInForm,
    phase: SubmissionPhase,
    next_attempt: u64,
    policy: SubmissionPolicy,
    submitted_email: Option<String>,
    /// Email of the recovery call in flight.
    recovering: Option<String>,
}

impl SubmissionController {
    pub fn new(policy: SubmissionPolicy) -> Self {
        Self {
            form: SignInForm::new(),
            phase: SubmissionPhase::Idle,
            next_attempt: 0,
            policy,
            submitted_email: None,
            recovering: None,
        }
    }

    pub fn form(&self) -> &SignInForm {
        &self.form
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn policy(&self) -> &SubmissionPolicy {
        &self.policy
    }

    /// Email of the last submitted credentials, kept until a failure resets the form.
    pub fn submitted_email(&self) -> Option<&str> {
        self.submitted_email.as_deref()
    }

    pub fn is_recovering(&self) -> bool {
        self.recovering.is_some()
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        if self.form.is_submitting() {
            tracing::debug!("email edit ignored while submitting");
            return;
        }
        self.form.set_email(value);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        if self.form.is_submitting() {
            tracing::debug!("password edit ignored while submitting");
            return;
        }
        self.form.set_password(value);
    }

    pub fn is_login_enabled(&self) -> bool {
        self.form.is_login_enabled()
    }

    pub fn is_recover_enabled(&self) -> bool {
        self.form.is_recover_enabled()
    }

    /// Handles a click on the login control.
    ///
    /// Returns `None` when login is disabled (invalid field or a submission
    /// already in flight).
    pub fn click_login(&mut self) -> Option<Command> {
        if !self.form.is_login_enabled() || self.phase != SubmissionPhase::Idle {
            tracing::debug!(
                email_valid = self.form.email_valid(),
                password_valid = self.form.password_valid(),
                submitting = self.form.is_submitting(),
                "login click ignored"
            );
            return None;
        }

        let attempt = AttemptId(self.next_attempt);
        self.next_attempt = self.next_attempt.wrapping_add(1);
        self.phase = SubmissionPhase::Submitting(attempt);
        self.form.set_submitting(true);
        self.submitted_email = Some(self.form.email().to_string());
        tracing::debug!(attempt = attempt.0, email = %self.form.email(), "submitting sign-in");

        Some(Command::Authenticate {
            attempt,
            credentials: Credentials::new(self.form.email(), self.form.password()),
        })
    }

    /// Applies the result of an authentication call.
    ///
    /// Results for anything other than the attempt in flight are dropped.
    pub fn resolve(&mut self, attempt: AttemptId, outcome: SubmissionOutcome) -> Vec<Command> {
        if self.phase != SubmissionPhase::Submitting(attempt) {
            tracing::warn!(
                attempt = attempt.0,
                phase = ?self.phase,
                "ignoring sign-in result for an attempt that is not in flight"
            );
            return vec![];
        }
        self.phase = SubmissionPhase::Idle;

        match outcome {
            SubmissionOutcome::Success => {
                tracing::info!(
                    attempt = attempt.0,
                    route = %self.policy.success_route,
                    "sign-in succeeded"
                );
                vec![Command::Navigate(self.policy.success_route)]
            }
            SubmissionOutcome::Failure { message } => {
                tracing::info!(attempt = attempt.0, %message, "sign-in failed");
                self.form.set_submitting(false);
                self.submitted_email = None;
                vec![Command::Notify(self.policy.notification(message))]
            }
        }
    }

    /// Handles a click on the recover-password control.
    ///
    /// Only one recovery call may be in flight.
    pub fn click_recover(&mut self) -> Option<Command> {
        if !self.form.is_recover_enabled() {
            tracing::debug!("recover click ignored: email invalid");
            return None;
        }
        if let Some(pending) = &self.recovering {
            tracing::debug!(email = %pending, "recover click ignored: recovery in flight");
            return None;
        }
        let email = self.form.email().to_string();
        self.recovering = Some(email.clone());
        Some(Command::RecoverPassword { email })
    }

    /// Applies the result of a recovery call. Never touches `is_submitting`.
    ///
    /// Results that do not match the recovery in flight are dropped.
    pub fn resolve_recovery(&mut self, email: &str, outcome: SubmissionOutcome) -> Vec<Command> {
        if self.recovering.as_deref() != Some(email) {
            tracing::warn!(%email, "ignoring recovery result that is not in flight");
            return vec![];
        }
        self.recovering = None;
        let message = match outcome {
            SubmissionOutcome::Success => {
                tracing::info!(%email, "password recovery requested");
                format!("Password recovery instructions sent to {email}.")
            }
            SubmissionOutcome::Failure { message } => {
                tracing::info!(%email, %message, "password recovery failed");
                message
            }
        };
        vec![Command::Notify(self.policy.notification(message))]
    }
}
