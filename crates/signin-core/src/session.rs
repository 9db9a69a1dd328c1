//! Headless driver for the submission controller.
//!
//! `SignInSession` executes controller commands against injected ports. A
//! login click returns a [`PendingAttempt`] immediately, so callers can observe
//! the submitting state while the authentication call is outstanding.

use std::sync::Arc;

use futures_util::future::BoxFuture;

use crate::error::AuthenticationFailure;
use crate::form::SignInForm;
use crate::ports::{Authenticator, Navigator, Notifier};
use crate::submission::{
    AttemptId, Command, SubmissionController, SubmissionOutcome, SubmissionPolicy,
};

/// An authentication call in flight.
pub struct PendingAttempt {
    attempt: AttemptId,
    call: BoxFuture<'static, Result<(), AuthenticationFailure>>,
}

impl PendingAttempt {
    pub fn attempt(&self) -> AttemptId {
        self.attempt
    }

    /// Waits for the authentication port to resolve.
    pub async fn wait(self) -> (AttemptId, SubmissionOutcome) {
        let outcome = SubmissionOutcome::from(self.call.await);
        (self.attempt, outcome)
    }
}

impl std::fmt::Debug for PendingAttempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingAttempt")
            .field("attempt", &self.attempt)
            .finish_non_exhaustive()
    }
}

/// A sign-in form wired to its ports.
pub struct SignInSession {
    controller: SubmissionController,
    authenticator: Arc<dyn Authenticator>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl SignInSession {
    pub fn new(
        policy: SubmissionPolicy,
        authenticator: Arc<dyn Authenticator>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            controller: SubmissionController::new(policy),
            authenticator,
            notifier,
            navigator,
        }
    }

    pub fn controller(&self) -> &SubmissionController {
        &self.controller
    }

    pub fn form(&self) -> &SignInForm {
        self.controller.form()
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.controller.set_email(value);
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.controller.set_password(value);
    }

    /// Clicks login. Returns the outstanding call, or `None` if login is disabled.
    pub fn click_login(&mut self) -> Option<PendingAttempt> {
        match self.controller.click_login()? {
            Command::Authenticate {
                attempt,
                credentials,
            } => Some(PendingAttempt {
                attempt,
                call: self.authenticator.sign_in(credentials),
            }),
            other => {
                self.execute(other);
                None
            }
        }
    }

    /// Feeds an authentication result back and runs the resulting commands.
    pub fn complete(&mut self, attempt: AttemptId, outcome: SubmissionOutcome) {
        for command in self.controller.resolve(attempt, outcome) {
            self.execute(command);
        }
    }

    /// Clicks login and waits for the outcome.
    ///
    /// Returns `None` when login is disabled.
    pub async fn submit(&mut self) -> Option<SubmissionOutcome> {
        let pending = self.click_login()?;
        let (attempt, outcome) = pending.wait().await;
        self.complete(attempt, outcome.clone());
        Some(outcome)
    }

    /// Clicks recover and waits for the outcome.
    ///
    /// Returns `None` when recovery is disabled.
    pub async fn recover_password(&mut self) -> Option<SubmissionOutcome> {
        let Command::RecoverPassword { email } = self.controller.click_recover()? else {
            return None;
        };
        let outcome =
            SubmissionOutcome::from(self.authenticator.recover_password(email.clone()).await);
        for command in self.controller.resolve_recovery(&email, outcome.clone()) {
            self.execute(command);
        }
        Some(outcome)
    }

    fn execute(&self, command: Command) {
        match command {
            Command::Navigate(route) => self.navigator.navigate(route),
            Command::Notify(notification) => self.notifier.notify(notification),
            Command::Authenticate { attempt, .. } => {
                tracing::warn!(attempt = attempt.0, "unexpected authenticate command");
            }
            Command::RecoverPassword { .. } => {
                tracing::warn!("unexpected recover command");
            }
        }
    }
}
