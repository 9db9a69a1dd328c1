//! Headless sign-in.
//!
//! Drives a `SignInSession` with the bundled authenticator. Notifications go
//! to stderr; the result goes to stdout.

use std::sync::{Arc, Mutex, PoisonError};

use anyhow::Result;
use serde::Serialize;
use signin_core::auth::AccountAuthenticator;
use signin_core::config::Config;
use signin_core::interrupt::{self, InterruptedError};
use signin_core::ports::{Navigator, Notification, Notifier, Route};
use signin_core::session::SignInSession;
use signin_core::submission::SubmissionOutcome;

/// The sign-in was rejected or never attempted; details are already printed.
#[derive(Debug, thiserror::Error)]
#[error("sign-in rejected")]
pub struct SignInRejected;

pub struct LoginOptions<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LoginReport<'a> {
    email: &'a str,
    outcome: &'static str,
    message: Option<String>,
    route: Option<&'static str>,
}

/// Prints notifications to stderr.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{} [{}]", notification.message, notification.action);
    }
}

/// Remembers the last route it was sent to.
#[derive(Default)]
struct RecordingNavigator {
    route: Mutex<Option<Route>>,
}

impl RecordingNavigator {
    fn route(&self) -> Option<Route> {
        *self.route.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        *self.route.lock().unwrap_or_else(PoisonError::into_inner) = Some(route);
    }
}

pub async fn run(config: &Config, options: LoginOptions<'_>) -> Result<()> {
    let navigator = Arc::new(RecordingNavigator::default());
    let mut session = SignInSession::new(
        config.submission_policy(),
        Arc::new(AccountAuthenticator::new(&config.auth)),
        Arc::new(StderrNotifier),
        Arc::clone(&navigator) as Arc<dyn Navigator>,
    );
    session.set_email(options.email);
    session.set_password(options.password);
    tracing::info!(email = %options.email, "headless sign-in");

    let outcome = tokio::select! {
        outcome = session.submit() => outcome,
        () = interrupt::wait_for_interrupt() => return Err(InterruptedError.into()),
    };

    let report = match &outcome {
        Some(SubmissionOutcome::Success) => LoginReport {
            email: options.email,
            outcome: "success",
            message: None,
            route: navigator.route().map(Route::as_str),
        },
        Some(SubmissionOutcome::Failure { message }) => LoginReport {
            email: options.email,
            outcome: "failure",
            message: Some(message.clone()),
            route: None,
        },
        None => LoginReport {
            email: options.email,
            outcome: "disabled",
            message: Some(disabled_reason(&session)),
            route: None,
        },
    };

    if options.json {
        println!("{}", serde_json::to_string(&report)?);
    } else if let Some(route) = report.route {
        println!("Signed in as {}. Route: {route}", options.email);
    } else if outcome.is_none() {
        eprintln!(
            "Login is disabled: {}",
            report.message.as_deref().unwrap_or("")
        );
    }

    if matches!(outcome, Some(SubmissionOutcome::Success)) {
        Ok(())
    } else {
        Err(SignInRejected.into())
    }
}

fn disabled_reason(session: &SignInSession) -> String {
    let form = session.form();
    let mut reasons = Vec::new();
    if let Some(rule) = form.email_violation() {
        reasons.push(format!("email: {}", rule.message()));
    }
    if let Some(rule) = form.password_violation() {
        reasons.push(format!("password: {}", rule.message()));
    }
    reasons.join("; ")
}
