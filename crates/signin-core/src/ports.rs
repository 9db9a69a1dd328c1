//! External collaborators of the sign-in core.
//!
//! The core never performs I/O itself. Drivers (the headless session, the TUI
//! runtime) hand these ports to the code that executes controller commands.

use std::fmt;
use std::time::Duration;

use futures_util::future::BoxFuture;

use crate::error::AuthenticationFailure;

/// Email/password pair sent to the authentication port.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Destinations the navigation port understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    SignIn,
    Home,
}

impl Route {
    /// Route token as used by the navigation boundary.
    pub fn as_str(self) -> &'static str {
        match self {
            Route::SignIn => "signin",
            Route::Home => "home",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient message with a single acknowledgement action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub action: String,
    pub duration: Duration,
}

impl Notification {
    pub fn duration_ms(&self) -> u64 {
        u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX)
    }
}

/// Authentication capability.
///
/// Each call resolves exactly once, with success or a failure message.
/// Callers make no assumption about timing, retries, or idempotence.
pub trait Authenticator: Send + Sync {
    fn sign_in(
        &self,
        credentials: Credentials,
    ) -> BoxFuture<'static, Result<(), AuthenticationFailure>>;

    /// Starts password recovery for `email`.
    fn recover_password(
        &self,
        email: String,
    ) -> BoxFuture<'static, Result<(), AuthenticationFailure>> {
        tracing::debug!(%email, "password recovery not supported by authenticator");
        Box::pin(async {
            Err(AuthenticationFailure::new("Password recovery is not available."))
        })
    }
}

/// Fire-and-forget notification sink.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Navigation sink.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials::new("valid@email.com", "qwerty123");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("valid@email.com"));
        assert!(!debug.contains("qwerty123"));
    }

    #[test]
    fn test_route_tokens() {
        assert_eq!(Route::Home.as_str(), "home");
        assert_eq!(Route::SignIn.to_string(), "signin");
    }

    #[test]
    fn test_notification_duration_ms() {
        let notification = Notification {
            message: "anyErrorMessage".to_string(),
            action: "OK".to_string(),
            duration: Duration::from_millis(5000),
        };
        assert_eq!(notification.duration_ms(), 5000);
    }

    #[tokio::test]
    async fn test_default_recover_password_fails() {
        struct NoRecovery;

        impl Authenticator for NoRecovery {
            fn sign_in(
                &self,
                _credentials: Credentials,
            ) -> BoxFuture<'static, Result<(), AuthenticationFailure>> {
                Box::pin(async { Ok(()) })
            }
        }

        let err = NoRecovery
            .recover_password("valid@email.com".to_string())
            .await
            .unwrap_err();
        assert_eq!(err.message, "Password recovery is not available.");
    }
}
