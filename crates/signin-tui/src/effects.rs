//! UI effect types.
//!
//! Effects are returned by the reducer and executed by the runtime. The
//! reducer never performs I/O or spawns tasks itself.

use signin_core::ports::{Credentials, Notification, Route};
use signin_core::submission::{AttemptId, Command};

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Call the authentication port for a sign-in attempt.
    SignIn {
        attempt: AttemptId,
        credentials: Credentials,
    },

    /// Call the authentication port for password recovery.
    RecoverPassword { email: String },

    /// Hand a route to the navigation port.
    Navigate(Route),

    /// Hand a notification to the notification port.
    Notify(Notification),
}

impl From<Command> for UiEffect {
    fn from(command: Command) -> Self {
        match command {
            Command::Authenticate {
                attempt,
                credentials,
            } => UiEffect::SignIn {
                attempt,
                credentials,
            },
            Command::RecoverPassword { email } => UiEffect::RecoverPassword { email },
            Command::Navigate(route) => UiEffect::Navigate(route),
            Command::Notify(notification) => UiEffect::Notify(notification),
        }
    }
}
