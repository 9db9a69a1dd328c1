//! Domain errors.

/// Raised by an authentication port when a sign-in (or recovery) attempt fails.
///
/// Carries the human-readable message surfaced in the failure notification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AuthenticationFailure {
    pub message: String,
}

impl AuthenticationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
