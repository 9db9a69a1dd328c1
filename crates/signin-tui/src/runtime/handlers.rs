//! Effect handlers: async calls into the authentication port.
//!
//! Handlers return the `UiEvent` to deliver; the runtime spawns them and
//! forwards the result to the inbox.

use std::sync::Arc;

use signin_core::ports::{Authenticator, Credentials};
use signin_core::submission::{AttemptId, SubmissionOutcome};

use crate::events::UiEvent;

pub async fn sign_in(
    authenticator: Arc<dyn Authenticator>,
    attempt: AttemptId,
    credentials: Credentials,
) -> UiEvent {
    let outcome = SubmissionOutcome::from(authenticator.sign_in(credentials).await);
    UiEvent::SignInResolved { attempt, outcome }
}

pub async fn recover_password(authenticator: Arc<dyn Authenticator>, email: String) -> UiEvent {
    let outcome = SubmissionOutcome::from(authenticator.recover_password(email.clone()).await);
    UiEvent::RecoveryResolved { email, outcome }
}

#[cfg(test)]
mod tests {
    use futures_util::future::BoxFuture;
    use signin_core::error::AuthenticationFailure;

    use super::*;

    struct Rejecting;

    impl Authenticator for Rejecting {
        fn sign_in(
            &self,
            _credentials: Credentials,
        ) -> BoxFuture<'static, Result<(), AuthenticationFailure>> {
            Box::pin(async { Err(AuthenticationFailure::new("anyErrorMessage")) })
        }
    }

    #[tokio::test]
    async fn test_sign_in_handler_tags_outcome_with_attempt() {
        let event = sign_in(
            Arc::new(Rejecting),
            AttemptId(7),
            Credentials::new("valid@email.com", "qwerty123"),
        )
        .await;

        assert!(matches!(
            event,
            UiEvent::SignInResolved {
                attempt: AttemptId(7),
                outcome: SubmissionOutcome::Failure { ref message },
            } if message == "anyErrorMessage"
        ));
    }

    #[tokio::test]
    async fn test_recover_handler_uses_port_default() {
        let event = recover_password(Arc::new(Rejecting), "valid@email.com".to_string()).await;
        assert!(matches!(
            event,
            UiEvent::RecoveryResolved { ref email, outcome: SubmissionOutcome::Failure { .. } }
                if email == "valid@email.com"
        ));
    }
}
