//! Bundled local authenticator.
//!
//! Checks credentials against the accounts listed in config after a simulated
//! delay. With no accounts configured every sign-in succeeds.

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;

use crate::config::{Account, AuthConfig};
use crate::error::AuthenticationFailure;
use crate::ports::{Authenticator, Credentials};

/// Authenticator backed by the `[auth]` config section.
#[derive(Debug, Clone)]
pub struct AccountAuthenticator {
    accounts: Arc<[Account]>,
    latency: Duration,
    failure_message: String,
}

impl AccountAuthenticator {
    pub fn new(config: &AuthConfig) -> Self {
        if config.accounts.is_empty() {
            tracing::warn!("no accounts configured; every sign-in will succeed");
        }
        Self {
            accounts: config.accounts.clone().into(),
            latency: Duration::from_millis(config.latency_ms),
            failure_message: config.failure_message.clone(),
        }
    }

    /// True if the credentials match a configured account (or none are configured).
    pub fn accepts(&self, credentials: &Credentials) -> bool {
        self.accounts.is_empty()
            || self.accounts.iter().any(|account| {
                account.email.eq_ignore_ascii_case(&credentials.email)
                    && account.password == credentials.password
            })
    }
}

impl Authenticator for AccountAuthenticator {
    fn sign_in(
        &self,
        credentials: Credentials,
    ) -> BoxFuture<'static, Result<(), AuthenticationFailure>> {
        let accepted = self.accepts(&credentials);
        let latency = self.latency;
        let failure_message = self.failure_message.clone();
        Box::pin(async move {
            tokio::time::sleep(latency).await;
            if accepted {
                tracing::debug!(email = %credentials.email, "credentials accepted");
                Ok(())
            } else {
                tracing::debug!(email = %credentials.email, "credentials rejected");
                Err(AuthenticationFailure::new(failure_message))
            }
        })
    }

    fn recover_password(
        &self,
        email: String,
    ) -> BoxFuture<'static, Result<(), AuthenticationFailure>> {
        // Unknown addresses get the same answer as known ones.
        let latency = self.latency;
        Box::pin(async move {
            tokio::time::sleep(latency).await;
            tracing::debug!(%email, "recovery instructions queued");
            Ok(())
        })
    }
}
