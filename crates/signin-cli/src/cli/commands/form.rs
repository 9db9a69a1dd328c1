//! Interactive form command.

use std::sync::Arc;

use anyhow::Result;
use signin_core::auth::AccountAuthenticator;
use signin_core::config::Config;

pub fn run(config: &Config, email: Option<&str>) -> Result<()> {
    let authenticator = Arc::new(AccountAuthenticator::new(&config.auth));
    signin_tui::run_sign_in(config, authenticator, email)
}
