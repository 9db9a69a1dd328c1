//! Full-screen sign-in form.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod render_utils;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};
use std::sync::Arc;

use anyhow::Result;
pub use runtime::SignInRuntime;
use signin_core::config::Config;
use signin_core::ports::Authenticator;

use crate::state::{AppState, Screen};

/// Runs the interactive sign-in form until the user quits.
///
/// Must be called from within a tokio runtime.
///
/// # Errors
/// Returns an error if stderr is not a terminal or the terminal fails.
pub fn run_sign_in(
    config: &Config,
    authenticator: Arc<dyn Authenticator>,
    prefill_email: Option<&str>,
) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The sign-in form requires a terminal.\n\
             Use `signin login --email ... --password ...` for non-interactive sign-in."
        );
    }

    let state = AppState::new(config.submission_policy(), prefill_email);
    let mut runtime = SignInRuntime::new(state, authenticator)?;
    let result = runtime.run();
    let signed_in = match &runtime.state.screen {
        Screen::Home(home) => Some(home.email.clone()),
        Screen::SignIn(_) => None,
    };
    // Restores the terminal.
    drop(runtime);
    result?;

    if let Some(email) = signed_in {
        writeln!(stderr(), "Signed in as {email}.")?;
    }
    Ok(())
}
