//! Application state composition.
//!
//! ```text
//! AppState
//! ├── screen: Screen           (mounted screen: sign-in form or home)
//! ├── toast: Option<Toast>     (notification port output)
//! ├── policy: SubmissionPolicy (shared by every mounted form)
//! ├── spinner_frame            (advanced on Tick)
//! └── should_quit
//! ```

use signin_core::submission::SubmissionPolicy;

use crate::features::form::SignInState;
use crate::features::home::HomeState;
use crate::features::toast::Toast;

/// The mounted screen. Navigation replaces it wholesale.
#[derive(Debug, Clone)]
pub enum Screen {
    SignIn(SignInState),
    Home(HomeState),
}

pub struct AppState {
    pub screen: Screen,
    pub toast: Option<Toast>,
    pub policy: SubmissionPolicy,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(policy: SubmissionPolicy, prefill_email: Option<&str>) -> Self {
        let form = match prefill_email {
            Some(email) => SignInState::with_email(policy.clone(), email),
            None => SignInState::new(policy.clone()),
        };
        Self {
            screen: Screen::SignIn(form),
            toast: None,
            policy,
            spinner_frame: 0,
            should_quit: false,
        }
    }

    /// The sign-in form, if it is the mounted screen.
    pub fn sign_in(&self) -> Option<&SignInState> {
        match &self.screen {
            Screen::SignIn(state) => Some(state),
            Screen::Home(_) => None,
        }
    }

    /// True while an authentication call is outstanding.
    pub fn is_busy(&self) -> bool {
        self.sign_in().is_some_and(|s| s.form().is_submitting())
    }
}
