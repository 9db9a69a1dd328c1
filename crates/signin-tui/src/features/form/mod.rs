//! Sign-in form feature: fields, buttons, focus and submission.

mod render;
mod state;
mod update;

pub use render::{LOGIN_LABEL, RECOVER_LABEL, SUBMITTING_LABEL, render_sign_in};
pub use state::{Focus, SignInState};
pub use update::{handle_key, handle_paste, handle_recovery_resolved, handle_sign_in_resolved};
