//! Sign-in form model.
//!
//! ## Module Structure
//!
//! - `validators.rs`: field rules as pure predicates, composed by conjunction
//! - `state.rs`: `SignInForm` (field values and derived validity flags)

mod state;
pub mod validators;

pub use state::SignInForm;
pub use validators::{EMAIL_RULES, PASSWORD_RULES, Rule};
