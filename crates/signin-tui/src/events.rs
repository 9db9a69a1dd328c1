//! UI event types.
//!
//! Everything the reducer reacts to: terminal input, ticks, and results of
//! async work delivered through the runtime inbox.

use crossterm::event::Event;
use signin_core::ports::{Notification, Route};
use signin_core::submission::{AttemptId, SubmissionOutcome};

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Animation and timer cadence.
    Tick,

    /// Raw terminal input.
    Terminal(Event),

    /// The authentication port resolved a sign-in attempt.
    SignInResolved {
        attempt: AttemptId,
        outcome: SubmissionOutcome,
    },

    /// The authentication port resolved a recovery request.
    RecoveryResolved {
        email: String,
        outcome: SubmissionOutcome,
    },

    /// The notification port was invoked.
    Notified(Notification),

    /// The navigation port was invoked.
    Navigated(Route),
}
