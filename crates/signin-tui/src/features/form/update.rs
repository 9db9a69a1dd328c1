//! Sign-in form reducer.
//!
//! Maps keys to field edits and button clicks. Clicks go through the
//! submission controller; its commands become effects.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use signin_core::submission::{AttemptId, SubmissionOutcome};

use super::state::{Focus, SignInState};
use crate::common::{pop_grapheme, sanitize_for_field};
use crate::effects::UiEffect;

/// Handles a key press on the sign-in screen.
pub fn handle_key(state: &mut SignInState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.focus = state.focus.next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.focus = state.focus.prev();
            vec![]
        }
        KeyCode::Enter => activate(state),
        KeyCode::Backspace => {
            if let Some(value) = state.focused_value() {
                let mut value = value.to_string();
                if pop_grapheme(&mut value) {
                    state.set_focused_value(value);
                }
            }
            vec![]
        }
        KeyCode::Char('u') if ctrl => {
            if state.focused_value().is_some_and(|v| !v.is_empty()) {
                state.set_focused_value(String::new());
            }
            vec![]
        }
        KeyCode::Char(c) if !ctrl && !alt => {
            if let Some(value) = state.focused_value() {
                let mut value = value.to_string();
                value.push(c);
                state.set_focused_value(value);
            }
            vec![]
        }
        _ => vec![],
    }
}

/// Inserts pasted text into the focused field.
pub fn handle_paste(state: &mut SignInState, text: &str) {
    let sanitized = sanitize_for_field(text);
    if sanitized.is_empty() {
        return;
    }
    if let Some(value) = state.focused_value() {
        let value = format!("{value}{sanitized}");
        state.set_focused_value(value);
    }
}

/// Applies a sign-in result to the mounted form.
pub fn handle_sign_in_resolved(
    state: &mut SignInState,
    attempt: AttemptId,
    outcome: SubmissionOutcome,
) -> Vec<UiEffect> {
    state
        .controller
        .resolve(attempt, outcome)
        .into_iter()
        .map(UiEffect::from)
        .collect()
}

/// Applies a recovery result to the mounted form.
///
/// Results for a recovery this form did not start are dropped.
pub fn handle_recovery_resolved(
    state: &mut SignInState,
    email: &str,
    outcome: SubmissionOutcome,
) -> Vec<UiEffect> {
    state
        .controller
        .resolve_recovery(email, outcome)
        .into_iter()
        .map(UiEffect::from)
        .collect()
}

fn activate(state: &mut SignInState) -> Vec<UiEffect> {
    let command = match state.focus {
        Focus::Email => {
            state.focus = Focus::Password;
            return vec![];
        }
        Focus::Password | Focus::Login => state.controller.click_login(),
        Focus::Recover => state.controller.click_recover(),
    };
    command.map(UiEffect::from).into_iter().collect()
}
