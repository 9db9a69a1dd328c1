//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use signin_core::ports::Route;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::form::{self, SignInState};
use crate::features::home::{self, HomeState};
use crate::features::toast::{self, Toast};
use crate::state::{AppState, Screen};

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            toast::expire(&mut app.toast, Instant::now());
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::SignInResolved { attempt, outcome } => match &mut app.screen {
            Screen::SignIn(state) => form::handle_sign_in_resolved(state, attempt, outcome),
            Screen::Home(_) => {
                tracing::debug!(attempt = attempt.0, "sign-in result after unmount ignored");
                vec![]
            }
        },
        UiEvent::RecoveryResolved { email, outcome } => match &mut app.screen {
            Screen::SignIn(state) => form::handle_recovery_resolved(state, &email, outcome),
            Screen::Home(_) => {
                tracing::debug!(%email, "recovery result after unmount ignored");
                vec![]
            }
        },
        UiEvent::Notified(notification) => {
            app.toast = Some(Toast::new(notification, Instant::now()));
            vec![]
        }
        UiEvent::Navigated(route) => {
            navigate(app, route);
            vec![]
        }
    }
}

/// Swaps the mounted screen for `route`.
fn navigate(app: &mut AppState, route: Route) {
    app.screen = match route {
        Route::Home => {
            let email = match &app.screen {
                Screen::SignIn(state) => state
                    .controller
                    .submitted_email()
                    .unwrap_or(state.form().email())
                    .to_string(),
                Screen::Home(state) => state.email.clone(),
            };
            Screen::Home(HomeState { email })
        }
        Route::SignIn => Screen::SignIn(SignInState::new(app.policy.clone())),
    };
    tracing::info!(%route, "navigated");
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            if let Screen::SignIn(state) = &mut app.screen {
                form::handle_paste(state, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }
    let dismiss = key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('k'));
    if dismiss && app.toast.take().is_some() {
        return vec![];
    }
    if key.code == KeyCode::Esc {
        return vec![UiEffect::Quit];
    }

    match &mut app.screen {
        Screen::SignIn(state) => form::handle_key(state, key),
        Screen::Home(state) => home::handle_key(state, key),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use signin_core::ports::Notification;
    use signin_core::submission::{AttemptId, SubmissionOutcome, SubmissionPolicy};

    use super::*;
    use crate::features::form::Focus;

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn ctrl(app: &mut AppState, c: char) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::CONTROL,
            ))),
        )
    }

    fn submitted_app() -> AppState {
        let mut app = AppState::new(SubmissionPolicy::default(), Some("valid@email.com"));
        update(
            &mut app,
            UiEvent::Terminal(Event::Paste("qwerty123".to_string())),
        );
        let effects = press(&mut app, KeyCode::Enter);
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::SignIn { attempt: AttemptId(0), .. }]
        ));
        app
    }

    fn notification(message: &str) -> Notification {
        Notification {
            message: message.to_string(),
            action: "OK".to_string(),
            duration: Duration::from_millis(5000),
        }
    }

    #[test]
    fn test_success_flow_mounts_home() {
        let mut app = submitted_app();
        assert!(app.is_busy());

        let effects = update(
            &mut app,
            UiEvent::SignInResolved {
                attempt: AttemptId(0),
                outcome: SubmissionOutcome::Success,
            },
        );
        assert_eq!(effects, vec![UiEffect::Navigate(Route::Home)]);
        // Form stays in its loading state until navigation swaps it out.
        assert!(app.is_busy());

        update(&mut app, UiEvent::Navigated(Route::Home));
        assert!(matches!(
            &app.screen,
            Screen::Home(HomeState { email }) if email == "valid@email.com"
        ));
    }

    #[test]
    fn test_edits_during_submit_do_not_change_signed_in_email() {
        let mut app = submitted_app();

        press(&mut app, KeyCode::BackTab);
        for c in "x.evil".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        update(&mut app, UiEvent::Terminal(Event::Paste("more".to_string())));
        assert_eq!(app.sign_in().unwrap().form().email(), "valid@email.com");

        update(
            &mut app,
            UiEvent::SignInResolved {
                attempt: AttemptId(0),
                outcome: SubmissionOutcome::Success,
            },
        );
        update(&mut app, UiEvent::Navigated(Route::Home));
        assert!(matches!(
            &app.screen,
            Screen::Home(HomeState { email }) if email == "valid@email.com"
        ));
    }

    #[test]
    fn test_failure_flow_shows_toast_and_restores_form() {
        let mut app = submitted_app();

        let effects = update(
            &mut app,
            UiEvent::SignInResolved {
                attempt: AttemptId(0),
                outcome: SubmissionOutcome::Failure {
                    message: "anyErrorMessage".to_string(),
                },
            },
        );
        assert_eq!(
            effects,
            vec![UiEffect::Notify(notification("anyErrorMessage"))]
        );
        assert!(!app.is_busy());
        assert!(app.sign_in().unwrap().form().is_login_enabled());

        update(&mut app, UiEvent::Notified(notification("anyErrorMessage")));
        assert_eq!(
            app.toast.as_ref().map(|t| t.notification.message.as_str()),
            Some("anyErrorMessage")
        );
    }

    #[test]
    fn test_late_result_after_unmount_is_ignored() {
        let mut app = submitted_app();
        update(&mut app, UiEvent::Navigated(Route::Home));

        let effects = update(
            &mut app,
            UiEvent::SignInResolved {
                attempt: AttemptId(0),
                outcome: SubmissionOutcome::Failure {
                    message: "late".to_string(),
                },
            },
        );
        assert!(effects.is_empty());
        assert!(matches!(app.screen, Screen::Home(_)));
    }

    #[test]
    fn test_esc_dismisses_toast_before_quitting() {
        let mut app = AppState::new(SubmissionPolicy::default(), None);
        update(&mut app, UiEvent::Notified(notification("anyErrorMessage")));

        assert!(press(&mut app, KeyCode::Esc).is_empty());
        assert!(app.toast.is_none());
        assert_eq!(press(&mut app, KeyCode::Esc), vec![UiEffect::Quit]);
    }

    #[test]
    fn test_ctrl_k_dismisses_toast_and_ctrl_c_quits() {
        let mut app = AppState::new(SubmissionPolicy::default(), None);
        update(&mut app, UiEvent::Notified(notification("anyErrorMessage")));

        assert!(ctrl(&mut app, 'k').is_empty());
        assert!(app.toast.is_none());
        assert_eq!(ctrl(&mut app, 'c'), vec![UiEffect::Quit]);
    }

    #[test]
    fn test_tick_expires_toast_and_advances_spinner() {
        let mut app = AppState::new(SubmissionPolicy::default(), None);
        let mut expired = notification("gone");
        expired.duration = Duration::ZERO;
        update(&mut app, UiEvent::Notified(expired));

        update(&mut app, UiEvent::Tick);
        assert!(app.toast.is_none());
        assert_eq!(app.spinner_frame, 1);
    }

    #[test]
    fn test_sign_out_mounts_fresh_form() {
        let mut app = submitted_app();
        update(&mut app, UiEvent::Navigated(Route::Home));

        assert_eq!(
            press(&mut app, KeyCode::Char('s')),
            vec![UiEffect::Navigate(Route::SignIn)]
        );
        update(&mut app, UiEvent::Navigated(Route::SignIn));

        let form = app.sign_in().unwrap().form();
        assert_eq!(form.email(), "");
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_recovery_result_notifies() {
        let mut app = AppState::new(SubmissionPolicy::default(), Some("valid@email.com"));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(
            press(&mut app, KeyCode::Enter),
            vec![UiEffect::RecoverPassword {
                email: "valid@email.com".to_string()
            }]
        );
        assert!(press(&mut app, KeyCode::Enter).is_empty());

        let effects = update(
            &mut app,
            UiEvent::RecoveryResolved {
                email: "valid@email.com".to_string(),
                outcome: SubmissionOutcome::Success,
            },
        );
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::Notify(n)]
                if n.message == "Password recovery instructions sent to valid@email.com."
        ));
    }

    #[test]
    fn test_recovery_result_after_sign_out_is_ignored() {
        let mut app = submitted_app();
        if let Screen::SignIn(state) = &mut app.screen {
            state.focus = Focus::Recover;
        }
        assert!(matches!(
            press(&mut app, KeyCode::Enter).as_slice(),
            [UiEffect::RecoverPassword { .. }]
        ));
        update(&mut app, UiEvent::Navigated(Route::Home));
        update(&mut app, UiEvent::Navigated(Route::SignIn));

        let effects = update(
            &mut app,
            UiEvent::RecoveryResolved {
                email: "valid@email.com".to_string(),
                outcome: SubmissionOutcome::Success,
            },
        );
        assert!(effects.is_empty());
    }
}
