//! Pure view functions for the TUI.
//!
//! Render functions take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use ratatui::Frame;

use crate::features::form::render_sign_in;
use crate::features::home::render_home;
use crate::features::toast::render_toast;
use crate::state::{AppState, Screen};

/// Spinner frames for the submitting indicator.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    match &app.screen {
        Screen::SignIn(state) => {
            let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
            render_sign_in(frame, area, state, spinner);
        }
        Screen::Home(state) => render_home(frame, area, state),
    }

    if let Some(toast) = &app.toast {
        render_toast(frame, area, toast);
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use signin_core::ports::Notification;
    use signin_core::submission::SubmissionPolicy;

    use super::*;
    use crate::features::form::{LOGIN_LABEL, RECOVER_LABEL, SUBMITTING_LABEL, SignInState};
    use crate::features::home::HomeState;
    use crate::features::toast::Toast;

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn filled_state() -> SignInState {
        let mut state = SignInState::with_email(SubmissionPolicy::default(), "valid@email.com");
        state.controller.set_password("qwerty123");
        state
    }

    #[test]
    fn test_idle_form_shows_both_buttons_and_masks_password() {
        let mut app = AppState::new(SubmissionPolicy::default(), None);
        app.screen = Screen::SignIn(filled_state());

        let screen = draw(&app);

        assert!(screen.contains(LOGIN_LABEL));
        assert!(screen.contains(RECOVER_LABEL));
        assert!(screen.contains("valid@email.com"));
        assert!(screen.contains("•••••••••"));
        assert!(!screen.contains("qwerty123"));
        assert!(!screen.contains(SUBMITTING_LABEL));
    }

    #[test]
    fn test_submitting_hides_login_button_and_shows_spinner() {
        let mut state = filled_state();
        assert!(state.controller.click_login().is_some());
        let mut app = AppState::new(SubmissionPolicy::default(), None);
        app.screen = Screen::SignIn(state);

        let screen = draw(&app);

        assert!(!screen.contains(LOGIN_LABEL));
        assert!(screen.contains(SUBMITTING_LABEL));
        assert!(screen.contains("◐"));
        assert!(screen.contains(RECOVER_LABEL));
    }

    #[test]
    fn test_field_hint_shown_only_after_edit() {
        let app = AppState::new(SubmissionPolicy::default(), None);
        assert!(!draw(&app).contains("This field is required"));

        let mut app = AppState::new(SubmissionPolicy::default(), Some("invalidEmail"));
        if let Screen::SignIn(state) = &mut app.screen {
            state.password_touched = true;
        }
        let screen = draw(&app);
        assert!(screen.contains("Enter a valid email address"));
        assert!(screen.contains("This field is required"));
    }

    #[test]
    fn test_toast_and_home_render() {
        let mut app = AppState::new(SubmissionPolicy::default(), None);
        app.screen = Screen::Home(HomeState {
            email: "valid@email.com".to_string(),
        });
        app.toast = Some(Toast::new(
            Notification {
                message: "anyErrorMessage".to_string(),
                action: "OK".to_string(),
                duration: Duration::from_millis(5000),
            },
            Instant::now(),
        ));

        let screen = draw(&app);

        assert!(screen.contains("Signed in as valid@email.com"));
        assert!(screen.contains("anyErrorMessage"));
        assert!(screen.contains("[OK]"));
    }
}
