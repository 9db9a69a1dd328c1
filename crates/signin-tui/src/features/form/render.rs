//! Sign-in form rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{Focus, SignInState};
use crate::render_utils::{CardConfig, InputHint, InputLine, input_line, render_card};

pub const LOGIN_LABEL: &str = "[ Log in ]";
pub const RECOVER_LABEL: &str = "[ Recover password ]";
pub const SUBMITTING_LABEL: &str = "Signing in...";

const CARD_WIDTH: u16 = 52;
const CARD_HEIGHT: u16 = 15;
const ACCENT: Color = Color::Cyan;

/// Renders the sign-in card. While a submission is in flight the login button
/// is replaced by a spinner line.
pub fn render_sign_in(frame: &mut Frame, area: Rect, state: &SignInState, spinner: &str) {
    let hints = [
        InputHint::new("Tab", "next"),
        InputHint::new("Enter", "select"),
        InputHint::new("Esc", "quit"),
    ];
    let layout = render_card(
        frame,
        area,
        &CardConfig {
            title: "Welcome back",
            border_color: ACCENT,
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
            hints: &hints,
        },
    );
    let body = layout.body;
    let form = state.form();

    let masked = "•".repeat(form.password().chars().count());
    let email_hint = form.email_violation().filter(|_| state.email_touched);
    let password_hint = form.password_violation().filter(|_| state.password_touched);

    let mut lines = vec![
        label_line("Email", state.focus == Focus::Email),
        input_line(
            &InputLine {
                value: form.email(),
                placeholder: Some("you@example.com"),
                prompt: "> ",
                focused: state.focus == Focus::Email,
                text_color: Color::White,
                accent_color: ACCENT,
            },
            body.width,
        ),
        hint_line(email_hint.map(|rule| rule.message())),
        label_line("Password", state.focus == Focus::Password),
        input_line(
            &InputLine {
                value: &masked,
                placeholder: None,
                prompt: "> ",
                focused: state.focus == Focus::Password,
                text_color: Color::White,
                accent_color: ACCENT,
            },
            body.width,
        ),
        hint_line(password_hint.map(|rule| rule.message())),
        Line::default(),
    ];

    if form.is_submitting() {
        lines.push(
            Line::from(vec![
                Span::styled(spinner.to_string(), Style::default().fg(ACCENT)),
                Span::raw(" "),
                Span::styled(SUBMITTING_LABEL, Style::default().fg(Color::Gray)),
            ])
            .centered(),
        );
    } else {
        lines.push(button_line(
            LOGIN_LABEL,
            state.focus == Focus::Login,
            form.is_login_enabled(),
        ));
    }
    lines.push(Line::default());
    lines.push(button_line(
        RECOVER_LABEL,
        state.focus == Focus::Recover,
        form.is_recover_enabled(),
    ));

    frame.render_widget(Paragraph::new(lines), body);
}

fn label_line(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(Span::styled(label.to_string(), style))
}

fn hint_line(message: Option<&'static str>) -> Line<'static> {
    match message {
        Some(message) => Line::from(Span::styled(
            format!("  {message}"),
            Style::default().fg(Color::Red),
        )),
        None => Line::default(),
    }
}

fn button_line(label: &'static str, focused: bool, enabled: bool) -> Line<'static> {
    let style = match (enabled, focused) {
        (false, false) => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM),
        (false, true) => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::UNDERLINED),
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(ACCENT),
    };
    Line::from(Span::styled(label, style)).centered()
}
