//! Home screen mounted after a successful sign-in.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use signin_core::ports::Route;

use crate::effects::UiEffect;
use crate::render_utils::{CardConfig, InputHint, render_card};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeState {
    pub email: String,
}

pub fn handle_key(_state: &HomeState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char('s') => vec![UiEffect::Navigate(Route::SignIn)],
        KeyCode::Char('q') => vec![UiEffect::Quit],
        _ => vec![],
    }
}

pub fn render_home(frame: &mut Frame, area: Rect, state: &HomeState) {
    let hints = [InputHint::new("s", "sign out"), InputHint::new("q", "quit")];
    let layout = render_card(
        frame,
        area,
        &CardConfig {
            title: "Home",
            border_color: Color::Green,
            width: 50,
            height: 7,
            hints: &hints,
        },
    );

    let lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled("Signed in as ", Style::default().fg(Color::Gray)),
            Span::styled(
                state.email.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ])
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines), layout.body);
}
