//! Shared drawing helpers: centered cards, input lines, key hints.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::common::truncate_start_with_ellipsis;

/// Centers a `width` x `height` box inside `area`, shrinking it to fit.
pub fn calculate_card_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Clears the background and draws a titled border.
pub fn render_card_container(frame: &mut Frame, area: Rect, title: &str, border_color: Color) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
}

pub struct CardConfig<'a> {
    pub title: &'a str,
    pub border_color: Color,
    pub width: u16,
    pub height: u16,
    pub hints: &'a [InputHint<'a>],
}

pub struct CardLayout {
    pub card: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Draws a centered card and returns where its body and hint footer go.
pub fn render_card(frame: &mut Frame, area: Rect, config: &CardConfig<'_>) -> CardLayout {
    let card = calculate_card_area(area, config.width, config.height);
    render_card_container(frame, card, config.title, config.border_color);

    let inner = Rect::new(
        card.x + 1,
        card.y + 1,
        card.width.saturating_sub(2),
        card.height.saturating_sub(2),
    );

    let footer_height = u16::from(!config.hints.is_empty());
    let body_height = inner.height.saturating_sub(footer_height);
    let footer = Rect::new(inner.x, inner.y + body_height, inner.width, footer_height);
    let body = Rect::new(inner.x, inner.y, inner.width, body_height);

    if !config.hints.is_empty() {
        render_hints(frame, footer, config.hints, config.border_color);
    }

    CardLayout { card, body, footer }
}

pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// A single-line text input: "> <text>█".
pub struct InputLine<'a> {
    pub value: &'a str,
    pub placeholder: Option<&'a str>,
    pub prompt: &'a str,
    pub focused: bool,
    pub text_color: Color,
    pub accent_color: Color,
}

/// Builds the spans of an input line that fits in `width` columns.
pub fn input_line(input: &InputLine<'_>, width: u16) -> Line<'static> {
    let prompt_style = if input.focused {
        Style::default().fg(input.accent_color)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let max_text_width = width.saturating_sub(input.prompt.len() as u16 + 1) as usize;

    let mut spans = vec![Span::styled(input.prompt.to_string(), prompt_style)];
    if input.value.is_empty() {
        if input.focused {
            spans.push(Span::styled("█", Style::default().fg(input.accent_color)));
        }
        if let Some(placeholder) = input.placeholder {
            spans.push(Span::styled(
                truncate_start_with_ellipsis(placeholder, max_text_width),
                Style::default().fg(Color::DarkGray),
            ));
        }
    } else {
        spans.push(Span::styled(
            truncate_start_with_ellipsis(input.value, max_text_width),
            Style::default().fg(input.text_color),
        ));
        if input.focused {
            spans.push(Span::styled("█", Style::default().fg(input.accent_color)));
        }
    }
    Line::from(spans)
}

/// Renders a centered line of keyboard hints.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint], highlight_color: Color) {
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(highlight_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_area_is_centered_and_clamped() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(calculate_card_area(area, 40, 10), Rect::new(20, 7, 40, 10));

        let small = Rect::new(0, 0, 20, 6);
        let card = calculate_card_area(small, 40, 10);
        assert_eq!((card.width, card.height), (16, 4));
    }

    #[test]
    fn test_input_line_shows_cursor_only_when_focused() {
        let mut input = InputLine {
            value: "abc",
            placeholder: None,
            prompt: "> ",
            focused: true,
            text_color: Color::White,
            accent_color: Color::Cyan,
        };
        let text: String = input_line(&input, 20)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "> abc█");

        input.focused = false;
        let text: String = input_line(&input, 20)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "> abc");
    }
}
