//! Snack-bar toast: the terminal rendering of the notification port.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use signin_core::ports::Notification;
use unicode_width::UnicodeWidthStr;

use crate::common::text::truncate_with_ellipsis;

const TOAST_HEIGHT: u16 = 3;

/// A visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub notification: Notification,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(notification: Notification, now: Instant) -> Self {
        let expires_at = now + notification.duration;
        Self {
            notification,
            expires_at,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Drops the toast once its duration has elapsed.
pub fn expire(toast: &mut Option<Toast>, now: Instant) {
    if toast.as_ref().is_some_and(|t| t.is_expired(now)) {
        tracing::debug!("toast expired");
        *toast = None;
    }
}

/// Draws the toast along the bottom edge of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    if area.height < TOAST_HEIGHT || area.width < 8 {
        return;
    }
    let action = format!("[{}]", toast.notification.action);
    let max_message = (area.width as usize).saturating_sub(action.width() + 7);
    let message = truncate_with_ellipsis(&toast.notification.message, max_message);

    let content_width = message.width() + action.width() + 3;
    let width = (content_width as u16 + 2).min(area.width.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + area.height - TOAST_HEIGHT;
    let toast_area = Rect::new(x, y, width, TOAST_HEIGHT);

    frame.render_widget(Clear, toast_area);
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(message, Style::default().fg(Color::White)),
        Span::raw("  "),
        Span::styled(
            action,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(line).block(block), toast_area);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn notification() -> Notification {
        Notification {
            message: "anyErrorMessage".to_string(),
            action: "OK".to_string(),
            duration: Duration::from_millis(5000),
        }
    }

    #[test]
    fn test_toast_expires_after_duration() {
        let now = Instant::now();
        let mut toast = Some(Toast::new(notification(), now));

        expire(&mut toast, now + Duration::from_millis(4999));
        assert!(toast.is_some());

        expire(&mut toast, now + Duration::from_millis(5000));
        assert!(toast.is_none());
    }

    #[test]
    fn test_expire_without_toast_is_noop() {
        let mut toast = None;
        expire(&mut toast, Instant::now());
        assert!(toast.is_none());
    }
}
