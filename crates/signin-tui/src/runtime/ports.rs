//! Notification and navigation ports backed by the runtime inbox.
//!
//! Port calls become events, so the reducer stays the only place that
//! mutates state.

use signin_core::ports::{Navigator, Notification, Notifier, Route};

use super::inbox::UiEventSender;
use crate::events::UiEvent;

/// Shows notifications as a toast.
pub struct InboxNotifier {
    tx: UiEventSender,
}

impl InboxNotifier {
    pub fn new(tx: UiEventSender) -> Self {
        Self { tx }
    }
}

impl Notifier for InboxNotifier {
    fn notify(&self, notification: Notification) {
        if self.tx.send(UiEvent::Notified(notification)).is_err() {
            tracing::debug!("notification dropped: inbox closed");
        }
    }
}

/// Swaps the mounted screen.
pub struct InboxNavigator {
    tx: UiEventSender,
}

impl InboxNavigator {
    pub fn new(tx: UiEventSender) -> Self {
        Self { tx }
    }
}

impl Navigator for InboxNavigator {
    fn navigate(&self, route: Route) {
        if self.tx.send(UiEvent::Navigated(route)).is_err() {
            tracing::debug!(%route, "navigation dropped: inbox closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::mpsc;

    use super::*;

    #[test]
    fn test_ports_forward_to_inbox() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let notifier = InboxNotifier::new(tx.clone());
        let navigator = InboxNavigator::new(tx);

        notifier.notify(Notification {
            message: "anyErrorMessage".to_string(),
            action: "OK".to_string(),
            duration: Duration::from_millis(5000),
        });
        navigator.navigate(Route::Home);

        assert!(matches!(
            rx.try_recv(),
            Ok(UiEvent::Notified(n)) if n.message == "anyErrorMessage"
        ));
        assert!(matches!(rx.try_recv(), Ok(UiEvent::Navigated(Route::Home))));
    }

    #[test]
    fn test_closed_inbox_is_not_an_error() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        InboxNavigator::new(tx).navigate(Route::Home);
    }
}
