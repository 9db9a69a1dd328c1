//! Inbox channel types.
//!
//! Spawned work and port adapters send `UiEvent`s here; the runtime drains
//! the receiver once per frame.

use tokio::sync::mpsc;

use crate::events::UiEvent;

pub type UiEventSender = mpsc::UnboundedSender<UiEvent>;
pub type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;
