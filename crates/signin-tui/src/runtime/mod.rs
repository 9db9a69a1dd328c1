//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! The reducer stays pure and returns effects; every side effect happens
//! here. Async results come back through the inbox channel and are drained
//! once per frame.

mod handlers;
mod inbox;
mod ports;

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
pub use ports::{InboxNavigator, InboxNotifier};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use signin_core::interrupt;
use signin_core::ports::{Authenticator, Navigator, Notifier};
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Frame interval while a submission is in flight (spinner animation).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll interval when idle.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen sign-in runtime.
///
/// Must be created inside a tokio runtime; authentication calls are spawned
/// onto it.
pub struct SignInRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    authenticator: Arc<dyn Authenticator>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
}

impl SignInRuntime {
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(state: AppState, authenticator: Arc<dyn Authenticator>) -> Result<Self> {
        terminal::install_panic_hook();
        interrupt::set_restore_hook(|| {
            let _ = terminal::restore_terminal();
        });
        interrupt::reset();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            authenticator,
            notifier: Arc::new(InboxNotifier::new(inbox_tx.clone())),
            navigator: Arc::new(InboxNavigator::new(inbox_tx.clone())),
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs the event loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if drawing or reading terminal input fails.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            if interrupt::is_interrupted() {
                self.state.should_quit = true;
                break;
            }

            for event in self.collect_events()? {
                // Ticks drive rendering; input batches until the next one.
                if matches!(event, UiEvent::Tick) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| render::render(&self.state, frame))?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects inbox results, terminal input and the tick.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let tick_interval = if self.state.is_busy() {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        // Input is rendered on the next tick, so tick right after it too.
        let had_input = events.iter().any(|e| matches!(e, UiEvent::Terminal(_)));
        if had_input || self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async handler and sends its result event to the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::SignIn {
                attempt,
                credentials,
            } => {
                let authenticator = Arc::clone(&self.authenticator);
                self.spawn_effect(move || handlers::sign_in(authenticator, attempt, credentials));
            }
            UiEffect::RecoverPassword { email } => {
                let authenticator = Arc::clone(&self.authenticator);
                self.spawn_effect(move || handlers::recover_password(authenticator, email));
            }
            UiEffect::Navigate(route) => self.navigator.navigate(route),
            UiEffect::Notify(notification) => self.notifier.notify(notification),
        }
    }
}

impl Drop for SignInRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
