//! Main Application
//!
//! The App wires the terminal to the core:
//! - An input reader task turns terminal key presses into `Action::Input`
//! - The blink ticker produces `Action::Blink`
//! - One-shot timers (via [`TokioScheduler`]) produce the reaction restores
//!
//! All of them go through the same bounded queue. The run loop is the only
//! consumer: it applies each action to the [`Companion`] and redraws.

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::task::JoinHandle;

use waifu_core::queue::{self, ActionQueue, ActionReceiver};
use waifu_core::{Action, Assets, Companion, Key, Settings, Timings, TokioScheduler};

use crate::render;
use crate::theme::Theme;

/// Main application state
pub struct App {
    companion: Companion<TokioScheduler>,
    queue: ActionQueue,
    actions: ActionReceiver,
    theme: Theme,
}

impl App {
    /// Build the app from loaded settings and assets
    #[must_use]
    pub fn new(settings: &Settings, assets: Assets, theme: Theme) -> Self {
        Self::with_timings(settings, assets, theme, Timings::default())
    }

    /// Build the app with custom timer settings
    #[must_use]
    pub fn with_timings(
        settings: &Settings,
        assets: Assets,
        theme: Theme,
        timings: Timings,
    ) -> Self {
        let (queue, actions) = queue::channel();
        let scheduler = TokioScheduler::new(queue.clone());
        let companion = Companion::new(settings, assets, scheduler).with_timings(timings);

        Self {
            companion,
            queue,
            actions,
            theme,
        }
    }

    /// A producer handle for the action queue
    #[must_use]
    pub fn queue(&self) -> ActionQueue {
        self.queue.clone()
    }

    /// The companion state (read-only)
    #[must_use]
    pub fn companion(&self) -> &Companion<TokioScheduler> {
        &self.companion
    }

    /// Main event loop, reading keys from the terminal
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let reader = spawn_input_reader(self.queue.clone());
        let result = self.run_loop(terminal).await;
        reader.abort();
        result
    }

    /// Consume the queue until Quit, starting and stopping the blink ticker
    ///
    /// Input has to be enqueued by someone else through [`App::queue`].
    pub async fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let blink = self.companion.timings().blink_scheduler().spawn(self.queue.clone());
        tracing::info!("Companion running");

        // Render initial frame immediately so user sees UI
        self.draw(terminal)?;

        while self.companion.is_running() {
            let Some(action) = self.actions.next().await else {
                break;
            };

            let is_blink = matches!(action, Action::Blink(_));
            let before = self.companion.screen().character.revision();

            self.companion.handle(action);

            if !self.companion.is_running() {
                break;
            }
            // An idempotent blink has nothing to show
            if is_blink && self.companion.screen().character.revision() == before {
                continue;
            }
            self.draw(terminal)?;
        }

        // Producers parked on a full queue see it closed and give up
        self.actions.close();
        blink.shutdown().await;
        tracing::info!(mood = self.companion.mood().value(), "Companion stopped");
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        terminal.draw(|frame| render::draw(frame, self.companion.screen(), &self.theme))?;
        Ok(())
    }
}

/// Translate a terminal key press
///
/// Only presses count; release and repeat events are dropped.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Key::Interrupt)
        }
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        _ => None,
    }
}

/// Forward terminal events into the queue until it closes
fn spawn_input_reader(queue: ActionQueue) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut events = EventStream::new();

        while let Some(event) = events.next().await {
            let action = match event {
                Ok(Event::Key(key)) => map_key(key).map(Action::Input),
                Ok(Event::Resize(..)) => Some(Action::Redraw),
                Ok(_) => None,
                Err(e) => {
                    tracing::warn!(error = %e, "Terminal event stream failed");
                    break;
                }
            };

            if let Some(action) = action {
                if queue.enqueue(action).await.is_err() {
                    break;
                }
            }
        }
        tracing::debug!("Input reader stopped");
    })
}
