//! Waifu Core - Headless State Core for the CLI Waifu Tamagotchi
//!
//! This crate owns every piece of state the companion has: what she looks
//! like, how happy she is, which panel currently owns the screen, and which
//! actions are locked. It knows nothing about terminals. A surface (the
//! ratatui TUI, or a test) feeds it [`Action`]s and renders its [`Screen`].
//!
//! # Architecture
//!
//! ```text
//!  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐
//!  │ input reader │  │ blink ticker │  │ one-shot timers  │   producers
//!  └──────┬───────┘  └──────┬───────┘  └────────┬─────────┘
//!         │ Input(Key)      │ Blink(Eyes)       │ EncourageEnd / ReactionEnd
//!         └─────────────────┼───────────────────┘
//!                           ▼
//!                ┌─────────────────────┐
//!                │  ActionQueue (20)   │   bounded, FIFO, backpressure
//!                └──────────┬──────────┘
//!                           ▼
//!                ┌─────────────────────┐
//!                │     Companion       │   single consumer
//!                │  Pet · Mood · Overlay · Dispatcher · locks
//!                └──────────┬──────────┘
//!                           ▼
//!                ┌─────────────────────┐
//!                │       Screen        │   presentation model
//!                └─────────────────────┘
//! ```
//!
//! # Module Overview
//!
//! - [`actions`]: The tagged command type carried by the queue
//! - [`queue`]: Bounded serial action queue
//! - [`schedule`]: Deferred actions (tokio timers, or a virtual clock for tests)
//! - [`blink`]: Periodic blink producer
//! - [`mood`]: Bounded happiness value and its gauge
//! - [`overlay`]: Overlay mode state machine
//! - [`input`]: Key bindings and two-tier dispatch
//! - [`screen`]: Named regions, grid placements, lists and focus
//! - [`pet`]: Character appearance
//! - [`companion`]: The state machine object tying it together
//! - [`assets`]: ASCII art loading and catalogs
//! - [`config`]: Settings and palette files
//!
//! # No TUI Dependencies
//!
//! Nothing here depends on ratatui or crossterm. The architectural
//! enforcement tests keep it that way.

#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod actions;
pub mod assets;
pub mod blink;
pub mod companion;
pub mod config;
pub mod error;
pub mod input;
pub mod mood;
pub mod overlay;
pub mod pet;
pub mod queue;
pub mod schedule;
pub mod screen;

// Re-exports for convenience
pub use actions::Action;
pub use assets::{AssetSource, Assets, Catalog, CatalogEntry, FsAssets, Gift};
pub use blink::{BlinkHandle, BlinkScheduler, Eyes};
pub use companion::{Companion, Timings};
pub use config::{
    config_dir, load_palette, load_settings, KeyBindings, Palette, Settings, CONFIG_DIR_NAME,
};
pub use error::{AssetError, ConfigError, QueueClosed, StartupError};
pub use input::{Dispatcher, Intent, Key};
pub use mood::Mood;
pub use overlay::{Overlay, OverlayMode};
pub use pet::{Expression, PetState};
pub use queue::{ActionQueue, ActionReceiver, QUEUE_CAPACITY};
pub use schedule::{ManualScheduler, Scheduler, TokioScheduler};
pub use screen::{
    ListItem, Placement, Region, Screen, SelectList, TextPanel, Track, GRID_COLUMNS, GRID_ROWS,
};
