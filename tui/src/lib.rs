//! Waifu TUI - Terminal interface for the CLI waifu tamagotchi
//!
//! A ratatui surface over the headless `waifu-core` state machine.
//!
//! # Architecture
//!
//! - **App**: Input reader, blink ticker and the single queue consumer
//! - **Compositor**: Maps grid placements onto terminal rectangles
//! - **Widgets**: Bordered text panels and select lists
//! - **Theme**: Palette colours resolved for ratatui

pub mod app;
pub mod compositor;
pub mod render;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use theme::Theme;
