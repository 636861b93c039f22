//! Waifu TUI Entry Point
//!
//! Launches the terminal companion.
//!
//! Environment:
//!   WAIFU_CONFIG_DIR  Config directory (default: ~/.config/cliwaifutamagotchi)
//!   WAIFU_ASSETS_DIR  Asset directory (default: ./assets)
//!   RUST_LOG          Log filter (default: info), written to waifu.log

use std::fs::{self, OpenOptions};
use std::io::{self, IsTerminal};
use std::panic;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use waifu_core::{config_dir, load_palette, load_settings, Assets, FsAssets};
use waifu_tui::{App, Theme};

/// Log file inside the config directory
const LOG_FILE: &str = "waifu.log";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Check if we have a TTY before attempting initialization
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: waifu-tui requires a terminal (TTY)");
        std::process::exit(1);
    }

    let config_dir = config_dir()?;
    init_logging(&config_dir)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Waifu TUI starting");

    // Everything fatal happens before the terminal is touched
    let settings = load_settings(&config_dir);
    let palette = load_palette(&config_dir).context("Could not load palette")?;
    let theme = Theme::from_palette(&palette)?;
    let assets_source = FsAssets::from_env();
    let assets = Assets::load(&assets_source).with_context(|| {
        format!("Could not load assets from {}", assets_source.root().display())
    })?;

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(&settings, assets, theme);
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("Waifu TUI exiting");
    result
}

/// Log to a file; the terminal belongs to the UI
fn init_logging(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(filter)
        .init();

    Ok(())
}
