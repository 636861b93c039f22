//! Configuration Files
//!
//! Two JSON files live in the per-user config directory
//! (`$XDG_CONFIG_HOME/cliwaifutamagotchi`, typically
//! `~/.config/cliwaifutamagotchi`):
//!
//! - `settings.json`: name, default chat line, vim navigation, key bindings
//! - `palette.json`: the five colours applied to every panel
//!
//! Both are created with defaults on first run.
//!
//! # Failure Policy
//!
//! Settings never fail: a malformed file means built-in defaults and a
//! warning. The palette is stricter. If it exists but cannot be read or
//! parsed, startup stops with [`ConfigError`].
//!
//! # Example Settings
//!
//! ```json
//! {
//!   "name": "Waifu",
//!   "defaultMessage": "...",
//!   "vimNavigation": false,
//!   "keys": {
//!     "encourage": "1",
//!     "dressup": "2",
//!     "gift": "3",
//!     "backgroundMode": "b",
//!     "quit": "q"
//!   }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "cliwaifutamagotchi";

/// Settings file name
pub const SETTINGS_FILE: &str = "settings.json";

/// Palette file name
pub const PALETTE_FILE: &str = "palette.json";

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "WAIFU_CONFIG_DIR";

// =============================================================================
// Settings
// =============================================================================

/// Key bound to each action (first character is used)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Show an encouragement
    pub encourage: String,
    /// Open the dress-up list
    #[serde(rename = "dressup")]
    pub dress_up: String,
    /// Open the gift list
    pub gift: String,
    /// Enter background mode
    #[serde(rename = "backgroundMode")]
    pub background_mode: String,
    /// Exit
    pub quit: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            encourage: "1".to_string(),
            dress_up: "2".to_string(),
            gift: "3".to_string(),
            background_mode: "b".to_string(),
            quit: "q".to_string(),
        }
    }
}

/// User settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Character name, shown as the character panel title and in chat
    pub name: String,
    /// Chat line shown at startup
    pub default_message: String,
    /// Enable `h`/`j`/`k`/`l` list navigation
    pub vim_navigation: bool,
    /// Action key bindings
    pub keys: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            name: "Waifu".to_string(),
            default_message: "...".to_string(),
            vim_navigation: false,
            keys: KeyBindings::default(),
        }
    }
}

// =============================================================================
// Palette
// =============================================================================

/// Panel colours as `#rrggbb` strings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Panel background
    pub background: String,
    /// Text
    pub foreground: String,
    /// Borders
    pub border: String,
    /// Selected list entry background
    pub accent: String,
    /// Border titles
    pub title: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#1e1e2e".to_string(),
            foreground: "#cdd6f4".to_string(),
            border: "#cba6f7".to_string(),
            accent: "#eba0ac".to_string(),
            title: "#b4befe".to_string(),
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Resolve the config directory
///
/// `$WAIFU_CONFIG_DIR` wins; otherwise the platform config dir joined with
/// [`CONFIG_DIR_NAME`].
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|d| d.join(CONFIG_DIR_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// Load `settings.json` from `dir`, creating it with defaults if missing
///
/// Never fails. Any problem is logged and answered with defaults.
#[must_use]
pub fn load_settings(dir: &Path) -> Settings {
    let path = dir.join(SETTINGS_FILE);

    if !path.exists() {
        if let Err(e) = write_default(&path, &Settings::default()) {
            tracing::warn!(error = %e, "Could not create default settings file");
        }
        return Settings::default();
    }

    match read_json::<Settings>(&path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed settings, using defaults");
            Settings::default()
        }
    }
}

/// Load `palette.json` from `dir`, creating it with defaults if missing
pub fn load_palette(dir: &Path) -> Result<Palette, ConfigError> {
    let path = dir.join(PALETTE_FILE);

    if !path.exists() {
        write_default(&path, &Palette::default())?;
    }

    read_json(&path)
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}

fn write_default<T: Serialize>(path: &Path, value: &T) -> Result<(), ConfigError> {
    let write_error = |source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let mut data = serde_json::to_vec_pretty(value).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })?;
    data.push(b'\n');
    fs::write(path, data).map_err(write_error)?;

    tracing::info!(path = %path.display(), "Created default config file");
    Ok(())
}
