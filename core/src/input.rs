//! Input Dispatcher
//!
//! Maps a key press to an [`Intent`] in two tiers:
//!
//! 1. **Bound actions**: the configured encourage / dress-up / gift /
//!    background / quit keys. These win over everything else.
//! 2. **Navigation**: only consulted when tier 1 did not consume the key and
//!    the focused panel is a list. Arrow keys, Enter and Escape always work;
//!    with vim navigation enabled `j`/`k` move, `l` confirms and `h` goes back.
//!
//! Whether an intent is *allowed* (locks) is not decided here; the
//! [`Companion`](crate::Companion) does that when it acts on the intent.

use serde::{Deserialize, Serialize};

use crate::config::KeyBindings;

/// A surface-independent key press
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A printable character
    Char(char),
    /// Enter / Return
    Enter,
    /// Escape
    Esc,
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Ctrl-C
    Interrupt,
}

/// What a key press asks the companion to do
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Show an encouragement
    Encourage,
    /// Open the dress-up list
    DressUp,
    /// Open the gift list
    Gift,
    /// Enter background mode
    Background,
    /// Exit the application
    Quit,
    /// Move the list selection down
    MoveDown,
    /// Move the list selection up
    MoveUp,
    /// Activate the selected list entry
    Confirm,
    /// Escape / go back
    Back,
}

/// Resolves keys to intents according to the user's settings
#[derive(Clone, Debug)]
pub struct Dispatcher {
    bindings: Vec<(char, Intent)>,
    vim_navigation: bool,
}

impl Dispatcher {
    /// Build a dispatcher from key bindings
    ///
    /// Each binding uses the first character of its string; an empty string
    /// leaves that action unbound.
    #[must_use]
    pub fn new(keys: &KeyBindings, vim_navigation: bool) -> Self {
        let bindings = [
            (&keys.encourage, Intent::Encourage),
            (&keys.dress_up, Intent::DressUp),
            (&keys.gift, Intent::Gift),
            (&keys.background_mode, Intent::Background),
            (&keys.quit, Intent::Quit),
        ]
        .into_iter()
        .filter_map(|(binding, intent)| binding.chars().next().map(|c| (c, intent)))
        .collect();

        Self {
            bindings,
            vim_navigation,
        }
    }

    /// The key bound to `intent`, if any (used for shortcut labels)
    #[must_use]
    pub fn key_for(&self, intent: Intent) -> Option<char> {
        self.bindings
            .iter()
            .find(|(_, bound)| *bound == intent)
            .map(|(c, _)| *c)
    }

    /// Resolve a key press
    ///
    /// `focus_is_list` tells the navigation tier whether the focused panel
    /// supports list navigation.
    #[must_use]
    pub fn resolve(&self, key: Key, focus_is_list: bool) -> Option<Intent> {
        if let Some(intent) = self.bound(key) {
            return Some(intent);
        }

        match key {
            Key::Interrupt => Some(Intent::Quit),
            // Escape always reaches the focused panel's own done handler
            Key::Esc => Some(Intent::Back),
            Key::Enter if focus_is_list => Some(Intent::Confirm),
            Key::Up if focus_is_list => Some(Intent::MoveUp),
            Key::Down if focus_is_list => Some(Intent::MoveDown),
            Key::Char(c) if focus_is_list && self.vim_navigation => match c {
                'j' => Some(Intent::MoveDown),
                'k' => Some(Intent::MoveUp),
                'l' => Some(Intent::Confirm),
                'h' => Some(Intent::Back),
                _ => None,
            },
            _ => None,
        }
    }

    /// Tier 1 lookup
    fn bound(&self, key: Key) -> Option<Intent> {
        let Key::Char(c) = key else { return None };
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == c)
            .map(|(_, intent)| *intent)
    }
}
