//! Overlay State Machine
//!
//! Which secondary panel currently owns the display. Exactly one mode is
//! active. The only legal moves are out of `Idle` into an overlay and from
//! an overlay back to `Idle`:
//!
//! ```text
//!            ┌──────────► DressUp ──────────┐
//!            │                              │
//!   Idle ────┼──────────► GiftMenu ─────────┼────► Idle
//!            │                              │
//!            └──────────► Background ───────┘
//! ```
//!
//! The transition lock is not a separate flag that can drift: it is simply
//! "mode is not `Idle`".

use serde::{Deserialize, Serialize};

/// The active overlay
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverlayMode {
    /// Primary action list owns the display
    #[default]
    Idle,
    /// Clothing selection list
    DressUp,
    /// Gift selection list
    GiftMenu,
    /// Only the character view is shown
    Background,
}

impl OverlayMode {
    /// Whether TransitionLock is held in this mode
    #[must_use]
    pub fn is_locking(self) -> bool {
        self != Self::Idle
    }

    /// Whether the mode shows a selection list in place of the action list
    #[must_use]
    pub fn has_list(self) -> bool {
        matches!(self, Self::DressUp | Self::GiftMenu)
    }
}

/// Owner of the current [`OverlayMode`]
#[derive(Clone, Debug, Default)]
pub struct Overlay {
    mode: OverlayMode,
}

impl Overlay {
    /// Start in `Idle`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode
    #[must_use]
    pub fn mode(&self) -> OverlayMode {
        self.mode
    }

    /// TransitionLock: true whenever an overlay is open
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.mode.is_locking()
    }

    /// Try to open `mode`
    ///
    /// Accepted only from `Idle` into a non-`Idle` mode. Anything else is a
    /// no-op and returns `false`.
    pub fn open(&mut self, mode: OverlayMode) -> bool {
        if self.mode != OverlayMode::Idle || mode == OverlayMode::Idle {
            tracing::debug!(current = ?self.mode, requested = ?mode, "Overlay open refused");
            return false;
        }
        tracing::debug!(?mode, "Overlay opened");
        self.mode = mode;
        true
    }

    /// Close the active overlay if it is `expected`
    ///
    /// Returns `false` (and changes nothing) when some other mode is active,
    /// so one overlay's close path can never tear down another.
    pub fn close(&mut self, expected: OverlayMode) -> bool {
        if self.mode == OverlayMode::Idle || self.mode != expected {
            return false;
        }
        tracing::debug!(mode = ?self.mode, "Overlay closed");
        self.mode = OverlayMode::Idle;
        true
    }
}
