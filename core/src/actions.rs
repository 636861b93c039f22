//! Actions
//!
//! Every mutation of companion state is one of these values. Producers
//! (the input reader, the blink ticker, one-shot timers) never touch state
//! directly; they enqueue an `Action` and the single consumer applies it.
//!
//! Replaying a recorded sequence against a fresh
//! [`Companion`](crate::Companion) reproduces the session.

use crate::blink::Eyes;
use crate::input::Key;

/// A queued mutation request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// A key press read from the terminal
    Input(Key),

    /// Blink ticker output: close or reopen the eyes
    Blink(Eyes),

    /// The encouragement reaction has run its course
    ///
    /// Restores the head (unless a newer reaction owns it) and releases the
    /// Encourage lock.
    EncourageEnd {
        /// Reaction generation this timer was scheduled for
        generation: u64,
    },

    /// A timed reaction (gift) has run its course
    ReactionEnd {
        /// Reaction generation this timer was scheduled for
        generation: u64,
    },

    /// Show a line in the chat panel
    Notify(String),

    /// Nothing changed in the model, but the surface should redraw
    /// (terminal resize and similar)
    Redraw,

    /// Stop the application
    Quit,
}

impl Action {
    /// Short name for logging
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Input(_) => "input",
            Self::Blink(_) => "blink",
            Self::EncourageEnd { .. } => "encourage_end",
            Self::ReactionEnd { .. } => "reaction_end",
            Self::Notify(_) => "notify",
            Self::Redraw => "redraw",
            Self::Quit => "quit",
        }
    }
}
