//! Companion
//!
//! The single state-machine object. It owns the pet, the mood, the overlay
//! mode, both locks and the screen, and it is the only thing that mutates
//! them. Every change enters through [`Companion::handle`], which the
//! consumer calls once per dequeued [`Action`].
//!
//! # Locks
//!
//! - **TransitionLock** ([`Companion::is_transition_locked`]): held while any
//!   overlay is open. Opening another overlay is ignored; Quit and the open
//!   overlay's own close path keep working.
//! - **ActionLock** ([`Companion::is_encourage_locked`]): held while an
//!   encouragement reaction is pending. A second Encourage is ignored until
//!   the scheduled `EncourageEnd` has been applied.
//!
//! # Reactions
//!
//! Encouragements and gifts put on the happy face and schedule a restore.
//! Each reaction gets a generation number; a restore only resets the head if
//! it belongs to the newest reaction, so an old timer landing late cannot
//! cut a newer reaction short.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::actions::Action;
use crate::assets::{Assets, Catalog, Gift};
use crate::blink::{BlinkScheduler, Eyes, DEFAULT_BLINK_INTERVAL, DEFAULT_BLINK_RESTORE};
use crate::config::Settings;
use crate::input::{Dispatcher, Intent};
use crate::mood::Mood;
use crate::overlay::{Overlay, OverlayMode};
use crate::pet::{Expression, PetState};
use crate::schedule::Scheduler;
use crate::screen::{ListItem, Region, Screen, SelectList, TextPanel};

/// Happiness gained from an encouragement
pub const ENCOURAGE_HAPPINESS: i32 = 6;

/// Happiness gained from changing clothes
pub const DRESS_UP_HAPPINESS: i32 = 3;

/// Chat line when the clothing catalog is empty
pub const NO_CLOTHES_MESSAGE: &str = "No clothes found!";

/// Chat line when the gift catalog is empty
pub const NO_GIFTS_MESSAGE: &str = "No gifts found!";

/// Primary action list: label, description, intent
const ACTION_MENU: &[(&str, &str, Intent)] = &[
    ("Encourage", "Get a nice message.", Intent::Encourage),
    ("Gift", "Give a gift.", Intent::Gift),
    ("Dress Up", "Change the outfit.", Intent::DressUp),
    ("Background Mode", "Remove all odd TUI.", Intent::Background),
    ("Quit", "Exit the application.", Intent::Quit),
];

/// Timer settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    /// Time between blinks
    pub blink_interval: Duration,
    /// How long the eyes stay closed
    pub blink_restore: Duration,
    /// How long the encouragement face lasts (and Encourage stays locked)
    pub encourage_reaction: Duration,
    /// How long the gift face lasts
    pub gift_reaction: Duration,
}

impl Timings {
    /// A blink scheduler using these timings
    #[must_use]
    pub fn blink_scheduler(&self) -> BlinkScheduler {
        BlinkScheduler::new(self.blink_interval, self.blink_restore)
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            blink_interval: DEFAULT_BLINK_INTERVAL,
            blink_restore: DEFAULT_BLINK_RESTORE,
            encourage_reaction: Duration::from_secs(1),
            gift_reaction: Duration::from_secs(2),
        }
    }
}

/// The companion's entire mutable state
#[derive(Debug)]
pub struct Companion<S: Scheduler> {
    pet: PetState,
    mood: Mood,
    overlay: Overlay,
    screen: Screen,
    dispatcher: Dispatcher,
    clothes: Catalog,
    gifts: Vec<Gift>,
    encouragements: Vec<String>,
    /// ActionLock for Encourage
    encourage_locked: bool,
    reaction_generation: u64,
    scheduler: S,
    timings: Timings,
    rng: StdRng,
    running: bool,
}

impl<S: Scheduler> Companion<S> {
    /// Build a companion from settings and loaded assets
    pub fn new(settings: &Settings, assets: Assets, scheduler: S) -> Self {
        let pet = PetState::new(
            settings.name.clone(),
            assets.neutral_head,
            assets.blink_head,
            assets.happy_head,
            assets.body,
        );
        let mood = Mood::default();
        let dispatcher = Dispatcher::new(&settings.keys, settings.vim_navigation);

        let actions = ACTION_MENU
            .iter()
            .map(|(label, secondary, intent)| {
                ListItem::new(*label)
                    .with_secondary(*secondary)
                    .with_shortcut(dispatcher.key_for(*intent))
            })
            .collect();

        let screen = Screen::new(
            TextPanel::new(format!("| {} |", settings.name), pet.compose()),
            TextPanel::new("| Chatbox |", settings.default_message.clone()),
            TextPanel::new("| Happiness Bar |", mood.gauge()),
            SelectList::new("| Action Space |", actions),
        );

        Self {
            pet,
            mood,
            overlay: Overlay::new(),
            screen,
            dispatcher,
            clothes: assets.clothes,
            gifts: assets.gifts.entries().iter().map(Gift::parse).collect(),
            encouragements: assets.encouragements,
            encourage_locked: false,
            reaction_generation: 0,
            scheduler,
            timings: Timings::default(),
            rng: StdRng::from_entropy(),
            running: true,
        }
    }

    /// Use custom timer settings
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    /// Start from a specific mood
    #[must_use]
    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self.screen.gauge.set_text(mood.gauge());
        self
    }

    /// Make encouragement picks reproducible
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Presentation model
    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Character appearance
    #[must_use]
    pub fn pet(&self) -> &PetState {
        &self.pet
    }

    /// Happiness
    #[must_use]
    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Active overlay
    #[must_use]
    pub fn overlay_mode(&self) -> OverlayMode {
        self.overlay.mode()
    }

    /// TransitionLock
    #[must_use]
    pub fn is_transition_locked(&self) -> bool {
        self.overlay.is_locked()
    }

    /// ActionLock
    #[must_use]
    pub fn is_encourage_locked(&self) -> bool {
        self.encourage_locked
    }

    /// Timer settings in use
    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Key dispatcher in use
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// The scheduler deferred actions go to
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable scheduler access (tests advance a virtual clock through this)
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// False once Quit has been applied
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    // =========================================================================
    // Action handling
    // =========================================================================

    /// Apply one dequeued action
    pub fn handle(&mut self, action: Action) {
        tracing::trace!(kind = action.kind(), "Applying action");

        match action {
            Action::Input(key) => {
                let focus_is_list = self.screen.focus_is_list();
                if let Some(intent) = self.dispatcher.resolve(key, focus_is_list) {
                    self.apply_intent(intent);
                }
            }
            Action::Blink(eyes) => self.blink(eyes),
            Action::EncourageEnd { generation } => {
                self.end_reaction(generation);
                self.encourage_locked = false;
            }
            Action::ReactionEnd { generation } => self.end_reaction(generation),
            Action::Notify(message) => {
                self.screen.chat.set_text(message);
            }
            Action::Redraw => {}
            Action::Quit => self.quit(),
        }
    }

    /// Apply a batch of actions in order
    pub fn handle_all(&mut self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            self.handle(action);
        }
    }

    /// Act on a resolved intent
    pub fn apply_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Encourage => self.encourage(),
            Intent::DressUp => self.open_dress_up(),
            Intent::Gift => self.open_gift_menu(),
            Intent::Background => self.open_background(),
            Intent::Quit => self.quit(),
            Intent::MoveDown => {
                if let Some(list) = self.screen.focused_list_mut() {
                    list.select_next();
                }
            }
            Intent::MoveUp => {
                if let Some(list) = self.screen.focused_list_mut() {
                    list.select_previous();
                }
            }
            Intent::Confirm => self.confirm(),
            Intent::Back => self.back(),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Show a random encouragement with the happy face
    pub fn encourage(&mut self) {
        if self.encourage_locked {
            tracing::debug!("Encourage ignored, reaction pending");
            return;
        }

        let Some(line) = self.encouragements.choose(&mut self.rng).cloned() else {
            tracing::debug!("Encourage ignored, no encouragements loaded");
            return;
        };

        self.encourage_locked = true;
        self.screen
            .chat
            .set_text(format!("{}: {}", self.pet.name(), line));
        let generation = self.start_reaction();
        self.increase_happiness(ENCOURAGE_HAPPINESS);
        self.scheduler.schedule(
            self.timings.encourage_reaction,
            Action::EncourageEnd { generation },
        );
    }

    /// Open the clothing list
    pub fn open_dress_up(&mut self) {
        if self.overlay.is_locked() {
            tracing::debug!(mode = ?self.overlay.mode(), "Dress up ignored, overlay open");
            return;
        }
        if self.clothes.is_empty() {
            self.scheduler
                .schedule(Duration::ZERO, Action::Notify(NO_CLOTHES_MESSAGE.to_string()));
            return;
        }

        let items = self
            .clothes
            .entries()
            .iter()
            .map(|entry| ListItem::new(format!("-{}", entry.name)))
            .collect();

        if self.overlay.open(OverlayMode::DressUp) {
            self.screen
                .show_overlay_list(SelectList::new("| Dress Up |", items));
        }
    }

    /// Open the gift list
    pub fn open_gift_menu(&mut self) {
        if self.overlay.is_locked() {
            tracing::debug!(mode = ?self.overlay.mode(), "Gift menu ignored, overlay open");
            return;
        }
        if self.gifts.is_empty() {
            self.scheduler
                .schedule(Duration::ZERO, Action::Notify(NO_GIFTS_MESSAGE.to_string()));
            return;
        }

        let items = self
            .gifts
            .iter()
            .map(|gift| {
                ListItem::new(format!("-{}", gift.name))
                    .with_secondary(format_delta(gift.happiness))
            })
            .collect();

        if self.overlay.open(OverlayMode::GiftMenu) {
            self.screen.show_overlay_list(SelectList::new("| Gifts |", items));
        }
    }

    /// Hide everything but the character
    pub fn open_background(&mut self) {
        if self.overlay.open(OverlayMode::Background) {
            self.screen.enter_background();
        }
    }

    /// Stop the application (works in every mode)
    pub fn quit(&mut self) {
        if self.running {
            tracing::info!("Quit requested");
        }
        self.running = false;
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn confirm(&mut self) {
        match self.screen.focus() {
            Region::ActionList => {
                let selected = self.screen.actions.selected();
                if let Some((_, _, intent)) = ACTION_MENU.get(selected) {
                    self.apply_intent(*intent);
                }
            }
            Region::OverlayList => {
                let Some(selected) = self.screen.overlay_list().map(SelectList::selected) else {
                    return;
                };
                match self.overlay.mode() {
                    OverlayMode::DressUp => self.select_outfit(selected),
                    OverlayMode::GiftMenu => self.give_gift(selected),
                    OverlayMode::Idle | OverlayMode::Background => {}
                }
            }
            _ => {}
        }
    }

    fn back(&mut self) {
        match (self.overlay.mode(), self.screen.focus()) {
            (OverlayMode::DressUp | OverlayMode::GiftMenu, Region::OverlayList) => {
                self.close_list();
            }
            (OverlayMode::Background, Region::Character) => {
                if self.overlay.close(OverlayMode::Background) {
                    self.screen.leave_background();
                }
            }
            _ => {}
        }
    }

    fn select_outfit(&mut self, index: usize) {
        let Some(entry) = self.clothes.get(index).cloned() else {
            return;
        };

        self.pet.set_body(entry.payload);
        self.redraw_character();
        self.screen
            .chat
            .set_text(format!("{} changed into: {}", self.pet.name(), entry.name));
        self.increase_happiness(DRESS_UP_HAPPINESS);
        self.close_list();
    }

    fn give_gift(&mut self, index: usize) {
        let Some(gift) = self.gifts.get(index).cloned() else {
            return;
        };

        self.screen
            .chat
            .set_text(format!("{}: {}", self.pet.name(), gift.reaction));
        let generation = self.start_reaction();
        self.increase_happiness(gift.happiness);
        self.scheduler.schedule(
            self.timings.gift_reaction,
            Action::ReactionEnd { generation },
        );
        self.close_list();
    }

    fn close_list(&mut self) {
        let mode = self.overlay.mode();
        if mode.has_list() && self.overlay.close(mode) {
            self.screen.hide_overlay_list();
        }
    }

    fn blink(&mut self, eyes: Eyes) {
        let current = self.pet.expression();
        let next = match (eyes, current) {
            (_, Expression::Happy) => {
                tracing::trace!(?eyes, "Blink skipped, reaction showing");
                return;
            }
            (Eyes::Closed, _) => Expression::Blink,
            (Eyes::Open, _) => Expression::Neutral,
        };

        self.pet.set_expression(next);
        self.redraw_character();
    }

    fn start_reaction(&mut self) -> u64 {
        self.reaction_generation += 1;
        self.pet.set_expression(Expression::Happy);
        self.redraw_character();
        self.reaction_generation
    }

    fn end_reaction(&mut self, generation: u64) {
        if generation != self.reaction_generation {
            tracing::debug!(
                generation,
                current = self.reaction_generation,
                "Stale reaction restore ignored"
            );
            return;
        }
        if self.pet.expression() == Expression::Happy {
            self.pet.set_expression(Expression::Neutral);
            self.redraw_character();
        }
    }

    /// Compose head + body from current state; identical text is not a redraw
    fn redraw_character(&mut self) {
        self.screen.character.set_text(self.pet.compose());
    }

    fn increase_happiness(&mut self, delta: i32) {
        let value = self.mood.increase(delta);
        self.screen.gauge.set_text(self.mood.gauge());
        tracing::debug!(delta, value, "Happiness changed");
    }
}

fn format_delta(delta: i32) -> String {
    format!("{delta:+} happiness")
}
