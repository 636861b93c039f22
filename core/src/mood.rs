//! Mood Model
//!
//! A bounded happiness value and the textual gauge shown in the
//! "Happiness Bar" panel.

/// Upper bound of the happiness scale
pub const DEFAULT_MAX_HAPPINESS: u32 = 100;

/// Starting happiness for a fresh session
pub const DEFAULT_HAPPINESS: u32 = 50;

/// Number of cells in the rendered gauge
const GAUGE_WIDTH: usize = 20;

/// Happiness, clamped to `[0, max]`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mood {
    value: u32,
    max: u32,
}

impl Mood {
    /// Create a mood; `value` is clamped to `[0, max]`
    #[must_use]
    pub fn new(value: u32, max: u32) -> Self {
        Self {
            value: value.min(max),
            max,
        }
    }

    /// Current happiness
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Upper bound
    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Apply a delta and clamp; returns the new value
    ///
    /// Only ever called from inside an applied action.
    pub fn increase(&mut self, delta: i32) -> u32 {
        let next = i64::from(self.value) + i64::from(delta);
        let clamped = next.clamp(0, i64::from(self.max));
        // Clamped to [0, max] so it fits back into u32
        self.value = u32::try_from(clamped).unwrap_or(self.max);
        self.value
    }

    /// Render the gauge, e.g. `♥ [██████████░░░░░░░░░░] 50/100`
    #[must_use]
    pub fn gauge(&self) -> String {
        let filled = if self.max == 0 {
            0
        } else {
            (self.value as usize * GAUGE_WIDTH) / self.max as usize
        };
        let empty = GAUGE_WIDTH.saturating_sub(filled);

        format!(
            "♥ [{}{}] {}/{}",
            "█".repeat(filled),
            "░".repeat(empty),
            self.value,
            self.max
        )
    }
}

impl Default for Mood {
    fn default() -> Self {
        Self::new(DEFAULT_HAPPINESS, DEFAULT_MAX_HAPPINESS)
    }
}
