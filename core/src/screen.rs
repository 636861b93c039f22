//! Presentation Model
//!
//! The abstract display the companion mutates: a small grid of named
//! regions, their contents, and which one holds input focus. A surface
//! renders this model; it never decides what goes where.
//!
//! # Grid
//!
//! ```text
//!   columns:   40 cells     flexible
//!            ┌──────────┬─────────────────┐
//!   flexible │ Actions  │   Character     │
//!            ├──────────┼─────────────────┤
//!   3 rows   │ Mood     │   Chat          │
//!            └──────────┴─────────────────┘
//! ```
//!
//! Overlay lists take the action list's cell. Background mode gives the
//! character view all four cells.

/// Sizing rule for a grid row or column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Track {
    /// Fixed number of cells
    Fixed(u16),
    /// Takes the remaining space
    Flex,
}

/// Grid rows, top to bottom
pub const GRID_ROWS: [Track; 2] = [Track::Flex, Track::Fixed(3)];

/// Grid columns, left to right
pub const GRID_COLUMNS: [Track; 2] = [Track::Fixed(40), Track::Flex];

/// A named display region
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// Primary action list
    ActionList,
    /// Happiness gauge
    MoodGauge,
    /// Character art
    Character,
    /// Message / chat line
    Chat,
    /// Dress-up or gift list, while open
    OverlayList,
}

/// Where a region sits in the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Which region
    pub region: Region,
    /// Top row index
    pub row: u16,
    /// Left column index
    pub col: u16,
    /// Rows covered
    pub row_span: u16,
    /// Columns covered
    pub col_span: u16,
}

impl Placement {
    /// A region covering one grid cell
    #[must_use]
    pub const fn cell(region: Region, row: u16, col: u16) -> Self {
        Self {
            region,
            row,
            col,
            row_span: 1,
            col_span: 1,
        }
    }

    /// The four-panel layout shown while no overlay is open
    #[must_use]
    pub fn standard() -> Vec<Self> {
        vec![
            Self::cell(Region::ActionList, 0, 0),
            Self::cell(Region::MoodGauge, 1, 0),
            Self::cell(Region::Character, 0, 1),
            Self::cell(Region::Chat, 1, 1),
        ]
    }

    /// Background mode: the character alone, across the whole grid
    #[must_use]
    pub fn background() -> Vec<Self> {
        vec![Self {
            region: Region::Character,
            row: 0,
            col: 0,
            row_span: 2,
            col_span: 2,
        }]
    }
}

/// A bordered text view
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextPanel {
    title: String,
    text: String,
    revision: u64,
}

impl TextPanel {
    /// Create a panel
    #[must_use]
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            revision: 0,
        }
    }

    /// Title drawn in the border
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bumped every time the text actually changes
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Replace the text; returns `false` (no redraw) if it was identical
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.text {
            return false;
        }
        self.text = text;
        self.revision += 1;
        true
    }
}

/// One entry of a [`SelectList`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListItem {
    /// Main text
    pub label: String,
    /// Secondary description line
    pub secondary: String,
    /// Shortcut key shown next to the label
    pub shortcut: Option<char>,
}

impl ListItem {
    /// An entry with only a label
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            secondary: String::new(),
            shortcut: None,
        }
    }

    /// Add a description line
    #[must_use]
    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = secondary.into();
        self
    }

    /// Add a shortcut label
    #[must_use]
    pub fn with_shortcut(mut self, shortcut: Option<char>) -> Self {
        self.shortcut = shortcut;
        self
    }
}

/// A bordered list with a single selected entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectList {
    title: String,
    items: Vec<ListItem>,
    selected: usize,
}

impl SelectList {
    /// Create a list with the first entry selected
    #[must_use]
    pub fn new(title: impl Into<String>, items: Vec<ListItem>) -> Self {
        Self {
            title: title.into(),
            items,
            selected: 0,
        }
    }

    /// Title drawn in the border
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// All entries
    #[must_use]
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Index of the selected entry
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Move down one entry, stopping at the last
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    /// Move up one entry, stopping at the first
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

/// Everything the surface draws
#[derive(Clone, Debug)]
pub struct Screen {
    /// Character art panel
    pub character: TextPanel,
    /// Chat / message panel
    pub chat: TextPanel,
    /// Happiness gauge panel
    pub gauge: TextPanel,
    /// Primary action list
    pub actions: SelectList,
    overlay_list: Option<SelectList>,
    placements: Vec<Placement>,
    focus: Region,
}

impl Screen {
    /// Create the standard four-panel screen with the action list focused
    #[must_use]
    pub fn new(
        character: TextPanel,
        chat: TextPanel,
        gauge: TextPanel,
        actions: SelectList,
    ) -> Self {
        Self {
            character,
            chat,
            gauge,
            actions,
            overlay_list: None,
            placements: Placement::standard(),
            focus: Region::ActionList,
        }
    }

    /// Current placements, in drawing order
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Region holding input focus
    #[must_use]
    pub fn focus(&self) -> Region {
        self.focus
    }

    /// Whether `region` is currently on screen
    #[must_use]
    pub fn is_visible(&self, region: Region) -> bool {
        self.placements.iter().any(|p| p.region == region)
    }

    /// The open overlay list, if any
    #[must_use]
    pub fn overlay_list(&self) -> Option<&SelectList> {
        self.overlay_list.as_ref()
    }

    /// Whether the focused region supports list navigation
    #[must_use]
    pub fn focus_is_list(&self) -> bool {
        match self.focus {
            Region::ActionList => true,
            Region::OverlayList => self.overlay_list.is_some(),
            _ => false,
        }
    }

    /// The focused list, if focus is on one
    pub fn focused_list_mut(&mut self) -> Option<&mut SelectList> {
        match self.focus {
            Region::ActionList => Some(&mut self.actions),
            Region::OverlayList => self.overlay_list.as_mut(),
            _ => None,
        }
    }

    /// Swap the action list for `list` in the same cell and focus it
    pub fn show_overlay_list(&mut self, list: SelectList) {
        for placement in &mut self.placements {
            if placement.region == Region::ActionList {
                placement.region = Region::OverlayList;
            }
        }
        self.overlay_list = Some(list);
        self.focus = Region::OverlayList;
    }

    /// Put the action list back and focus it
    pub fn hide_overlay_list(&mut self) {
        for placement in &mut self.placements {
            if placement.region == Region::OverlayList {
                placement.region = Region::ActionList;
            }
        }
        self.overlay_list = None;
        self.focus = Region::ActionList;
    }

    /// Show only the character, expanded, with focus on it
    pub fn enter_background(&mut self) {
        self.placements = Placement::background();
        self.focus = Region::Character;
    }

    /// Restore the four standard panels and focus the action list
    pub fn leave_background(&mut self) {
        self.placements = Placement::standard();
        self.focus = Region::ActionList;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn screen() -> Screen {
        Screen::new(
            TextPanel::new("| Waifu |", "head\nbody"),
            TextPanel::new("| Chatbox |", "..."),
            TextPanel::new("| Happiness Bar |", ""),
            SelectList::new(
                "| Action Space |",
                vec![ListItem::new("Encourage"), ListItem::new("Quit")],
            ),
        )
    }

    #[test]
    fn test_set_text_only_bumps_on_change() {
        let mut panel = TextPanel::new("t", "a");
        assert!(!panel.set_text("a"));
        assert_eq!(panel.revision(), 0);
        assert!(panel.set_text("b"));
        assert_eq!(panel.revision(), 1);
    }

    #[test]
    fn test_list_selection_saturates() {
        let mut list = SelectList::new(
            "t",
            vec![ListItem::new("a"), ListItem::new("b"), ListItem::new("c")],
        );
        list.select_previous();
        assert_eq!(list.selected(), 0);
        list.select_next();
        list.select_next();
        list.select_next();
        assert_eq!(list.selected(), 2);
    }

    #[test]
    fn test_overlay_list_takes_action_cell() {
        let mut s = screen();
        s.show_overlay_list(SelectList::new("| Dress Up |", vec![ListItem::new("-a")]));

        assert!(!s.is_visible(Region::ActionList));
        assert!(s.is_visible(Region::OverlayList));
        assert_eq!(s.placements()[0], Placement::cell(Region::OverlayList, 0, 0));
        assert_eq!(s.focus(), Region::OverlayList);

        s.hide_overlay_list();
        assert_eq!(s.placements(), Placement::standard().as_slice());
        assert_eq!(s.focus(), Region::ActionList);
        assert!(s.overlay_list().is_none());
    }

    #[test]
    fn test_background_round_trip_restores_layout() {
        let mut s = screen();
        s.enter_background();
        assert_eq!(s.placements().len(), 1);
        assert_eq!(s.focus(), Region::Character);
        assert!(!s.focus_is_list());

        s.leave_background();
        assert_eq!(s.placements(), Placement::standard().as_slice());
        assert_eq!(s.focus(), Region::ActionList);
    }
}
