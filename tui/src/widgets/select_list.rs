//! Select list view

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{HighlightSpacing, List, ListState, StatefulWidget, Widget};

use waifu_core::{ListItem, SelectList};

use super::framed;
use crate::theme::Theme;

/// Draws a [`SelectList`] with its selection highlighted
///
/// Entries with a description take two lines; a shortcut is shown as
/// `(k) ` before the label.
pub struct SelectListView<'a> {
    list: &'a SelectList,
    theme: &'a Theme,
    focused: bool,
}

impl<'a> SelectListView<'a> {
    pub fn new(list: &'a SelectList, theme: &'a Theme) -> Self {
        Self {
            list,
            theme,
            focused: false,
        }
    }

    /// Only a focused list shows its selection
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn item(&self, item: &'a ListItem) -> ratatui::widgets::ListItem<'a> {
        let mut label = Vec::with_capacity(2);
        if let Some(key) = item.shortcut {
            label.push(Span::styled(format!("({key}) "), self.theme.title()));
        }
        label.push(Span::raw(item.label.as_str()));

        let mut text = Text::from(Line::from(label));
        if !item.secondary.is_empty() {
            text.push_line(Line::styled(
                format!("  {}", item.secondary),
                self.theme.secondary(),
            ));
        }
        ratatui::widgets::ListItem::new(text)
    }
}

impl Widget for SelectListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<_> = self.list.items().iter().map(|i| self.item(i)).collect();
        let list = List::new(items)
            .block(framed(self.list.title(), self.theme))
            .highlight_style(self.theme.selected())
            .highlight_spacing(HighlightSpacing::Always)
            .highlight_symbol("> ");

        let mut state = ListState::default();
        if self.focused {
            state.select(Some(self.list.selected()));
        }
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
