//! Text panel view

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use waifu_core::TextPanel;

use super::framed;
use crate::theme::Theme;

/// Draws a [`TextPanel`] inside a titled border
pub struct PanelView<'a> {
    panel: &'a TextPanel,
    theme: &'a Theme,
    alignment: Alignment,
    wrap: bool,
}

impl<'a> PanelView<'a> {
    pub fn new(panel: &'a TextPanel, theme: &'a Theme) -> Self {
        Self {
            panel,
            theme,
            alignment: Alignment::Left,
            wrap: false,
        }
    }

    /// Centre the text as one block (character art keeps its shape)
    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    /// Wrap long lines (chat)
    pub fn wrapped(mut self) -> Self {
        self.wrap = true;
        self
    }
}

impl Widget for PanelView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = match self.alignment {
            Alignment::Center => block_text(self.panel.text()),
            _ => Text::raw(self.panel.text()),
        };
        let mut paragraph = Paragraph::new(text)
            .block(framed(self.panel.title(), self.theme))
            .alignment(self.alignment);
        if self.wrap {
            paragraph = paragraph.wrap(Wrap { trim: false });
        }
        paragraph.render(area, buf);
    }
}

/// Pad every line to the widest one
fn block_text(text: &str) -> Text<'_> {
    let width = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    text.lines()
        .map(|line| Line::raw(format!("{line:<width$}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_text_pads_to_widest_line() {
        let text = block_text(" /\\\n/____\\\n ||");
        let widths: Vec<usize> = text.lines.iter().map(Line::width).collect();
        assert_eq!(widths, vec![6, 6, 6]);
    }
}
