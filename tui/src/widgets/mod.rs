//! Widgets
//!
//! Bordered views over the screen model's panels and lists.

mod panel;
mod select_list;

pub use panel::PanelView;
pub use select_list::SelectListView;

use ratatui::widgets::{Block, BorderType};

use crate::theme::Theme;

/// The bordered, titled frame every panel uses
#[must_use]
pub fn framed<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.border())
        .title(title)
        .title_style(theme.title())
        .style(theme.base())
}
