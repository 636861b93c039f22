//! Frame Rendering
//!
//! Draws a [`Screen`] into a ratatui frame. Only placed regions are drawn;
//! which regions are placed, and which one has focus, is decided entirely
//! by the core.

use ratatui::widgets::Block;
use ratatui::Frame;

use waifu_core::{Region, Screen};

use crate::compositor::Grid;
use crate::theme::Theme;
use crate::widgets::{PanelView, SelectListView};

/// Draw the whole screen
pub fn draw(frame: &mut Frame, screen: &Screen, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme.base()), area);

    let grid = Grid::new(area);
    for (region, rect) in grid.resolve(screen.placements()) {
        let focused = screen.focus() == region;
        match region {
            Region::Character => {
                frame.render_widget(PanelView::new(&screen.character, theme).centered(), rect);
            }
            Region::Chat => {
                frame.render_widget(PanelView::new(&screen.chat, theme).wrapped(), rect);
            }
            Region::MoodGauge => {
                frame.render_widget(PanelView::new(&screen.gauge, theme).centered(), rect);
            }
            Region::ActionList => {
                frame.render_widget(
                    SelectListView::new(&screen.actions, theme).focused(focused),
                    rect,
                );
            }
            Region::OverlayList => {
                if let Some(list) = screen.overlay_list() {
                    frame.render_widget(SelectListView::new(list, theme).focused(focused), rect);
                }
            }
        }
    }
}
