//! Grid Compositor
//!
//! Resolves the screen's grid tracks against the terminal size and maps
//! each placement to the rectangle it covers. Spanning placements get the
//! union of their cells.

use ratatui::layout::{Constraint, Layout, Rect};

use waifu_core::screen::{Placement, Region, Track, GRID_COLUMNS, GRID_ROWS};

/// Terminal rectangles for every grid cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Rect>,
    cols: Vec<Rect>,
}

impl Grid {
    /// Split `area` along the grid tracks
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let rows = Layout::vertical(GRID_ROWS.map(constraint)).split(area);
        let cols = Layout::horizontal(GRID_COLUMNS.map(constraint)).split(area);
        Self {
            rows: rows.to_vec(),
            cols: cols.to_vec(),
        }
    }

    /// Rectangle of a single cell
    #[must_use]
    pub fn cell(&self, row: u16, col: u16) -> Rect {
        match (self.rows.get(usize::from(row)), self.cols.get(usize::from(col))) {
            (Some(r), Some(c)) => Rect::new(c.x, r.y, c.width, r.height),
            _ => Rect::default(),
        }
    }

    /// Rectangle covered by `placement`
    #[must_use]
    pub fn rect(&self, placement: &Placement) -> Rect {
        let first = self.cell(placement.row, placement.col);
        let last = self.cell(
            placement.row + placement.row_span.saturating_sub(1),
            placement.col + placement.col_span.saturating_sub(1),
        );
        first.union(last)
    }

    /// Every placement paired with its rectangle
    #[must_use]
    pub fn resolve(&self, placements: &[Placement]) -> Vec<(Region, Rect)> {
        placements
            .iter()
            .map(|p| (p.region, self.rect(p)))
            .collect()
    }
}

fn constraint(track: Track) -> Constraint {
    match track {
        Track::Fixed(cells) => Constraint::Length(cells),
        Track::Flex => Constraint::Min(0),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_standard_layout_rects() {
        let grid = Grid::new(Rect::new(0, 0, 100, 30));
        let rects = grid.resolve(&Placement::standard());

        assert_eq!(
            rects,
            vec![
                (Region::ActionList, Rect::new(0, 0, 40, 27)),
                (Region::MoodGauge, Rect::new(0, 27, 40, 3)),
                (Region::Character, Rect::new(40, 0, 60, 27)),
                (Region::Chat, Rect::new(40, 27, 60, 3)),
            ]
        );
    }

    #[test]
    fn test_background_spans_whole_area() {
        let area = Rect::new(0, 0, 100, 30);
        let grid = Grid::new(area);
        let rects = grid.resolve(&Placement::background());
        assert_eq!(rects, vec![(Region::Character, area)]);
    }
}
