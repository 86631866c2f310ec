//! Screen geometry shared by rendering and mouse hit testing

use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const CELL_WIDTH: u16 = 5;
pub const CELL_HEIGHT: u16 = 3;
pub const CELL_GAP: u16 = 1;

/// Areas of the main screen, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub board: Rect,
    pub message: Rect,
    pub input: Rect,
    pub help: Rect,
}

#[must_use]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Board
            Constraint::Length(3), // Status message
            Constraint::Length(3), // Word input
            Constraint::Length(1), // Help
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        board: chunks[1],
        message: chunks[2],
        input: chunks[3],
        help: chunks[4],
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// The cell grid, centered in `area` and clipped to it
#[must_use]
pub fn board_grid(area: Rect, rows: usize, cols: usize) -> Rect {
    let cols = clamp_u16(cols);
    let rows = clamp_u16(rows);
    let width = cols
        .saturating_mul(CELL_WIDTH)
        .saturating_add(cols.saturating_sub(1).saturating_mul(CELL_GAP))
        .min(area.width);
    let height = rows.saturating_mul(CELL_HEIGHT).min(area.height);

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Screen rectangle of one cell, before clipping
///
/// Cells past the edge of the screen collapse against `u16::MAX` and are
/// never visible.
#[must_use]
pub fn cell_rect(grid: Rect, row: usize, col: usize) -> Rect {
    Rect::new(
        grid.x
            .saturating_add(clamp_u16(col).saturating_mul(CELL_WIDTH + CELL_GAP)),
        grid.y.saturating_add(clamp_u16(row).saturating_mul(CELL_HEIGHT)),
        CELL_WIDTH,
        CELL_HEIGHT,
    )
}

/// True if the whole cell fits inside the grid
#[must_use]
pub fn cell_visible(grid: Rect, cell: Rect) -> bool {
    cell.right() <= grid.right() && cell.bottom() <= grid.bottom()
}

/// The (row, col) of the visible cell under a screen position; gaps and
/// clipped cells hit nothing
#[must_use]
pub fn cell_at(grid: Rect, rows: usize, cols: usize, x: u16, y: u16) -> Option<(usize, usize)> {
    if x < grid.x || y < grid.y || x >= grid.right() || y >= grid.bottom() {
        return None;
    }
    let dx = x - grid.x;
    let dy = y - grid.y;
    if dx % (CELL_WIDTH + CELL_GAP) >= CELL_WIDTH {
        return None;
    }

    let col = usize::from(dx / (CELL_WIDTH + CELL_GAP));
    let row = usize::from(dy / CELL_HEIGHT);
    (row < rows && col < cols && cell_visible(grid, cell_rect(grid, row, col)))
        .then_some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Rect {
        board_grid(Rect::new(0, 3, 80, 20), 4, 7)
    }

    #[test]
    fn board_grid_is_centered() {
        // 7 cells of 5 plus 6 gaps = 41 wide, 4 rows of 3 = 12 tall
        assert_eq!(grid(), Rect::new(19, 7, 41, 12));
    }

    #[test]
    fn board_grid_clips_to_small_area() {
        let grid = board_grid(Rect::new(0, 0, 20, 5), 4, 7);
        assert_eq!(grid, Rect::new(0, 0, 20, 5));
        assert!(!cell_visible(grid, cell_rect(grid, 3, 0)));
        assert!(cell_visible(grid, cell_rect(grid, 0, 0)));
    }

    #[test]
    fn oversized_board_is_clipped_without_overflow() {
        let grid = board_grid(Rect::new(0, 3, 80, 20), 4, 11_000);
        assert_eq!(grid, Rect::new(0, 7, 80, 12));
        assert!(cell_visible(grid, cell_rect(grid, 0, 0)));
        assert!(!cell_visible(grid, cell_rect(grid, 0, 10_999)));
        assert!(!cell_visible(grid, cell_rect(grid, 70_000, 70_000)));
        assert_eq!(cell_at(grid, 4, 11_000, 0, 7), Some((0, 0)));
        assert_eq!(cell_at(grid, 4, 11_000, 72, 7), Some((0, 12)));
        // Column 13 starts at x = 78 but is cut off by the screen edge
        assert_eq!(cell_at(grid, 4, 11_000, 78, 7), None);

        let tall = board_grid(Rect::new(0, 3, 80, 20), usize::MAX, 7);
        assert_eq!(tall, Rect::new(19, 3, 41, 20));
    }

    #[test]
    fn cell_rect_positions() {
        let grid = grid();
        assert_eq!(cell_rect(grid, 0, 0), Rect::new(19, 7, 5, 3));
        assert_eq!(cell_rect(grid, 1, 1), Rect::new(25, 10, 5, 3));
        assert_eq!(cell_rect(grid, 3, 6), Rect::new(55, 16, 5, 3));
        assert!(cell_visible(grid, cell_rect(grid, 3, 6)));
    }

    #[test]
    fn cell_at_hits_cells() {
        let grid = grid();
        assert_eq!(cell_at(grid, 4, 7, 19, 7), Some((0, 0)));
        assert_eq!(cell_at(grid, 4, 7, 23, 9), Some((0, 0)));
        assert_eq!(cell_at(grid, 4, 7, 25, 10), Some((1, 1)));
        assert_eq!(cell_at(grid, 4, 7, 59, 18), Some((3, 6)));
    }

    #[test]
    fn cell_at_misses_gaps_and_outside() {
        let grid = grid();
        assert_eq!(cell_at(grid, 4, 7, 24, 7), None);
        assert_eq!(cell_at(grid, 4, 7, 18, 7), None);
        assert_eq!(cell_at(grid, 4, 7, 19, 6), None);
        assert_eq!(cell_at(grid, 4, 7, 60, 7), None);
        assert_eq!(cell_at(grid, 4, 7, 19, 19), None);
    }

    #[test]
    fn screen_layout_stacks_sections() {
        let layout = screen_layout(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.header, Rect::new(0, 0, 80, 3));
        assert_eq!(layout.board, Rect::new(0, 3, 80, 20));
        assert_eq!(layout.message, Rect::new(0, 23, 80, 3));
        assert_eq!(layout.input, Rect::new(0, 26, 80, 3));
        assert_eq!(layout.help, Rect::new(0, 29, 80, 1));
    }
}
