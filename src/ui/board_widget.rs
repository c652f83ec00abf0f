//! The 3x3 grid widget: drawing the board and mapping screen positions
//! back to cells for mouse input.

use crate::game::{Board, Cell, SIZE};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Interior width of one cell, in terminal columns.
pub const CELL_WIDTH: u16 = 7;
/// Interior height of one cell, in terminal rows.
pub const CELL_HEIGHT: u16 = 3;
/// Full width of the grid, border lines included.
pub const BOARD_WIDTH: u16 = SIZE as u16 * (CELL_WIDTH + 1) + 1;
/// Full height of the grid, border lines included.
pub const BOARD_HEIGHT: u16 = SIZE as u16 * (CELL_HEIGHT + 1) + 1;

const GRID_TOP: &str = "┌───────┬───────┬───────┐";
const GRID_MIDDLE: &str = "├───────┼───────┼───────┤";
const GRID_BOTTOM: &str = "└───────┴───────┴───────┘";

/// Centered position of the grid within an area, clamped to fit.
pub fn board_rect(area: Rect) -> Rect {
    let width = BOARD_WIDTH.min(area.width);
    let height = BOARD_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Map a screen position to the cell under it.
///
/// Returns `None` for positions outside the grid or on a grid line. The
/// mapping never produces a row or column outside `0..SIZE`; a click one
/// step past the last cell is no cell at all.
pub fn cell_at(board: Rect, x: u16, y: u16) -> Option<(usize, usize)> {
    if !board.contains(Position::new(x, y)) {
        return None;
    }

    let dx = x - board.x;
    let dy = y - board.y;

    // Grid lines belong to no cell
    if dx % (CELL_WIDTH + 1) == 0 || dy % (CELL_HEIGHT + 1) == 0 {
        return None;
    }

    let col = (dx / (CELL_WIDTH + 1)) as usize;
    let row = (dy / (CELL_HEIGHT + 1)) as usize;
    if row >= SIZE || col >= SIZE {
        return None;
    }

    Some((row, col))
}

/// Render the grid into the area, highlighting the cursor cell if given.
pub fn render(frame: &mut Frame, board: &Board, cursor: Option<(usize, usize)>, area: Rect) {
    let rect = board_rect(area);
    let grid_style = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize);
    for y in 0..BOARD_HEIGHT {
        if y % (CELL_HEIGHT + 1) == 0 {
            let rule = if y == 0 {
                GRID_TOP
            } else if y == BOARD_HEIGHT - 1 {
                GRID_BOTTOM
            } else {
                GRID_MIDDLE
            };
            lines.push(Line::from(Span::styled(rule, grid_style)));
        } else {
            let row = (y / (CELL_HEIGHT + 1)) as usize;
            // Marks sit on the middle interior line of each cell
            let is_middle = y % (CELL_HEIGHT + 1) == (CELL_HEIGHT + 1) / 2;

            let mut spans = vec![Span::styled("│", grid_style)];
            for col in 0..SIZE {
                spans.push(cell_span(board, row, col, is_middle, cursor));
                spans.push(Span::styled("│", grid_style));
            }
            lines.push(Line::from(spans));
        }
    }

    frame.render_widget(Paragraph::new(lines), rect);
}

fn cell_span(
    board: &Board,
    row: usize,
    col: usize,
    is_middle: bool,
    cursor: Option<(usize, usize)>,
) -> Span<'static> {
    let (symbol, color) = if is_middle {
        match board.get(row, col) {
            Cell::Empty => ("       ", Color::DarkGray),
            Cell::X => ("   \u{2715}   ", Color::Red),
            Cell::O => ("   \u{25cb}   ", Color::Yellow),
        }
    } else {
        ("       ", Color::DarkGray)
    };

    let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if cursor == Some((row, col)) {
        style = style.bg(Color::DarkGray).fg(Color::White);
    }
    Span::styled(symbol, style)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_at_origin() -> Rect {
        Rect::new(0, 0, BOARD_WIDTH, BOARD_HEIGHT)
    }

    #[test]
    fn test_grid_dimensions() {
        assert_eq!(BOARD_WIDTH, 25);
        assert_eq!(BOARD_HEIGHT, 13);
        assert_eq!(GRID_TOP.chars().count(), BOARD_WIDTH as usize);
        assert_eq!(GRID_MIDDLE.chars().count(), BOARD_WIDTH as usize);
        assert_eq!(GRID_BOTTOM.chars().count(), BOARD_WIDTH as usize);
    }

    #[test]
    fn test_cell_at_center_of_each_cell() {
        let rect = grid_at_origin();
        for row in 0..SIZE {
            for col in 0..SIZE {
                let x = col as u16 * (CELL_WIDTH + 1) + 1 + CELL_WIDTH / 2;
                let y = row as u16 * (CELL_HEIGHT + 1) + 1 + CELL_HEIGHT / 2;
                assert_eq!(cell_at(rect, x, y), Some((row, col)));
            }
        }
    }

    #[test]
    fn test_cell_at_interior_edges() {
        let rect = grid_at_origin();
        // Cell (0, 0) interior spans x 1..=7, y 1..=3
        assert_eq!(cell_at(rect, 1, 1), Some((0, 0)));
        assert_eq!(cell_at(rect, 7, 3), Some((0, 0)));
        // Cell (2, 2) interior spans x 17..=23, y 9..=11
        assert_eq!(cell_at(rect, 17, 9), Some((2, 2)));
        assert_eq!(cell_at(rect, 23, 11), Some((2, 2)));
    }

    #[test]
    fn test_cell_at_rejects_grid_lines() {
        let rect = grid_at_origin();
        for x in [0u16, 8, 16, 24] {
            assert_eq!(cell_at(rect, x, 2), None);
        }
        for y in [0u16, 4, 8, 12] {
            assert_eq!(cell_at(rect, 2, y), None);
        }
    }

    #[test]
    fn test_cell_at_rejects_points_outside_grid() {
        let rect = Rect::new(10, 5, BOARD_WIDTH, BOARD_HEIGHT);
        assert_eq!(cell_at(rect, 9, 7), None);
        assert_eq!(cell_at(rect, 10 + BOARD_WIDTH, 7), None);
        assert_eq!(cell_at(rect, 12, 4), None);
        assert_eq!(cell_at(rect, 12, 5 + BOARD_HEIGHT), None);
    }

    #[test]
    fn test_cell_at_never_maps_past_the_last_cell() {
        // A click just past the bottom-right cell must not come back as a
        // fourth row or column
        let rect = grid_at_origin();
        assert_eq!(cell_at(rect, 24, 11), None);
        assert_eq!(cell_at(rect, 23, 12), None);
        assert_eq!(cell_at(rect, 25, 11), None);
        assert_eq!(cell_at(rect, 23, 13), None);
    }

    #[test]
    fn test_board_rect_centers_in_area() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = board_rect(area);
        assert_eq!(rect.width, BOARD_WIDTH);
        assert_eq!(rect.height, BOARD_HEIGHT);
        assert_eq!(rect.x, (80 - BOARD_WIDTH) / 2);
        assert_eq!(rect.y, (24 - BOARD_HEIGHT) / 2);
    }

    #[test]
    fn test_board_rect_clamps_to_small_area() {
        let area = Rect::new(0, 0, 10, 5);
        let rect = board_rect(area);
        assert_eq!(rect.width, 10);
        assert_eq!(rect.height, 5);
    }
}
