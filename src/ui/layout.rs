//! Shared screen geometry, so rendering and mouse hit-testing agree on
//! where everything is.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::board_widget::BOARD_HEIGHT;

/// Label of the reset control under the board.
pub const RESET_LABEL: &str = "[ Reset board ]";

/// Label of the button inside the game over popup.
pub const NEW_GAME_LABEL: &str = "[ New Game ]";

/// Screen regions of the game view.
pub struct AppLayout {
    pub header: Rect,
    pub board: Rect,
    pub notice: Rect,
    pub reset: Rect,
    pub controls: Rect,
}

/// Split the frame into the game view regions.
pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Notice
            Constraint::Length(1),         // Reset control
            Constraint::Length(3),         // Controls
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        board: chunks[1],
        notice: chunks[2],
        reset: chunks[3],
        controls: chunks[4],
    }
}

/// Centered `width` x `height` rectangle inside `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Rectangle of the game over popup, centered on the frame.
pub fn popup_rect(area: Rect) -> Rect {
    centered(area, 32, 7)
}

/// Clickable rectangle of the New Game button inside the popup.
///
/// The game view draws the button one content line above the popup's
/// bottom border, centered; this must stay in step with it. When the
/// popup is too short to draw the button, there is nothing to click and
/// the rectangle is empty.
pub fn new_game_button_rect(popup: Rect) -> Rect {
    if popup.height.saturating_sub(2) < 4 {
        return Rect::default();
    }
    let inner_width = popup.width.saturating_sub(2);
    let width = (NEW_GAME_LABEL.len() as u16).min(inner_width);
    Rect {
        x: popup.x + 1 + (inner_width - width) / 2,
        y: (popup.y + popup.height).saturating_sub(3),
        width,
        height: 1,
    }
}

/// Clickable rectangle of the reset control, centered in its line.
pub fn reset_button_rect(area: Rect) -> Rect {
    let width = (RESET_LABEL.len() as u16).min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height.min(1),
    }
}
