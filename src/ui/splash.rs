//! Launch screen: a short title animation shown before the board appears.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TITLE: &str = "Tic Tac Toe";

/// Tick-driven launch animation. The title frame grows to full size over
/// the first half, then keeps expanding while the title fades out over
/// the second half.
#[derive(Debug, Clone)]
pub struct Splash {
    elapsed_ticks: u64,
    total_ticks: u64,
}

impl Splash {
    /// Create a splash lasting `duration_ms`, advanced every `tick_rate_ms`.
    pub fn new(duration_ms: u64, tick_rate_ms: u64) -> Self {
        // Always play at least one frame
        let total_ticks = (duration_ms / tick_rate_ms.max(1)).max(1);
        Splash {
            elapsed_ticks: 0,
            total_ticks,
        }
    }

    /// Advance one tick; returns true once the animation has finished.
    pub fn advance(&mut self) -> bool {
        self.elapsed_ticks += 1;
        self.is_done()
    }

    /// Check if the animation has played out
    pub fn is_done(&self) -> bool {
        self.elapsed_ticks >= self.total_ticks
    }

    /// Animation progress in [0, 1]
    fn progress(&self) -> f64 {
        (self.elapsed_ticks as f64 / self.total_ticks as f64).min(1.0)
    }

    /// Render the splash frame for the current tick.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let progress = self.progress();

        // Grow to full size over the first half, overshoot during the second
        let scale = if progress < 0.5 {
            0.4 + 0.6 * (progress * 2.0)
        } else {
            1.0 + 0.5 * (progress * 2.0 - 1.0)
        };

        let full_width = area.width.min(39) as f64;
        let full_height = area.height.min(9) as f64;
        let min_width = (TITLE.len() as u16 + 2).min(area.width);
        let min_height = 3.min(area.height);
        let width = ((full_width * scale) as u16).clamp(min_width, area.width);
        let height = ((full_height * scale) as u16).clamp(min_height, area.height);

        let rect = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        // The title fades in steps once the frame is full size
        let title_color = if progress < 0.5 {
            Color::White
        } else if progress < 0.75 {
            Color::Gray
        } else {
            Color::DarkGray
        };

        // Pad the title down to the vertical middle of the box
        let inner_height = height.saturating_sub(2);
        let padding = (inner_height.saturating_sub(1) / 2) as usize;
        let mut lines = vec![Line::default(); padding];
        lines.push(Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )));

        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));

        frame.render_widget(widget, rect);
    }
}
