use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use ratatui::{backend::Backend, Terminal};
use tracing::info;

use crate::config::AppConfig;
use crate::game::{GameState, MoveError, SIZE};

use super::splash::Splash;
use super::{board_widget, game_view, layout};

/// Which screen is on display.
enum Screen {
    Splash(Splash),
    Game,
}

pub struct App {
    config: AppConfig,
    game: GameState,
    cursor: (usize, usize),
    screen: Screen,
    should_quit: bool,
    notice: Option<String>,
    /// Frame area of the last render, used for mouse hit-testing
    frame_area: Rect,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let screen = if config.ui.splash {
            Screen::Splash(Splash::new(
                config.ui.splash_duration_ms,
                config.ui.tick_rate_ms,
            ))
        } else {
            Screen::Game
        };

        App {
            config,
            game: GameState::initial(),
            cursor: (1, 1), // Start in the middle
            screen,
            should_quit: false,
            notice: None,
            frame_area: Rect::default(),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);

        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events(tick_rate)?;
        }
        Ok(())
    }

    /// Render the current screen
    fn render(&mut self, frame: &mut ratatui::Frame) {
        self.frame_area = frame.area();
        match &self.screen {
            Screen::Splash(splash) => splash.render(frame),
            Screen::Game => game_view::render(
                frame,
                &self.game,
                Some(self.cursor),
                self.notice.as_deref(),
                &self.config.players,
            ),
        }
    }

    /// Poll for input, advancing the animation clock on timeout
    fn handle_events(&mut self, tick_rate: Duration) -> io::Result<()> {
        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        } else {
            self.on_tick();
        }
        Ok(())
    }

    /// Advance tick-driven state
    fn on_tick(&mut self) {
        if let Screen::Splash(splash) = &mut self.screen {
            if splash.advance() {
                self.screen = Screen::Game;
            }
        }
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Quitting works from any screen
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return;
        }

        // Any other key skips the splash
        if matches!(self.screen, Screen::Splash(_)) {
            self.screen = Screen::Game;
            return;
        }

        // Clear message on any key press
        self.notice = None;

        match key.code {
            KeyCode::Char('r') => {
                self.reset();
            }
            KeyCode::Left => {
                if self.cursor.1 > 0 {
                    self.cursor.1 -= 1;
                }
            }
            KeyCode::Right => {
                if self.cursor.1 < SIZE - 1 {
                    self.cursor.1 += 1;
                }
            }
            KeyCode::Up => {
                if self.cursor.0 > 0 {
                    self.cursor.0 -= 1;
                }
            }
            KeyCode::Down => {
                if self.cursor.0 < SIZE - 1 {
                    self.cursor.0 += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.game.is_terminal() {
                    // Stands in for the popup's New Game button
                    self.reset();
                } else {
                    let (row, col) = self.cursor;
                    self.place(row, col);
                }
            }
            _ => {}
        }
    }

    /// Handle mouse click
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }

        // A click skips the splash too
        if matches!(self.screen, Screen::Splash(_)) {
            self.screen = Screen::Game;
            return;
        }

        let position = Position::new(mouse.column, mouse.row);
        let regions = layout::compute_layout(self.frame_area);

        // Once the game is over, only the restart affordances react
        if self.game.is_terminal() {
            let popup = layout::popup_rect(self.frame_area);
            if layout::new_game_button_rect(popup).contains(position)
                || layout::reset_button_rect(regions.reset).contains(position)
            {
                self.reset();
            }
            return;
        }

        if layout::reset_button_rect(regions.reset).contains(position) {
            self.reset();
            return;
        }

        let board = board_widget::board_rect(regions.board);
        if let Some((row, col)) = board_widget::cell_at(board, mouse.column, mouse.row) {
            self.notice = None;
            self.cursor = (row, col);
            self.place(row, col);
        }
    }

    /// Claim a cell for the current player
    fn place(&mut self, row: usize, col: usize) {
        // Taken squares are filtered up front; apply_move re-checks anyway
        if self.game.is_occupied(row, col) {
            self.notice = Some("That square is taken!".to_string());
            return;
        }

        match self.game.apply_move(row, col) {
            Ok(()) => {
                if let Some(outcome) = self.game.outcome() {
                    info!(?outcome, "game finished");
                }
            }
            Err(MoveError::CellOccupied) => {
                self.notice = Some("That square is taken!".to_string());
            }
            Err(MoveError::OutOfBounds) => {
                self.notice = Some("That square is off the board!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.notice = Some("Game is over!".to_string());
            }
        }
    }

    /// Start a fresh game
    fn reset(&mut self) {
        self.game.reset();
        self.cursor = (1, 1);
        self.notice = Some("New game started!".to_string());
    }
}
