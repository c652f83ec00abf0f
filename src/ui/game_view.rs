use crate::config::PlayersConfig;
use crate::game::{GameOutcome, GameState, Player};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{board_widget, layout};

pub fn render(
    frame: &mut Frame,
    state: &GameState,
    cursor: Option<(usize, usize)>,
    notice: Option<&str>,
    players: &PlayersConfig,
) {
    let regions = layout::compute_layout(frame.area());

    render_header(frame, state, players, regions.header);

    // The cursor highlight disappears once the game is over
    let cursor = if state.is_terminal() { None } else { cursor };
    board_widget::render(frame, state.board(), cursor, regions.board);

    render_notice(frame, notice, regions.notice);
    render_reset(frame, regions.reset);
    render_controls(frame, regions.controls);

    if let Some(outcome) = state.outcome() {
        render_game_over(frame, outcome, players);
    }
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Red,
        Player::O => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, state: &GameState, players: &PlayersConfig, area: Rect) {
    let (status, color) = if state.is_terminal() {
        ("Game Over".to_string(), Color::White)
    } else {
        let player = state.current_player();
        (
            format!("{}'s Turn", players.name_of(player)),
            player_color(player),
        )
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic Tac Toe"));

    frame.render_widget(header, area);
}

fn render_notice(frame: &mut Frame, notice: Option<&str>, area: Rect) {
    let widget = Paragraph::new(notice.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(widget, area);
}

fn render_reset(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(Line::from(Span::styled(
        layout::RESET_LABEL,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("Click a square  |  ←/→/↑/↓ + Enter: Place  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

fn render_game_over(frame: &mut Frame, outcome: GameOutcome, players: &PlayersConfig) {
    let popup = layout::popup_rect(frame.area());
    frame.render_widget(Clear, popup);

    let (message, color) = match outcome {
        GameOutcome::Winner(player) => (
            format!("{} wins!", players.name_of(player)),
            player_color(player),
        ),
        GameOutcome::Draw => ("It's a draw!".to_string(), Color::White),
    };

    // The button goes one content line above the bottom border; this must
    // stay in step with layout::new_game_button_rect
    let inner_height = popup.height.saturating_sub(2) as usize;
    let mut lines = vec![Line::default(); inner_height];
    if inner_height >= 4 {
        lines[1] = Line::from(Span::styled(
            message,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        lines[inner_height - 2] = Line::from(Span::styled(
            layout::NEW_GAME_LABEL,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Game Over"));

    frame.render_widget(widget, popup);
}
