use tracing::debug;

use super::board::SIZE;
use super::{board, Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell is already occupied")]
    CellOccupied,
    #[error("row and column must be between 0 and 2")]
    OutOfBounds,
    #[error("game is already over")]
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    move_count: usize,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::X, // X starts
            move_count: 0,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get number of moves played so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Check if a cell is occupied; positions off the board count as occupied
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.board.is_occupied(row, col)
    }

    /// Check if a player holds a completed line
    pub fn has_win(&self, player: Player) -> bool {
        self.board.has_win(player)
    }

    /// Check if the game ended with a full board and no winner
    pub fn is_draw(&self) -> bool {
        self.move_count == SIZE * SIZE && self.board.winner().is_none()
    }

    /// Apply a move for the current player
    ///
    /// On success the move counter advances and the turn passes to the
    /// other player, except after a winning move: the winner keeps the
    /// turn so the result can point at them. A drawing move passes the
    /// turn like any other. On error the state is left untouched.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player;
        self.board
            .place(row, col, mover.mark())
            .map_err(|e| match e {
                board::MoveError::CellOccupied => MoveError::CellOccupied,
                board::MoveError::OutOfBounds => MoveError::OutOfBounds,
            })?;
        self.move_count += 1;

        // Win is checked for the mover before the turn would advance; only
        // a win keeps the turn from passing
        if self.board.has_win(mover) {
            self.outcome = Some(GameOutcome::Winner(mover));
        } else {
            if self.move_count == SIZE * SIZE {
                self.outcome = Some(GameOutcome::Draw);
            }
            self.current_player = mover.other();
        }

        debug!(
            row,
            col,
            player = mover.name(),
            move_count = self.move_count,
            outcome = ?self.outcome,
            "move applied"
        );
        Ok(())
    }

    /// Reset to the initial state
    pub fn reset(&mut self) {
        debug!("game reset");
        *self = GameState::initial();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
