//! Core tic-tac-toe game logic: board representation, player types, and the
//! turn-taking game state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, SIZE};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
