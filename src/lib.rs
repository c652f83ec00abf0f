//! # TTT
//!
//! Two-player tic-tac-toe played in the terminal. The board is mouse-driven:
//! click a square to claim it, or steer a highlighted cursor with the arrow
//! keys. A short title splash plays at startup, and a popup offers a new
//! game once someone wins or the board fills up.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ui`] — Terminal UI: launch splash, board view, input handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
