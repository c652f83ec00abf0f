//! Terminal UI: the launch splash, the mouse-driven game view, and the
//! event loop that ties them together.

mod app;
pub mod board_widget;
mod game_view;
pub mod layout;
mod splash;

pub use app::App;
