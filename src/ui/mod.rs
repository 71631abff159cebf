//! Terminal UI: a board-size prompt and the game view. The UI owns the
//! [`GameState`](crate::game::GameState) and only renders what the engine
//! reports.

mod app;
mod game_view;
mod setup_view;

pub use app::{App, SizeChoice, StatusLine};
