//! Core Connect Four game logic: board representation, player types, the
//! turn/outcome state machine, and the display hook it reports to.

mod board;
mod display;
mod player;
mod state;

pub use board::{Board, Cell, LINE_LENGTH};
pub use display::{GameDisplay, NoDisplay};
pub use player::Player;
pub use state::{GameOutcome, GameState, Outcome, PlacementResult, RejectReason};
