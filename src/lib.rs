//! # Connect Four
//!
//! Two-player Connect Four on a configurable grid, played in the terminal.
//! The rules engine is independent of the Ratatui front-end, which only
//! renders what the engine reports.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, turn/outcome state machine
//! - [`ui`]: Terminal UI: board-size prompt and game view
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
