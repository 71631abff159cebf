use super::{Board, GameDisplay, Player};
use crate::error::GameError;

/// Terminal result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Tie,
}

/// What an accepted placement did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Win(Player),
    Tie,
}

/// Why a drop was refused. Neither case mutates the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    GameAlreadyOver,
    ColumnFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementResult {
    Placed {
        row: usize,
        column: usize,
        outcome: Outcome,
    },
    Rejected(RejectReason),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create a fresh game on a `height` x `width` board. Player one starts.
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        let board = Board::new(height, width)?;
        tracing::info!(height, width, "new game");
        Ok(GameState {
            board,
            current_player: Player::One,
            outcome: None,
        })
    }

    /// Discard the current game and start over on a board of the given size.
    /// On error the current game is left untouched.
    pub fn configure(&mut self, height: usize, width: usize) -> Result<(), GameError> {
        *self = GameState::new(height, width)?;
        Ok(())
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns that still accept a piece. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Whether `player` has four in a row anywhere on the board.
    pub fn check_for_win(&self, player: Player) -> bool {
        self.board.has_four_in_row(player)
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A finished game or a full column comes back as
    /// [`PlacementResult::Rejected`] with nothing changed. A column outside
    /// the board is a caller error.
    pub fn drop_piece(&mut self, column: usize) -> Result<PlacementResult, GameError> {
        if self.is_terminal() {
            tracing::debug!(column, "drop rejected: game already over");
            return Ok(PlacementResult::Rejected(RejectReason::GameAlreadyOver));
        }

        let Some(row) = self.board.landing_row(column)? else {
            tracing::debug!(column, "drop rejected: column full");
            return Ok(PlacementResult::Rejected(RejectReason::ColumnFull));
        };

        let player = self.current_player;
        self.board.place(row, column, player)?;
        tracing::debug!(row, column, player = player.number(), "piece placed");

        // Win is checked before tie: a winning move that fills the board is a win.
        let outcome = if self.check_for_win(player) {
            self.outcome = Some(GameOutcome::Winner(player));
            tracing::info!(player = player.number(), "game won");
            Outcome::Win(player)
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Tie);
            tracing::info!("game tied");
            Outcome::Tie
        } else {
            self.current_player = player.other();
            Outcome::Continue
        };

        Ok(PlacementResult::Placed {
            row,
            column,
            outcome,
        })
    }

    /// [`GameState::drop_piece`], reporting the placement, rejection and any
    /// terminal outcome to `display`.
    pub fn drop_piece_with(
        &mut self,
        column: usize,
        display: &mut dyn GameDisplay,
    ) -> Result<PlacementResult, GameError> {
        let mover = self.current_player;
        let result = self.drop_piece(column)?;

        match result {
            PlacementResult::Placed { row, column, .. } => {
                display.piece_placed(row, column, mover);
                if let Some(outcome) = self.outcome {
                    display.game_over(outcome);
                }
            }
            PlacementResult::Rejected(reason) => display.move_rejected(reason),
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl GameDisplay for Recorder {
        fn piece_placed(&mut self, row: usize, column: usize, player: Player) {
            self.events
                .push(format!("placed {row},{column} by {}", player.number()));
        }

        fn move_rejected(&mut self, reason: RejectReason) {
            self.events.push(format!("rejected {reason:?}"));
        }

        fn game_over(&mut self, outcome: GameOutcome) {
            self.events.push(format!("over {outcome:?}"));
        }
    }

    fn play(state: &mut GameState, columns: &[usize]) -> PlacementResult {
        let mut last = None;
        for &col in columns {
            last = Some(state.drop_piece(col).unwrap());
        }
        last.expect("at least one move")
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new(6, 7).unwrap();
        assert_eq!(state.current_player(), Player::One);
        assert!(!state.is_terminal());
        assert_eq!(state.outcome(), None);
        assert_eq!(state.legal_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            GameState::new(0, 0),
            Err(GameError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_drop_piece() {
        let mut state = GameState::new(4, 4).unwrap();
        let result = state.drop_piece(3).unwrap();

        assert_eq!(
            result,
            PlacementResult::Placed {
                row: 3,
                column: 3,
                outcome: Outcome::Continue
            }
        );
        assert_eq!(state.current_player(), Player::Two);
        assert_eq!(state.board().get(3, 3), Some(Cell::PlayerOne));
    }

    #[test]
    fn test_column_out_of_range_leaves_state_unchanged() {
        let mut state = GameState::new(4, 4).unwrap();
        let before = state.clone();
        assert_eq!(
            state.drop_piece(4),
            Err(GameError::ColumnOutOfRange {
                column: 4,
                width: 4
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_full_column_rejected_without_mutation() {
        let mut state = GameState::new(4, 4).unwrap();
        play(&mut state, &[0, 0, 0, 0]);
        let before = state.clone();

        for _ in 0..3 {
            assert_eq!(
                state.drop_piece(0).unwrap(),
                PlacementResult::Rejected(RejectReason::ColumnFull)
            );
            assert_eq!(state, before);
        }
        assert_eq!(state.legal_columns(), vec![1, 2, 3]);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::new(4, 4).unwrap();

        // One fills the bottom row while Two stacks on top of it
        let result = play(&mut state, &[0, 0, 1, 1, 2, 2, 3]);

        assert_eq!(
            result,
            PlacementResult::Placed {
                row: 3,
                column: 3,
                outcome: Outcome::Win(Player::One)
            }
        );
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::One)));
        assert_eq!(state.current_player(), Player::One);
        assert!(state.legal_columns().is_empty());
    }

    #[test]
    fn test_moves_after_game_over_rejected() {
        let mut state = GameState::new(4, 4).unwrap();
        play(&mut state, &[0, 0, 1, 1, 2, 2, 3]);
        let before = state.clone();

        for col in 0..4 {
            assert_eq!(
                state.drop_piece(col).unwrap(),
                PlacementResult::Rejected(RejectReason::GameAlreadyOver)
            );
        }
        // Terminal check comes before the range check
        assert_eq!(
            state.drop_piece(99).unwrap(),
            PlacementResult::Rejected(RejectReason::GameAlreadyOver)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_tie() {
        let mut state = GameState::new(4, 4).unwrap();
        let pattern = [0, 2, 1, 3, 2, 0, 3, 1, 0, 2, 1, 3, 2, 0, 3, 1];

        let result = play(&mut state, &pattern);

        assert_eq!(
            result,
            PlacementResult::Placed {
                row: 0,
                column: 1,
                outcome: Outcome::Tie
            }
        );
        assert_eq!(state.outcome(), Some(GameOutcome::Tie));
        assert!(state.board().is_full());
        assert_eq!(state.current_player(), Player::Two);
    }

    #[test]
    fn test_win_takes_precedence_over_tie() {
        let mut state = GameState::new(4, 4).unwrap();
        // Two's last piece tops off column 3 and fills the board
        let pattern = [0, 1, 0, 3, 0, 3, 2, 2, 1, 3, 1, 0, 2, 2, 1, 3];

        let result = play(&mut state, &pattern);

        assert!(state.board().is_full());
        assert_eq!(
            result,
            PlacementResult::Placed {
                row: 0,
                column: 3,
                outcome: Outcome::Win(Player::Two)
            }
        );
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Two)));
    }

    #[test]
    fn test_configure_resets_game() {
        let mut state = GameState::new(4, 4).unwrap();
        play(&mut state, &[0, 0, 1, 1, 2, 2, 3]);

        state.configure(6, 6).unwrap();
        assert_eq!(state.board().height(), 6);
        assert_eq!(state.board().width(), 6);
        assert_eq!(state.current_player(), Player::One);
        assert!(!state.is_terminal());
        assert!(!state.board().is_full());
    }

    #[test]
    fn test_configure_error_keeps_current_game() {
        let mut state = GameState::new(4, 4).unwrap();
        state.drop_piece(1).unwrap();
        let before = state.clone();

        assert!(state.configure(0, 8).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_display_notifications() {
        let mut state = GameState::new(4, 4).unwrap();
        let mut display = Recorder::default();

        for col in [0, 0, 1, 1, 2, 2, 3, 3] {
            state.drop_piece_with(col, &mut display).unwrap();
        }

        assert_eq!(
            display.events,
            vec![
                "placed 3,0 by 1",
                "placed 2,0 by 2",
                "placed 3,1 by 1",
                "placed 2,1 by 2",
                "placed 3,2 by 1",
                "placed 2,2 by 2",
                "placed 3,3 by 1",
                "over Winner(One)",
                "rejected GameAlreadyOver",
            ]
        );
    }

    #[test]
    fn test_display_not_notified_on_error() {
        let mut state = GameState::new(4, 4).unwrap();
        let mut display = Recorder::default();

        assert!(state.drop_piece_with(7, &mut display).is_err());
        assert!(display.events.is_empty());
    }
}
