use super::{GameOutcome, Player, RejectReason};

/// Receives notifications from [`super::GameState::drop_piece_with`].
///
/// Implementors render whatever they like; the engine never reads anything
/// back. Every method defaults to a no-op.
pub trait GameDisplay {
    /// A piece for `player` came to rest at (row, column).
    fn piece_placed(&mut self, _row: usize, _column: usize, _player: Player) {}

    /// A drop was refused without changing the board.
    fn move_rejected(&mut self, _reason: RejectReason) {}

    /// The game reached a terminal state.
    fn game_over(&mut self, _outcome: GameOutcome) {}
}

/// Display that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDisplay;

impl GameDisplay for NoDisplay {}
