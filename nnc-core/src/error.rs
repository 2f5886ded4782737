//! Errors surfaced by game operations

use crate::board::Player;

/// Recoverable failure of a game operation. The state is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid board size {size}: must be at least 1")]
    InvalidSize { size: usize },

    #[error("not {found}'s turn: {expected} to move")]
    WrongTurn { expected: Player, found: Player },

    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("cell ({row}, {col}) already played")]
    CellOccupied { row: usize, col: usize },

    #[error("game is already over")]
    GameOver,
}
