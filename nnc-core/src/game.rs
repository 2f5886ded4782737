//! Game state and validated move application

use crate::board::{Board, Player, Position, Symbol};
use crate::error::GameError;
use crate::terminal::evaluate_terminal;
use serde::{Deserialize, Serialize};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    Win(Player),
    Draw,
}

impl GameResult {
    pub fn is_done(self) -> bool {
        self != GameResult::Ongoing
    }

    /// Winning symbol; `Symbol::Empty` for a draw or an ongoing game
    pub fn winner(self) -> Symbol {
        match self {
            GameResult::Win(player) => player.symbol(),
            GameResult::Ongoing | GameResult::Draw => Symbol::Empty,
        }
    }
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Game state. Cloning yields an independent deep copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    /// Cells still Empty
    remaining: usize,
}

impl GameState {
    /// Create an empty `size` x `size` game with Cross to move
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size < 1 {
            return Err(GameError::InvalidSize { size });
        }

        Ok(Self {
            board: Board::empty(size),
            current_player: Player::Cross,
            remaining: size * size,
        })
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copy of the grid contents, row by row
    pub fn snapshot(&self) -> Vec<Vec<Symbol>> {
        self.board.rows()
    }

    /// Number of Empty cells left
    pub fn empty_cells(&self) -> usize {
        self.remaining
    }

    /// Empty cells in row-major order
    pub fn legal_moves(&self) -> impl Iterator<Item = Position> + '_ {
        self.board.empty_positions()
    }

    pub fn result(&self) -> GameResult {
        evaluate_terminal(self)
    }

    // ========================================================================
    // MOVE APPLICATION
    // ========================================================================

    /// Validate and play `player`'s mark at (`row`, `col`).
    ///
    /// Returns the terminal status after the move. Moves after a terminal
    /// result are not rejected; callers stop once `is_done()` is reported.
    pub fn apply_move(
        &mut self,
        row: usize,
        col: usize,
        player: Player,
    ) -> Result<GameResult, GameError> {
        if player != self.current_player {
            return Err(GameError::WrongTurn {
                expected: self.current_player,
                found: player,
            });
        }
        if !self.board.in_bounds(row, col) {
            return Err(GameError::OutOfBounds {
                row,
                col,
                size: self.size(),
            });
        }
        let pos = Position::new(row, col);
        if !self.board.at(pos).is_empty() {
            return Err(GameError::CellOccupied { row, col });
        }

        let result = self.play_unchecked(pos);
        tracing::trace!(%player, %pos, ?result, "move applied");
        if result.is_done() {
            tracing::debug!(?result, "game over");
        }
        Ok(result)
    }

    /// Place the current player's mark on an Empty, in-bounds cell.
    pub(crate) fn play_unchecked(&mut self, pos: Position) -> GameResult {
        self.board.set(pos, self.current_player.symbol());
        let result = evaluate_terminal(self);
        self.current_player = self.current_player.opponent();
        self.remaining -= 1;
        result
    }
}
