//! Terminal state detection

use crate::board::{Board, Line, Player, Symbol};
use crate::game::{GameResult, GameState};

/// Decide whether the game is over and who won.
///
/// Lines are checked row i, column i for each i, then the diagonal, then the
/// anti-diagonal; the first full line decides the winner. With no full line
/// the game is a draw exactly when no Empty cell remains.
pub fn evaluate_terminal(state: &GameState) -> GameResult {
    let board = state.board();
    let size = board.size();

    for i in 0..size {
        for line in [Line::Row(i), Line::Column(i)] {
            if let Some(result) = full_line(board, line) {
                return result;
            }
        }
    }

    for line in [Line::Diagonal, Line::AntiDiagonal] {
        if let Some(result) = full_line(board, line) {
            return result;
        }
    }

    if board.has_empty() {
        GameResult::Ongoing
    } else {
        GameResult::Draw
    }
}

/// Winner of a line fully occupied by one symbol
fn full_line(board: &Board, line: Line) -> Option<GameResult> {
    let mut cells = line.cells(board.size());
    let owner = board.at(cells.next()?);
    if owner.is_empty() {
        return None;
    }

    // Stops at the first mismatch, so a partial line never wins
    if cells.all(|pos| board.at(pos) == owner) {
        match owner {
            Symbol::Cross => Some(GameResult::Win(Player::Cross)),
            Symbol::Nought => Some(GameResult::Win(Player::Nought)),
            Symbol::Empty => None,
        }
    } else {
        None
    }
}
