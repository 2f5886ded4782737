//! Position evaluation

use crate::board::{Board, Line, Player, Symbol};
use crate::game::GameState;

/// Score of a fully won line: `3 * size^2`, larger than any heuristic sum
pub fn win_value(size: usize) -> i32 {
    3 * (size * size) as i32
}

/// Evaluate position from `player`'s perspective.
///
/// Every unblocked line contributes +1 per own mark and -1 per opponent
/// mark; a line holding both symbols contributes nothing. A line owned
/// entirely by one player short-circuits to `±win_value(size)`.
pub fn evaluate(state: &GameState, player: Player) -> i32 {
    let board = state.board();
    let size = board.size() as i32;
    let win = win_value(board.size());
    let mut sum = 0;

    for i in 0..board.size() {
        let row = line_sum(board, Line::Row(i), player);
        let col = line_sum(board, Line::Column(i), player);

        if row == size || col == size {
            return win;
        } else if row == -size || col == -size {
            return -win;
        }

        sum += row + col;
    }

    for line in [Line::Diagonal, Line::AntiDiagonal] {
        let diag = line_sum(board, line, player);
        if diag == size {
            return win;
        } else if diag == -size {
            return -win;
        }
        sum += diag;
    }

    sum
}

/// Signed mark count of a line, 0 when both symbols appear on it
fn line_sum(board: &Board, line: Line, player: Player) -> i32 {
    let mine = player.symbol();
    let mut owner = Symbol::Empty;
    let mut sum = 0;

    for pos in line.cells(board.size()) {
        let cell = board.at(pos);
        if cell.is_empty() {
            continue;
        }
        if owner.is_empty() {
            owner = cell;
        }
        if cell != owner {
            return 0;
        }
        sum += if cell == mine { 1 } else { -1 };
    }

    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;

    fn play(size: usize, moves: &[(usize, usize)]) -> GameState {
        let mut state = GameState::new(size).unwrap();
        for &(r, c) in moves {
            let player = state.current_player();
            state.apply_move(r, c, player).unwrap();
        }
        state
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let state = GameState::new(4).unwrap();
        assert_eq!(evaluate(&state, Player::Cross), 0);
        assert_eq!(evaluate(&state, Player::Nought), 0);
    }

    #[test]
    fn test_center_mark() {
        // Centre of 3x3 sits on row, column and both diagonals
        let state = play(3, &[(1, 1)]);
        assert_eq!(evaluate(&state, Player::Cross), 4);
        assert_eq!(evaluate(&state, Player::Nought), -4);
    }

    #[test]
    fn test_blocked_line_contributes_nothing() {
        let mut state = GameState::new(3).unwrap();
        state.apply_move(0, 0, Player::Cross).unwrap();
        state.apply_move(0, 2, Player::Nought).unwrap();
        // Row 0 blocked; X: col 0 + diag = 2; O: col 2 + anti-diag = 2
        assert_eq!(line_sum(state.board(), Line::Row(0), Player::Cross), 0);
        assert_eq!(evaluate(&state, Player::Cross), 0);
    }

    #[test]
    fn test_antisymmetric_without_full_line() {
        let state = play(4, &[(0, 0), (1, 1), (0, 3), (2, 1), (3, 3)]);
        assert_eq!(
            evaluate(&state, Player::Cross),
            -evaluate(&state, Player::Nought)
        );
    }

    #[test]
    fn test_full_line_returns_sentinel() {
        let state = play(3, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        assert_eq!(evaluate(&state, Player::Cross), 27);
        assert_eq!(evaluate(&state, Player::Nought), -27);
    }

    #[test]
    fn test_empty_cells_do_not_block() {
        let state = play(3, &[(0, 0), (1, 1), (0, 2)]);
        assert_eq!(state.board().get(Position::new(0, 1)), Some(Symbol::Empty));
        assert_eq!(line_sum(state.board(), Line::Row(0), Player::Cross), 2);
        assert_eq!(line_sum(state.board(), Line::Row(0), Player::Nought), -2);
    }

    #[test]
    fn test_win_value() {
        assert_eq!(win_value(1), 3);
        assert_eq!(win_value(3), 27);
        assert_eq!(win_value(4), 48);
    }
}
