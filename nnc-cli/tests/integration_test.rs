//! Integration tests for the noughts and crosses engine
//!
//! Tests the full stack: game state, terminal detection, evaluation and the
//! alpha-beta AI, driven the way a front end drives them.

use nnc_core::{
    evaluate, evaluate_terminal, play_ai, select_move, win_value, AlphaBetaAI, GameError,
    GameResult, GameState, Player, Position, SearchConfig, Symbol,
};
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST FIXTURES
// ============================================================================

/// Play `moves` alternately starting with Cross
fn play(size: usize, moves: &[(usize, usize)]) -> GameState {
    let mut state = GameState::new(size).unwrap();
    for &(r, c) in moves {
        let player = state.current_player();
        state.apply_move(r, c, player).unwrap();
    }
    state
}

/// Random legal game; returns every intermediate state and the final result
fn random_game(size: usize, rng: &mut ChaCha8Rng) -> (Vec<GameState>, GameResult) {
    let mut state = GameState::new(size).unwrap();
    let mut history = vec![state.clone()];
    let mut result = GameResult::Ongoing;

    while !result.is_done() {
        let pos = state.legal_moves().choose(rng).unwrap();
        let player = state.current_player();
        result = state.apply_move(pos.row, pos.col, player).unwrap();
        history.push(state.clone());
    }

    (history, result)
}

// ============================================================================
// GAME STATE
// ============================================================================

#[test]
fn test_create_all_sizes() {
    for size in 1..=8 {
        let state = GameState::new(size).unwrap();
        let snapshot = state.snapshot();
        assert_eq!(snapshot.iter().flatten().count(), size * size);
        assert!(snapshot.iter().flatten().all(|s| *s == Symbol::Empty));
        assert_eq!(state.current_player(), Player::Cross);
    }
    assert!(matches!(GameState::new(0), Err(GameError::InvalidSize { .. })));
}

#[test]
fn test_failed_moves_leave_board_unchanged() {
    let mut state = play(3, &[(0, 0)]);
    let before = state.clone();

    assert!(matches!(
        state.apply_move(1, 1, Player::Cross),
        Err(GameError::WrongTurn { .. })
    ));
    assert!(matches!(
        state.apply_move(0, 3, Player::Nought),
        Err(GameError::OutOfBounds { .. })
    ));
    assert!(matches!(
        state.apply_move(0, 0, Player::Nought),
        Err(GameError::CellOccupied { .. })
    ));
    assert_eq!(state, before);
}

#[test]
fn test_random_games_keep_invariants() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for size in 1..=5 {
        for _ in 0..20 {
            let (history, result) = random_game(size, &mut rng);

            for (ply, state) in history.iter().enumerate() {
                let expected = if ply % 2 == 0 { Player::Cross } else { Player::Nought };
                assert_eq!(state.current_player(), expected);
                assert_eq!(state.empty_cells(), size * size - ply);
                assert_eq!(state.legal_moves().count(), state.empty_cells());
            }

            // Only the last state is terminal
            let (last, earlier) = history.split_last().unwrap();
            assert_eq!(evaluate_terminal(last), result);
            assert!(earlier.iter().all(|s| !s.result().is_done()));

            if let GameResult::Win(player) = result {
                assert_eq!(evaluate(last, player), win_value(size));
                assert_eq!(evaluate(last, player.opponent()), -win_value(size));
            }
        }
    }
}

#[test]
fn test_evaluation_antisymmetric_on_random_positions() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for size in 2..=5 {
        for _ in 0..10 {
            let (history, _) = random_game(size, &mut rng);
            for state in &history {
                assert_eq!(
                    evaluate(state, Player::Cross),
                    -evaluate(state, Player::Nought)
                );
            }
        }
    }
}

// ============================================================================
// END-TO-END SCENARIOS
// ============================================================================

#[test]
fn test_human_game_row_win() {
    let mut state = GameState::new(3).unwrap();

    assert_eq!(state.apply_move(0, 0, Player::Cross), Ok(GameResult::Ongoing));
    assert_eq!(state.apply_move(1, 1, Player::Nought), Ok(GameResult::Ongoing));
    assert_eq!(state.apply_move(0, 1, Player::Cross), Ok(GameResult::Ongoing));
    let result = state.apply_move(2, 2, Player::Nought).unwrap();
    assert!(!result.is_done());

    let result = state.apply_move(0, 2, Player::Cross).unwrap();
    assert!(result.is_done());
    assert_eq!(result.winner(), Symbol::Cross);
}

#[test]
fn test_ai_completes_row() {
    // X: (0,0) (0,1)   O: (1,0) (2,2), no threat from O
    let mut state = play(3, &[(0, 0), (1, 0), (0, 1), (2, 2)]);

    let mv = select_move(&state, Player::Cross).unwrap();
    assert_eq!(mv, Position::new(0, 2));

    let result = state.apply_move(mv.row, mv.col, Player::Cross).unwrap();
    assert_eq!(result, GameResult::Win(Player::Cross));
}

#[test]
fn test_full_board_draw() {
    // X O X
    // X O O
    // O X X
    let state = play(
        3,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );
    let result = evaluate_terminal(&state);
    assert!(result.is_done());
    assert_eq!(result.winner(), Symbol::Empty);
    assert_eq!(state.empty_cells(), 0);
}

#[test]
fn test_select_move_never_occupied() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    for _ in 0..10 {
        let (history, _) = random_game(3, &mut rng);
        for state in history.iter().filter(|s| !s.result().is_done()) {
            let player = state.current_player();
            let mv = select_move(state, player).unwrap();
            assert_eq!(state.board().get(mv), Some(Symbol::Empty));
        }
    }
}

#[test]
fn test_ai_never_loses_to_random() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for game in 0..6 {
        let ai_side = if game % 2 == 0 { Player::Cross } else { Player::Nought };
        let mut state = GameState::new(3).unwrap();
        let mut result = GameResult::Ongoing;

        while !result.is_done() {
            let player = state.current_player();
            result = if player == ai_side {
                play_ai(&mut state, player).unwrap()
            } else {
                let pos = state.legal_moves().choose(&mut rng).unwrap();
                state.apply_move(pos.row, pos.col, player).unwrap()
            };
        }

        assert_ne!(result, GameResult::Win(ai_side.opponent()), "game {}", game);
    }
}

#[test]
fn test_depth_limited_ai_on_larger_board() {
    let ai = AlphaBetaAI::new(SearchConfig::default().with_depth(2));
    let mut state = GameState::new(5).unwrap();
    let mut result = GameResult::Ongoing;

    while !result.is_done() {
        let player = state.current_player();
        result = ai.play(&mut state, player).unwrap();
    }

    assert!(state.empty_cells() < 25);
    assert_eq!(state.result(), result);
}

#[test]
fn test_parallel_search_agrees_with_serial() {
    let serial = AlphaBetaAI::new(SearchConfig::default());
    let parallel = AlphaBetaAI::new(SearchConfig::default().with_parallel(true));
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    for _ in 0..5 {
        let (history, _) = random_game(3, &mut rng);
        for state in history.iter().filter(|s| !s.result().is_done()) {
            let player = state.current_player();
            assert_eq!(
                serial.select_move(state, player),
                parallel.select_move(state, player)
            );
        }
    }
}
