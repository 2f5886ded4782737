//! CPU-based Alpha-Beta AI

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::board::{Player, Position};
use crate::config::SearchConfig;
use crate::error::GameError;
use crate::eval::evaluate;
use crate::game::{GameResult, GameState};

// ============================================================================
// SEARCH PRIMITIVES
// ============================================================================

/// Window bound no evaluation can reach
pub(crate) fn search_limit(size: usize) -> i32 {
    (size * size * 10) as i32
}

/// Candidate cell and its score as it travels up the tree
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ScoredMove {
    pub pos: Option<Position>,
    pub score: i32,
}

/// Root result with the number of nodes visited
#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchOutcome {
    pub pos: Option<Position>,
    pub score: i32,
    pub nodes: u64,
}

/// Cancellation seen by one root branch: raised once a lower-indexed branch
/// has proven the best possible score.
#[cfg_attr(not(feature = "parallel"), allow(dead_code))]
pub(crate) struct StopSignal<'a> {
    cutoff: &'a AtomicUsize,
    branch: usize,
}

#[cfg_attr(not(feature = "parallel"), allow(dead_code))]
impl<'a> StopSignal<'a> {
    pub fn new(cutoff: &'a AtomicUsize, branch: usize) -> Self {
        Self { cutoff, branch }
    }

    fn is_raised(&self) -> bool {
        self.cutoff.load(Ordering::Relaxed) < self.branch
    }
}

/// Depth-first minimax with alpha-beta pruning, scored for one player
pub(crate) struct Search<'a> {
    player: Player,
    pub nodes: u64,
    stop: Option<StopSignal<'a>>,
}

impl<'a> Search<'a> {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            nodes: 0,
            stop: None,
        }
    }

    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    pub fn with_stop(player: Player, stop: StopSignal<'a>) -> Self {
        Self {
            player,
            nodes: 0,
            stop: Some(stop),
        }
    }

    /// Best continuation from `state`; `None` if the stop signal was raised.
    ///
    /// Nodes where `player` moves maximise `evaluate(_, player)`, the others
    /// minimise it. Candidates are scanned row-major and only a strictly
    /// better score replaces the running best, so ties go to the earliest
    /// cell. On cutoff the running best is returned: the child that triggers
    /// the cutoff is always the one that just became the best.
    pub fn alpha_beta(
        &mut self,
        state: &GameState,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        last: Option<Position>,
    ) -> Option<ScoredMove> {
        if self.stop.as_ref().is_some_and(|stop| stop.is_raised()) {
            return None;
        }
        self.nodes += 1;

        if depth == 0 || state.result().is_done() {
            return Some(ScoredMove {
                pos: last,
                score: evaluate(state, self.player),
            });
        }

        let maximizing = state.current_player() == self.player;
        let mut best = ScoredMove {
            pos: last,
            score: if maximizing { alpha } else { beta },
        };

        for pos in state.legal_moves() {
            let mut child = state.clone();
            child.play_unchecked(pos);

            let mut reply = self.alpha_beta(&child, depth - 1, alpha, beta, Some(pos))?;
            reply.pos = Some(pos);

            if maximizing {
                if reply.score > best.score {
                    best = reply;
                }
                alpha = best.score;
            } else {
                if reply.score < best.score {
                    best = reply;
                }
                beta = best.score;
            }

            if beta <= alpha {
                break;
            }
        }

        Some(best)
    }
}

/// Serial search from the root
pub(crate) fn search_root(state: &GameState, player: Player, depth: u32) -> SearchOutcome {
    let limit = search_limit(state.size());
    let mut search = Search::new(player);
    let best = search.alpha_beta(state, depth, -limit, limit, None);

    SearchOutcome {
        pos: best.and_then(|m| m.pos),
        score: best.map_or(-limit, |m| m.score),
        nodes: search.nodes,
    }
}

// ============================================================================
// ALPHA-BETA AI
// ============================================================================

/// Alpha-Beta AI player
#[derive(Clone, Debug, Default)]
pub struct AlphaBetaAI {
    config: SearchConfig,
}

impl AlphaBetaAI {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Pick the best cell for `player`, who must be the player to move.
    ///
    /// Searches an independent copy; `state` is never touched.
    pub fn select_move(&self, state: &GameState, player: Player) -> Result<Position, GameError> {
        if player != state.current_player() {
            return Err(GameError::WrongTurn {
                expected: state.current_player(),
                found: player,
            });
        }
        if state.result().is_done() {
            return Err(GameError::GameOver);
        }

        let depth = self.config.depth_for(state.size()).max(1);
        let outcome = self.run(state, player, depth);

        tracing::debug!(
            %player,
            depth,
            score = outcome.score,
            nodes = outcome.nodes,
            best = ?outcome.pos,
            "search complete"
        );

        outcome
            .pos
            .or_else(|| state.legal_moves().next())
            .ok_or(GameError::GameOver)
    }

    /// Select a move for `player` and apply it to the live state
    pub fn play(&self, state: &mut GameState, player: Player) -> Result<GameResult, GameError> {
        let pos = self.select_move(state, player)?;
        state.apply_move(pos.row, pos.col, player)
    }

    #[cfg(feature = "parallel")]
    fn run(&self, state: &GameState, player: Player, depth: u32) -> SearchOutcome {
        if self.config.parallel {
            crate::parallel::search_root(state, player, depth)
        } else {
            search_root(state, player, depth)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn run(&self, state: &GameState, player: Player, depth: u32) -> SearchOutcome {
        if self.config.parallel {
            tracing::warn!("parallel search requested without the `parallel` feature, searching serially");
        }
        search_root(state, player, depth)
    }
}

/// Select a move with an exhaustive serial search
pub fn select_move(state: &GameState, player: Player) -> Result<Position, GameError> {
    AlphaBetaAI::default().select_move(state, player)
}

/// Select and apply a move for `player` with an exhaustive serial search
pub fn play_ai(state: &mut GameState, player: Player) -> Result<GameResult, GameError> {
    AlphaBetaAI::default().play(state, player)
}

// ============================================================================
// TESTS
// ============================================================================
