//! Parallel root search
//!
//! Root candidates are searched concurrently with rayon. Every branch owns
//! its own copy of the board and reports into its own slot of the collected
//! results. A branch that proves the winning score lowers a shared cutoff
//! index; branches further along in scan order see it and give up. Branches
//! before the cutoff always finish, so the earliest-cell tie-break matches
//! the serial search.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::ai::{search_limit, Search, SearchOutcome, StopSignal};
use crate::board::{Player, Position};
use crate::eval::win_value;
use crate::game::GameState;

/// Result slot of one root branch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Branch {
    Done(i32),
    Cancelled,
}

pub(crate) fn search_root(state: &GameState, player: Player, depth: u32) -> SearchOutcome {
    let limit = search_limit(state.size());
    let win = win_value(state.size());
    let candidates: Vec<Position> = state.legal_moves().collect();
    let cutoff = AtomicUsize::new(usize::MAX);

    let branches: Vec<(Branch, u64)> = candidates
        .par_iter()
        .enumerate()
        .map(|(index, &pos)| {
            let mut child = state.clone();
            child.play_unchecked(pos);

            // Full window so every finished branch reports its exact value
            let mut search = Search::with_stop(player, StopSignal::new(&cutoff, index));
            let branch = match search.alpha_beta(&child, depth - 1, -limit, limit, Some(pos)) {
                Some(reply) => {
                    if reply.score >= win {
                        cutoff.fetch_min(index, Ordering::Relaxed);
                    }
                    Branch::Done(reply.score)
                }
                None => Branch::Cancelled,
            };
            (branch, search.nodes)
        })
        .collect();

    let mut outcome = SearchOutcome {
        pos: None,
        score: -limit,
        nodes: 1,
    };
    let mut cancelled = 0;

    for (&pos, (branch, nodes)) in candidates.iter().zip(branches) {
        outcome.nodes += nodes;
        match branch {
            Branch::Done(score) if score > outcome.score => {
                outcome.pos = Some(pos);
                outcome.score = score;
            }
            Branch::Done(_) => {}
            Branch::Cancelled => cancelled += 1,
        }
    }

    tracing::trace!(branches = candidates.len(), cancelled, "parallel root search finished");
    outcome
}
