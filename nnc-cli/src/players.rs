//! Move controllers: who decides each player's moves

use anyhow::{bail, Result};
use clap::ValueEnum;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use nnc_core::{AlphaBetaAI, GameError, GameState, Player, Position, SearchConfig};

/// Controller selectable on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ControllerKind {
    /// Moves typed on stdin
    Human,
    /// Alpha-beta search
    Ai,
    /// Uniformly random empty cell
    Random,
}

/// Decides moves for one side of a game
pub enum Controller {
    Human,
    Ai(AlphaBetaAI),
    Random(ChaCha8Rng),
}

impl Controller {
    pub fn new(kind: ControllerKind, config: &SearchConfig, seed: Option<u64>) -> Self {
        match kind {
            ControllerKind::Human => Controller::Human,
            ControllerKind::Ai => Controller::Ai(AlphaBetaAI::new(config.clone())),
            ControllerKind::Random => Controller::Random(create_rng(seed)),
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Controller::Human)
    }

    /// Pick a move for `player`. Humans are prompted by the caller instead.
    pub fn choose(&mut self, state: &GameState, player: Player) -> Result<Position> {
        match self {
            Controller::Human => bail!("human moves are read from the terminal"),
            Controller::Ai(ai) => Ok(ai.select_move(state, player)?),
            Controller::Random(rng) => {
                if player != state.current_player() {
                    return Err(GameError::WrongTurn {
                        expected: state.current_player(),
                        found: player,
                    }
                    .into());
                }
                match state.legal_moves().choose(rng) {
                    Some(pos) => Ok(pos),
                    None => Err(GameError::GameOver.into()),
                }
            }
        }
    }
}

/// Create RNG from seed or random
pub fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}
