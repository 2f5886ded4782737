//! NNC Core - Game engine and AI
//!
//! This crate provides the core logic for noughts and crosses on an n x n
//! board:
//! - Board geometry (symbols, positions, lines)
//! - Game state with validated move application
//! - Terminal state detection (win or draw)
//! - Line-based position evaluation
//! - CPU-based alpha-beta AI, optionally fanned out over rayon
//!
//! A game is driven through four operations: [`GameState::new`],
//! [`GameState::snapshot`], [`GameState::apply_move`] and [`select_move`].

pub mod board;
pub mod game;
pub mod terminal;
pub mod eval;
pub mod ai;
pub mod config;
pub mod error;
#[cfg(feature = "parallel")]
mod parallel;

// Re-exports for convenient access
pub use board::{Board, Line, Player, Position, Symbol};
pub use game::{GameResult, GameState};
pub use terminal::evaluate_terminal;
pub use eval::{evaluate, win_value};
pub use ai::{play_ai, select_move, AlphaBetaAI};
pub use config::SearchConfig;
pub use error::GameError;
