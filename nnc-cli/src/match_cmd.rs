//! Match command - play automated games between two controllers
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_match(), report_results()
//! - Level 3: play_single_game(), compute_match_statistics()
//! - Level 4: formatting utilities

use anyhow::{bail, Result};
use clap::Args;

use nnc_core::{GameResult, GameState, Player, Position, SearchConfig};

use crate::options::SearchArgs;
use crate::players::{Controller, ControllerKind};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// First controller (plays Cross in odd-numbered games)
    #[arg(long, value_enum, default_value = "ai")]
    pub first: ControllerKind,

    /// Second controller
    #[arg(long, value_enum, default_value = "random")]
    pub second: ControllerKind,

    /// Number of games to play (will alternate sides)
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug)]
struct GameRecord {
    game_number: usize,
    result: GameResult,
    /// Side the first controller played
    first_as: Player,
    moves: Vec<Position>,
}

impl GameRecord {
    fn first_won(&self) -> bool {
        self.result == GameResult::Win(self.first_as)
    }

    fn second_won(&self) -> bool {
        self.result == GameResult::Win(self.first_as.opponent())
    }
}

/// Aggregated match results
#[derive(Clone, Debug)]
struct MatchResults {
    games: Vec<GameRecord>,
    first_wins: usize,
    second_wins: usize,
    draws: usize,
    avg_moves: f32,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run match command
///
/// 1. Resolve the search configuration
/// 2. Play the match (multiple games)
/// 3. Report results
pub fn run(args: MatchArgs, seed: Option<u64>) -> Result<()> {
    if args.first == ControllerKind::Human || args.second == ControllerKind::Human {
        bail!("human controllers are only supported by `nnc play`");
    }

    let config = args.search.resolve()?;

    tracing::info!(
        "Starting match: {0:?} vs {1:?} ({2} games, {3}x{3})",
        args.first,
        args.second,
        args.games,
        args.search.size
    );

    let results = play_match(&args, &config, seed)?;

    report_results(&results, &args);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play all games in the match
fn play_match(args: &MatchArgs, config: &SearchConfig, seed: Option<u64>) -> Result<MatchResults> {
    let mut first = Controller::new(args.first, config, seed);
    let mut second = Controller::new(args.second, config, seed.map(|s| s.wrapping_add(1)));
    let mut games = Vec::with_capacity(args.games);

    for game_num in 0..args.games {
        // Alternate sides for fairness
        let record = if game_num % 2 == 1 {
            play_single_game(args.search.size, &mut second, &mut first, game_num + 1, Player::Nought)?
        } else {
            play_single_game(args.search.size, &mut first, &mut second, game_num + 1, Player::Cross)?
        };

        tracing::info!(
            "Game {}: {:?} ({} moves)",
            record.game_number,
            record.result,
            record.moves.len()
        );

        games.push(record);
    }

    Ok(compute_match_statistics(games))
}

/// Report match results
fn report_results(results: &MatchResults, args: &MatchArgs) {
    if args.json {
        print_json_results(results, args);
    } else {
        print_text_results(results, args);
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Play one game to its end; `cross` moves first
fn play_single_game(
    size: usize,
    cross: &mut Controller,
    nought: &mut Controller,
    game_number: usize,
    first_as: Player,
) -> Result<GameRecord> {
    let mut state = GameState::new(size)?;
    let mut moves = Vec::with_capacity(size * size);
    let mut result = GameResult::Ongoing;

    while !result.is_done() {
        let player = state.current_player();
        let controller = match player {
            Player::Cross => &mut *cross,
            Player::Nought => &mut *nought,
        };

        let pos = controller.choose(&state, player)?;
        result = state.apply_move(pos.row, pos.col, player)?;
        moves.push(pos);
    }

    Ok(GameRecord {
        game_number,
        result,
        first_as,
        moves,
    })
}

/// Compute aggregate statistics from game records
fn compute_match_statistics(games: Vec<GameRecord>) -> MatchResults {
    let first_wins = games.iter().filter(|g| g.first_won()).count();
    let second_wins = games.iter().filter(|g| g.second_won()).count();
    let draws = games
        .iter()
        .filter(|g| g.result == GameResult::Draw)
        .count();

    let total_moves: usize = games.iter().map(|g| g.moves.len()).sum();
    let avg_moves = if games.is_empty() {
        0.0
    } else {
        total_moves as f32 / games.len() as f32
    };

    MatchResults {
        games,
        first_wins,
        second_wins,
        draws,
        avg_moves,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn percent(count: usize, total: usize) -> f32 {
    if total > 0 {
        count as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

/// Print results as JSON
fn print_json_results(results: &MatchResults, args: &MatchArgs) {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        result: GameResult,
        first_as: Player,
        moves: Vec<Position>,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        size: usize,
        first: ControllerKind,
        second: ControllerKind,
        total_games: usize,
        first_wins: usize,
        second_wins: usize,
        draws: usize,
        avg_moves: f32,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        size: args.search.size,
        first: args.first,
        second: args.second,
        total_games: results.games.len(),
        first_wins: results.first_wins,
        second_wins: results.second_wins,
        draws: results.draws,
        avg_moves: results.avg_moves,
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game_number: g.game_number,
                result: g.result,
                first_as: g.first_as,
                moves: g.moves.clone(),
            })
            .collect(),
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!("Failed to serialize results: {}", e),
    }
}

/// Print results as text
fn print_text_results(results: &MatchResults, args: &MatchArgs) {
    let total = results.games.len();

    println!("\n=== Match Results ===");
    println!("Total games: {}", total);
    println!(
        "{:<12} {} ({:.1}%)",
        format!("{:?} wins:", args.first),
        results.first_wins,
        percent(results.first_wins, total)
    );
    println!(
        "{:<12} {} ({:.1}%)",
        format!("{:?} wins:", args.second),
        results.second_wins,
        percent(results.second_wins, total)
    );
    println!(
        "{:<12} {} ({:.1}%)",
        "Draws:",
        results.draws,
        percent(results.draws, total)
    );
    println!("Avg moves:   {:.1}", results.avg_moves);

    println!("\nGame details:");
    for game in &results.games {
        println!(
            "  Game {} (first as {}): {:?} in {} moves",
            game.game_number,
            game.first_as,
            game.result,
            game.moves.len()
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================
