//! Play command - one game, rendered move by move
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_game(), announce_result()
//! - Level 3: next_move(), prompt_human()
//! - Level 4: parse_coords()

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;

use nnc_core::{GameResult, GameState, Player};

use crate::options::SearchArgs;
use crate::players::{Controller, ControllerKind};
use crate::render::render;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// Who plays Cross (moves first)
    #[arg(long, value_enum, default_value = "human")]
    pub cross: ControllerKind,

    /// Who plays Nought
    #[arg(long, value_enum, default_value = "ai")]
    pub nought: ControllerKind,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Build the game and both controllers
/// 2. Alternate moves until the game ends or input runs out
/// 3. Announce the result
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let config = args.search.resolve()?;
    let mut state = GameState::new(args.search.size)?;
    let mut controllers = [
        Controller::new(args.cross, &config, seed),
        Controller::new(args.nought, &config, seed.map(|s| s.wrapping_add(1))),
    ];

    tracing::info!(
        "Starting {0}x{0} game: X={1:?}, O={2:?}",
        args.search.size,
        args.cross,
        args.nought
    );

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    match play_game(&mut state, &mut controllers, &mut input)? {
        Some(result) => announce_result(result),
        None => println!("Input closed, game abandoned."),
    }

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play until a terminal result; `None` if a human's input ends first
fn play_game<I>(
    state: &mut GameState,
    controllers: &mut [Controller; 2],
    input: &mut I,
) -> Result<Option<GameResult>>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!("{}", render(&state.snapshot()));

    loop {
        let player = state.current_player();
        let controller = &mut controllers[side_index(player)];

        let Some(result) = next_move(state, player, controller, input)? else {
            return Ok(None);
        };

        println!("{}", render(&state.snapshot()));

        // No further moves once the game is decided
        if result.is_done() {
            return Ok(Some(result));
        }
    }
}

fn announce_result(result: GameResult) {
    match result {
        GameResult::Win(player) => println!("{} wins!", player),
        GameResult::Draw => println!("Draw."),
        GameResult::Ongoing => {}
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Apply one move for `player`, from the controller or typed by a human
fn next_move<I>(
    state: &mut GameState,
    player: Player,
    controller: &mut Controller,
    input: &mut I,
) -> Result<Option<GameResult>>
where
    I: Iterator<Item = io::Result<String>>,
{
    if controller.is_human() {
        return prompt_human(state, player, input);
    }

    let pos = controller.choose(state, player)?;
    println!("{} plays {}", player, pos);
    Ok(Some(state.apply_move(pos.row, pos.col, player)?))
}

/// Ask until a legal move is entered
fn prompt_human<I>(
    state: &mut GameState,
    player: Player,
    input: &mut I,
) -> Result<Option<GameResult>>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        print!("{} to move (row col): ", player);
        io::stdout().flush()?;

        let Some(line) = input.next() else {
            return Ok(None);
        };
        let line = line.context("Failed to read move")?;

        let (row, col) = match parse_coords(&line) {
            Ok(coords) => coords,
            Err(msg) => {
                println!("{}", msg);
                continue;
            }
        };

        match state.apply_move(row, col, player) {
            Ok(result) => return Ok(Some(result)),
            Err(e) => println!("Invalid move: {}", e),
        }
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn side_index(player: Player) -> usize {
    match player {
        Player::Cross => 0,
        Player::Nought => 1,
    }
}

/// Parse `row col` (space or comma separated)
fn parse_coords(line: &str) -> Result<(usize, usize), String> {
    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();

    match parts.as_slice() {
        [row, col] => {
            let row = row
                .parse()
                .map_err(|_| format!("Row must be a non-negative number, got '{}'", row))?;
            let col = col
                .parse()
                .map_err(|_| format!("Column must be a non-negative number, got '{}'", col))?;
            Ok((row, col))
        }
        _ => Err("Enter two numbers: row col".to_string()),
    }
}

// ============================================================================
// TESTS
// ============================================================================
