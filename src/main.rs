//! Thin driver around the position engine.
//!
//! Usage:
//! `cargo run --release -- board`
//! `cargo run --release -- perft --depth 4 [--threads]`
//! `cargo run --release -- random --seed 7 [--plies 200]`

use std::time::Instant;

use log::info;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use chess_position::chess_errors::ChessError;
use chess_position::game_state::position::Position;
use chess_position::game_state::undo_state::MoveHistory;
use chess_position::move_generation::game_outcome::{classify_position, GameOutcome};
use chess_position::move_generation::legal_move_generator::generate_legal_moves;
use chess_position::move_generation::perft::{perft, perft_multi_threaded};

fn parse_arg_u64(args: &[String], flag: &str, default: u64) -> u64 {
    args.windows(2)
        .find(|pair| pair[0] == flag)
        .and_then(|pair| pair[1].parse::<u64>().ok())
        .unwrap_or(default)
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}

fn run_perft(args: &[String]) -> Result<(), ChessError> {
    let depth = parse_arg_u64(args, "--depth", 4).min(u8::MAX as u64) as u8;
    let game = Position::new_game();
    let started = Instant::now();

    let counts = if has_flag(args, "--threads") {
        perft_multi_threaded(&game, depth)?
    } else {
        perft(&game, depth)
    };

    let elapsed = started.elapsed();
    println!("perft depth={depth} {counts:?}");
    info!(
        "perft finished in {} ms ({:.0} nodes/s)",
        elapsed.as_millis(),
        counts.nodes as f64 / elapsed.as_secs_f64().max(1e-9)
    );
    Ok(())
}

fn run_random_game(args: &[String]) -> Result<(), ChessError> {
    let seed = parse_arg_u64(args, "--seed", 0);
    let max_plies = parse_arg_u64(args, "--plies", 200);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut position = Position::new_game();
    let mut history = MoveHistory::new();

    info!("random game seed={seed} max_plies={max_plies}");
    while (history.len() as u64) < max_plies {
        let moves = generate_legal_moves(&position);
        let Some(mv) = moves.choose(&mut rng).copied() else {
            break;
        };
        history.push_move(&mut position, mv)?;
    }

    let line: Vec<String> = history.moves().map(|mv| mv.to_string()).collect();
    println!("{}", line.join(" "));
    print!("{position}");

    match classify_position(&position) {
        GameOutcome::InProgress => println!("stopped after {} plies", history.len()),
        GameOutcome::Checkmate { winner } => println!("checkmate, {winner:?} wins"),
        GameOutcome::Stalemate => println!("stalemate"),
    }
    Ok(())
}

fn run(args: &[String]) -> Result<(), String> {
    match args.first().map(String::as_str) {
        Some("perft") => run_perft(args).map_err(|err| err.to_string()),
        Some("random") => run_random_game(args).map_err(|err| err.to_string()),
        Some("board") | None => {
            print!("{}", Position::new_game());
            Ok(())
        }
        Some(other) => Err(format!(
            "unknown command {other:?}; expected board, perft or random"
        )),
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    run(&args)
}
