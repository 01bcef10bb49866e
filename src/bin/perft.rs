//! Perft / divide runner.
//!
//! Usage:
//! `cargo run --release --bin perft`
//! `cargo run --release --bin perft -- --depth 5 --divide`
//! `cargo run --release --bin perft -- --fen "<fen>" --depth 4 --threads`

use std::time::Instant;

use mailbox_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use mailbox_chess::game_state::game_state::GameState;
use mailbox_chess::move_generation::perft::{perft, perft_divide, perft_parallel};
use mailbox_chess::utils::long_algebraic::move_to_long_algebraic;
use mailbox_chess::utils::render_game_state::render_game_state;

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|idx| args.get(idx + 1))
        .cloned()
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    let fen = arg_value(&args, "--fen").unwrap_or_else(|| STARTING_POSITION_FEN.to_owned());
    let depth = match arg_value(&args, "--depth") {
        Some(text) => text
            .parse::<u8>()
            .map_err(|e| format!("invalid --depth {text}: {e}"))?,
        None => 4,
    };

    let game = GameState::from_fen(&fen)?;
    println!("{}", render_game_state(&game));
    println!("fen: {fen}");

    let start = Instant::now();
    let nodes = if has_flag(&args, "--divide") {
        let divided = perft_divide(&game, depth).map_err(|e| e.to_string())?;
        for (mv, count) in &divided {
            println!("{}: {count}", move_to_long_algebraic(*mv));
        }
        println!("moves: {}", divided.len());
        divided.iter().map(|(_, count)| count).sum()
    } else if has_flag(&args, "--threads") {
        perft_parallel(&game, depth).map_err(|e| e.to_string())?
    } else {
        let mut state = game;
        perft(&mut state, depth).map_err(|e| e.to_string())?
    };

    let elapsed = start.elapsed();
    let elapsed_ms = elapsed.as_millis();
    let nps = if elapsed.as_secs_f64() > 0.0 {
        (nodes as f64 / elapsed.as_secs_f64()) as u64
    } else {
        nodes
    };
    println!("depth={depth} nodes={nodes} elapsed_ms={elapsed_ms} nps={nps}");

    Ok(())
}
