//! Self-play between two random engines, printing the final board and PGN.
//!
//! Usage:
//! `cargo run --release --bin random_game`
//! `cargo run --release --bin random_game -- --seed 42 --max-plies 200`
//! `cargo run --release --bin random_game -- --fen "<fen>"`

use mailbox_chess::engines::engine_random::RandomEngine;
use mailbox_chess::engines::engine_trait::Engine;
use mailbox_chess::game_state::chess_types::Color;
use mailbox_chess::game_state::game_record::GameRecord;
use mailbox_chess::utils::pgn::write_pgn;
use mailbox_chess::utils::render_game_state::render_game_state;
use mailbox_chess::utils::standard_algebraic::move_to_san;

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|idx| args.get(idx + 1))
        .cloned()
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>, String> {
    match arg_value(args, flag) {
        Some(text) => text
            .parse::<T>()
            .map(Some)
            .map_err(|_| format!("invalid value for {flag}: {text}")),
        None => Ok(None),
    }
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().collect();
    let seed = parse_flag::<u64>(&args, "--seed")?;
    let max_plies = parse_flag::<usize>(&args, "--max-plies")?.unwrap_or(400);

    let mut record = match arg_value(&args, "--fen") {
        Some(fen) => GameRecord::from_fen(&fen)?,
        None => GameRecord::new_game(),
    };

    let (mut light, mut dark) = match seed {
        Some(seed) => (
            RandomEngine::with_seed(seed),
            RandomEngine::with_seed(seed.wrapping_add(1)),
        ),
        None => (RandomEngine::new(), RandomEngine::new()),
    };
    light.new_game();
    dark.new_game();

    while !record.is_over() && record.history().len() < max_plies {
        let state = *record.state();
        let engine = match state.side_to_move {
            Color::Light => &mut light,
            Color::Dark => &mut dark,
        };

        let output = engine.choose_move(&state, record.legal_moves())?;
        for line in &output.info_lines {
            println!("{line}");
        }
        let Some(mv) = output.best_move else {
            break;
        };

        let san = move_to_san(mv, &state).map_err(|e| e.to_string())?;
        record.play_move(mv).map_err(|e| e.to_string())?;
        println!("{} {san}", engine.name());
    }

    println!("{}", render_game_state(record.state()));
    println!("status: {:?} after {} plies", record.status(), record.history().len());
    println!("{}", write_pgn(&record)?);

    Ok(())
}
