use std::thread;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_all_moves;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError};
use crate::moves::move_descriptions::{Move, MoveKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf count at `depth` using make/unmake on a single state.
pub fn perft(game_state: &mut GameState, depth: u8) -> MoveGenResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = generate_all_moves(game_state)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in moves {
        let undo = game_state.do_move(mv);
        let result = perft(game_state, depth - 1);
        game_state.undo_move(mv, undo);
        nodes += result?;
    }

    Ok(nodes)
}

/// Per-root-move leaf counts, in generation order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> MoveGenResult<Vec<(Move, u64)>> {
    let mut state = *game_state;
    let mut out = Vec::new();

    for mv in generate_all_moves(&state)? {
        let undo = state.do_move(mv);
        let result = perft(&mut state, depth.saturating_sub(1));
        state.undo_move(mv, undo);
        out.push((mv, result?));
    }

    Ok(out)
}

/// Same count as [`perft`], one thread per root move. Every branch owns its
/// own copy of the state.
pub fn perft_parallel(game_state: &GameState, depth: u8) -> MoveGenResult<u64> {
    if depth <= 1 {
        let mut state = *game_state;
        return perft(&mut state, depth);
    }

    let root_moves = generate_all_moves(game_state)?;
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let mut branch = game_state.after_move(mv);
        handles.push(thread::spawn(move || perft(&mut branch, depth - 1)));
    }

    let mut total = 0u64;
    for handle in handles {
        let nodes = handle.join().map_err(|_| {
            MoveGenerationError::InvalidState("perft worker thread panicked".to_owned())
        })??;
        total += nodes;
    }

    Ok(total)
}

/// Leaf counts broken down by the kind of the final move.
pub fn perft_detailed(game_state: &GameState, depth: u8) -> MoveGenResult<PerftCounts> {
    let mut state = *game_state;
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }
    perft_detailed_recurse(&mut state, depth, &mut counts)?;
    Ok(counts)
}

fn perft_detailed_recurse(
    game_state: &mut GameState,
    depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    for mv in generate_all_moves(game_state)? {
        if depth > 1 {
            let undo = game_state.do_move(mv);
            let result = perft_detailed_recurse(game_state, depth - 1, counts);
            game_state.undo_move(mv, undo);
            result?;
            continue;
        }

        let mut leaf = PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
        match mv.kind {
            MoveKind::EnPassant => {
                leaf.captures = 1;
                leaf.en_passant = 1;
            }
            MoveKind::KingSideCastle | MoveKind::QueenSideCastle => leaf.castles = 1,
            MoveKind::Normal => {
                leaf.captures = u64::from(!game_state.board.is_empty(mv.to));
            }
            MoveKind::PromoteToQueen
            | MoveKind::PromoteToRook
            | MoveKind::PromoteToBishop
            | MoveKind::PromoteToKnight => {
                leaf.promotions = 1;
                leaf.captures = u64::from(!game_state.board.is_empty(mv.to));
            }
        }

        let undo = game_state.do_move(mv);
        let defender = game_state.side_to_move;
        let outcome = is_king_in_check(&game_state.board, defender).and_then(|in_check| {
            if in_check {
                generate_all_moves(game_state).map(|moves| Some(moves.len()))
            } else {
                Ok(None)
            }
        });
        // Unmake before propagating any error.
        game_state.undo_move(mv, undo);

        if let Some(replies) = outcome? {
            leaf.checks = 1;
            if replies == 0 {
                leaf.checkmates = 1;
            }
        }
        counts.merge(leaf);
    }

    Ok(())
}
