//! Shared ray walk for bishops, rooks, and queens.
//!
//! Each direction is walked square by square: empty squares are candidates and
//! the walk continues; the first occupied square is a candidate only if it
//! holds an enemy piece, and the walk stops there.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::LegalityFilter;
use crate::moves::board_geometry::{ray_squares, Direction};
use crate::moves::move_descriptions::Move;

pub fn generate_slider_moves(
    game_state: &GameState,
    from: Position,
    directions: &[Direction],
    filter: &mut LegalityFilter,
    out: &mut Vec<Move>,
) {
    for &direction in directions {
        for to in ray_squares(&game_state.board, from, direction) {
            filter.push_step_if_legal(from, to, out);
        }
    }
}
