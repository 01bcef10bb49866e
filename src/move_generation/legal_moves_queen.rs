use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::LegalityFilter;
use crate::move_generation::legal_moves_sliders::generate_slider_moves;
use crate::moves::board_geometry::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::moves::move_descriptions::Move;

pub fn generate_queen_moves(
    game_state: &GameState,
    from: Position,
    filter: &mut LegalityFilter,
    out: &mut Vec<Move>,
) {
    generate_slider_moves(game_state, from, &ROOK_DIRECTIONS, filter, out);
    generate_slider_moves(game_state, from, &BISHOP_DIRECTIONS, filter, out);
}
