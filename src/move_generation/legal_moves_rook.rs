use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::LegalityFilter;
use crate::move_generation::legal_moves_sliders::generate_slider_moves;
use crate::moves::board_geometry::ROOK_DIRECTIONS;
use crate::moves::move_descriptions::Move;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: Position,
    filter: &mut LegalityFilter,
    out: &mut Vec<Move>,
) {
    generate_slider_moves(game_state, from, &ROOK_DIRECTIONS, filter, out);
}
