use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::LegalityFilter;
use crate::moves::board_geometry::knight_vision;
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(
    _game_state: &GameState,
    from: Position,
    filter: &mut LegalityFilter,
    out: &mut Vec<Move>,
) {
    for to in knight_vision(from) {
        filter.push_step_if_legal(from, to, out);
    }
}
