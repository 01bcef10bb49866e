//! Legal pawn move generation: pushes, double pushes, captures, en passant,
//! and the four-way promotion split.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::LegalityFilter;
use crate::moves::move_descriptions::{Move, MoveKind};

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Position,
    filter: &mut LegalityFilter,
    out: &mut Vec<Move>,
) {
    let side = game_state.side_to_move;
    let board = &game_state.board;
    let direction = side.pawn_direction();
    let promotes = |to: Position| to.rank == side.promotion_rank();

    if let Some(one_step) = from.offset(direction, 0) {
        if board.is_empty(one_step) {
            if promotes(one_step) {
                filter.push_promotions_if_legal(from, one_step, out);
            } else {
                filter.push_if_legal(Move::normal(from, one_step), out);

                if from.rank == side.pawn_rank() {
                    if let Some(two_step) = one_step.offset(direction, 0) {
                        if board.is_empty(two_step) {
                            filter.push_if_legal(Move::normal(from, two_step), out);
                        }
                    }
                }
            }
        }
    }

    for file_offset in [-1, 1] {
        let Some(to) = from.offset(direction, file_offset) else {
            continue;
        };

        if is_color(board.get_square(to), side.opposite()) {
            if promotes(to) {
                filter.push_promotions_if_legal(from, to, out);
            } else {
                filter.push_if_legal(Move::normal(from, to), out);
            }
        } else if game_state.en_passant_target == Some(to) {
            filter.push_if_legal(Move::new(from, to, MoveKind::EnPassant), out);
        }
    }
}
