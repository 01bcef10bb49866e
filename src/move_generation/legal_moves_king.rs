use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::LegalityFilter;
use crate::moves::board_geometry::king_vision;
use crate::moves::move_descriptions::{Move, MoveKind};

pub fn generate_king_moves(
    game_state: &GameState,
    from: Position,
    filter: &mut LegalityFilter,
    out: &mut Vec<Move>,
) {
    for to in king_vision(from) {
        filter.push_step_if_legal(from, to, out);
    }

    generate_castling_moves(game_state, from, out);
}

fn generate_castling_moves(game_state: &GameState, king_from: Position, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let board = &game_state.board;
    let rank = side.home_rank();

    if king_from != Position::new(rank, 4) {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(board, king_from, side) {
        return;
    }

    let rook = make_piece(side, PieceKind::Rook);
    let squares_clear = |files: &[i8]| {
        files
            .iter()
            .all(|&file| board.is_empty(Position::new(rank, file)))
    };
    let squares_safe = |files: &[i8]| {
        files
            .iter()
            .all(|&file| !is_square_attacked(board, Position::new(rank, file), side))
    };

    if game_state.castling_rights.has(CastlingRights::kingside_flag(side))
        && board.get_square(Position::new(rank, 7)) == rook
        && squares_clear(&[5, 6])
        && squares_safe(&[5, 6])
    {
        out.push(Move::new(
            king_from,
            Position::new(rank, 6),
            MoveKind::KingSideCastle,
        ));
    }

    if game_state.castling_rights.has(CastlingRights::queenside_flag(side))
        && board.get_square(Position::new(rank, 0)) == rook
        && squares_clear(&[1, 2, 3])
        && squares_safe(&[3, 2])
    {
        out.push(Move::new(
            king_from,
            Position::new(rank, 2),
            MoveKind::QueenSideCastle,
        ));
    }
}
