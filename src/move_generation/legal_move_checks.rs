//! Attack oracle.
//!
//! `is_square_attacked` is the single source of truth for king safety and for
//! castling-path safety.

use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::{MoveGenResult, MoveGenerationError};
use crate::moves::board_geometry::{
    directional_vision, king_vision, knight_vision, BISHOP_DIRECTIONS, ROOK_DIRECTIONS,
};

/// True iff any piece of `defender`'s opponent attacks `position`.
pub fn is_square_attacked(board: &Board, position: Position, defender: Color) -> bool {
    let attacker = defender.opposite();

    // An attacking pawn sits one rank toward the defender's side of the board.
    let enemy_pawn = make_piece(attacker, PieceKind::Pawn);
    let pawn_rank_offset = -attacker.pawn_direction();
    for file_offset in [-1, 1] {
        if let Some(square) = position.offset(pawn_rank_offset, file_offset) {
            if board.get_square(square) == enemy_pawn {
                return true;
            }
        }
    }

    let enemy_knight = make_piece(attacker, PieceKind::Knight);
    if knight_vision(position).any(|square| board.get_square(square) == enemy_knight) {
        return true;
    }

    let enemy_bishop = make_piece(attacker, PieceKind::Bishop);
    let enemy_rook = make_piece(attacker, PieceKind::Rook);
    let enemy_queen = make_piece(attacker, PieceKind::Queen);

    let diagonal_hit = directional_vision(board, position, &BISHOP_DIRECTIONS)
        .into_iter()
        .flatten()
        .map(|square| board.get_square(square))
        .any(|piece| piece == enemy_bishop || piece == enemy_queen);
    if diagonal_hit {
        return true;
    }

    let orthogonal_hit = directional_vision(board, position, &ROOK_DIRECTIONS)
        .into_iter()
        .flatten()
        .map(|square| board.get_square(square))
        .any(|piece| piece == enemy_rook || piece == enemy_queen);
    if orthogonal_hit {
        return true;
    }

    let enemy_king = make_piece(attacker, PieceKind::King);
    king_vision(position).any(|square| board.get_square(square) == enemy_king)
}

#[inline]
pub fn king_square(board: &Board, color: Color) -> MoveGenResult<Position> {
    board
        .find_king(color)
        .ok_or(MoveGenerationError::MissingKing(color))
}

pub fn is_king_in_check(board: &Board, color: Color) -> MoveGenResult<bool> {
    let king = king_square(board, color)?;
    Ok(is_square_attacked(board, king, color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_position;

    fn pos(text: &str) -> Position {
        algebraic_to_position(text).expect("test square should parse")
    }

    fn board_with(pieces: &[(&str, Color, PieceKind)]) -> Board {
        let mut board = Board::empty();
        for (square, color, kind) in pieces {
            board.set_square(pos(square), make_piece(*color, *kind));
        }
        board
    }

    #[test]
    fn pawns_attack_diagonally_forward_only() {
        let board = board_with(&[("d5", Color::Dark, PieceKind::Pawn)]);
        assert!(is_square_attacked(&board, pos("e4"), Color::Light));
        assert!(is_square_attacked(&board, pos("c4"), Color::Light));
        assert!(!is_square_attacked(&board, pos("d4"), Color::Light));
        assert!(!is_square_attacked(&board, pos("e6"), Color::Light));

        let board = board_with(&[("d4", Color::Light, PieceKind::Pawn)]);
        assert!(is_square_attacked(&board, pos("e5"), Color::Dark));
        assert!(!is_square_attacked(&board, pos("e3"), Color::Dark));
    }

    #[test]
    fn friendly_pieces_never_attack() {
        let board = board_with(&[
            ("a1", Color::Light, PieceKind::Rook),
            ("b3", Color::Light, PieceKind::Knight),
        ]);
        assert!(!is_square_attacked(&board, pos("a8"), Color::Light));
        assert!(!is_square_attacked(&board, pos("c1"), Color::Light));
        assert!(is_square_attacked(&board, pos("a8"), Color::Dark));
        assert!(is_square_attacked(&board, pos("c1"), Color::Dark));
    }

    #[test]
    fn sliders_are_blocked_by_the_first_piece() {
        let board = board_with(&[
            ("a1", Color::Dark, PieceKind::Queen),
            ("c3", Color::Light, PieceKind::Pawn),
        ]);
        assert!(is_square_attacked(&board, pos("b2"), Color::Light));
        assert!(is_square_attacked(&board, pos("c3"), Color::Light));
        assert!(!is_square_attacked(&board, pos("d4"), Color::Light));
        assert!(is_square_attacked(&board, pos("a8"), Color::Light));
    }

    #[test]
    fn bishops_do_not_attack_orthogonally_and_rooks_not_diagonally() {
        let board = board_with(&[
            ("d4", Color::Dark, PieceKind::Bishop),
            ("h1", Color::Dark, PieceKind::Rook),
        ]);
        assert!(!is_square_attacked(&board, pos("d8"), Color::Light));
        assert!(is_square_attacked(&board, pos("g7"), Color::Light));
        assert!(!is_square_attacked(&board, pos("g2"), Color::Light));
        assert!(is_square_attacked(&board, pos("a1"), Color::Light));
    }

    #[test]
    fn kings_attack_adjacent_squares() {
        let board = board_with(&[("e8", Color::Dark, PieceKind::King)]);
        assert!(is_square_attacked(&board, pos("d7"), Color::Light));
        assert!(is_square_attacked(&board, pos("f8"), Color::Light));
        assert!(!is_square_attacked(&board, pos("e6"), Color::Light));
    }

    #[test]
    fn missing_king_is_reported() {
        let board = Board::empty();
        assert_eq!(
            is_king_in_check(&board, Color::Dark),
            Err(MoveGenerationError::MissingKing(Color::Dark))
        );
    }
}
