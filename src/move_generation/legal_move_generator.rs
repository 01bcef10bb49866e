//! Full legal move generation pipeline.
//!
//! Scans the board in rank-major, file-minor order, dispatches each piece of
//! the side to move to its generator, and filters every pseudo-legal candidate
//! through a shared [`LegalityFilter`].

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_square_attacked, king_square};
use crate::move_generation::legal_move_shared::LegalityFilter;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{GameStatus, MoveGenResult, MoveGenerator};
use crate::moves::move_descriptions::Move;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<Move>> {
        generate_all_moves(game_state)
    }
}

/// Every legal move for the side to move. Fails only when that side has no
/// king on the board.
pub fn generate_all_moves(game_state: &GameState) -> MoveGenResult<Vec<Move>> {
    let side = game_state.side_to_move;
    let king = king_square(&game_state.board, side)?;
    let mut filter = LegalityFilter::new(&game_state.board, king, side);
    let mut out = Vec::<Move>::with_capacity(64);

    for (from, piece) in game_state.board.occupied() {
        if !is_color(piece, side) {
            continue;
        }

        match piece_kind(piece) {
            Some(PieceKind::Pawn) => generate_pawn_moves(game_state, from, &mut filter, &mut out),
            Some(PieceKind::Knight) => {
                generate_knight_moves(game_state, from, &mut filter, &mut out)
            }
            Some(PieceKind::Bishop) => {
                generate_bishop_moves(game_state, from, &mut filter, &mut out)
            }
            Some(PieceKind::Rook) => generate_rook_moves(game_state, from, &mut filter, &mut out),
            Some(PieceKind::Queen) => generate_queen_moves(game_state, from, &mut filter, &mut out),
            Some(PieceKind::King) => generate_king_moves(game_state, from, &mut filter, &mut out),
            None => {}
        }
    }

    debug_assert_eq!(filter.board(), &game_state.board);

    Ok(out)
}

/// Checkmate or stalemate when the side to move has no legal moves, otherwise
/// ongoing.
pub fn game_status(game_state: &GameState) -> MoveGenResult<GameStatus> {
    let moves = generate_all_moves(game_state)?;
    status_from_moves(game_state, &moves)
}

/// Same as [`game_status`] for callers that already hold the legal move list.
pub fn status_from_moves(
    game_state: &GameState,
    legal_moves: &[Move],
) -> MoveGenResult<GameStatus> {
    if !legal_moves.is_empty() {
        return Ok(GameStatus::Ongoing);
    }

    let side = game_state.side_to_move;
    let king = king_square(&game_state.board, side)?;
    if is_square_attacked(&game_state.board, king, side) {
        Ok(GameStatus::Checkmate)
    } else {
        Ok(GameStatus::Stalemate)
    }
}
