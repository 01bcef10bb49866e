use crate::game_state::chess_types::*;

/// Snapshot returned by `GameState::do_move` and consumed by
/// `GameState::undo_move`: the parts of the prior position a move alone
/// cannot reconstruct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub captured: Piece,
    pub prior_castling_rights: CastlingRights,
    pub prior_en_passant_target: Option<Position>,
}
