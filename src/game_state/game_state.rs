//! Legality-relevant position state and the state transition function.
//!
//! `GameState` is board + castling rights + side to move + en-passant target.
//! It changes only through `do_move` / `undo_move`; generators and notation
//! helpers take it by shared reference.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub castling_rights: CastlingRights,
    pub side_to_move: Color,
    pub en_passant_target: Option<Position>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            castling_rights: CastlingRights::ALL,
            side_to_move: Color::Light,
            en_passant_target: None,
        }
    }

    /// Empty board, no rights, light to move. Useful for composing test
    /// positions square by square.
    #[inline]
    pub fn new_empty() -> Self {
        Self {
            board: Board::empty(),
            castling_rights: CastlingRights::NONE,
            side_to_move: Color::Light,
            en_passant_target: None,
        }
    }

    /// Parses a FEN string, discarding its move clocks.
    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen).map(|(state, _)| state)
    }

    /// FEN for this state with default clocks (`0 1`).
    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self, MoveClocks::default())
    }

    /// Makes `mv` and returns the snapshot needed to take it back.
    pub fn do_move(&mut self, mv: Move) -> UndoState {
        let undo = UndoState {
            captured: EMPTY_SQUARE,
            prior_castling_rights: self.castling_rights,
            prior_en_passant_target: self.en_passant_target,
        };

        let mover = self.side_to_move;
        let moved_piece = self.board.get_square(mv.from);

        update_castling_rights(&mut self.castling_rights, mover, mv);
        self.en_passant_target = en_passant_target_after(moved_piece, mv);

        let captured = self.board.apply_move(mv);
        self.side_to_move = mover.opposite();

        UndoState { captured, ..undo }
    }

    /// Restores the state that preceded `do_move(mv)`.
    pub fn undo_move(&mut self, mv: Move, undo: UndoState) {
        self.board.undo_move(mv, undo.captured);
        self.castling_rights = undo.prior_castling_rights;
        self.en_passant_target = undo.prior_en_passant_target;
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Pure variant of [`GameState::do_move`].
    pub fn after_move(&self, mv: Move) -> GameState {
        let mut next = *self;
        next.do_move(mv);
        next
    }
}

fn update_castling_rights(rights: &mut CastlingRights, mover: Color, mv: Move) {
    if mv.from == Position::new(mover.home_rank(), 4) {
        rights.clear(CastlingRights::kingside_flag(mover));
        rights.clear(CastlingRights::queenside_flag(mover));
    }

    // A rook leaving its corner or being captured there both end the right.
    for color in [Color::Light, Color::Dark] {
        let rank = color.home_rank();
        let queenside_corner = Position::new(rank, 0);
        let kingside_corner = Position::new(rank, 7);

        if mv.from == queenside_corner || mv.to == queenside_corner {
            rights.clear(CastlingRights::queenside_flag(color));
        }
        if mv.from == kingside_corner || mv.to == kingside_corner {
            rights.clear(CastlingRights::kingside_flag(color));
        }
    }
}

fn en_passant_target_after(moved_piece: Piece, mv: Move) -> Option<Position> {
    if piece_kind(moved_piece) != Some(PieceKind::Pawn) {
        return None;
    }
    let color = piece_color(moved_piece)?;
    if mv.from.rank != color.pawn_rank() || mv.to.rank - mv.from.rank != 2 * color.pawn_direction()
    {
        return None;
    }
    Some(Position::new(mv.from.rank + color.pawn_direction(), mv.from.file))
}
