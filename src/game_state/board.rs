//! 8x8 mailbox board and its rules-naive mutation primitives.
//!
//! `apply_move` trusts that the move is structurally valid; legality lives in
//! the move generator. Every mutation has an exact inverse in `undo_move` so
//! callers can simulate a move and restore the board bit-for-bit.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{Move, MoveKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Piece; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [[EMPTY_SQUARE; 8]; 8],
        }
    }

    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for color in [Color::Light, Color::Dark] {
            for (file, kind) in BACK_RANK.iter().enumerate() {
                board.squares[color.home_rank() as usize][file] = make_piece(color, *kind);
                board.squares[color.pawn_rank() as usize][file] =
                    make_piece(color, PieceKind::Pawn);
            }
        }
        board
    }

    #[inline]
    pub fn get_square(&self, position: Position) -> Piece {
        self.squares[position.rank as usize][position.file as usize]
    }

    #[inline]
    pub fn set_square(&mut self, position: Position, piece: Piece) {
        self.squares[position.rank as usize][position.file as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, position: Position) -> bool {
        self.get_square(position) == EMPTY_SQUARE
    }

    /// Occupied squares in rank-major, file-minor order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all()
            .map(move |position| (position, self.get_square(position)))
            .filter(|(_, piece)| *piece != EMPTY_SQUARE)
    }

    pub fn find_king(&self, color: Color) -> Option<Position> {
        let king = make_piece(color, PieceKind::King);
        Position::all().find(|position| self.get_square(*position) == king)
    }

    /// Makes `mv` on the board and returns the captured piece
    /// (`EMPTY_SQUARE` when nothing was taken).
    pub fn apply_move(&mut self, mv: Move) -> Piece {
        let piece = self.get_square(mv.from);

        match mv.kind {
            MoveKind::Normal => {
                let captured = self.get_square(mv.to);
                self.set_square(mv.from, EMPTY_SQUARE);
                self.set_square(mv.to, piece);
                captured
            }
            MoveKind::EnPassant => {
                let victim = Position::new(mv.from.rank, mv.to.file);
                let captured = self.get_square(victim);
                self.set_square(victim, EMPTY_SQUARE);
                self.set_square(mv.from, EMPTY_SQUARE);
                self.set_square(mv.to, piece);
                captured
            }
            MoveKind::KingSideCastle | MoveKind::QueenSideCastle => {
                let (rook_from, rook_to) = castling_rook_squares(mv);
                let rook = self.get_square(rook_from);
                self.set_square(mv.from, EMPTY_SQUARE);
                self.set_square(rook_from, EMPTY_SQUARE);
                self.set_square(mv.to, piece);
                self.set_square(rook_to, rook);
                EMPTY_SQUARE
            }
            MoveKind::PromoteToQueen
            | MoveKind::PromoteToRook
            | MoveKind::PromoteToBishop
            | MoveKind::PromoteToKnight => {
                let captured = self.get_square(mv.to);
                let promoted = match (piece_color(piece), mv.kind.promotion_piece()) {
                    (Some(color), Some(kind)) => make_piece(color, kind),
                    _ => piece,
                };
                self.set_square(mv.from, EMPTY_SQUARE);
                self.set_square(mv.to, promoted);
                captured
            }
        }
    }

    /// Reverses `apply_move(mv)` given the piece it returned.
    pub fn undo_move(&mut self, mv: Move, captured: Piece) {
        let piece = self.get_square(mv.to);

        match mv.kind {
            MoveKind::Normal => {
                self.set_square(mv.from, piece);
                self.set_square(mv.to, captured);
            }
            MoveKind::EnPassant => {
                self.set_square(mv.from, piece);
                self.set_square(mv.to, EMPTY_SQUARE);
                self.set_square(Position::new(mv.from.rank, mv.to.file), captured);
            }
            MoveKind::KingSideCastle | MoveKind::QueenSideCastle => {
                let (rook_from, rook_to) = castling_rook_squares(mv);
                let rook = self.get_square(rook_to);
                self.set_square(rook_to, EMPTY_SQUARE);
                self.set_square(mv.to, EMPTY_SQUARE);
                self.set_square(rook_from, rook);
                self.set_square(mv.from, piece);
            }
            MoveKind::PromoteToQueen
            | MoveKind::PromoteToRook
            | MoveKind::PromoteToBishop
            | MoveKind::PromoteToKnight => {
                let pawn = match piece_color(piece) {
                    Some(color) => make_piece(color, PieceKind::Pawn),
                    None => piece,
                };
                self.set_square(mv.from, pawn);
                self.set_square(mv.to, captured);
            }
        }
    }

    /// Pure variant of [`Board::apply_move`].
    pub fn with_move(&self, mv: Move) -> Board {
        let mut next = *self;
        next.apply_move(mv);
        next
    }
}

/// Rook origin and destination for a castling move, on the king's rank.
#[inline]
pub fn castling_rook_squares(mv: Move) -> (Position, Position) {
    let rank = mv.from.rank;
    match mv.kind {
        MoveKind::QueenSideCastle => (Position::new(rank, 0), Position::new(rank, 3)),
        _ => (Position::new(rank, 7), Position::new(rank, 5)),
    }
}
