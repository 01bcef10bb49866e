//! Core value types shared by every layer of the rules engine: colors, piece
//! codes, board coordinates, castling rights, and move clocks.

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Sign carried by this color's piece codes.
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Rank holding this color's king and rooks at game start.
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    /// Rank holding this color's pawns at game start.
    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }

    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    /// Rank delta of a single pawn push.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }
}

/// Piece kind (color is carried by the sign of a [`Piece`] code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Absolute value of the piece code.
    #[inline]
    pub const fn magnitude(self) -> i8 {
        self.index() as i8 + 1
    }

    #[inline]
    pub const fn from_magnitude(magnitude: i8) -> Option<Self> {
        match magnitude {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Uppercase letter used by algebraic notation. Pawns have none in SAN but
    /// map to `P` here for FEN and display purposes.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    #[inline]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Signed piece code: positive for light, negative for dark, zero for empty.
pub type Piece = i8;

pub const EMPTY_SQUARE: Piece = 0;

#[inline]
pub const fn make_piece(color: Color, kind: PieceKind) -> Piece {
    color.sign() * kind.magnitude()
}

#[inline]
pub const fn piece_color(piece: Piece) -> Option<Color> {
    if piece > 0 {
        Some(Color::Light)
    } else if piece < 0 {
        Some(Color::Dark)
    } else {
        None
    }
}

#[inline]
pub const fn piece_kind(piece: Piece) -> Option<PieceKind> {
    PieceKind::from_magnitude(piece.abs())
}

#[inline]
pub const fn is_color(piece: Piece, color: Color) -> bool {
    piece * color.sign() > 0
}

/// Board coordinate. Rank 0 is the light home rank ("1"), file 0 is "a".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub rank: i8,
    pub file: i8,
}

impl Position {
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        debug_assert!(rank >= 0 && rank < 8 && file >= 0 && file < 8);
        Self { rank, file }
    }

    #[inline]
    pub const fn is_in_bounds(rank: i8, file: i8) -> bool {
        rank >= 0 && rank < 8 && file >= 0 && file < 8
    }

    /// Returns the square displaced by `(d_rank, d_file)`, or `None` when it
    /// falls off the board.
    #[inline]
    pub const fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        let rank = self.rank + d_rank;
        let file = self.file + d_file;
        if Self::is_in_bounds(rank, file) {
            Some(Self { rank, file })
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..8).flat_map(|rank| (0..8).map(move |file| Position { rank, file }))
    }
}

/// Castling rights bitmask (`KQkq`). Rights are only ever cleared during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const LIGHT_KINGSIDE: u8 = 1 << 0;
    pub const LIGHT_QUEENSIDE: u8 = 1 << 1;
    pub const DARK_KINGSIDE: u8 = 1 << 2;
    pub const DARK_QUEENSIDE: u8 = 1 << 3;

    pub const ALL: CastlingRights = CastlingRights(0b1111);
    pub const NONE: CastlingRights = CastlingRights(0);

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn has(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    #[inline]
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    #[inline]
    pub fn clear(&mut self, flag: u8) {
        self.0 &= !flag;
    }

    #[inline]
    pub const fn kingside_flag(color: Color) -> u8 {
        match color {
            Color::Light => Self::LIGHT_KINGSIDE,
            Color::Dark => Self::DARK_KINGSIDE,
        }
    }

    #[inline]
    pub const fn queenside_flag(color: Color) -> u8 {
        match color {
            Color::Light => Self::LIGHT_QUEENSIDE,
            Color::Dark => Self::DARK_QUEENSIDE,
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}

/// Move counters carried by FEN. They play no part in move legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveClocks {
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for MoveClocks {
    fn default() -> Self {
        Self {
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_codes_carry_color_in_sign() {
        let dark_queen = make_piece(Color::Dark, PieceKind::Queen);
        assert_eq!(dark_queen, -5);
        assert_eq!(piece_color(dark_queen), Some(Color::Dark));
        assert_eq!(piece_kind(dark_queen), Some(PieceKind::Queen));
        assert_eq!(piece_color(EMPTY_SQUARE), None);
        assert!(is_color(make_piece(Color::Light, PieceKind::Pawn), Color::Light));
        assert!(!is_color(EMPTY_SQUARE, Color::Light));
    }

    #[test]
    fn offset_rejects_squares_off_the_board() {
        let h8 = Position::new(7, 7);
        assert_eq!(h8.offset(1, 0), None);
        assert_eq!(h8.offset(0, 1), None);
        assert_eq!(h8.offset(-1, -1), Some(Position::new(6, 6)));
    }

    #[test]
    fn clearing_castling_rights_is_per_flag() {
        let mut rights = CastlingRights::ALL;
        rights.clear(CastlingRights::kingside_flag(Color::Dark));
        assert!(!rights.has(CastlingRights::DARK_KINGSIDE));
        assert!(rights.has(CastlingRights::DARK_QUEENSIDE));
        assert!(rights.has(CastlingRights::LIGHT_KINGSIDE));
    }
}
