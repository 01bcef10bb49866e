use crate::game_state::chess_types::{PieceKind, Position};

/// Special handling attached to a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveKind {
    Normal = 0,
    EnPassant = 1,
    KingSideCastle = 2,
    QueenSideCastle = 3,
    PromoteToQueen = 4,
    PromoteToRook = 5,
    PromoteToBishop = 6,
    PromoteToKnight = 7,
}

pub const PROMOTION_KINDS: [MoveKind; 4] = [
    MoveKind::PromoteToQueen,
    MoveKind::PromoteToRook,
    MoveKind::PromoteToBishop,
    MoveKind::PromoteToKnight,
];

impl MoveKind {
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(MoveKind::Normal),
            1 => Some(MoveKind::EnPassant),
            2 => Some(MoveKind::KingSideCastle),
            3 => Some(MoveKind::QueenSideCastle),
            4 => Some(MoveKind::PromoteToQueen),
            5 => Some(MoveKind::PromoteToRook),
            6 => Some(MoveKind::PromoteToBishop),
            7 => Some(MoveKind::PromoteToKnight),
            _ => None,
        }
    }

    #[inline]
    pub const fn promotion_piece(self) -> Option<PieceKind> {
        match self {
            MoveKind::PromoteToQueen => Some(PieceKind::Queen),
            MoveKind::PromoteToRook => Some(PieceKind::Rook),
            MoveKind::PromoteToBishop => Some(PieceKind::Bishop),
            MoveKind::PromoteToKnight => Some(PieceKind::Knight),
            _ => None,
        }
    }

    #[inline]
    pub const fn promoting_to(piece: PieceKind) -> Option<Self> {
        match piece {
            PieceKind::Queen => Some(MoveKind::PromoteToQueen),
            PieceKind::Rook => Some(MoveKind::PromoteToRook),
            PieceKind::Bishop => Some(MoveKind::PromoteToBishop),
            PieceKind::Knight => Some(MoveKind::PromoteToKnight),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveKind::KingSideCastle | MoveKind::QueenSideCastle)
    }
}

/// Pure move descriptor. The captured piece is not stored; it is read from the
/// board immediately before the move is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub const fn new(from: Position, to: Position, kind: MoveKind) -> Self {
        Self { from, to, kind }
    }

    #[inline]
    pub const fn normal(from: Position, to: Position) -> Self {
        Self::new(from, to, MoveKind::Normal)
    }

    #[inline]
    pub const fn encode(self) -> EncodedMove {
        EncodedMove::from_move(self)
    }
}

const FROM_RANK_SHIFT: u16 = 0;
const FROM_FILE_SHIFT: u16 = 3;
const TO_RANK_SHIFT: u16 = 6;
const TO_FILE_SHIFT: u16 = 9;
const KIND_SHIFT: u16 = 12;

const AXIS_MASK: u16 = 0x7;
const KIND_MASK: u16 = 0xF;

/// Packed move: 3 bits origin rank, 3 bits origin file, 3 bits destination
/// rank, 3 bits destination file, 4 bits move kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct EncodedMove(pub u16);

impl EncodedMove {
    #[inline]
    pub const fn from_move(mv: Move) -> Self {
        let mut out = 0u16;
        out |= ((mv.from.rank as u16) & AXIS_MASK) << FROM_RANK_SHIFT;
        out |= ((mv.from.file as u16) & AXIS_MASK) << FROM_FILE_SHIFT;
        out |= ((mv.to.rank as u16) & AXIS_MASK) << TO_RANK_SHIFT;
        out |= ((mv.to.file as u16) & AXIS_MASK) << TO_FILE_SHIFT;
        out |= ((mv.kind.code() as u16) & KIND_MASK) << KIND_SHIFT;
        Self(out)
    }

    #[inline]
    const fn field(self, shift: u16, mask: u16) -> u16 {
        (self.0 >> shift) & mask
    }

    pub fn decode(self) -> Result<Move, String> {
        let code = self.field(KIND_SHIFT, KIND_MASK) as u8;
        let kind = MoveKind::from_code(code).ok_or_else(|| {
            format!("Invalid move kind code {code} in encoded move {:#06x}", self.0)
        })?;

        Ok(Move {
            from: Position {
                rank: self.field(FROM_RANK_SHIFT, AXIS_MASK) as i8,
                file: self.field(FROM_FILE_SHIFT, AXIS_MASK) as i8,
            },
            to: Position {
                rank: self.field(TO_RANK_SHIFT, AXIS_MASK) as i8,
                file: self.field(TO_FILE_SHIFT, AXIS_MASK) as i8,
            },
            kind,
        })
    }
}

impl From<Move> for EncodedMove {
    fn from(mv: Move) -> Self {
        EncodedMove::from_move(mv)
    }
}

impl TryFrom<EncodedMove> for Move {
    type Error = String;

    fn try_from(encoded: EncodedMove) -> Result<Self, Self::Error> {
        encoded.decode()
    }
}
