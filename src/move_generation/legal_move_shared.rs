use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::move_descriptions::{Move, MoveKind, PROMOTION_KINDS};

/// King-safety check bound to one position: a private board copy, the mover's
/// king square, and the mover's color.
///
/// Each candidate is made on the private board, the king square is probed with
/// the attack oracle, and the board is restored before the next candidate.
pub struct LegalityFilter {
    board: Board,
    king: Position,
    color: Color,
}

impl LegalityFilter {
    pub fn new(board: &Board, king: Position, color: Color) -> Self {
        Self {
            board: *board,
            king,
            color,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// True iff making `mv` leaves the mover's king unattacked.
    pub fn permits(&mut self, mv: Move) -> bool {
        let captured = self.board.apply_move(mv);
        let king = if mv.from == self.king { mv.to } else { self.king };
        let safe = !is_square_attacked(&self.board, king, self.color);
        self.board.undo_move(mv, captured);
        safe
    }

    /// Pushes `mv` onto `out` if it is legal.
    #[inline]
    pub fn push_if_legal(&mut self, mv: Move, out: &mut Vec<Move>) {
        if self.permits(mv) {
            out.push(mv);
        }
    }

    /// Pushes the four promotion variants of a pawn move, each filtered on
    /// its own.
    pub fn push_promotions_if_legal(&mut self, from: Position, to: Position, out: &mut Vec<Move>) {
        for kind in PROMOTION_KINDS {
            self.push_if_legal(Move::new(from, to, kind), out);
        }
    }

    /// Pushes a non-special move from `from` to `to` if the destination is
    /// empty or enemy-occupied and the move is legal.
    #[inline]
    pub fn push_step_if_legal(&mut self, from: Position, to: Position, out: &mut Vec<Move>) {
        if !is_color(self.board.get_square(to), self.color) {
            self.push_if_legal(Move::new(from, to, MoveKind::Normal), out);
        }
    }
}
