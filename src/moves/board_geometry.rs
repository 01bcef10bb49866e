//! Ray and offset tables plus the vision queries built on them.
//!
//! Nothing here knows about chess rules beyond piece movement shapes; the
//! attack oracle, generator, and notation codec all share these helpers.

use crate::game_state::chess_types::{Board, Position, EMPTY_SQUARE};

/// Unit step as `(d_rank, d_file)`.
pub type Direction = (i8, i8);

pub const ROOK_DIRECTIONS: [Direction; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const BISHOP_DIRECTIONS: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    (2, 1),
    (1, 2),
    (-2, 1),
    (-1, 2),
    (-2, -1),
    (-1, -2),
    (2, -1),
    (1, -2),
];

pub const KING_OFFSETS: [Direction; 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];

/// For each direction, the first occupied square walking outward from
/// `position` (exclusive), or `None` when the ray leaves the board first.
pub fn directional_vision(
    board: &Board,
    position: Position,
    directions: &[Direction; 4],
) -> [Option<Position>; 4] {
    let mut out = [None; 4];

    for (slot, &(d_rank, d_file)) in out.iter_mut().zip(directions.iter()) {
        let mut cursor = position;
        while let Some(next) = cursor.offset(d_rank, d_file) {
            if board.get_square(next) != EMPTY_SQUARE {
                *slot = Some(next);
                break;
            }
            cursor = next;
        }
    }

    out
}

/// Squares a slider standing on `position` could move to along `direction`:
/// every empty square plus the first occupied one.
pub fn ray_squares(
    board: &Board,
    position: Position,
    direction: Direction,
) -> impl Iterator<Item = Position> + '_ {
    let (d_rank, d_file) = direction;
    let mut cursor = Some(position);
    let mut blocked = false;

    std::iter::from_fn(move || {
        if blocked {
            return None;
        }
        let next = cursor?.offset(d_rank, d_file)?;
        cursor = Some(next);
        if board.get_square(next) != EMPTY_SQUARE {
            blocked = true;
        }
        Some(next)
    })
}

/// In-bounds knight jumps from `position`.
pub fn knight_vision(position: Position) -> impl Iterator<Item = Position> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(move |&(d_rank, d_file)| position.offset(d_rank, d_file))
}

/// In-bounds squares adjacent to `position`.
pub fn king_vision(position: Position) -> impl Iterator<Item = Position> {
    KING_OFFSETS
        .iter()
        .filter_map(move |&(d_rank, d_file)| position.offset(d_rank, d_file))
}
