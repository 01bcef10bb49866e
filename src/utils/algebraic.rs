//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! `Position` values reused by FEN/PGN/SAN components.

use crate::game_state::chess_types::Position;

/// File letter (`a`..=`h`) to file index.
#[inline]
pub fn file_from_char(file: char) -> Result<i8, String> {
    if !('a'..='h').contains(&file) {
        return Err(format!("Invalid algebraic file: {file}"));
    }
    Ok(file as i8 - b'a' as i8)
}

/// Rank digit (`1`..=`8`) to rank index.
#[inline]
pub fn rank_from_char(rank: char) -> Result<i8, String> {
    if !('1'..='8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {rank}"));
    }
    Ok(rank as i8 - b'1' as i8)
}

#[inline]
pub fn file_to_char(file: i8) -> char {
    char::from(b'a' + file as u8)
}

#[inline]
pub fn rank_to_char(rank: i8) -> char {
    char::from(b'1' + rank as u8)
}

/// Convert algebraic notation (for example: "e4") to a board position.
pub fn algebraic_to_position(square: &str) -> Result<Position, String> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(format!("Invalid algebraic square: {square}"));
    };

    Ok(Position::new(rank_from_char(rank)?, file_from_char(file)?))
}

/// Convert a board position to algebraic notation (for example: "e4").
#[inline]
pub fn position_to_algebraic(position: Position) -> String {
    format!("{}{}", file_to_char(position.file), rank_to_char(position.rank))
}
