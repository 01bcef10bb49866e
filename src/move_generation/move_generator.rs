use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    /// The side named has no king on the board; the state is malformed.
    MissingKing(Color),
    InvalidState(String),
}

impl fmt::Display for MoveGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveGenerationError::MissingKing(color) => {
                write!(f, "invalid game state: no {color:?} king on the board")
            }
            MoveGenerationError::InvalidState(msg) => write!(f, "invalid game state: {msg}"),
        }
    }
}

impl Error for MoveGenerationError {}

/// Outcome of a position from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<Move>>;
}
