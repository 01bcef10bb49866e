//! Move-selection collaborators.
//!
//! An engine is handed the position together with its generated legal moves
//! and must answer with one of them; it never builds moves of its own.

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// `info string ...` diagnostics for the caller to print or drop.
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Picks from `legal_moves`, which must be the generated set for
    /// `game_state`. `best_move` is `None` only when that set is empty.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        legal_moves: &[Move],
    ) -> Result<EngineOutput, String>;
}
