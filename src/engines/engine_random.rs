//! Uniform random-move engine.
//!
//! Used for self-play smoke testing of the rules core and for quick games.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;
use crate::utils::long_algebraic::move_to_long_algebraic;

pub struct RandomEngine {
    /// `None` draws from the thread RNG.
    rng: Option<StdRng>,
    seed: Option<u64>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: None,
            seed: None,
        }
    }

    /// Reproducible engine: the same seed and the same positions give the
    /// same choices.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
            seed: Some(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Mailbox Random"
    }

    fn new_game(&mut self) {
        if let Some(seed) = self.seed {
            self.rng = Some(StdRng::seed_from_u64(seed));
        }
    }

    fn choose_move(
        &mut self,
        _game_state: &GameState,
        legal_moves: &[Move],
    ) -> Result<EngineOutput, String> {
        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if legal_moves.is_empty() {
            out.best_move = None;
            return Ok(out);
        }

        let picked = match self.rng.as_mut() {
            Some(rng) => legal_moves.choose(rng),
            None => legal_moves.choose(&mut rand::rng()),
        }
        .ok_or("failed to choose a random move")?;

        out.info_lines.push(format!(
            "info string random_engine picked {}",
            move_to_long_algebraic(*picked)
        ));
        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::generate_all_moves;

    #[test]
    fn random_engine_picks_only_generated_moves() {
        let game = GameState::new_game();
        let legal = generate_all_moves(&game).expect("generation should succeed");
        let mut engine = RandomEngine::new();

        for _ in 0..32 {
            let out = engine.choose_move(&game, &legal).expect("engine should answer");
            let picked = out.best_move.expect("start position has moves");
            assert!(legal.contains(&picked));
            assert!(!out.info_lines.is_empty());
        }
    }

    #[test]
    fn seeded_engine_is_reproducible_across_new_game() {
        let game = GameState::new_game();
        let legal = generate_all_moves(&game).expect("generation should succeed");
        let mut engine = RandomEngine::with_seed(7);

        let first: Vec<_> = (0..8)
            .map(|_| engine.choose_move(&game, &legal).expect("engine should answer").best_move)
            .collect();
        engine.new_game();
        let second: Vec<_> = (0..8)
            .map(|_| engine.choose_move(&game, &legal).expect("engine should answer").best_move)
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn no_legal_moves_means_no_best_move() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let out = RandomEngine::new()
            .choose_move(&game, &[])
            .expect("engine should answer");
        assert_eq!(out.best_move, None);
    }
}
