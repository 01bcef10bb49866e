//! A game in progress: the current position plus everything needed to replay,
//! take back, and export it.
//!
//! Moves only enter the record through [`GameRecord::play_move`], which
//! accepts nothing outside the generated legal set.

use crate::game_state::{chess_types::*, game_state::GameState, undo_state::UndoState};
use crate::move_generation::legal_move_generator::{generate_all_moves, status_from_moves};
use crate::move_generation::move_generator::{GameStatus, MoveGenResult};
use crate::moves::move_descriptions::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::long_algebraic::move_to_long_algebraic;
use crate::utils::standard_algebraic::{san_to_move, NotationError};

#[derive(Debug, Clone)]
pub struct GameRecord {
    initial_state: GameState,
    initial_clocks: MoveClocks,
    state: GameState,
    clocks: MoveClocks,
    history: Vec<Move>,
    undo_stack: Vec<(UndoState, MoveClocks)>,
    legal_moves: Vec<Move>,
    status: GameStatus,
}

impl GameRecord {
    /// Record at the standard start. Generation there cannot fail since both
    /// kings are present, so the list is built without a fallible path.
    pub fn new_game() -> Self {
        let state = GameState::new_game();
        Self {
            initial_state: state,
            initial_clocks: MoveClocks::default(),
            state,
            clocks: MoveClocks::default(),
            history: Vec::new(),
            undo_stack: Vec::new(),
            legal_moves: generate_all_moves(&state).unwrap_or_default(),
            status: GameStatus::Ongoing,
        }
    }

    pub fn from_state(state: GameState, clocks: MoveClocks) -> MoveGenResult<Self> {
        let legal_moves = generate_all_moves(&state)?;
        let status = status_from_moves(&state, &legal_moves)?;
        Ok(Self {
            initial_state: state,
            initial_clocks: clocks,
            state,
            clocks,
            history: Vec::new(),
            undo_stack: Vec::new(),
            legal_moves,
            status,
        })
    }

    pub fn from_fen(fen: &str) -> Result<Self, String> {
        let (state, clocks) = parse_fen(fen)?;
        Self::from_state(state, clocks).map_err(|e| e.to_string())
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn initial_state(&self) -> &GameState {
        &self.initial_state
    }

    #[inline]
    pub fn initial_clocks(&self) -> MoveClocks {
        self.initial_clocks
    }

    #[inline]
    pub fn clocks(&self) -> MoveClocks {
        self.clocks
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Ongoing
    }

    /// The checkmating side, if any.
    pub fn winner(&self) -> Option<Color> {
        match self.status {
            GameStatus::Checkmate => Some(self.state.side_to_move.opposite()),
            GameStatus::Ongoing | GameStatus::Stalemate => None,
        }
    }

    pub fn fen(&self) -> String {
        generate_fen(&self.state, self.clocks)
    }

    /// Plays `mv` if it is one of the current legal moves.
    pub fn play_move(&mut self, mv: Move) -> Result<(), NotationError> {
        if !self.legal_moves.contains(&mv) {
            return Err(NotationError::IllegalMove(move_to_long_algebraic(mv)));
        }

        let mover = self.state.side_to_move;
        let is_pawn_move =
            piece_kind(self.state.board.get_square(mv.from)) == Some(PieceKind::Pawn);

        let prior_clocks = self.clocks;
        let undo = self.state.do_move(mv);

        if is_pawn_move || undo.captured != EMPTY_SQUARE {
            self.clocks.halfmove_clock = 0;
        } else {
            self.clocks.halfmove_clock = self.clocks.halfmove_clock.saturating_add(1);
        }
        if mover == Color::Dark {
            self.clocks.fullmove_number = self.clocks.fullmove_number.saturating_add(1);
        }

        self.history.push(mv);
        self.undo_stack.push((undo, prior_clocks));
        self.refresh()?;
        Ok(())
    }

    /// Parses `san` against the current position and plays it.
    pub fn play_san(&mut self, san: &str) -> Result<Move, NotationError> {
        let mv = san_to_move(san, &self.state)?;
        self.play_move(mv)?;
        Ok(mv)
    }

    /// Takes back the last move, returning it. `None` at the initial position.
    pub fn take_back(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        let (undo, prior_clocks) = self.undo_stack.pop()?;

        self.state.undo_move(mv, undo);
        self.clocks = prior_clocks;
        // The position was reached before, so generation succeeded on it then.
        self.refresh().ok()?;
        Some(mv)
    }

    fn refresh(&mut self) -> MoveGenResult<()> {
        self.legal_moves = generate_all_moves(&self.state)?;
        self.status = status_from_moves(&self.state, &self.legal_moves)?;
        Ok(())
    }
}

impl Default for GameRecord {
    fn default() -> Self {
        Self::new_game()
    }
}
