//! Crate root module declarations for the mailbox chess rules core.
//!
//! Exposes the position model, move geometry, legal move generation with
//! perft, move-selection engines, and the text formats (FEN, SAN, long
//! algebraic, PGN) so binaries, benches and tests share stable module paths.

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_record;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod board_geometry;
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod legal_moves_sliders;
    pub mod move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod pgn;
    pub mod render_game_state;
    pub mod standard_algebraic;
}
