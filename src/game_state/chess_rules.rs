//! Canonical chess-rule constants.
//!
//! The standard starting FEN plus the reference positions used to validate the
//! generator against published perft node counts.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// "Kiwipete": castling, en passant, pins and promotions all in play.
pub const KIWIPETE_FEN: &str =
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

/// Sparse endgame exercising rank pins and en-passant discovered checks.
pub const ROOK_ENDGAME_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

/// Promotion-heavy middlegame with a light pawn on d7 and a dark knight on f2.
pub const PROMOTION_STRESS_FEN: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

/// Published leaf counts, index `d - 1` holds depth `d`.
pub const STARTING_POSITION_PERFT: [u64; 6] = [20, 400, 8_902, 197_281, 4_865_609, 119_060_324];
pub const KIWIPETE_PERFT: [u64; 4] = [48, 2_039, 97_862, 4_085_603];
pub const ROOK_ENDGAME_PERFT: [u64; 5] = [14, 191, 2_812, 43_238, 674_624];
pub const PROMOTION_STRESS_PERFT: [u64; 5] = [44, 1_486, 62_379, 2_103_487, 89_941_194];
