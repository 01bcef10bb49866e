use crate::game_state::{chess_types::PieceKind, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_all_moves;
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::utils::algebraic::{algebraic_to_position, position_to_algebraic};

/// Coordinate notation: `e2e4`, `e1g1` for castling, `e7e8q` for promotion.
pub fn move_to_long_algebraic(mv: Move) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&position_to_algebraic(mv.from));
    out.push_str(&position_to_algebraic(mv.to));

    if let Some(piece) = mv.kind.promotion_piece() {
        out.push(piece.letter().to_ascii_lowercase());
    }

    out
}

/// Resolves coordinate notation against the legal moves of `game_state`, so
/// the move kind (castle, en passant) comes from the generator.
pub fn long_algebraic_to_move(
    long_algebraic: &str,
    game_state: &GameState,
) -> Result<Move, String> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(format!("Invalid long algebraic move: {long_algebraic}"));
    }

    let from = algebraic_to_position(&text[0..2])?;
    let to = algebraic_to_position(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        Some(ch) => Some(char_to_promotion(ch)?),
        None => None,
    };

    let legal_moves = generate_all_moves(game_state).map_err(|e| e.to_string())?;
    legal_moves
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to && mv.kind.promotion_piece() == promotion)
        .ok_or_else(|| format!("Illegal move in current position: {text}"))
}

fn char_to_promotion(ch: char) -> Result<PieceKind, String> {
    let piece = PieceKind::from_letter(ch)
        .and_then(MoveKind::promoting_to)
        .and_then(MoveKind::promotion_piece);
    piece.ok_or_else(|| format!("Invalid promotion piece character: {ch}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_algebraic_round_trip_simple_move() {
        let game_state =
            GameState::from_fen("8/8/8/8/8/8/4P3/k3K3 w - - 0 1").expect("FEN should parse");
        let mv = long_algebraic_to_move("e2e4", &game_state).expect("move should parse");

        assert_eq!(mv.kind, MoveKind::Normal);
        assert_eq!(move_to_long_algebraic(mv), "e2e4");
    }

    #[test]
    fn long_algebraic_round_trip_promotion() {
        let game_state =
            GameState::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").expect("FEN should parse");
        let mv = long_algebraic_to_move("a7a8n", &game_state).expect("move should parse");

        assert_eq!(mv.kind, MoveKind::PromoteToKnight);
        assert_eq!(move_to_long_algebraic(mv), "a7a8n");
        assert!(long_algebraic_to_move("a7a8", &game_state).is_err());
        assert!(long_algebraic_to_move("a7a8k", &game_state).is_err());
    }

    #[test]
    fn long_algebraic_detects_castling_and_en_passant() {
        let castle_state =
            GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let castle_move =
            long_algebraic_to_move("e1g1", &castle_state).expect("castle should parse");
        assert_eq!(castle_move.kind, MoveKind::KingSideCastle);

        let en_passant_state =
            GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let ep_move = long_algebraic_to_move("e5d6", &en_passant_state)
            .expect("en-passant should parse");
        assert_eq!(ep_move.kind, MoveKind::EnPassant);
    }

    #[test]
    fn long_algebraic_rejects_illegal_and_malformed_text() {
        let game_state = GameState::new_game();
        assert!(long_algebraic_to_move("e2e5", &game_state).is_err());
        assert!(long_algebraic_to_move("e2", &game_state).is_err());
        assert!(long_algebraic_to_move("i2i4", &game_state).is_err());
    }
}
