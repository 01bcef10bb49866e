//! FEN-to-GameState parser.
//!
//! Builds a `GameState` plus the FEN move clocks from a six-field
//! Forsyth-Edwards Notation string.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_position;

pub fn parse_fen(fen: &str) -> Result<(GameState, MoveClocks), String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;
    let halfmove_part = parts.next().ok_or("Missing halfmove clock in FEN")?;
    let fullmove_part = parts.next().ok_or("Missing fullmove number in FEN")?;

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let mut game_state = GameState::new_empty();

    game_state.board = parse_board(board_part)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_target =
        parse_en_passant_target(en_passant_part, game_state.side_to_move)?;

    let clocks = MoveClocks {
        halfmove_clock: halfmove_part
            .parse::<u16>()
            .map_err(|_| format!("Invalid halfmove clock: {halfmove_part}"))?,
        fullmove_number: fullmove_part
            .parse::<u16>()
            .map_err(|_| format!("Invalid fullmove number: {fullmove_part}"))?,
    };

    Ok((game_state, clocks))
}

fn parse_board(board_part: &str) -> Result<Board, String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    let mut board = Board::empty();

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as i8;
        let mut file = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                file += empty_count as i8;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            if file >= 8 {
                return Err("Board rank has too many files".to_owned());
            }

            board.set_square(Position::new(board_rank, file), piece);
            file += 1;
        }

        if file != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, String> {
    if castling_part == "-" {
        return Ok(CastlingRights::NONE);
    }

    let mut rights = CastlingRights::NONE;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.set(CastlingRights::LIGHT_KINGSIDE),
            'Q' => rights.set(CastlingRights::LIGHT_QUEENSIDE),
            'k' => rights.set(CastlingRights::DARK_KINGSIDE),
            'q' => rights.set(CastlingRights::DARK_QUEENSIDE),
            _ => return Err(format!("Invalid castling rights character: {ch}")),
        }
    }

    Ok(rights)
}

fn parse_en_passant_target(
    en_passant_part: &str,
    side_to_move: Color,
) -> Result<Option<Position>, String> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_position(en_passant_part)?;
    // The target sits behind a pawn the opponent just pushed two squares.
    let (expected_rank, label) = match side_to_move {
        Color::Light => (5, '6'),
        Color::Dark => (2, '3'),
    };
    if target.rank != expected_rank {
        return Err(format!(
            "En-passant target must be on rank {label} with {side_to_move:?} to move: \
             {en_passant_part}"
        ));
    }
    Ok(Some(target))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    Some(make_piece(color, PieceKind::from_letter(ch)?))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::game_state::chess_rules::{KIWIPETE_FEN, STARTING_POSITION_FEN};
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_position;

    #[test]
    fn parse_starting_fen_matches_new_game() {
        let (game_state, clocks) =
            parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state, GameState::new_game());
        assert_eq!(clocks, MoveClocks::default());
    }

    #[test]
    fn parse_reads_rights_and_en_passant() {
        let (game_state, clocks) =
            parse_fen("4k3/8/8/3Pp3/8/8/8/4K2R w Kq e6 3 40").expect("FEN should parse");

        assert_eq!(
            game_state.castling_rights.bits(),
            CastlingRights::LIGHT_KINGSIDE | CastlingRights::DARK_QUEENSIDE
        );
        assert_eq!(game_state.en_passant_target, algebraic_to_position("e6").ok());
        assert_eq!(clocks.halfmove_clock, 3);
        assert_eq!(clocks.fullmove_number, 40);
    }

    #[test]
    fn parse_kiwipete_places_pieces() {
        let (game_state, _) = parse_fen(KIWIPETE_FEN).expect("kiwipete should parse");
        let board = game_state.board;
        let e2 = algebraic_to_position("e2").expect("square should parse");
        let a6 = algebraic_to_position("a6").expect("square should parse");
        assert_eq!(board.get_square(e2), make_piece(Color::Light, PieceKind::Bishop));
        assert_eq!(board.get_square(a6), make_piece(Color::Dark, PieceKind::Bishop));
    }

    #[test]
    fn malformed_fens_are_rejected() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - zero 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
        ] {
            assert!(parse_fen(fen).is_err(), "expected rejection: {fen}");
        }
    }

    #[test]
    fn en_passant_target_must_face_the_side_to_move() {
        assert!(parse_fen("4k3/8/8/8/4P3/8/8/4K3 w - e3 0 1").is_err());
        assert!(parse_fen("4k3/4p3/8/3P4/8/8/8/4K3 b - e6 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/4P3/8/8/4K3 b - e3 0 1").is_ok());
    }
}
