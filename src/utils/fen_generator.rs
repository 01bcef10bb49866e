use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::position_to_algebraic;

pub fn generate_fen(game_state: &GameState, clocks: MoveClocks) -> String {
    let board = generate_board_field(&game_state.board);
    let side_to_move = match game_state.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights);
    let en_passant = game_state
        .en_passant_target
        .map(position_to_algebraic)
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} {} {}",
        board, side_to_move, castling, en_passant, clocks.halfmove_clock, clocks.fullmove_number
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8 {
            match piece_to_fen_char(board.get_square(Position::new(rank, file))) {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> Option<char> {
    let letter = piece_kind(piece)?.letter();
    match piece_color(piece)? {
        Color::Light => Some(letter),
        Color::Dark => Some(letter.to_ascii_lowercase()),
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();
    for (flag, ch) in [
        (CastlingRights::LIGHT_KINGSIDE, 'K'),
        (CastlingRights::LIGHT_QUEENSIDE, 'Q'),
        (CastlingRights::DARK_KINGSIDE, 'k'),
        (CastlingRights::DARK_QUEENSIDE, 'q'),
    ] {
        if rights.has(flag) {
            out.push(ch);
        }
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::{KIWIPETE_FEN, PROMOTION_STRESS_FEN, STARTING_POSITION_FEN};
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn generated_fen_matches_parsed_input() {
        for fen in [
            STARTING_POSITION_FEN,
            KIWIPETE_FEN,
            PROMOTION_STRESS_FEN,
            "8/8/8/3pP3/8/8/8/k6K w - d6 0 12",
        ] {
            let (state, clocks) = parse_fen(fen).expect("FEN should parse");
            assert_eq!(generate_fen(&state, clocks), fen);
        }
    }
}
