//! Terminal-oriented Unicode board renderer.
//!
//! Draws the mailbox board from the light side with file and rank labels on
//! every edge, for binaries and debugging.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board to a Unicode string for terminal output. Rank 8 is on
/// top and empty squares are drawn as `·`.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8).rev() {
        let label = char::from(b'1' + rank as u8);
        out.push(label);
        out.push(' ');

        for file in 0..8 {
            let piece = game_state.board.get_square(Position::new(rank, file));
            out.push(piece_to_unicode(piece).unwrap_or('·'));

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> Option<char> {
    let glyph = match (piece_color(piece)?, piece_kind(piece)?) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    };
    Some(glyph)
}
