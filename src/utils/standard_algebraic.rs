//! Standard algebraic notation (SAN) for moves, e.g. `Nbd2`, `exd6`, `e8=Q+`,
//! `O-O-O`.
//!
//! Rendering disambiguates against other like pieces that can legally reach
//! the destination; parsing resolves the origin from the destination outward
//! with the same vision functions the generator uses.

use std::error::Error;
use std::fmt;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_king_in_check, king_square};
use crate::move_generation::legal_move_generator::generate_all_moves;
use crate::move_generation::legal_move_shared::LegalityFilter;
use crate::move_generation::move_generator::MoveGenerationError;
use crate::moves::board_geometry::{
    directional_vision, king_vision, knight_vision, BISHOP_DIRECTIONS, ROOK_DIRECTIONS,
};
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::utils::algebraic::{
    algebraic_to_position, file_from_char, file_to_char, position_to_algebraic, rank_from_char,
    rank_to_char,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    Empty,
    InvalidSquare(String),
    FileOutOfRange(char),
    RankOutOfRange(char),
    InvalidPromotion(char),
    PromotionMissing(String),
    PromotionNotAllowed(String),
    OriginNotFound(String),
    AmbiguousOrigin(String),
    IllegalMove(String),
    Generation(MoveGenerationError),
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::Empty => write!(f, "empty move text"),
            NotationError::InvalidSquare(text) => write!(f, "invalid square code: {text}"),
            NotationError::FileOutOfRange(ch) => write!(f, "file out of range: {ch}"),
            NotationError::RankOutOfRange(ch) => write!(f, "rank out of range: {ch}"),
            NotationError::InvalidPromotion(ch) => write!(f, "invalid promotion piece: {ch}"),
            NotationError::PromotionMissing(text) => {
                write!(f, "pawn reaching the last rank must promote: {text}")
            }
            NotationError::PromotionNotAllowed(text) => {
                write!(f, "promotion is only allowed for pawns on the last rank: {text}")
            }
            NotationError::OriginNotFound(text) => write!(f, "no piece can make the move {text}"),
            NotationError::AmbiguousOrigin(text) => write!(f, "ambiguous move {text}"),
            NotationError::IllegalMove(text) => write!(f, "illegal move {text}"),
            NotationError::Generation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NotationError {}

impl From<MoveGenerationError> for NotationError {
    fn from(err: MoveGenerationError) -> Self {
        NotationError::Generation(err)
    }
}

const KING_SIDE_CASTLE: &str = "O-O";
const QUEEN_SIDE_CASTLE: &str = "O-O-O";

/// Renders `mv`, which must be legal in `game_state`, as SAN including the
/// `+` / `#` suffix.
pub fn move_to_san(mv: Move, game_state: &GameState) -> Result<String, NotationError> {
    let board = &game_state.board;
    let side = game_state.side_to_move;
    let moved = piece_kind(board.get_square(mv.from))
        .ok_or_else(|| NotationError::IllegalMove(position_to_algebraic(mv.from)))?;

    let mut out = match mv.kind {
        MoveKind::KingSideCastle => KING_SIDE_CASTLE.to_owned(),
        MoveKind::QueenSideCastle => QUEEN_SIDE_CASTLE.to_owned(),
        _ if moved == PieceKind::Pawn => {
            let mut text = String::new();
            if mv.from.file != mv.to.file {
                text.push(file_to_char(mv.from.file));
                text.push('x');
            }
            text.push_str(&position_to_algebraic(mv.to));
            if let Some(promoted) = mv.kind.promotion_piece() {
                text.push('=');
                text.push(promoted.letter());
            }
            text
        }
        _ => {
            let mut text = String::new();
            text.push(moved.letter());
            text.push_str(&disambiguation(mv, moved, game_state)?);
            if !board.is_empty(mv.to) {
                text.push('x');
            }
            text.push_str(&position_to_algebraic(mv.to));
            text
        }
    };

    let next = game_state.after_move(mv);
    if is_king_in_check(&next.board, side.opposite())? {
        if generate_all_moves(&next)?.is_empty() {
            out.push('#');
        } else {
            out.push('+');
        }
    }

    Ok(out)
}

/// Resolves SAN `text` to the matching legal move in `game_state`. Trailing
/// `+`, `#`, `!` and `?` are ignored and `0-0` is accepted for castling.
pub fn san_to_move(text: &str, game_state: &GameState) -> Result<Move, NotationError> {
    let trimmed = text
        .trim()
        .trim_end_matches(|ch: char| matches!(ch, '+' | '#' | '!' | '?'));
    if trimmed.is_empty() {
        return Err(NotationError::Empty);
    }

    let legal_moves = generate_all_moves(game_state)?;
    let side = game_state.side_to_move;

    let mv = match trimmed {
        "O-O" | "0-0" => {
            let king = king_square(&game_state.board, side)?;
            Move::new(
                king,
                Position::new(side.home_rank(), 6),
                MoveKind::KingSideCastle,
            )
        }
        "O-O-O" | "0-0-0" => {
            let king = king_square(&game_state.board, side)?;
            Move::new(
                king,
                Position::new(side.home_rank(), 2),
                MoveKind::QueenSideCastle,
            )
        }
        _ => parse_san_body(trimmed, game_state, &legal_moves)?,
    };

    if legal_moves.contains(&mv) {
        Ok(mv)
    } else {
        Err(NotationError::IllegalMove(text.trim().to_owned()))
    }
}

fn parse_san_body(
    text: &str,
    game_state: &GameState,
    legal_moves: &[Move],
) -> Result<Move, NotationError> {
    let (body, promotion) = split_promotion(text)?;

    if body.len() < 2 || !body.is_char_boundary(body.len() - 2) {
        return Err(NotationError::InvalidSquare(text.to_owned()));
    }
    let (prefix, square) = body.split_at(body.len() - 2);
    let to = algebraic_to_position(square)
        .map_err(|_| NotationError::InvalidSquare(square.to_owned()))?;

    let mut prefix_chars = prefix.chars();
    let piece = match prefix_chars.clone().next() {
        Some(ch) if ch.is_ascii_uppercase() => {
            prefix_chars.next();
            PieceKind::from_letter(ch)
                .ok_or_else(|| NotationError::OriginNotFound(text.to_owned()))?
        }
        _ => PieceKind::Pawn,
    };

    let hint_text: String = prefix_chars.filter(|&ch| ch != 'x').collect();
    let captures = prefix.contains('x');
    let (file_hint, rank_hint) = parse_hints(&hint_text)?;

    if piece == PieceKind::Pawn {
        return resolve_pawn_move(text, game_state, to, file_hint, captures, promotion);
    }
    if promotion.is_some() {
        return Err(NotationError::PromotionNotAllowed(text.to_owned()));
    }

    if piece == PieceKind::King {
        let king = king_square(&game_state.board, game_state.side_to_move)?;
        return Ok(Move::normal(king, to));
    }

    let candidates: Vec<Position> = vision_origins(game_state, to, piece)
        .into_iter()
        .filter(|origin| file_hint.map_or(true, |file| origin.file == file))
        .filter(|origin| rank_hint.map_or(true, |rank| origin.rank == rank))
        .collect();

    match candidates.as_slice() {
        [] => Err(NotationError::OriginNotFound(text.to_owned())),
        [origin] => Ok(Move::normal(*origin, to)),
        _ => {
            let legal: Vec<Position> = candidates
                .into_iter()
                .filter(|&origin| legal_moves.contains(&Move::normal(origin, to)))
                .collect();
            match legal.as_slice() {
                [] => Err(NotationError::IllegalMove(text.to_owned())),
                [origin] => Ok(Move::normal(*origin, to)),
                _ => Err(NotationError::AmbiguousOrigin(text.to_owned())),
            }
        }
    }
}

/// Splits a trailing `=Q` (or bare `Q` after a rank digit) from the body.
fn split_promotion(text: &str) -> Result<(&str, Option<PieceKind>), NotationError> {
    let Some(last) = text.chars().last() else {
        return Err(NotationError::Empty);
    };
    if !last.is_ascii_alphabetic() || last.is_ascii_lowercase() {
        return Ok((text, None));
    }

    let body = &text[..text.len() - 1];
    let body = body.strip_suffix('=').unwrap_or(body);
    let kind = PieceKind::from_letter(last)
        .filter(|kind| MoveKind::promoting_to(*kind).is_some())
        .ok_or(NotationError::InvalidPromotion(last))?;
    Ok((body, Some(kind)))
}

fn parse_hints(hints: &str) -> Result<(Option<i8>, Option<i8>), NotationError> {
    let mut file = None;
    let mut rank = None;

    for ch in hints.chars() {
        if ch.is_ascii_alphabetic() {
            file = Some(file_from_char(ch).map_err(|_| NotationError::FileOutOfRange(ch))?);
        } else {
            rank = Some(rank_from_char(ch).map_err(|_| NotationError::RankOutOfRange(ch))?);
        }
    }

    Ok((file, rank))
}

fn resolve_pawn_move(
    text: &str,
    game_state: &GameState,
    to: Position,
    file_hint: Option<i8>,
    captures: bool,
    promotion: Option<PieceKind>,
) -> Result<Move, NotationError> {
    let side = game_state.side_to_move;
    let board = &game_state.board;
    let pawn = make_piece(side, PieceKind::Pawn);
    let direction = side.pawn_direction();
    let not_found = || NotationError::OriginNotFound(text.to_owned());

    let origin_file = file_hint.unwrap_or(to.file);
    let is_capture = captures || origin_file != to.file;

    let from = if is_capture {
        let file_step = origin_file - to.file;
        if file_step.abs() != 1 {
            return Err(not_found());
        }
        to.offset(-direction, file_step).ok_or_else(not_found)?
    } else {
        let one_back = to.offset(-direction, 0).ok_or_else(not_found)?;
        if board.get_square(one_back) == pawn {
            one_back
        } else {
            let two_back = one_back.offset(-direction, 0).ok_or_else(not_found)?;
            if board.is_empty(one_back) && two_back.rank == side.pawn_rank() {
                two_back
            } else {
                return Err(not_found());
            }
        }
    };

    if board.get_square(from) != pawn {
        return Err(not_found());
    }

    if to.rank == side.promotion_rank() {
        let kind = promotion
            .and_then(MoveKind::promoting_to)
            .ok_or_else(|| NotationError::PromotionMissing(text.to_owned()))?;
        return Ok(Move::new(from, to, kind));
    }
    if promotion.is_some() {
        return Err(NotationError::PromotionNotAllowed(text.to_owned()));
    }

    if is_capture && board.is_empty(to) {
        return Ok(Move::new(from, to, MoveKind::EnPassant));
    }

    Ok(Move::normal(from, to))
}

/// Squares holding a piece of `kind` for the side to move that can see `to`.
fn vision_origins(game_state: &GameState, to: Position, kind: PieceKind) -> Vec<Position> {
    let board = &game_state.board;
    let wanted = make_piece(game_state.side_to_move, kind);
    let holds_piece = |square: &Position| board.get_square(*square) == wanted;

    match kind {
        PieceKind::Knight => knight_vision(to).filter(holds_piece).collect(),
        PieceKind::King => king_vision(to).filter(holds_piece).collect(),
        PieceKind::Bishop => directional_vision(board, to, &BISHOP_DIRECTIONS)
            .into_iter()
            .flatten()
            .filter(holds_piece)
            .collect(),
        PieceKind::Rook => directional_vision(board, to, &ROOK_DIRECTIONS)
            .into_iter()
            .flatten()
            .filter(holds_piece)
            .collect(),
        PieceKind::Queen => directional_vision(board, to, &ROOK_DIRECTIONS)
            .into_iter()
            .chain(directional_vision(board, to, &BISHOP_DIRECTIONS))
            .flatten()
            .filter(holds_piece)
            .collect(),
        PieceKind::Pawn => Vec::new(),
    }
}

fn disambiguation(
    mv: Move,
    moved: PieceKind,
    game_state: &GameState,
) -> Result<String, NotationError> {
    if moved == PieceKind::King {
        return Ok(String::new());
    }

    let side = game_state.side_to_move;
    let king = king_square(&game_state.board, side)?;
    let mut filter = LegalityFilter::new(&game_state.board, king, side);

    let rivals: Vec<Position> = vision_origins(game_state, mv.to, moved)
        .into_iter()
        .filter(|&origin| origin != mv.from)
        .filter(|&origin| filter.permits(Move::normal(origin, mv.to)))
        .collect();

    if rivals.is_empty() {
        Ok(String::new())
    } else if rivals.iter().all(|origin| origin.file != mv.from.file) {
        Ok(file_to_char(mv.from.file).to_string())
    } else if rivals.iter().all(|origin| origin.rank != mv.from.rank) {
        Ok(rank_to_char(mv.from.rank).to_string())
    } else {
        Ok(position_to_algebraic(mv.from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::*;

    fn state(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("test FEN should parse")
    }

    fn pos(text: &str) -> Position {
        algebraic_to_position(text).expect("test square should parse")
    }

    fn san(game: &GameState, from: &str, to: &str, kind: MoveKind) -> String {
        move_to_san(Move::new(pos(from), pos(to), kind), game).expect("move should render")
    }

    #[test]
    fn every_legal_move_round_trips_through_san() {
        for fen in [
            STARTING_POSITION_FEN,
            KIWIPETE_FEN,
            ROOK_ENDGAME_FEN,
            PROMOTION_STRESS_FEN,
            "8/8/1k6/8/4Q2Q/8/K7/7Q w - - 0 1",
            "4k3/4r3/8/1N6/8/8/4N3/4K3 w - - 0 1",
            "r3k2r/8/8/2pPp3/8/8/8/R3K2R w KQkq e6 0 1",
        ] {
            let game = state(fen);
            for mv in generate_all_moves(&game).expect("generation should succeed") {
                let text = move_to_san(mv, &game).expect("legal move should render");
                let parsed = san_to_move(&text, &game)
                    .unwrap_or_else(|err| panic!("{text} failed to parse in {fen}: {err}"));
                assert_eq!(parsed, mv, "{text} round trip in {fen}");
            }
        }
    }

    #[test]
    fn pawn_moves_render_with_capture_file_and_promotion() {
        let game = GameState::new_game();
        assert_eq!(san(&game, "e2", "e4", MoveKind::Normal), "e4");

        let game = state("4k3/8/8/2pPp3/8/8/8/4K3 w - e6 0 1");
        assert_eq!(san(&game, "d5", "e6", MoveKind::EnPassant), "dxe6");

        let game = state("1r5k/P7/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(san(&game, "a7", "a8", MoveKind::PromoteToQueen), "a8=Q");
        assert_eq!(san(&game, "a7", "b8", MoveKind::PromoteToKnight), "axb8=N");
    }

    #[test]
    fn castling_renders_as_fixed_tokens() {
        let game = state("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(san(&game, "e1", "g1", MoveKind::KingSideCastle), "O-O");
        assert_eq!(san(&game, "e1", "c1", MoveKind::QueenSideCastle), "O-O-O");
        assert_eq!(
            san_to_move("0-0-0", &game),
            Ok(Move::new(pos("e1"), pos("c1"), MoveKind::QueenSideCastle))
        );
    }

    #[test]
    fn disambiguation_prefers_file_then_rank_then_square() {
        let game = state("4k3/8/8/8/8/8/4K3/R6R w - - 0 1");
        assert_eq!(san(&game, "a1", "d1", MoveKind::Normal), "Rad1");
        assert_eq!(san(&game, "h1", "d1", MoveKind::Normal), "Rhd1");

        let game = state("4k3/8/8/R7/8/8/4K3/R7 w - - 0 1");
        assert_eq!(san(&game, "a1", "a3", MoveKind::Normal), "R1a3");
        assert_eq!(san(&game, "a5", "a3", MoveKind::Normal), "R5a3");

        let game = state("8/8/1k6/8/4Q2Q/8/K7/7Q w - - 0 1");
        assert_eq!(san(&game, "h4", "e1", MoveKind::Normal), "Qh4e1");
        assert_eq!(san(&game, "e4", "e1", MoveKind::Normal), "Qee1");
        assert_eq!(san(&game, "h1", "e1", MoveKind::Normal), "Q1e1");
    }

    #[test]
    fn pinned_rivals_do_not_force_disambiguation() {
        let game = state("4k3/4r3/8/1N6/8/8/4N3/4K3 w - - 0 1");
        assert_eq!(san(&game, "b5", "d4", MoveKind::Normal), "Nd4");
        assert_eq!(
            san_to_move("Nd4", &game),
            Ok(Move::normal(pos("b5"), pos("d4")))
        );
    }

    #[test]
    fn check_and_mate_suffixes() {
        let game = state("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        assert_eq!(san(&game, "a1", "a8", MoveKind::Normal), "Ra8+");

        let game = state("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        assert_eq!(san(&game, "a1", "a8", MoveKind::Normal), "Ra8#");
    }

    #[test]
    fn parser_handles_decorations_and_en_passant() {
        let game = GameState::new_game();
        assert_eq!(san_to_move("Nf3!?", &game), Ok(Move::normal(pos("g1"), pos("f3"))));
        assert_eq!(san_to_move(" e4 ", &game), Ok(Move::normal(pos("e2"), pos("e4"))));

        let game = state("4k3/8/8/2pPp3/8/8/8/4K3 w - c6 0 1");
        assert_eq!(
            san_to_move("dxc6", &game),
            Ok(Move::new(pos("d5"), pos("c6"), MoveKind::EnPassant))
        );

        let game = state("1r5k/P7/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(
            san_to_move("axb8=R+", &game),
            Ok(Move::new(pos("a7"), pos("b8"), MoveKind::PromoteToRook))
        );
    }

    #[test]
    fn parser_reports_recoverable_errors() {
        let game = GameState::new_game();
        assert_eq!(san_to_move("", &game), Err(NotationError::Empty));
        assert_eq!(san_to_move("+", &game), Err(NotationError::Empty));
        assert_eq!(
            san_to_move("Nz9", &game),
            Err(NotationError::InvalidSquare("z9".to_owned()))
        );
        assert_eq!(
            san_to_move("Qh5", &game),
            Err(NotationError::OriginNotFound("Qh5".to_owned()))
        );
        assert_eq!(
            san_to_move("e5", &game),
            Err(NotationError::OriginNotFound("e5".to_owned()))
        );
        assert_eq!(
            san_to_move("O-O", &game),
            Err(NotationError::IllegalMove("O-O".to_owned()))
        );

        let game = state("4k3/8/8/8/8/8/4K3/R6R w - - 0 1");
        assert_eq!(
            san_to_move("Rd1", &game),
            Err(NotationError::AmbiguousOrigin("Rd1".to_owned()))
        );

        let game = state("1r5k/P7/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(
            san_to_move("a8", &game),
            Err(NotationError::PromotionMissing("a8".to_owned()))
        );
        assert_eq!(san_to_move("a8=K", &game), Err(NotationError::InvalidPromotion('K')));
    }

    #[test]
    fn parser_rejects_out_of_range_origin_hints() {
        let game = GameState::new_game();
        assert_eq!(san_to_move("Nj1f3", &game), Err(NotationError::FileOutOfRange('j')));
        assert_eq!(san_to_move("N9f3", &game), Err(NotationError::RankOutOfRange('9')));
        assert_eq!(san_to_move("Ng0f3", &game), Err(NotationError::RankOutOfRange('0')));
        assert_eq!(san_to_move("jxe3", &game), Err(NotationError::FileOutOfRange('j')));
    }

    #[test]
    fn missing_king_surfaces_as_generation_error() {
        let game = state("8/8/8/8/8/8/8/4K3 b - - 0 1");
        assert_eq!(
            san_to_move("Kd7", &game),
            Err(NotationError::Generation(MoveGenerationError::MissingKing(
                Color::Dark
            )))
        );
    }
}
