//! PGN read/write utilities for game history interchange.
//!
//! Serializes a [`GameRecord`] to PGN with SAN movetext and replays PGN
//! movetext back into a record, so every imported move passes the same
//! legality check as a played one.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::Color;
use crate::game_state::game_record::GameRecord;
use crate::move_generation::move_generator::GameStatus;
use crate::utils::fen_generator::generate_fen;
use crate::utils::standard_algebraic::move_to_san;

#[derive(Debug, Clone)]
pub struct PgnGame {
    pub headers: BTreeMap<String, String>,
    pub record: GameRecord,
    pub result: String,
}

/// Result token implied by the record's current status.
pub fn result_token(record: &GameRecord) -> &'static str {
    match (record.status(), record.winner()) {
        (GameStatus::Checkmate, Some(Color::Light)) => "1-0",
        (GameStatus::Checkmate, Some(Color::Dark)) => "0-1",
        (GameStatus::Stalemate, _) => "1/2-1/2",
        _ => "*",
    }
}

/// Seven-tag roster dated today, plus `SetUp`/`FEN` for non-standard starts.
pub fn default_headers(record: &GameRecord) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Mailbox Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), result_token(record).to_owned());

    let initial_fen = generate_fen(record.initial_state(), record.initial_clocks());
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    headers
}

pub fn write_pgn(record: &GameRecord) -> Result<String, String> {
    write_pgn_with_headers(record, &default_headers(record))
}

pub fn write_pgn_with_headers(
    record: &GameRecord,
    headers: &BTreeMap<String, String>,
) -> Result<String, String> {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let mut state = *record.initial_state();
    let mut move_number = record.initial_clocks().fullmove_number;
    let mut movetext_parts = Vec::<String>::with_capacity(record.history().len() + 2);

    for (ply, mv) in record.history().iter().enumerate() {
        let san = move_to_san(*mv, &state).map_err(|e| e.to_string())?;
        match state.side_to_move {
            Color::Light => movetext_parts.push(format!("{move_number}. {san}")),
            Color::Dark if ply == 0 => movetext_parts.push(format!("{move_number}... {san}")),
            Color::Dark => movetext_parts.push(san),
        }
        if state.side_to_move == Color::Dark {
            move_number += 1;
        }
        state.do_move(*mv);
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    Ok(out)
}

pub fn read_pgn(pgn: &str) -> Result<PgnGame, String> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext_lines = Vec::<String>::new();

    for line in pgn.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }
        if trimmed.starts_with('[') {
            let (k, v) = parse_header_line(trimmed)?;
            headers.insert(k, v);
        } else {
            movetext_lines.push(trimmed.to_owned());
        }
    }

    let mut record = if headers.get("SetUp").map(|x| x.as_str()) == Some("1") {
        let fen = headers
            .get("FEN")
            .ok_or("PGN SetUp=1 is present but FEN header is missing")?;
        GameRecord::from_fen(fen)?
    } else {
        GameRecord::new_game()
    };

    let mut result = "*".to_owned();

    let movetext = strip_pgn_comments_and_variations(&movetext_lines.join(" "));
    for token in movetext.split_whitespace() {
        let token = strip_move_number(token);
        if token.is_empty() || token.starts_with('$') {
            continue;
        }

        let cleaned = trim_annotation_suffix(token);
        if is_result_token(cleaned) {
            result = normalize_result(cleaned).to_owned();
            break;
        }

        record
            .play_san(cleaned)
            .map_err(|e| format!("PGN move {cleaned}: {e}"))?;
    }

    if let Some(header_result) = headers.get("Result") {
        result = normalize_result(header_result).to_owned();
    }

    Ok(PgnGame {
        headers,
        record,
        result,
    })
}

fn parse_header_line(line: &str) -> Result<(String, String), String> {
    if !line.starts_with('[') || !line.ends_with(']') {
        return Err(format!("Invalid PGN header line: {line}"));
    }
    let inner = &line[1..line.len() - 1];
    let mut parts = inner.splitn(2, ' ');
    let key = parts
        .next()
        .ok_or_else(|| format!("Invalid PGN header key: {line}"))?
        .trim();
    let value_raw = parts
        .next()
        .ok_or_else(|| format!("Invalid PGN header value: {line}"))?
        .trim();

    if !value_raw.starts_with('"') || !value_raw.ends_with('"') || value_raw.len() < 2 {
        return Err(format!("Invalid quoted PGN header value: {line}"));
    }
    let value = value_raw[1..value_raw.len() - 1].replace("\\\"", "\"");
    Ok((key.to_owned(), value))
}

fn strip_pgn_comments_and_variations(text: &str) -> String {
    let mut out = String::new();
    let mut brace_depth = 0usize;
    let mut paren_depth = 0usize;

    for ch in text.chars() {
        match ch {
            '{' => brace_depth = brace_depth.saturating_add(1),
            '(' if brace_depth == 0 => paren_depth = paren_depth.saturating_add(1),
            '}' | ')' => {
                if ch == '}' {
                    brace_depth = brace_depth.saturating_sub(1);
                } else if brace_depth == 0 {
                    paren_depth = paren_depth.saturating_sub(1);
                }
                // Keep the tokens on either side of the removed span apart.
                if brace_depth == 0 && paren_depth == 0 {
                    out.push(' ');
                }
            }
            _ if brace_depth == 0 && paren_depth == 0 => out.push(ch),
            _ => {}
        }
    }

    out
}

/// Drops a leading `12.` or `12...` move number, which may be glued to the
/// move itself (`1.e4`).
fn strip_move_number(token: &str) -> &str {
    let digits = token.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 || !token[digits..].starts_with('.') {
        return token;
    }
    token[digits..].trim_start_matches('.')
}

fn trim_annotation_suffix(token: &str) -> &str {
    token.trim_end_matches(|c: char| matches!(c, '+' | '#' | '!' | '?'))
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(record: &mut GameRecord, moves: &[&str]) {
        for san in moves {
            record.play_san(san).expect("scripted SAN should be legal");
        }
    }

    #[test]
    fn pgn_round_trip_start_position_history() {
        let mut record = GameRecord::new_game();
        play(&mut record, &["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "O-O"]);

        let pgn = write_pgn(&record).expect("PGN should write");
        assert!(pgn.contains("1. e4 e5 2. Nf3 Nc6 3. Bb5 a6 4. O-O *"));
        assert!(!pgn.contains("[FEN"));
        assert!(pgn.contains("[Date \""));

        let parsed = read_pgn(&pgn).expect("PGN should parse");
        assert_eq!(parsed.record.history(), record.history());
        assert_eq!(parsed.record.fen(), record.fen());
        assert_eq!(parsed.result, "*");
    }

    #[test]
    fn pgn_records_checkmate_result() {
        let mut record = GameRecord::new_game();
        play(&mut record, &["f3", "e5", "g4", "Qh4#"]);

        let pgn = write_pgn(&record).expect("PGN should write");
        assert!(pgn.contains("[Result \"0-1\"]"));
        assert!(pgn.contains("2. g4 Qh4# 0-1"));
    }

    #[test]
    fn pgn_round_trip_custom_fen_setup_with_dark_to_move() {
        let mut record =
            GameRecord::from_fen("4k3/4p3/8/8/8/8/4P3/4K3 b - - 0 12").expect("FEN should parse");
        play(&mut record, &["e5", "e4"]);

        let pgn = write_pgn(&record).expect("PGN should write");
        assert!(pgn.contains("[SetUp \"1\"]"));
        assert!(pgn.contains("[FEN \"4k3/4p3/8/8/8/8/4P3/4K3 b - - 0 12\"]"));
        assert!(pgn.contains("12... e5 13. e4 *"));

        let parsed = read_pgn(&pgn).expect("PGN should parse");
        assert_eq!(parsed.record.fen(), record.fen());
    }

    #[test]
    fn read_pgn_skips_comments_variations_and_glyphs() {
        let pgn = "[Event \"Test\"]\n[Result \"1-0\"]\n\n\
                   1.e4 {best by test} e5 (1... c5 2. Nf3) 2. Nf3!? $1 Nc6 3... \n1-0\n";
        let parsed = read_pgn(pgn).expect("PGN should parse");

        assert_eq!(parsed.record.history().len(), 4);
        assert_eq!(parsed.result, "1-0");
        assert_eq!(parsed.headers.get("Event").map(String::as_str), Some("Test"));
    }

    #[test]
    fn read_pgn_rejects_illegal_movetext() {
        let err = read_pgn("1. e4 e5 2. Ke3 *").expect_err("Ke3 is illegal");
        assert!(err.contains("Ke3"));
    }
}
