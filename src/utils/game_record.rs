//! Game record export.
//!
//! Writes PGN-style headers followed by coordinate movetext
//! (`1. e2e4 e7e5 2. ...`). The `Date` header is the session start date.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::Color;
use crate::moves::move_descriptions::MoveRecord;
use crate::utils::algebraic::square_to_algebraic;

/// `"1-0"`, `"0-1"` or `"*"` for a game still in progress.
pub fn result_token(winner: Option<Color>) -> &'static str {
    match winner {
        Some(Color::White) => "1-0",
        Some(Color::Black) => "0-1",
        None => "*",
    }
}

pub fn default_headers(started_at: &DateTime<Local>, winner: Option<Color>) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Video Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), started_at.format("%Y.%m.%d").to_string());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), result_token(winner).to_owned());
    headers
}

pub fn write_game_record(
    history: &[MoveRecord],
    started_at: &DateTime<Local>,
    winner: Option<Color>,
) -> ChessResult<String> {
    write_game_record_with_headers(history, &default_headers(started_at, winner), winner)
}

pub fn write_game_record_with_headers(
    history: &[MoveRecord],
    headers: &BTreeMap<String, String>,
    winner: Option<Color>,
) -> ChessResult<String> {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, value.replace('"', "'")));
    }
    out.push('\n');

    let mut movetext_parts = Vec::<String>::with_capacity(history.len() + 1);
    for (ply, mv) in history.iter().enumerate() {
        let coordinate = format!(
            "{}{}",
            square_to_algebraic(mv.source)?,
            square_to_algebraic(mv.dest)?
        );
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, coordinate));
        } else {
            movetext_parts.push(coordinate);
        }
    }
    movetext_parts.push(result_token(winner).to_owned());

    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    Ok(out)
}
