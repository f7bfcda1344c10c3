//! FEN-to-GameState parser.
//!
//! Reads placement, side to move, castling rights and the en-passant field.
//! The two clock fields are optional and ignored: this rule set keeps no
//! clocks.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;

    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u16>()
            .map_err(|_| invalid(&format!("invalid clock field {clock}")))?;
    }
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;

    Ok(game_state)
}

fn invalid(reason: &str) -> ChessError {
    ChessError::InvalidFen(reason.to_owned())
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as usize;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;

            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            game_state.board[board_rank * 8 + file] = encode(color, kind);
            file += 1;
        }

        if file != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("invalid side-to-move field {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(invalid(&format!("invalid castling rights character {ch}"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant_part)?))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_fen_matches_reset() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(parsed, GameState::new_game());
    }

    #[test]
    fn clock_fields_are_optional() {
        let parsed = parse_fen("4k3/8/8/8/8/8/8/4K3 b - e3").expect("short FEN should parse");
        assert_eq!(parsed.side_to_move, Color::Black);
        assert_eq!(parsed.en_passant_square, Some(20));
        assert_eq!(parsed.castling_rights, 0);
    }

    #[test]
    fn malformed_fen_is_rejected() {
        for fen in [
            "",
            "8/8/8/8/8/8/8 w - -",
            "9/8/8/8/8/8/8/8 w - -",
            "4k3/8/8/8/8/8/8/4K3 x - -",
            "4k3/8/8/8/8/8/8/4K3 w X -",
            "4k3/8/8/8/8/8/8/4K3 w - z9",
            "4k3/8/8/8/8/8/8/4K2 w - -",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra",
            "4x3/8/8/8/8/8/8/4K3 w - -",
        ] {
            assert!(
                matches!(
                    parse_fen(fen),
                    Err(ChessError::InvalidFen(_)) | Err(ChessError::InvalidAlgebraicChar(_))
                ),
                "{fen:?} should be rejected"
            );
        }
    }
}
