//! Square and move conversions for coordinate notation.
//!
//! Accepts the loose forms a player types ("e2e4", "E2 E4", "e2-e4") and turns
//! them into square indices; rule checking happens later in the session.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert a coordinate such as `"e4"` (any case) to a square index.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidAlgebraicChar(char::from(bytes[0])));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicChar(char::from(rank)));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert a square index (`0..=63`) to a lowercase coordinate such as `"e4"`.
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if square > 63 {
        return Err(ChessError::SquareOutOfBounds(square as usize));
    }

    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);
    Ok(format!("{file_char}{rank_char}"))
}

/// Parse a source/destination pair. Spaces and dashes between or inside the
/// two coordinates are ignored.
pub fn parse_coordinate_move(text: &str) -> ChessResult<(Square, Square)> {
    let compact: String = text
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '-')
        .collect();

    if compact.len() != 4 || !compact.is_ascii() {
        return Err(ChessError::InvalidAlgebraicString(text.to_owned()));
    }

    let source = algebraic_to_square(&compact[0..2])?;
    let dest = algebraic_to_square(&compact[2..4])?;
    Ok((source, dest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 0);
        assert_eq!(algebraic_to_square("H8").expect("H8 should parse"), 63);
        assert_eq!(square_to_algebraic(0).expect("0 should convert"), "a1");
        assert_eq!(square_to_algebraic(63).expect("63 should convert"), "h8");
    }

    #[test]
    fn bad_coordinates_are_rejected() {
        assert_eq!(
            algebraic_to_square("i1"),
            Err(ChessError::InvalidAlgebraicChar('i'))
        );
        assert_eq!(
            algebraic_to_square("a9"),
            Err(ChessError::InvalidAlgebraicChar('9'))
        );
        assert!(algebraic_to_square("a10").is_err());
        assert_eq!(square_to_algebraic(64), Err(ChessError::SquareOutOfBounds(64)));
    }

    #[test]
    fn move_text_in_the_usual_shapes() {
        assert_eq!(parse_coordinate_move("e2e4").expect("parses"), (12, 28));
        assert_eq!(parse_coordinate_move("A2 A4").expect("parses"), (8, 24));
        assert_eq!(parse_coordinate_move(" g1-f3 ").expect("parses"), (6, 21));
    }

    #[test]
    fn move_text_with_wrong_length_is_rejected() {
        assert!(parse_coordinate_move("e2e").is_err());
        assert!(parse_coordinate_move("e2e4e5").is_err());
        assert!(parse_coordinate_move("é2e4").is_err());
    }
}
