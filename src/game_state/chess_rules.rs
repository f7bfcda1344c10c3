//! Canonical chess-rule constants.
//!
//! Starting layout, pawn home ranks and the fixed castling geometry. Castling
//! is described as data so the generator and the executor read the same table.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank layout from file a to file h.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[inline]
pub const fn back_rank(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// Rank a pawn may double-push from.
#[inline]
pub const fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

#[inline]
pub const fn king_home_square(color: Color) -> Square {
    match color {
        Color::White => 4,
        Color::Black => 60,
    }
}

/// One castling option: the right that guards it, the king and rook hops, and
/// the squares that must be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingLane {
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    pub must_be_empty: &'static [Square],
}

const WHITE_LANES: [CastlingLane; 2] = [
    CastlingLane {
        right: CASTLE_WHITE_KINGSIDE,
        king_from: 4,
        king_to: 6,
        rook_from: 7,
        rook_to: 5,
        must_be_empty: &[5, 6],
    },
    CastlingLane {
        right: CASTLE_WHITE_QUEENSIDE,
        king_from: 4,
        king_to: 2,
        rook_from: 0,
        rook_to: 3,
        must_be_empty: &[3, 2, 1],
    },
];

const BLACK_LANES: [CastlingLane; 2] = [
    CastlingLane {
        right: CASTLE_BLACK_KINGSIDE,
        king_from: 60,
        king_to: 62,
        rook_from: 63,
        rook_to: 61,
        must_be_empty: &[61, 62],
    },
    CastlingLane {
        right: CASTLE_BLACK_QUEENSIDE,
        king_from: 60,
        king_to: 58,
        rook_from: 56,
        rook_to: 59,
        must_be_empty: &[59, 58, 57],
    },
];

/// Kingside lane first, then queenside.
#[inline]
pub fn castling_lanes(color: Color) -> &'static [CastlingLane; 2] {
    match color {
        Color::White => &WHITE_LANES,
        Color::Black => &BLACK_LANES,
    }
}

/// Both rights belonging to `color`.
#[inline]
pub const fn castling_rights_of(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        Color::Black => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
    }
}
