//! Core value types and the canonical one-byte piece encoding.
//!
//! A board cell is a single `u8`. Bits 0..=2 carry the piece type code and bit 3
//! marks a white piece; a black piece leaves bit 3 clear and `0` is an empty
//! cell. Nothing outside this module touches those bits directly: use
//! [`encode`], [`kind_of`], [`color_of`] and [`decode`].

pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step a pawn of this color advances by.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

/// Piece kind. Discriminants are the encoded type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    King = 1,
    Queen = 2,
    Bishop = 3,
    Knight = 4,
    Rook = 5,
    Pawn = 6,
}

impl PieceKind {
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Dense `0..6` index, in type-code order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::King),
            2 => Some(PieceKind::Queen),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Knight),
            5 => Some(PieceKind::Rook),
            6 => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
    PieceKind::Pawn,
];

/// Board square index (`0..=63`, `rank * 8 + file`, a1 = 0).
pub type Square = u8;

/// Value of an empty cell.
pub const EMPTY: u8 = 0;

const KIND_MASK: u8 = 0x07;
const WHITE_FLAG: u8 = 0x08;

#[inline]
pub const fn encode(color: Color, kind: PieceKind) -> u8 {
    match color {
        Color::White => kind.code() | WHITE_FLAG,
        Color::Black => kind.code(),
    }
}

#[inline]
pub const fn kind_of(cell: u8) -> Option<PieceKind> {
    PieceKind::from_code(cell & KIND_MASK)
}

/// Color of the piece in `cell`, `None` for an empty cell.
#[inline]
pub const fn color_of(cell: u8) -> Option<Color> {
    if cell == EMPTY {
        None
    } else if cell & WHITE_FLAG != 0 {
        Some(Color::White)
    } else {
        Some(Color::Black)
    }
}

#[inline]
pub const fn decode(cell: u8) -> Option<(Color, PieceKind)> {
    match (color_of(cell), kind_of(cell)) {
        (Some(color), Some(kind)) => Some((color, kind)),
        _ => None,
    }
}

/// True for `EMPTY` and for every value produced by [`encode`].
#[inline]
pub const fn is_valid_cell(cell: u8) -> bool {
    cell == EMPTY || (cell & !(KIND_MASK | WHITE_FLAG) == 0 && kind_of(cell).is_some())
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn make_square(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

/// Castling rights bitmask.
pub type CastlingRights = u8;
pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_uses_bit_three_for_white() {
        assert_eq!(encode(Color::White, PieceKind::King), 0x09);
        assert_eq!(encode(Color::Black, PieceKind::King), 0x01);
        assert_eq!(encode(Color::White, PieceKind::Pawn), 0x0E);
        assert_eq!(encode(Color::Black, PieceKind::Rook), 0x05);
    }

    #[test]
    fn decode_inverts_encode_for_every_piece() {
        for color in [Color::White, Color::Black] {
            for kind in ALL_PIECE_KINDS {
                let cell = encode(color, kind);
                assert!(is_valid_cell(cell));
                assert_eq!(decode(cell), Some((color, kind)));
            }
        }
    }

    #[test]
    fn empty_and_junk_cells_do_not_decode() {
        assert_eq!(color_of(EMPTY), None);
        assert_eq!(decode(EMPTY), None);
        assert!(is_valid_cell(EMPTY));

        for junk in [0x07u8, 0x08, 0x0F, 0x10, 0x41, 0x80, 0xFF] {
            assert!(!is_valid_cell(junk), "{junk:#04x} should be rejected");
        }
    }

    #[test]
    fn kind_index_is_dense() {
        let indices: Vec<usize> = ALL_PIECE_KINDS.iter().map(|k| k.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn square_coordinates() {
        let e4 = make_square(4, 3);
        assert_eq!(e4, 28);
        assert_eq!(file_of(e4), 4);
        assert_eq!(rank_of(e4), 3);
    }
}
