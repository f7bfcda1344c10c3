//! Transient record of a single move.

use crate::game_state::chess_types::*;

/// How the executor classified a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveKind {
    #[default]
    Quiet,
    Capture,
    DoublePawnPush,
    Castling,
    EnPassant,
}

/// Source, destination and the encoded pieces involved.
///
/// `captured_piece` is whatever stood on `dest` before the move (`EMPTY` if
/// nothing); an en-passant capture therefore records `EMPTY` and is told apart
/// by its `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub source: Square,
    pub dest: Square,
    pub moving_piece: u8,
    pub captured_piece: u8,
    pub kind: MoveKind,
}

impl MoveRecord {
    pub fn new(source: Square, dest: Square, moving_piece: u8, captured_piece: u8) -> Self {
        Self {
            source,
            dest,
            moving_piece,
            captured_piece,
            kind: if captured_piece == EMPTY {
                MoveKind::Quiet
            } else {
                MoveKind::Capture
            },
        }
    }

    #[inline]
    pub fn squares(&self) -> (Square, Square) {
        (self.source, self.dest)
    }

    #[inline]
    pub fn moving_kind(&self) -> Option<PieceKind> {
        kind_of(self.moving_piece)
    }

    #[inline]
    pub fn captured_kind(&self) -> Option<PieceKind> {
        kind_of(self.captured_piece)
    }

    #[inline]
    pub fn mover(&self) -> Option<Color> {
        color_of(self.moving_piece)
    }
}
