//! One-ply move scoring.
//!
//! A candidate scores the material of whatever stands on its destination, a
//! flat bias taken from the difficulty level, and one extra point for landing
//! in the central 4x4 block (files c..f, ranks 3..6).

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::MoveRecord;

pub const MAX_DIFFICULTY: u8 = 7;

#[inline]
pub const fn material_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::King => 100,
        PieceKind::Queen => 9,
        PieceKind::Rook => 5,
        PieceKind::Bishop => 3,
        PieceKind::Knight => 3,
        PieceKind::Pawn => 1,
    }
}

/// Material value of an encoded cell; empty scores nothing.
#[inline]
pub fn cell_value(cell: u8) -> i32 {
    kind_of(cell).map_or(0, material_value)
}

#[inline]
pub const fn is_center_square(square: Square) -> bool {
    let file = file_of(square);
    let rank = rank_of(square);
    file >= 2 && file <= 5 && rank >= 2 && rank <= 5
}

#[inline]
pub fn clamp_difficulty(level: i32) -> u8 {
    level.clamp(0, MAX_DIFFICULTY as i32) as u8
}

pub fn score_move(mv: &MoveRecord, difficulty: u8) -> i32 {
    let center_bonus = if is_center_square(mv.dest) { 1 } else { 0 };
    cell_value(mv.captured_piece) + difficulty as i32 + center_bonus
}
