//! Board-stepping helpers shared by the per-piece generators.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Square reached from `square` by `(file_step, rank_step)`, if on the board.
#[inline]
pub fn offset_square(square: Square, file_step: i8, rank_step: i8) -> Option<Square> {
    let file = file_of(square) as i8 + file_step;
    let rank = rank_of(square) as i8 + rank_step;

    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some(make_square(file as u8, rank as u8))
    } else {
        None
    }
}

/// Walk one ray, pushing each square until (and including) the first occupied one.
pub fn trace_ray(
    game_state: &GameState,
    square: Square,
    file_step: i8,
    rank_step: i8,
    out: &mut Vec<Square>,
) {
    let mut current = square;

    while let Some(next) = offset_square(current, file_step, rank_step) {
        out.push(next);
        if !game_state.is_empty(next) {
            break;
        }
        current = next;
    }
}

/// Push every in-bounds square of a fixed offset set; nothing blocks.
pub fn push_offsets(square: Square, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
    out.extend(
        offsets
            .iter()
            .filter_map(|(file_step, rank_step)| offset_square(square, *file_step, *rank_step)),
    );
}
