use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::move_shared::push_offsets;

/// `(file_step, rank_step)` in generation order.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
];

pub fn knight_pseudo_moves(
    _game_state: &GameState,
    square: Square,
    _color: Color,
    out: &mut Vec<Square>,
) {
    push_offsets(square, &KNIGHT_OFFSETS, out);
}
