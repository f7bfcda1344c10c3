use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::move_shared::trace_ray;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub fn bishop_pseudo_moves(
    game_state: &GameState,
    square: Square,
    _color: Color,
    out: &mut Vec<Square>,
) {
    for (file_step, rank_step) in BISHOP_DIRECTIONS {
        trace_ray(game_state, square, file_step, rank_step, out);
    }
}
