use crate::game_state::chess_rules::pawn_home_rank;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::move_shared::offset_square;

/// Forward pushes, then the queenside and kingside diagonals.
///
/// A diagonal is a candidate only when it holds an enemy piece or is the
/// current en-passant target.
pub fn pawn_pseudo_moves(
    game_state: &GameState,
    square: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    let forward = color.forward();

    if let Some(one_step) = offset_square(square, 0, forward) {
        if game_state.is_empty(one_step) {
            out.push(one_step);

            if rank_of(square) == pawn_home_rank(color) {
                if let Some(two_step) = offset_square(one_step, 0, forward) {
                    if game_state.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for file_step in [-1, 1] {
        let Some(target) = offset_square(square, file_step, forward) else {
            continue;
        };
        let holds_enemy = color_of(game_state.cell(target)) == Some(color.opposite());
        if holds_enemy || game_state.en_passant_square == Some(target) {
            out.push(target);
        }
    }
}
