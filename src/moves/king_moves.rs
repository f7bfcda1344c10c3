use crate::game_state::chess_rules::castling_lanes;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::move_shared::push_offsets;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;

/// Neighbour squares, then castling candidates (kingside before queenside).
///
/// Castling only checks that the right is held, the king stands on its home
/// square and the path between king and rook is empty. Squares the king
/// crosses are not tested for attack.
pub fn king_pseudo_moves(
    game_state: &GameState,
    square: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    push_offsets(square, &QUEEN_DIRECTIONS, out);

    for lane in castling_lanes(color) {
        if square == lane.king_from
            && game_state.castling_rights & lane.right != 0
            && lane.must_be_empty.iter().all(|sq| game_state.is_empty(*sq))
        {
            out.push(lane.king_to);
        }
    }
}
