use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::move_shared::trace_ray;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn rook_pseudo_moves(
    game_state: &GameState,
    square: Square,
    _color: Color,
    out: &mut Vec<Square>,
) {
    for (file_step, rank_step) in ROOK_DIRECTIONS {
        trace_ray(game_state, square, file_step, rank_step, out);
    }
}

#[cfg(test)]
mod tests {
    use super::rook_pseudo_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn rook_from_d4_on_empty_board_has_fourteen_squares() {
        let state = GameState::new_empty();
        let mut out = Vec::new();
        rook_pseudo_moves(&state, 27, Color::Black, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rook_does_not_jump_a_friendly_pawn() {
        let mut state = GameState::new_empty();
        state.board[0] = encode(Color::White, PieceKind::Rook);
        state.board[8] = encode(Color::White, PieceKind::Pawn);

        let mut out = Vec::new();
        rook_pseudo_moves(&state, 0, Color::White, &mut out);
        assert!(out.contains(&8));
        for sq in [16u8, 24, 32, 40, 48, 56] {
            assert!(!out.contains(&sq), "ray jumped to {sq}");
        }
    }
}
