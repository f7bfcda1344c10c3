//! Pseudo-legal move generation.
//!
//! One pure function per piece kind, selected through a dispatch table indexed
//! by [`PieceKind::index`]. Output is geometry only: it ignores whether a
//! destination holds a friendly piece and whether the mover's king ends up
//! exposed. Order is deterministic and matters for opponent tie-breaks.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::bishop_moves::bishop_pseudo_moves;
use crate::moves::king_moves::king_pseudo_moves;
use crate::moves::knight_moves::knight_pseudo_moves;
use crate::moves::pawn_moves::pawn_pseudo_moves;
use crate::moves::queen_moves::queen_pseudo_moves;
use crate::moves::rook_moves::rook_pseudo_moves;

pub type PseudoMoveFn = fn(&GameState, Square, Color, &mut Vec<Square>);

/// Indexed by `PieceKind::index()`, i.e. type-code order.
pub const PSEUDO_MOVE_TABLE: [PseudoMoveFn; 6] = [
    king_pseudo_moves,
    queen_pseudo_moves,
    bishop_pseudo_moves,
    knight_pseudo_moves,
    rook_pseudo_moves,
    pawn_pseudo_moves,
];

/// Destinations a `kind` piece on `square` could reach.
///
/// The color is read from the board; an empty square yields no moves.
pub fn pseudo_moves(game_state: &GameState, square: Square, kind: PieceKind) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    push_pseudo_moves(game_state, square, kind, &mut out);
    out
}

pub fn push_pseudo_moves(
    game_state: &GameState,
    square: Square,
    kind: PieceKind,
    out: &mut Vec<Square>,
) {
    let Some(color) = color_of(game_state.cell(square)) else {
        return;
    };
    PSEUDO_MOVE_TABLE[kind.index()](game_state, square, color, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_kind_index() {
        let mut state = GameState::new_empty();
        state.board[27] = encode(Color::White, PieceKind::Knight);

        let via_table = pseudo_moves(&state, 27, PieceKind::Knight);
        let mut direct = Vec::new();
        knight_pseudo_moves(&state, 27, Color::White, &mut direct);
        assert_eq!(via_table, direct);
    }

    #[test]
    fn empty_square_generates_nothing() {
        let state = GameState::new_empty();
        assert!(pseudo_moves(&state, 27, PieceKind::Queen).is_empty());
    }

    #[test]
    fn start_position_pseudo_counts() {
        let state = GameState::new_game();
        // Back-rank pieces see only their own neighbours.
        assert_eq!(pseudo_moves(&state, 0, PieceKind::Rook), vec![1, 8]);
        assert_eq!(pseudo_moves(&state, 3, PieceKind::Queen).len(), 5);
        assert_eq!(pseudo_moves(&state, 4, PieceKind::King).len(), 5);
    }
}
