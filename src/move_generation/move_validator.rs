//! Move legality filter.
//!
//! Legal here means: pseudo-legal, not a capture of one's own piece, and for a
//! king, not stepping onto a square the opponent attacks on the current board.
//! Pins of other pieces are not considered. Validation never mutates state.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::attack_checks::is_square_attacked;
use crate::move_generation::pseudo_move_generator::pseudo_moves;

/// Why a `(source, dest)` pair was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("square index out of range")]
    OutOfRange,
    #[error("no piece on the source square")]
    EmptySource,
    #[error("destination holds a piece of the same color")]
    SameColorCapture,
    #[error("destination is not reachable by the moving piece")]
    Unreachable,
    #[error("king would step onto an attacked square")]
    KingIntoAttack,
}

pub fn check_move(game_state: &GameState, source: usize, dest: usize) -> Result<(), MoveRejection> {
    if source >= 64 || dest >= 64 {
        return Err(MoveRejection::OutOfRange);
    }
    let (source, dest) = (source as Square, dest as Square);

    let Some((color, kind)) = game_state.occupant(source) else {
        return Err(MoveRejection::EmptySource);
    };

    if color_of(game_state.cell(dest)) == Some(color) {
        return Err(MoveRejection::SameColorCapture);
    }

    if !pseudo_moves(game_state, source, kind).contains(&dest) {
        return Err(MoveRejection::Unreachable);
    }

    if kind == PieceKind::King && is_square_attacked(game_state, dest, color.opposite()) {
        return Err(MoveRejection::KingIntoAttack);
    }

    Ok(())
}

#[inline]
pub fn is_legal(game_state: &GameState, source: usize, dest: usize) -> bool {
    check_move(game_state, source, dest).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_and_empty_source_are_rejected() {
        let state = GameState::new_game();
        assert_eq!(check_move(&state, 64, 0), Err(MoveRejection::OutOfRange));
        assert_eq!(check_move(&state, 12, 200), Err(MoveRejection::OutOfRange));
        assert_eq!(check_move(&state, 28, 36), Err(MoveRejection::EmptySource));
    }

    #[test]
    fn same_color_capture_is_never_legal_and_never_mutates() {
        let state = GameState::new_game();
        let before = state.clone();

        for (source, dest) in [(0usize, 8usize), (1, 11), (3, 4), (4, 12), (60, 59)] {
            assert!(!is_legal(&state, source, dest));
            assert_eq!(
                check_move(&state, source, dest),
                Err(MoveRejection::SameColorCapture)
            );
        }
        assert_eq!(state, before);
    }

    #[test]
    fn unreachable_destination_is_rejected() {
        let state = GameState::new_game();
        assert_eq!(check_move(&state, 12, 36), Err(MoveRejection::Unreachable));
        assert_eq!(check_move(&state, 6, 30), Err(MoveRejection::Unreachable));
    }

    #[test]
    fn rook_cannot_jump_its_own_pawn() {
        let mut state = GameState::new_empty();
        state.board[0] = encode(Color::White, PieceKind::Rook);
        state.board[8] = encode(Color::White, PieceKind::Pawn);

        for dest in [16usize, 24, 32, 40, 48, 56] {
            assert!(!is_legal(&state, 0, dest), "rook reached {dest}");
        }
        assert!(is_legal(&state, 0, 1));
    }

    #[test]
    fn king_may_not_step_into_attack() {
        let state = GameState::from_fen("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1").expect("FEN should parse");
        // d2 rook covers d1 and the whole second rank up to the king's row.
        assert_eq!(check_move(&state, 4, 3), Err(MoveRejection::KingIntoAttack));
        assert_eq!(check_move(&state, 4, 12), Err(MoveRejection::KingIntoAttack));
        assert!(is_legal(&state, 4, 5));
        // Capturing the undefended rook is fine.
        assert!(is_legal(&state, 4, 11));
    }

    #[test]
    fn king_may_not_capture_a_defended_piece() {
        let state = GameState::from_fen("4k3/8/8/8/8/8/3r4/3rK3 w - - 0 1").expect("FEN should parse");
        assert_eq!(check_move(&state, 4, 11), Err(MoveRejection::KingIntoAttack));
    }

    #[test]
    fn validator_ignores_side_to_move() {
        let state = GameState::new_game();
        assert!(is_legal(&state, 52, 36));
    }

    #[test]
    fn pinned_piece_may_still_move() {
        // The e2 knight shields its king from the e8 rook; pins are not tracked.
        let state = GameState::from_fen("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_legal(&state, 12, 29));
    }
}
