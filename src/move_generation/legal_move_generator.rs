//! Full legal move enumeration for one color.
//!
//! Board-scan order over source squares, then each piece's pseudo-move order.
//! The opponent's tie-break depends on this order, so it must stay stable.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_validator::is_legal;
use crate::move_generation::pseudo_move_generator::push_pseudo_moves;
use crate::moves::move_descriptions::MoveRecord;

pub fn generate_legal_moves(game_state: &GameState, color: Color) -> Vec<MoveRecord> {
    let mut legal = Vec::with_capacity(64);
    let mut targets = Vec::with_capacity(28);

    for source in game_state.squares_of(color) {
        let moving_piece = game_state.cell(source);
        let Some(kind) = kind_of(moving_piece) else {
            continue;
        };

        targets.clear();
        push_pseudo_moves(game_state, source, kind, &mut targets);

        for dest in targets.iter().copied() {
            if is_legal(game_state, source as usize, dest as usize) {
                legal.push(MoveRecord::new(source, dest, moving_piece, game_state.cell(dest)));
            }
        }
    }

    legal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_opening_moves_per_side() {
        let state = GameState::new_game();
        assert_eq!(generate_legal_moves(&state, Color::White).len(), 20);
        assert_eq!(generate_legal_moves(&state, Color::Black).len(), 20);
    }

    #[test]
    fn opening_moves_come_in_scan_order() {
        let state = GameState::new_game();
        let moves: Vec<(Square, Square)> = generate_legal_moves(&state, Color::White)
            .iter()
            .map(|mv| mv.squares())
            .collect();

        // b1 knight is the first piece with moves, then g1, then the pawns.
        assert_eq!(moves[0], (1, 18));
        assert_eq!(moves[1], (1, 16));
        assert_eq!(moves[2], (6, 23));
        assert_eq!(moves[3], (6, 21));
        assert_eq!(moves[4], (8, 16));
        assert_eq!(moves[5], (8, 24));
    }

    #[test]
    fn no_pieces_means_no_moves() {
        let state = GameState::new_empty();
        assert!(generate_legal_moves(&state, Color::White).is_empty());
    }

    #[test]
    fn every_generated_move_is_legal() {
        let state = GameState::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        for mv in generate_legal_moves(&state, Color::White) {
            assert!(is_legal(&state, mv.source as usize, mv.dest as usize));
            assert_eq!(mv.mover(), Some(Color::White));
        }
    }
}
