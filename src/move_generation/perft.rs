//! Legal-move tree node counting under this rule set.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::move_apply::execute_move;
use crate::moves::move_descriptions::MoveKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub king_captures: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.king_captures += rhs.king_captures;
    }
}

/// Count leaves `depth` plies below `game_state`. A finished game has no children.
pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    if game_state.terminal {
        return Ok(total);
    }

    for mv in generate_legal_moves(game_state, game_state.side_to_move) {
        let mut next = game_state.clone();
        let record = execute_move(&mut next, mv.source, mv.dest)?;

        if depth > 1 {
            total.merge(perft(&next, depth - 1)?);
            continue;
        }

        total.nodes += 1;
        match record.kind {
            MoveKind::Capture => total.captures += 1,
            MoveKind::EnPassant => {
                total.captures += 1;
                total.en_passant += 1;
            }
            MoveKind::Castling => total.castles += 1,
            MoveKind::Quiet | MoveKind::DoublePawnPush => {}
        }
        if next.terminal {
            total.king_captures += 1;
        }
    }

    Ok(total)
}
