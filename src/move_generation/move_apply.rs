//! Move execution.
//!
//! Applies an already validated move: castling rook hop, en-passant victim
//! removal, the piece move itself, en-passant target bookkeeping, castling
//! rights and the king-capture terminal condition. The side to move flips at
//! the end. No legality is re-checked here.

use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{castling_lanes, castling_rights_of};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::{MoveKind, MoveRecord};

pub fn execute_move(game_state: &mut GameState, source: Square, dest: Square) -> ChessResult<MoveRecord> {
    let moving_piece = game_state.cell(source);
    let (color, kind) = decode(moving_piece).ok_or(ChessError::NoPieceOnSquare(source))?;

    let previous_target = game_state.en_passant_square.take();

    let is_castling = kind == PieceKind::King
        && rank_of(source) == rank_of(dest)
        && file_of(source).abs_diff(file_of(dest)) == 2;
    let is_en_passant = kind == PieceKind::Pawn && previous_target == Some(dest);

    if is_castling {
        relocate_castling_rook(game_state, color, source, dest);
    }

    if is_en_passant {
        let victim = make_square(file_of(dest), rank_of(source));
        debug!(victim, "en passant removes pawn");
        game_state.board[victim as usize] = EMPTY;
    }

    let captured_piece = game_state.cell(dest);

    let is_double_push = kind == PieceKind::Pawn && rank_of(source).abs_diff(rank_of(dest)) == 2;
    if is_double_push {
        game_state.en_passant_square = Some((source + dest) / 2);
    }

    if kind_of(captured_piece) == Some(PieceKind::King) {
        game_state.terminal = true;
        game_state.winner = Some(color);
    }

    game_state.board[dest as usize] = moving_piece;
    game_state.board[source as usize] = EMPTY;

    update_castling_rights(game_state, color, kind, dest, captured_piece);

    game_state.side_to_move = color.opposite();

    let move_kind = if is_castling {
        MoveKind::Castling
    } else if is_en_passant {
        MoveKind::EnPassant
    } else if captured_piece != EMPTY {
        MoveKind::Capture
    } else if is_double_push {
        MoveKind::DoublePawnPush
    } else {
        MoveKind::Quiet
    };

    Ok(MoveRecord {
        source,
        dest,
        moving_piece,
        captured_piece,
        kind: move_kind,
    })
}

/// Copy-make variant used by perft and look-ahead callers.
pub fn apply_move(game_state: &GameState, source: Square, dest: Square) -> ChessResult<GameState> {
    let mut next = game_state.clone();
    execute_move(&mut next, source, dest)?;
    Ok(next)
}

fn relocate_castling_rook(game_state: &mut GameState, color: Color, king_from: Square, king_to: Square) {
    let Some(lane) = castling_lanes(color)
        .iter()
        .find(|lane| lane.king_from == king_from && lane.king_to == king_to)
    else {
        return;
    };

    let rook = encode(color, PieceKind::Rook);
    if game_state.cell(lane.rook_from) != rook {
        debug!(square = lane.rook_from, "castling corner holds no rook");
        return;
    }

    game_state.board[lane.rook_to as usize] = rook;
    game_state.board[lane.rook_from as usize] = EMPTY;
}

/// A king move drops both of its side's rights. Rook moves are not tracked,
/// but a rook captured on its corner takes that corner's right with it.
fn update_castling_rights(
    game_state: &mut GameState,
    color: Color,
    kind: PieceKind,
    dest: Square,
    captured_piece: u8,
) {
    if kind == PieceKind::King {
        game_state.castling_rights &= !castling_rights_of(color);
    }

    if let Some((victim_color, PieceKind::Rook)) = decode(captured_piece) {
        for lane in castling_lanes(victim_color) {
            if lane.rook_from == dest {
                game_state.castling_rights &= !lane.right;
            }
        }
    }
}
