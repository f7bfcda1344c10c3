//! Terminal-oriented Unicode board renderer.
//!
//! Works from a cell snapshot so the rendering side never needs the live
//! state. Assumes square indexing where `0 == a1`, `7 == h1`, and `63 == h8`.

use crate::game_state::chess_types::*;

pub fn render_board(cells: &[u8; 64]) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..8 {
            let cell = cells[rank * 8 + file];
            match decode(cell) {
                Some((color, kind)) => out.push(piece_to_unicode(color, kind)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(color: Color, kind: PieceKind) -> char {
    match (color, kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
