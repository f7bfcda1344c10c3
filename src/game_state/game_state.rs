//! Core board state representation.
//!
//! `GameState` owns every mutable field of a game: the 64 encoded cells, side
//! to move, castling rights, the en-passant target and the terminal flag. It is
//! passed by reference into generation and validation, and by mutable
//! reference only into the move executor.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{back_rank, pawn_home_rank, BACK_RANK};
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Encoded cells indexed by `rank * 8 + file`.
    pub board: [u8; 64],

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square skipped by the pawn that double-pushed on the previous ply.
    pub en_passant_square: Option<Square>,

    /// Set once a king has been captured.
    pub terminal: bool,
    pub winner: Option<Color>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [EMPTY; 64],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            terminal: false,
            winner: None,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        let mut state = Self::default();
        state.reset();
        state
    }

    /// Reinitialize to the standard opening position.
    pub fn reset(&mut self) {
        self.board = [EMPTY; 64];

        for color in [Color::White, Color::Black] {
            let back = back_rank(color);
            let pawns = pawn_home_rank(color);
            for (file, kind) in BACK_RANK.iter().enumerate() {
                let file = file as u8;
                self.board[make_square(file, back) as usize] = encode(color, *kind);
                self.board[make_square(file, pawns) as usize] = encode(color, PieceKind::Pawn);
            }
        }

        self.side_to_move = Color::White;
        self.castling_rights = CASTLE_ALL;
        self.en_passant_square = None;
        self.terminal = false;
        self.winner = None;
    }

    /// Build a position from raw cell values.
    ///
    /// Castling rights start cleared; callers set them explicitly.
    pub fn from_cells(cells: [u8; 64], side_to_move: Color) -> ChessResult<Self> {
        if let Some((square, value)) = cells
            .iter()
            .enumerate()
            .find(|(_, value)| !is_valid_cell(**value))
        {
            return Err(ChessError::CorruptedSquare {
                square: square as Square,
                value: *value,
            });
        }

        Ok(Self {
            board: cells,
            side_to_move,
            ..Self::default()
        })
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Read-only copy of the cells for rendering.
    #[inline]
    pub fn snapshot(&self) -> [u8; 64] {
        self.board
    }

    #[inline]
    pub fn cell(&self, square: Square) -> u8 {
        self.board[square as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.board[square as usize] == EMPTY
    }

    #[inline]
    pub fn occupant(&self, square: Square) -> Option<(Color, PieceKind)> {
        decode(self.board[square as usize])
    }

    /// Squares holding a piece of `color`, in board-scan order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        (0..64u8).filter(move |sq| color_of(self.board[*sq as usize]) == Some(color))
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        let target = encode(color, kind);
        self.board.iter().filter(|cell| **cell == target).count()
    }
}
