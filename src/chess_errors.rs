//! Errors used throughout the chess engine.
//!
//! The rule engine itself never fails on a bad move: validation answers
//! `true`/`false` and the session answers `bool`/`Option`. `ChessError` covers
//! the surfaces around it: parsing coordinates and FEN text, engine options,
//! engine failures, and the one fatal class of problem, a board cell that does
//! not hold a valid piece encoding.

use crate::game_state::chess_types::Square;

/// Unified error type for the crate.
///
/// Treat `CorruptedSquare` as an internal invariant violation. Every other
/// variant is recoverable input and is suitable for showing to a user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// A board cell holds a value that is neither empty nor a valid piece.
    #[error("square {square} holds invalid piece value {value:#04x}")]
    CorruptedSquare { square: Square, value: u8 },

    /// A single character used during algebraic parsing was invalid.
    #[error("invalid algebraic character '{0}'")]
    InvalidAlgebraicChar(char),

    /// An algebraic string failed to parse as a square or a move.
    #[error("invalid algebraic string \"{0}\"")]
    InvalidAlgebraicString(String),

    /// The move executor was handed an empty source square.
    #[error("no piece on square {0}")]
    NoPieceOnSquare(Square),

    /// A square index outside `0..64`.
    #[error("square index {0} is out of bounds")]
    SquareOutOfBounds(usize),

    /// FEN text could not be interpreted.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// An engine option name the engine does not know.
    #[error("unknown engine option \"{0}\"")]
    UnknownOption(String),

    /// An engine option value that could not be parsed.
    #[error("invalid value \"{value}\" for option \"{name}\"")]
    InvalidOptionValue { name: String, value: String },

    /// An engine could not produce a move for a non-empty move list.
    #[error("engine failure: {0}")]
    EngineFailure(String),
}

/// Result type alias for fallible crate operations.
pub type ChessResult<T> = Result<T, ChessError>;
