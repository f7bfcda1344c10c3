//! Engine abstraction layer used by the game session.
//!
//! Every opponent strategy sits behind `Engine` so a session can swap them
//! from configuration. Engines report diagnostics as plain `info_lines`.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::MoveRecord;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<MoveRecord>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()>;

    /// Pick a move for `game_state.side_to_move`. `best_move` is `None` when
    /// that side has no legal move.
    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput>;
}
