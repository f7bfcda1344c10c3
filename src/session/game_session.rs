//! The engine surface a front end talks to.
//!
//! `GameSession` owns the only mutable `GameState`, the configured opponent
//! engine and the move history. Every mutating call either succeeds and flips
//! the side to move, or is refused and leaves the state untouched; refusals
//! are logged, never raised.

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_apply::execute_move;
use crate::move_generation::move_validator::check_move;
use crate::moves::move_descriptions::MoveRecord;
use crate::search::board_scoring::clamp_difficulty;
use crate::session::session_config::SessionConfig;
use crate::utils::game_record::write_game_record;

pub struct GameSession {
    state: GameState,
    config: SessionConfig,
    engine: Box<dyn Engine>,
    history: Vec<MoveRecord>,
    started_at: DateTime<Local>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        let engine = config.build_engine();
        Self::with_engine(config, engine)
    }

    /// Use a caller-supplied engine; `config.engine` is then informational.
    pub fn with_engine(config: SessionConfig, mut engine: Box<dyn Engine>) -> Self {
        if let Err(err) = engine.set_option("Difficulty", &config.difficulty.to_string()) {
            warn!(engine = engine.name(), %err, "engine rejected difficulty");
        }

        Self {
            state: GameState::new_game(),
            config,
            engine,
            history: Vec::new(),
            started_at: Local::now(),
        }
    }

    /// Restart from the opening position.
    pub fn reset(&mut self) {
        self.state.reset();
        self.history.clear();
        self.started_at = Local::now();
        self.engine.new_game();
        info!("game reset");
    }

    #[inline]
    pub fn snapshot(&self) -> [u8; 64] {
        self.state.snapshot()
    }

    /// Try a move for the side to move. Returns `false`, with no change, when
    /// the game is over, the source is not the mover's piece, or the move is
    /// not legal.
    pub fn submit_move(&mut self, source: usize, dest: usize) -> bool {
        if self.state.terminal {
            debug!(source, dest, "move refused: game is over");
            return false;
        }

        if let Err(reason) = check_move(&self.state, source, dest) {
            debug!(source, dest, %reason, "move refused");
            return false;
        }

        // In range from here on: check_move rejected anything outside 0..64.
        let (source, dest) = (source as Square, dest as Square);
        if color_of(self.state.cell(source)) != Some(self.state.side_to_move) {
            debug!(source, dest, "move refused: not the side to move");
            return false;
        }

        self.apply(source, dest).is_ok()
    }

    /// Let the engine move for the side to move.
    pub fn request_opponent_move(&mut self) -> Option<(Square, Square)> {
        if self.state.terminal {
            return None;
        }

        let output = match self.engine.choose_move(&self.state) {
            Ok(output) => output,
            Err(err) => {
                warn!(engine = self.engine.name(), %err, "engine failed to choose a move");
                return None;
            }
        };

        for line in &output.info_lines {
            debug!(engine = self.engine.name(), "{line}");
        }

        let Some(mv) = output.best_move else {
            info!(side = self.state.side_to_move.name(), "no legal move available");
            return None;
        };

        if mv.mover() != Some(self.state.side_to_move)
            || check_move(&self.state, mv.source as usize, mv.dest as usize).is_err()
        {
            warn!(source = mv.source, dest = mv.dest, "engine proposed an illegal move");
            return None;
        }

        self.apply(mv.source, mv.dest).ok().map(|record| record.squares())
    }

    pub fn set_difficulty(&mut self, level: i32) {
        let clamped = clamp_difficulty(level);
        self.config.difficulty = clamped;

        if let Err(err) = self.engine.set_option("Difficulty", &clamped.to_string()) {
            warn!(engine = self.engine.name(), %err, "engine rejected difficulty");
        }
        info!(difficulty = clamped, "difficulty set");
    }

    #[inline]
    pub fn difficulty(&self) -> u8 {
        self.config.difficulty
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.state.terminal
    }

    /// The capturing side once a king has fallen.
    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.state.winner
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    #[inline]
    pub fn machine_color(&self) -> Color {
        self.config.machine_color
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub fn game_record(&self) -> ChessResult<String> {
        write_game_record(&self.history, &self.started_at, self.state.winner)
    }

    fn apply(&mut self, source: Square, dest: Square) -> ChessResult<MoveRecord> {
        let record = execute_move(&mut self.state, source, dest)?;
        info!(
            source,
            dest,
            kind = ?record.kind,
            captured = record.captured_piece,
            "move applied"
        );

        if let Some(winner) = self.state.winner {
            info!(winner = winner.name(), "king captured, game over");
        }

        self.history.push(record);
        Ok(record)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
